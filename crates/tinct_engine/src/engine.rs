//! Rendering and delivery entry points.

use std::sync::Arc;

use tinct_foundation::text::has_content;
use tinct_foundation::{Error, ErrorContext, Result};
use tinct_replace::{Replacer, apply_plurals};

use crate::config::EngineConfig;
use crate::format::Dispatch;
use crate::recipient::Recipient;
use crate::registry::{Registry, SharedRegistry};

/// The outcome of a broadcast.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    /// Recipients that received the message.
    pub delivered: usize,
    /// One error per recipient that failed, with the recipient in context.
    pub failures: Vec<Error>,
}

impl BroadcastReport {
    /// True if every recipient received the message.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The markup engine: configuration plus a shared pattern registry.
///
/// Rendering is pure and may run on any number of threads at once. Each
/// call loads one registry snapshot and uses it throughout, so a pattern
/// registered mid-send only affects later calls.
///
/// ```
/// use tinct_engine::{Engine, RecordingRecipient};
/// use tinct_replace::replacer;
///
/// let engine = Engine::default();
/// let console = RecordingRecipient::console();
/// let r = replacer!("%n%" => 3);
/// engine.send(&console, Some("<ab:bar/ab>&aYou have %n% <%n%:gem:gems>"), Some(&r)).unwrap();
/// assert_eq!(console.messages(), vec!["§aYou have 3 gems"]);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    registry: Arc<SharedRegistry>,
}

impl Engine {
    /// Creates an engine with the default patterns keyed on the configured
    /// marker.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let registry = Registry::with_marker(config.marker);
        Self::with_registry(config, registry)
    }

    /// Creates an engine with an explicit registry.
    #[must_use]
    pub fn with_registry(config: EngineConfig, registry: Registry) -> Self {
        Self::with_shared_registry(config, Arc::new(SharedRegistry::new(registry)))
    }

    /// Creates an engine that reads a registry shared with other owners.
    #[must_use]
    pub fn with_shared_registry(config: EngineConfig, registry: Arc<SharedRegistry>) -> Self {
        Self { config, registry }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The shared registry, for late registration.
    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Runs the color pipeline only.
    #[must_use]
    pub fn colorize(&self, text: &str) -> String {
        self.colorize_with(&self.registry.load(), text)
    }

    fn colorize_with(&self, registry: &Registry, text: &str) -> String {
        registry.color().apply(text, self.config.simple_mode)
    }

    /// Substitutes, pluralizes, and colorizes a template.
    ///
    /// An absent template renders to `None`. Without a replacer only the
    /// pluralization pass runs before coloring.
    #[must_use]
    pub fn render(&self, template: Option<&str>, replacer: Option<&Replacer>) -> Option<String> {
        self.render_with(&self.registry.load(), template, replacer)
    }

    fn render_with(
        &self,
        registry: &Registry,
        template: Option<&str>,
        replacer: Option<&Replacer>,
    ) -> Option<String> {
        let template = template?;
        let substituted = match replacer {
            Some(replacer) => replacer.apply(template),
            None => apply_plurals(template),
        };
        Some(self.colorize_with(registry, &substituted))
    }

    /// [`render`](Self::render) for a template the caller requires.
    ///
    /// # Errors
    ///
    /// Returns `MissingTemplate` naming `key` if `template` is absent.
    pub fn render_required(
        &self,
        key: &str,
        template: Option<&str>,
        replacer: Option<&Replacer>,
    ) -> Result<String> {
        self.render(template, replacer).ok_or_else(|| {
            Error::missing_template(key).with_context(
                ErrorContext::new()
                    .with_template(key)
                    .with_frame("render"),
            )
        })
    }

    /// Renders a template and routes it to `recipient`.
    ///
    /// Returns the text left after every format pattern ran, or `None` for
    /// an absent template. Unless a pattern claimed that remainder, the
    /// engine sends it when it has content.
    ///
    /// # Errors
    ///
    /// Propagates the first sink failure, with the recipient in context.
    pub fn send(
        &self,
        recipient: &dyn Recipient,
        template: Option<&str>,
        replacer: Option<&Replacer>,
    ) -> Result<Option<String>> {
        let registry = self.registry.load();
        let Some(rendered) = self.render_with(&registry, template, replacer) else {
            return Ok(None);
        };
        self.dispatch(&registry, recipient, &rendered)
            .map(Some)
            .map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_recipient(recipient.name())
                        .with_frame("send"),
                )
            })
    }

    fn dispatch(
        &self,
        registry: &Registry,
        recipient: &dyn Recipient,
        rendered: &str,
    ) -> Result<String> {
        let mut dispatch = Dispatch::new(recipient, &self.config);
        let rest = registry.format().apply(&mut dispatch, rendered)?;
        if !dispatch.remainder_sent() && has_content(&rest) {
            dispatch.deliver_message(&rest)?;
        }
        Ok(rest)
    }

    /// Sends one template to many recipients.
    ///
    /// A failure for one recipient is logged and recorded in the report;
    /// the remaining recipients are still served. The template is rendered
    /// once, and every recipient is routed with the same registry snapshot.
    pub fn broadcast(
        &self,
        recipients: &[&dyn Recipient],
        template: Option<&str>,
        replacer: Option<&Replacer>,
    ) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        let registry = self.registry.load();
        let Some(rendered) = self.render_with(&registry, template, replacer) else {
            return report;
        };

        for recipient in recipients {
            match self.dispatch(&registry, *recipient, &rendered) {
                Ok(_) => report.delivered += 1,
                Err(err) => {
                    tracing::warn!(recipient = recipient.name(), error = %err, "broadcast delivery failed");
                    report.failures.push(err.with_context(
                        ErrorContext::new()
                            .with_recipient(recipient.name())
                            .with_frame("broadcast"),
                    ));
                }
            }
        }
        tracing::debug!(
            delivered = report.delivered,
            failed = report.failures.len(),
            "broadcast finished"
        );
        report
    }
}
