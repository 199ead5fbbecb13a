//! The ordered token replacer.

use std::fmt;

use im::Vector;
use tinct_foundation::{Error, ErrorContext, Result};

use crate::plural::apply_plurals;
use crate::replacement::Replacement;

/// Ordered `(token, value)` substitutions plus numeric pluralization.
///
/// Values are converted to their canonical text when added, so a replacer
/// holds only strings and is cheap to clone, join, and share.
///
/// # Ordering
///
/// Pairs apply in insertion order, each on the output of the previous one.
/// If the same token is added twice, the first value wins: by the time the
/// second pair runs, no occurrence of the token is left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Replacer {
    pairs: Vector<(String, String)>,
}

impl Replacer {
    /// Creates a replacer with no pairs.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a replacer from alternating tokens and values.
    ///
    /// ```
    /// use tinct_replace::Replacer;
    ///
    /// let r = Replacer::new(&[&"%name%", &"Steve", &"%level%", &7]).unwrap();
    /// assert_eq!(r.apply("%name% is level %level%"), "Steve is level 7");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` has odd length.
    pub fn new(items: &[&dyn Replacement]) -> Result<Self> {
        let mut replacer = Self::empty();
        replacer.add(items)?;
        Ok(replacer)
    }

    /// Creates a replacer from alternating items that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` has odd length or any item is
    /// `None`.
    pub fn from_optional(items: &[Option<&dyn Replacement>]) -> Result<Self> {
        let mut replacer = Self::empty();
        replacer.add_optional(items)?;
        Ok(replacer)
    }

    /// Creates a replacer from complete pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Replacement,
        V: Replacement,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(token, value)| (token.canonical_text(), value.canonical_text()))
                .collect(),
        }
    }

    /// Appends alternating tokens and values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` has odd length. Nothing is
    /// appended in that case.
    pub fn add(&mut self, items: &[&dyn Replacement]) -> Result<&mut Self> {
        if items.len() % 2 != 0 {
            let last = items.last().map(|item| item.canonical_text()).unwrap_or_default();
            return Err(odd_arity(&last));
        }
        for pair in items.chunks_exact(2) {
            self.pairs
                .push_back((pair[0].canonical_text(), pair[1].canonical_text()));
        }
        Ok(self)
    }

    /// Appends alternating items that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` has odd length or any item is
    /// `None`. Nothing is appended in either case.
    pub fn add_optional(&mut self, items: &[Option<&dyn Replacement>]) -> Result<&mut Self> {
        if let Some(index) = items.iter().position(Option::is_none) {
            return Err(Error::invalid_argument(format!(
                "null replacements are not allowed (item {index})"
            )));
        }
        let present: Vec<&dyn Replacement> = items.iter().flatten().copied().collect();
        self.add(&present)
    }

    /// Builder form: returns this replacer with one more pair.
    #[must_use]
    pub fn with(mut self, token: impl Replacement, value: impl Replacement) -> Self {
        self.pairs
            .push_back((token.canonical_text(), value.canonical_text()));
        self
    }

    /// Appends every pair of `others`, in order.
    pub fn join(&mut self, others: &[&Replacer]) -> &mut Self {
        for other in others {
            self.pairs.append(other.pairs.clone());
        }
        self
    }

    /// Returns a new replacer holding this one's pairs followed by `other`'s.
    #[must_use]
    pub fn joined(&self, other: &Replacer) -> Self {
        let mut joined = self.clone();
        joined.join(&[other]);
        joined
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// A copy of the pairs in application order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.pairs.iter().cloned().collect()
    }

    /// A copy of the flat `token, value, token, value, ...` list.
    #[must_use]
    pub fn replacements(&self) -> Vec<String> {
        self.pairs
            .iter()
            .flat_map(|(token, value)| [token.clone(), value.clone()])
            .collect()
    }

    /// Substitutes every pair, then resolves pluralization brackets.
    ///
    /// Each pair replaces every occurrence of its token left to right and
    /// resumes after the inserted value, so a value containing its own
    /// token is never expanded again. An empty token matches nothing.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        let mut applied = 0usize;
        for (token, value) in &self.pairs {
            if token.is_empty() || !out.contains(token.as_str()) {
                continue;
            }
            out = out.replace(token.as_str(), value);
            applied += 1;
        }
        tracing::trace!(pairs = self.pairs.len(), applied, "applied replacer");
        apply_plurals(&out)
    }

    /// [`apply`](Self::apply) over an optional template; absent stays absent.
    #[must_use]
    pub fn apply_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|text| self.apply(text))
    }

    /// [`apply`](Self::apply) over a template the caller requires.
    ///
    /// # Errors
    ///
    /// Returns `MissingTemplate` naming `key` if `text` is absent.
    pub fn apply_required(&self, key: &str, text: Option<&str>) -> Result<String> {
        text.map(|text| self.apply(text)).ok_or_else(|| {
            Error::missing_template(key).with_context(ErrorContext::new().with_template(key))
        })
    }

    /// [`apply`](Self::apply) over every template in order.
    #[must_use]
    pub fn apply_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|text| self.apply(text.as_ref())).collect()
    }
}

impl fmt::Display for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Replacer[")?;
        for (i, item) in self.replacements().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

fn odd_arity(last: &str) -> Error {
    Error::invalid_argument(format!(
        "{last} does not have a replacement, add one more element"
    ))
}
