//! Ordered token replacement and numeric pluralization for Tinct.
//!
//! A [`Replacer`] is an ordered list of `(token, value)` pairs. Applying it
//! substitutes every pair in insertion order, then resolves
//! `<n:singular:plural>` brackets:
//!
//! ```
//! use tinct_replace::replacer;
//!
//! let r = replacer!("%points%" => 1);
//! assert_eq!(r.apply("You have %points% <%points%:point:points>"), "You have 1 point");
//! ```
//!
//! # Modules
//!
//! - [`replacement`] - The [`Replacement`] capability for values
//! - [`replacer`] - The [`Replacer`] itself
//! - [`plural`] - The numeric pluralization pass

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod plural;
pub mod replacement;
pub mod replacer;

pub use plural::apply_plurals;
pub use replacement::Replacement;
pub use replacer::Replacer;

/// Builds a [`Replacer`] from `token => value` pairs.
///
/// Pairs are always complete, so this form cannot fail.
#[macro_export]
macro_rules! replacer {
    () => {
        $crate::Replacer::empty()
    };
    ($($token:expr => $value:expr),+ $(,)?) => {
        $crate::Replacer::empty()$(.with($token, $value))+
    };
}
