//! The replacement-value capability.

/// A value that can stand in for a token.
///
/// Every [`Display`](std::fmt::Display) type is a replacement through its
/// `to_string`. Types that need a different canonical form, or that have
/// no `Display`, implement this trait directly.
pub trait Replacement {
    /// The text substituted for a token.
    fn canonical_text(&self) -> String;
}

impl<T: std::fmt::Display + ?Sized> Replacement for T {
    fn canonical_text(&self) -> String {
        self.to_string()
    }
}
