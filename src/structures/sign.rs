//! Signs, the truth values a tableau may assign to a formula.
//!
//! ACrQ is four-valued, though only three signs appear in a tableau.
//! The fourth value, a glut, is not a sign.
//! Rather, a glut is the co-occurrence of `t P(…)` and `t P*(…)` on a branch for some bilateral
//! pair P/P*, and such branches remain open.
//!
//! ```rust
//! # use acrq_tableau::structures::sign::Sign;
//! assert_ne!(Sign::T, Sign::F);
//! assert_eq!(Sign::E.to_string(), "e");
//! ```

/// The truth value attached to a formula within a tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// True.
    T,

    /// False.
    F,

    /// Error, aka. undefined.
    ///
    /// In weak Kleene logic the value is infectious, and a compound takes the value whenever some
    /// subformula does.
    E,
}

impl Sign {
    /// All signs, in a fixed order.
    pub const ALL: [Sign; 3] = [Sign::T, Sign::F, Sign::E];
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::T => write!(f, "t"),
            Self::F => write!(f, "f"),
            Self::E => write!(f, "e"),
        }
    }
}
