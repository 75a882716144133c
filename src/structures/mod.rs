//! Structures, in the sense of abstract elements of a tableau.
//!
//! For the most part, structures are defined as immutable value types.
//! Every transformation of a formula produces a fresh tree, and structural equality is derived
//! over tags and fields, with argument order significant.

pub mod formula;
pub mod sign;
pub mod signed;
pub mod term;
