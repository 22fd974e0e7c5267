//! Desired-vs-observed state comparison
//!
//! The comparator answers one question: does the observed tree already
//! satisfy everything the desired tree specifies? Keys that desired leaves
//! out (or sets to null) are not checked, sequences are compared as
//! unordered collections, and the first difference found is reported.

pub mod compare;
pub mod diff;
pub mod order;
pub mod report;

pub use compare::{CompareOptions, Comparator, Comparison, matches};
pub use diff::{project, render_diff};
pub use report::{Mismatch, MismatchReason, MismatchReport};
