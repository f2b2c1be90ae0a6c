#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for parsing comma-separated lists of integers and summarizing them as a compact,
//! human-readable list of ranges.
//!
//! Example input: `1,3,6,7,8,12,13,14,15,21,22,23,24,31`
//!
//! Example summary: `1, 3, 6-8, 12-15, 21-24, 31`
//!
//! # Input format
//!
//! The input is a comma-separated list of zero or more base-10 integers. Whitespace around each
//! item is ignored, as are empty items (e.g. `1,,2` or a trailing comma). The items may be in any
//! order and may contain duplicates; [`parse()`] returns them sorted ascending with duplicates
//! removed.
//!
//! Any non-empty item that is not an integer fails the whole parse.
//!
//! The identifiers in the list are of size `i32`.
//!
//! # Summary format
//!
//! The summary is a `", "`-separated list where each maximal run of consecutive integers is
//! written as `start-end` and an isolated integer is written on its own.
//!
//! Negative numbers use the same syntax, so the run from -5 to -3 is written as `-5--3`. The
//! summary is meant for humans and is not parsed back by this crate.
//!
//! # Example
//!
//! ```
//! let numbers = range_summary::parse(" 8, 6, 7 ,8, 12,13, 15").unwrap();
//! assert_eq!(numbers, vec![6, 7, 8, 12, 13, 15]);
//!
//! assert_eq!(range_summary::summarize(&numbers), "6-8, 12-13, 15");
//! ```
//!
//! The runs themselves are available without going through text:
//!
//! ```
//! let runs = range_summary::runs([1, 2, 3, 7]).collect::<Vec<_>>();
//!
//! assert_eq!(runs, vec![1..=3, 7..=7]);
//! ```

mod error;
mod group;
mod parse;
mod summarize;

pub use error::*;
pub use group::*;
pub use parse::*;
pub use summarize::*;

pub(crate) type Item = i32;
