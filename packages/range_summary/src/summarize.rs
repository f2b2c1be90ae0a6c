use std::borrow::Borrow;
use std::fmt;
use std::ops::RangeInclusive;

use itertools::Itertools;
use tracing::trace;

use crate::{Item, runs};

/// Summarizes a sequence of integers as a `", "`-separated list of ranges.
///
/// Each maximal run of consecutive integers is written as `start-end` and an isolated integer is
/// written on its own, e.g. `1, 3, 6-8, 12-15`. An empty sequence gives an empty string. To
/// summarize an optional sequence, pass it as an empty iterator when absent, e.g.
/// `summarize(maybe_numbers.into_iter().flatten())`.
///
/// The input is expected to be ascending and free of duplicates, as returned by
/// [`parse()`][crate::parse]. It is neither sorted nor deduplicated here.
///
/// See [package-level documentation][crate] for details.
#[must_use]
pub fn summarize<I>(numbers: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<Item>,
{
    let summary = runs(numbers).map(Segment).join(", ");

    trace!(%summary, "summarized number list");

    summary
}

/// One run rendered for a summary.
#[derive(Debug)]
struct Segment(RangeInclusive<Item>);

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.0.start(), self.0.end());

        if start == end {
            write!(f, "{start}")
        } else {
            write!(f, "{start}-{end}")
        }
    }
}
