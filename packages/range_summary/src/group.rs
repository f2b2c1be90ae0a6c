use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::Item;

/// Groups a sequence of integers into maximal runs of consecutive values.
///
/// Each run is yielded as an inclusive range. An isolated value is yielded as a range whose start
/// and end are equal.
///
/// The input is expected to be ascending and free of duplicates, as returned by
/// [`parse()`][crate::parse]. The sequence is not sorted here; other input produces
/// deterministic but otherwise unspecified runs.
///
/// # Example
///
/// ```
/// let runs = range_summary::runs([-2, -1, 4, 6, 7]).collect::<Vec<_>>();
///
/// assert_eq!(runs, vec![-2..=-1, 4..=4, 6..=7]);
/// ```
pub fn runs<I>(numbers: I) -> Runs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Borrow<Item>,
{
    Runs {
        numbers: numbers.into_iter(),
        pending: None,
    }
}

/// Iterator over the runs of consecutive integers in a sequence.
///
/// Created by [`runs()`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Runs<I> {
    numbers: I,

    // The value that ended the previous run; it starts the next one.
    pending: Option<Item>,
}

impl<I> Iterator for Runs<I>
where
    I: Iterator,
    I::Item: Borrow<Item>,
{
    type Item = RangeInclusive<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self
            .pending
            .take()
            .or_else(|| self.numbers.next().map(|n| *n.borrow()))?;

        let mut previous = start;

        for current in self.numbers.by_ref() {
            let current = *current.borrow();

            // Item::MAX has no successor, so it always closes its run.
            if previous.checked_add(1) == Some(current) {
                previous = current;
            } else {
                self.pending = Some(current);
                break;
            }
        }

        Some(start..=previous)
    }
}

impl<I> FusedIterator for Runs<I>
where
    I: FusedIterator,
    I::Item: Borrow<Item>,
{
}
