use itertools::Itertools;
use tracing::{debug, trace};

use crate::Item;

/// Parses a comma-separated list of integers and returns them in ascending order, removing
/// duplicates.
///
/// Whitespace around each item is ignored and empty items are skipped, so an absent, empty or
/// whitespace-only input (including one made only of commas) returns an empty result.
///
/// Fails with [`Error::InvalidNumberFormat`][crate::Error::InvalidNumberFormat] on the first
/// non-empty item that is not a base-10 integer. No partial result is returned in that case.
///
/// See [package-level documentation][crate] for details.
pub fn parse<'a>(raw: impl Into<Option<&'a str>>) -> crate::Result<Vec<Item>> {
    let Some(raw) = raw.into() else {
        return Ok(vec![]);
    };

    if raw.trim().is_empty() {
        return Ok(vec![]);
    }

    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<crate::Result<Vec<_>>>()?;

    let items = items
        .into_iter()
        .sorted_unstable()
        .dedup()
        .collect::<Vec<_>>();

    debug!(count = items.len(), "parsed number list");

    Ok(items)
}

fn parse_token(token: &str) -> crate::Result<Item> {
    token.parse::<Item>().map_err(|inner| {
        trace!(token, %inner, "rejected list item");
        crate::Error::invalid_number(token, inner)
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse("").unwrap(), vec![]);

        assert_eq!(parse("555").unwrap(), vec![555]);

        assert_eq!(parse("0,1,2,3").unwrap(), vec![0, 1, 2, 3]);

        assert_eq!(parse("2,3,1").unwrap(), vec![1, 2, 3]);

        assert_eq!(parse("8,3,6,7,1").unwrap(), vec![1, 3, 6, 7, 8]);

        assert_eq!(
            parse(" 8, 6, 7 ,8, 12,13, 15").unwrap(),
            vec![6, 7, 8, 12, 13, 15]
        );

        assert_eq!(parse("-3,+4,-10,0").unwrap(), vec![-10, -3, 0, 4]);
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(parse(None::<&str>).unwrap(), vec![]);
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(parse("   ").unwrap(), vec![]);
        assert_eq!(parse("   ,  ,  ").unwrap(), vec![]);
        assert_eq!(parse(",,,").unwrap(), vec![]);
        assert_eq!(parse("\t\n").unwrap(), vec![]);
    }

    #[test]
    fn empty_items_are_skipped() {
        assert_eq!(parse(",1,,2,").unwrap(), vec![1, 2]);
        assert_eq!(parse("1, ,2").unwrap(), vec![1, 2]);
    }

    #[test]
    fn duplicates_are_removed() {
        assert_eq!(parse("5,5,5").unwrap(), vec![5]);
        assert_eq!(parse("3,1,3,2,1").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn boundaries_are_accepted() {
        assert_eq!(
            parse("2147483647,-2147483648").unwrap(),
            vec![Item::MIN, Item::MAX]
        );
    }

    #[test]
    fn garbage_is_error() {
        parse("foo").unwrap_err();
        parse("1,2,abc,4").unwrap_err();
        parse("1 2").unwrap_err();
        parse("1.5").unwrap_err();
        parse("-").unwrap_err();
        parse("0x10").unwrap_err();
        parse("1-3").unwrap_err();
    }

    #[test]
    fn out_of_range_is_error() {
        parse("2147483648").unwrap_err();
        parse("-2147483649").unwrap_err();
    }

    #[test]
    fn error_names_first_offending_token() {
        let error = parse("1, 2,  abc ,x,4").unwrap_err();

        assert_eq!(error.token(), "abc");
    }
}
