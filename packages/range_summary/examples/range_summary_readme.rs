//! Example that demonstrates the exact usage shown in the package documentation.
//!
//! This shows how to parse a number list and summarize it as ranges.

fn main() {
    println!("=== Range Summary README Example ===");

    let numbers = range_summary::parse(" 8, 6, 7 ,8, 12,13, 15").unwrap();
    assert_eq!(numbers, vec![6, 7, 8, 12, 13, 15]);

    println!("Parsed numbers: {numbers:?}");
    println!("As summary: {}", range_summary::summarize(&numbers));

    match range_summary::parse("1,2,abc,4") {
        Ok(numbers) => println!("Unexpectedly parsed: {numbers:?}"),
        Err(error) => println!("Rejected input: {error}"),
    }

    println!("README example completed successfully!");
}
