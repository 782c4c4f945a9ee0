//! Parsing free-text reference strings.
//!
//! Malformed input is a front-end problem: the simulation core only ever
//! receives an already parsed `&[PageId]`.

use crate::common::{Error, PageId, Result};

/// Parse a reference string such as `"7 0 1 2"` or `"7,0,1,2"`.
///
/// Tokens are separated by whitespace and/or commas. An empty string yields
/// an empty sequence.
///
/// # Errors
/// `Error::InvalidReference` naming the first token that is not an integer.
///
/// # Example
/// ```
/// use pagesim::input::parse_reference_string;
/// use pagesim::PageId;
///
/// let pages = parse_reference_string("1, 2 3").unwrap();
/// assert_eq!(pages, PageId::sequence(&[1, 2, 3]));
///
/// assert!(parse_reference_string("1 two 3").is_err());
/// ```
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_page)
        .collect()
}

/// Parse a single page token.
pub fn parse_page(token: &str) -> Result<PageId> {
    token
        .parse::<i64>()
        .map(PageId)
        .map_err(|_| Error::InvalidReference {
            token: token.to_string(),
        })
}
