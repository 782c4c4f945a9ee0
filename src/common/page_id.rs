//! Page identifier type.

use std::fmt;

/// Identifies a referenced page.
///
/// Pages carry no meaning beyond equality: the simulator only ever asks
/// "is this page resident?" and "when is it referenced next?". A signed
/// integer keeps any integer a user types a valid page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(PageId::from(42), page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }

    /// Convert a slice of raw integers into a reference sequence.
    pub fn sequence(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId).collect()
    }
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_equality() {
        assert_eq!(PageId::new(-3), PageId::from(-3));
        assert_ne!(PageId::new(5), PageId::new(6));
    }

    #[test]
    fn test_page_id_sequence() {
        assert_eq!(
            PageId::sequence(&[1, 2, 1]),
            vec![PageId(1), PageId(2), PageId(1)]
        );
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
    }
}
