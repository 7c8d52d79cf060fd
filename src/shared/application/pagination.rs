/// Cursor pagination support for store scans
///
/// Standard pagination model used across all bounded contexts. The cursor is
/// an opaque continuation token; `has_more` is true iff a cursor is present.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub page_size: usize,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    /// Build a page from scan results; `page_size` reflects the items
    /// actually returned, not the requested limit.
    pub fn of(items: Vec<T>, next_cursor: Option<String>) -> Self {
        let page_size = items.len();
        let has_more = next_cursor.is_some();
        Self {
            items,
            next_cursor,
            page_size,
            has_more,
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            page_size: 0,
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_of_sets_size_and_has_more() {
        let page = CursorPage::of(vec![1, 2, 3], Some("abc".to_string()));
        assert_eq!(page.page_size, 3);
        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let page = CursorPage::of(vec![1], None);
        assert_eq!(page.page_size, 1);
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_page() {
        let page: CursorPage<i32> = CursorPage::empty();
        assert_eq!(page.page_size, 0);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }
}
