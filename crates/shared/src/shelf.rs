//! Bookshelf filtering.
//!
//! Categories are listed in the order they first appear. With no tag
//! selected every book is shown; otherwise a book is shown when its category
//! is one of the selected tags.

use crate::models::Book;

/// The shelf never shows more than this many books at once.
pub const MAX_DISPLAYED_BOOKS: usize = 12;

/// Unique categories in first-appearance order.
pub fn categories(books: &[Book]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for book in books {
        if !seen.iter().any(|c| *c == book.category) {
            seen.push(book.category.clone());
        }
    }
    seen
}

/// Books whose category is in `selected`; all books when `selected` is empty.
pub fn filter_by_categories<'a>(books: &'a [Book], selected: &[String]) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|b| selected.is_empty() || selected.contains(&b.category))
        .collect()
}

/// What the shelf actually renders: the filtered list, capped.
pub fn displayed_books<'a>(books: &'a [Book], selected: &[String]) -> Vec<&'a Book> {
    let mut shown = filter_by_categories(books, selected);
    shown.truncate(MAX_DISPLAYED_BOOKS);
    shown
}

/// Add `tag` if absent, remove it if present.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, category: &str) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: "Author".to_string(),
            cover: "cover.jpg".to_string(),
            summary: "Summary".to_string(),
            completed_date: "October 2025".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_categories_unique_in_order() {
        let books = vec![book(1, "Fiction"), book(2, "Design"), book(3, "Fiction")];
        assert_eq!(categories(&books), vec!["Fiction", "Design"]);
    }

    #[test]
    fn test_no_selection_shows_everything() {
        let books = vec![book(1, "Fiction"), book(2, "Design")];
        assert_eq!(filter_by_categories(&books, &[]).len(), 2);
    }

    #[test]
    fn test_filter_matches_any_selected_category() {
        let books = vec![book(1, "Fiction"), book(2, "Design"), book(3, "Strategy")];
        let selected = vec!["Design".to_string(), "Strategy".to_string()];
        let ids: Vec<u32> = filter_by_categories(&books, &selected)
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_displayed_books_capped() {
        let books: Vec<Book> = (0..20).map(|i| book(i, "Fiction")).collect();
        let shown = displayed_books(&books, &[]);
        assert_eq!(shown.len(), MAX_DISPLAYED_BOOKS);
        assert_eq!(shown[0].id, 0);
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let mut selected = Vec::new();
        toggle_tag(&mut selected, "Design");
        toggle_tag(&mut selected, "Fiction");
        assert_eq!(selected, vec!["Design", "Fiction"]);
        toggle_tag(&mut selected, "Design");
        assert_eq!(selected, vec!["Fiction"]);
    }
}
