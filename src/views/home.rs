//! Home page view

use maud::{html, Markup};

use super::layout;
use crate::services::catalog::CatalogCounts;

pub fn index(counts: &CatalogCounts) -> Markup {
    layout(
        "Lil Library",
        html! {
            h1 { "Lil Library" }
            p { "Welcome to Lil Library, a very basic library catalog." }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul {
                li { strong { "Books: " } (counts.books) }
                li { strong { "Copies: " } (counts.book_instances) }
                li { strong { "Copies available: " } (counts.available_book_instances) }
                li { strong { "Authors: " } (counts.authors) }
                li { strong { "Genres: " } (counts.genres) }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_all_counts() {
        let counts = CatalogCounts {
            books: 5,
            book_instances: 12,
            available_book_instances: 7,
            authors: 3,
            genres: 2,
        };
        let page = index(&counts).into_string();
        for expected in ["Books", "Copies", "Copies available", "Authors", "Genres"] {
            assert!(page.contains(expected), "missing {}", expected);
        }
        assert!(page.contains("12"));
    }
}
