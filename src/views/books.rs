//! Book pages: list, detail, create form

use maud::{html, Markup};

use super::{error_list, fmt_date, layout};
use crate::{
    models::{book::BookForm, Author, Book, BookInstance, BookListRow, Genre},
    web::forms::FieldError,
};

pub fn list(books: &[BookListRow]) -> Markup {
    layout(
        "Books | Lil Library",
        html! {
            h1 { "Book List" }
            @if books.is_empty() {
                p { "There are no books." }
            } @else {
                ul {
                    @for book in books {
                        li {
                            a href=(book.url()) { (book.title) }
                            " " span class="text-muted" { "(" (book.author_name) ")" }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(book: &Book, instances: &[BookInstance]) -> Markup {
    layout(
        &format!("{} | Lil Library", book.title),
        html! {
            h1 { "Title: " (book.title) }
            p {
                strong { "Author: " }
                @if let Some(ref author) = book.author {
                    a href=(author.url()) { (author.name()) }
                } @else {
                    span class="text-muted" { "unknown" }
                }
            }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            p {
                strong { "Genre: " }
                @if book.genres.is_empty() {
                    span class="text-muted" { "none" }
                } @else {
                    @for (i, genre) in book.genres.iter().enumerate() {
                        @if i > 0 { ", " }
                        a href=(genre.url()) { (genre.name) }
                    }
                }
            }
            h2 { "Copies" }
            @if instances.is_empty() {
                p { "There are no copies of this book in the library." }
            } @else {
                @for instance in instances {
                    @let status = instance.status();
                    p {
                        span class=(format!("status-{}", status.to_string().to_lowercase())) {
                            (status)
                        }
                        @if let Some(due) = instance.due_back {
                            " (Due: " (fmt_date(Some(due))) ")"
                        }
                        br;
                        span class="text-muted" { "Imprint: " (instance.imprint) " " }
                        a href=(instance.url()) { "details" }
                    }
                }
            }
        },
    )
}

pub fn create_form(
    form: &BookForm,
    authors: &[Author],
    genres: &[Genre],
    errors: &[FieldError],
) -> Markup {
    layout(
        "Create Book | Lil Library",
        html! {
            h1 { "Create Book" }
            form method="post" action="/catalog/books/create" {
                div class="form-group" {
                    label for="title" { "Title:" }
                    input type="text" id="title" name="title"
                        placeholder="Name of book" value=(form.title);
                }
                div class="form-group" {
                    label for="author" { "Author:" }
                    select id="author" name="author" {
                        @for author in authors {
                            option value=(author.id) selected[form.author == Some(author.id)] {
                                (author.name())
                            }
                        }
                    }
                }
                div class="form-group" {
                    label for="summary" { "Summary:" }
                    textarea id="summary" name="summary" rows="4" { (form.summary) }
                }
                div class="form-group" {
                    label for="isbn" { "ISBN:" }
                    input type="text" id="isbn" name="isbn"
                        placeholder="ISBN13" value=(form.isbn);
                }
                div class="form-group" {
                    label { "Genre:" }
                    @for genre in genres {
                        div class="checkbox" {
                            label {
                                input type="checkbox" name="genre" value=(genre.id)
                                    checked[form.genre.contains(&genre.id)];
                                " " (genre.name)
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (error_list(errors))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_author() -> Author {
        Author {
            id: 1,
            first_name: "Patrick".into(),
            family_name: "Rothfuss".into(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[test]
    fn create_form_marks_selected_author_and_checked_genres() {
        let form = BookForm {
            title: "The Name of the Wind".into(),
            author: Some(1),
            summary: "A story.".into(),
            isbn: "9781473211896".into(),
            genre: vec![2],
        };
        let authors = vec![sample_author()];
        let genres = vec![
            Genre { id: 1, name: "Fantasy".into() },
            Genre { id: 2, name: "Poetry".into() },
        ];
        let page = create_form(&form, &authors, &genres, &[]).into_string();
        assert!(page.contains(r#"<option value="1" selected>"#));
        let checked = page
            .split("checkbox")
            .filter(|chunk| chunk.contains("checked"))
            .count();
        assert_eq!(checked, 1);
    }

    #[test]
    fn detail_links_author_and_genres() {
        let book = Book {
            id: 3,
            title: "The Name of the Wind".into(),
            summary: "A story.".into(),
            isbn: "9781473211896".into(),
            author_id: 1,
            author: Some(sample_author()),
            genres: vec![Genre { id: 1, name: "Fantasy".into() }],
        };
        let page = detail(&book, &[]).into_string();
        assert!(page.contains("/catalog/authors/1"));
        assert!(page.contains("/catalog/genres/1"));
        assert!(page.contains("There are no copies"));
    }
}
