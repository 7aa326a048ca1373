//! Genre pages: list, detail, create form

use maud::{html, Markup};

use super::{error_list, layout};
use crate::{
    models::{genre::GenreForm, BookSummary, Genre},
    web::forms::FieldError,
};

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genres | Lil Library",
        html! {
            h1 { "Genre List" }
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (genre.name) } }
                    }
                }
            }
        },
    )
}

pub fn detail(genre: &Genre, books: &[BookSummary]) -> Markup {
    layout(
        &format!("{} | Lil Library", genre.name),
        html! {
            h1 { "Genre: " (genre.name) }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This genre has no books." }
            } @else {
                dl {
                    @for book in books {
                        dt { a href=(book.url()) { (book.title) } }
                        dd { (book.summary) }
                    }
                }
            }
        },
    )
}

pub fn create_form(form: &GenreForm, errors: &[FieldError]) -> Markup {
    layout(
        "Create Genre | Lil Library",
        html! {
            h1 { "Create Genre" }
            form method="post" action="/catalog/genres/create" {
                div class="form-group" {
                    label for="name" { "Genre:" }
                    input type="text" id="name" name="name"
                        placeholder="Fantasy, Poetry etc." value=(form.name);
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

    #[test]
    fn form_preserves_value_on_error() {
        let form = GenreForm { name: "Sc".into() };
        let errors = vec![FieldError {
            field: "name".into(),
            message: "Genre name must contain at least 3 characters".into(),
        }];
        let page = create_form(&form, &errors).into_string();
        assert!(page.contains(r#"value="Sc""#));
        assert!(page.contains("at least 3 characters"));
    }
}
