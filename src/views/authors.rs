//! Author pages: list, detail, create form

use maud::{html, Markup};

use super::{error_list, fmt_date, layout};
use crate::{
    models::{author::AuthorForm, Author, BookSummary},
    web::forms::FieldError,
};

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Authors | Lil Library",
        html! {
            h1 { "Author List" }
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (author.name()) }
                            " " span class="text-muted" { (author.lifespan()) }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(author: &Author, books: &[BookSummary]) -> Markup {
    layout(
        &format!("{} | Lil Library", author.name()),
        html! {
            h1 { "Author: " (author.name()) }
            p { "Born: " (fmt_date(author.date_of_birth)) }
            @if author.date_of_death.is_some() {
                p { "Died: " (fmt_date(author.date_of_death)) }
            }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This author has no books." }
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

pub fn create_form(form: &AuthorForm, errors: &[FieldError]) -> Markup {
    layout(
        "Create Author | Lil Library",
        html! {
            h1 { "Create Author" }
            form method="post" action="/catalog/authors/create" {
                div class="form-group" {
                    label for="first_name" { "First name:" }
                    input type="text" id="first_name" name="first_name"
                        placeholder="First name (Christian)" value=(form.first_name);
                }
                div class="form-group" {
                    label for="family_name" { "Family name:" }
                    input type="text" id="family_name" name="family_name"
                        placeholder="Family name (Surname)" value=(form.family_name);
                }
                div class="form-group" {
                    label for="date_of_birth" { "Date of birth:" }
                    input type="date" id="date_of_birth" name="date_of_birth"
                        value=(form.date_of_birth);
                }
                div class="form-group" {
                    label for="date_of_death" { "Date of death:" }
                    input type="date" id="date_of_death" name="date_of_death"
                        value=(form.date_of_death);
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
    fn form_preserves_submitted_values_and_errors() {
        let form = AuthorForm {
            first_name: "Ursula".into(),
            family_name: String::new(),
            date_of_birth: "1929-10-21".into(),
            date_of_death: String::new(),
        };
        let errors = vec![FieldError {
            field: "family_name".into(),
            message: "Family name must be specified".into(),
        }];
        let page = create_form(&form, &errors).into_string();
        assert!(page.contains(r#"value="Ursula""#));
        assert!(page.contains(r#"value="1929-10-21""#));
        assert!(page.contains("Family name must be specified"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let page = list(&[]).into_string();
        assert!(page.contains("There are no authors."));
    }
}
