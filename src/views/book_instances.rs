//! Book instance pages: list, detail, create form

use maud::{html, Markup};

use super::{error_list, fmt_date, layout};
use crate::{
    models::{
        book_instance::{BookInstanceForm, InstanceStatus},
        BookInstanceRow, BookSummary,
    },
    web::forms::FieldError,
};

fn status_badge(status: InstanceStatus) -> Markup {
    html! {
        span class=(format!("status-{}", status.to_string().to_lowercase())) { (status) }
    }
}

pub fn list(instances: &[BookInstanceRow]) -> Markup {
    layout(
        "Book Instances | Lil Library",
        html! {
            h1 { "Book Instance List" }
            @if instances.is_empty() {
                p { "There are no book instances." }
            } @else {
                ul {
                    @for instance in instances {
                        li {
                            a href=(instance.url()) { (instance.book_title) " : " (instance.imprint) }
                            " - " (status_badge(instance.status()))
                            @if let Some(due) = instance.due_back {
                                " (Due: " (fmt_date(Some(due))) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(instance: &BookInstanceRow) -> Markup {
    layout(
        "Book Instance | Lil Library",
        html! {
            h1 { "ID: " (instance.id) }
            p {
                strong { "Title: " }
                a href=(format!("/catalog/books/{}", instance.book_id)) { (instance.book_title) }
            }
            p { strong { "Imprint: " } (instance.imprint) }
            p { strong { "Status: " } (status_badge(instance.status())) }
            @if instance.status() != InstanceStatus::Available {
                p { strong { "Due back: " } (fmt_date(instance.due_back)) }
            }
        },
    )
}

pub fn create_form(
    form: &BookInstanceForm,
    books: &[BookSummary],
    errors: &[FieldError],
) -> Markup {
    layout(
        "Create Book Instance | Lil Library",
        html! {
            h1 { "Create Book Instance (copy)" }
            form method="post" action="/catalog/bookinstances/create" {
                div class="form-group" {
                    label for="book" { "Book:" }
                    select id="book" name="book" {
                        @for book in books {
                            option value=(book.id) selected[form.book == Some(book.id)] {
                                (book.title)
                            }
                        }
                    }
                }
                div class="form-group" {
                    label for="imprint" { "Imprint:" }
                    input type="text" id="imprint" name="imprint"
                        placeholder="Publisher and date information" value=(form.imprint);
                }
                div class="form-group" {
                    label for="due_back" { "Date when book available:" }
                    input type="date" id="due_back" name="due_back" value=(form.due_back);
                }
                div class="form-group" {
                    label for="status" { "Status:" }
                    select id="status" name="status" {
                        @for status in InstanceStatus::ALL {
                            option value=(status) selected[form.status == status.to_string()] {
                                (status)
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
    use chrono::NaiveDate;

    #[test]
    fn detail_hides_due_back_when_available() {
        let mut instance = BookInstanceRow {
            id: 9,
            book_id: 3,
            book_title: "The Name of the Wind".into(),
            imprint: "Gollancz, 2007".into(),
            status: i16::from(InstanceStatus::Available),
            due_back: None,
        };
        let page = detail(&instance).into_string();
        assert!(!page.contains("Due back"));

        instance.status = i16::from(InstanceStatus::Loaned);
        instance.due_back = NaiveDate::from_ymd_opt(2026, 9, 15);
        let page = detail(&instance).into_string();
        assert!(page.contains("Due back"));
        assert!(page.contains("Sep 15, 2026"));
    }

    #[test]
    fn create_form_keeps_chosen_status() {
        let form = BookInstanceForm {
            book: Some(3),
            imprint: String::new(),
            status: "Loaned".into(),
            due_back: String::new(),
        };
        let books = vec![BookSummary {
            id: 3,
            title: "The Name of the Wind".into(),
            summary: String::new(),
        }];
        let page = create_form(&form, &books, &[]).into_string();
        assert!(page.contains(r#"<option value="Loaned" selected>"#));
        assert!(page.contains(r#"<option value="3" selected>"#));
    }
}
