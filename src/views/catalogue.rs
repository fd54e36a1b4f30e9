use maud::{Markup, html};
use serde::Serialize;

use super::{View, layout};
use crate::models::Book;
use crate::services::PageView;

const INDEX_KEYS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Landing page
#[derive(Debug, Clone, Serialize)]
pub struct Home {
    pub service: &'static str,
    pub version: &'static str,
    pub routes: Vec<&'static str>,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            service: "bookbrowse",
            version: env!("CARGO_PKG_VERSION"),
            routes: vec![
                "/book/{titleStartsWith}",
                "/prev/{titleStartsWith}/{offset}",
                "/next/{titleStartsWith}/{offset}",
                "/bookdetails/{bookId}",
                "/reviews/{bookTitle}",
            ],
        }
    }
}

impl View for Home {
    fn render(&self) -> Markup {
        layout(
            "Welcome",
            html! {
                h1 { "Browse books by title" }
                p { "Pick the first character of the title." }
                nav.index {
                    @for key in INDEX_KEYS.chars() {
                        a href=(format!("/book/{}", key)) { (key) } " "
                    }
                }
            },
        )
    }
}

impl View for PageView {
    fn render(&self) -> Markup {
        layout(
            &format!("Titles starting with {}", self.title_prefix),
            html! {
                h1 { "Titles starting with \"" (self.title_prefix) "\"" }
                @if self.has_content {
                    p.summary {
                        "Showing " (self.offset + 1) "-" (self.offset + self.books.len() as u64)
                        " of " (self.total)
                    }
                    table.books {
                        thead {
                            tr { th { "Title" } th { "Authors" } th { "Rating" } }
                        }
                        tbody {
                            @for book in &self.books {
                                tr {
                                    td {
                                        a href=(format!("/bookdetails/{}", urlencoding::encode(&book.book_id))) {
                                            (book.title)
                                        }
                                    }
                                    td { (book.authors.join(", ")) }
                                    td {
                                        @if let Some(rating) = book.rating {
                                            (format!("{:.2}", rating))
                                        }
                                    }
                                }
                            }
                        }
                    }
                } @else {
                    p.empty { "No books found." }
                }
                nav.pager {
                    @if self.has_previous {
                        a.prev href=(self.previous_link) { "Previous" }
                    }
                    " "
                    @if self.has_next {
                        a.next href=(self.next_link) { "Next" }
                    }
                }
            },
        )
    }
}

impl View for Book {
    fn render(&self) -> Markup {
        layout(
            &self.title,
            html! {
                article.book {
                    h1 { (self.title) }
                    @if let Some(image_url) = &self.image_url {
                        img src=(image_url) alt=(self.title);
                    }
                    dl {
                        @if !self.authors.is_empty() {
                            dt { "Authors" }
                            dd { (self.authors.join(", ")) }
                        }
                        @if let Some(rating) = self.rating {
                            dt { "Rating" }
                            dd { (format!("{:.2}", rating)) }
                        }
                        @if let Some(pages) = self.pages {
                            dt { "Pages" }
                            dd { (pages) }
                        }
                        @if let Some(format) = &self.format {
                            dt { "Format" }
                            dd { (format) }
                        }
                        @if let Some(edition) = &self.edition {
                            dt { "Edition" }
                            dd { (edition) }
                        }
                        @if !self.genres.is_empty() {
                            dt { "Genres" }
                            dd { (self.genres.join(", ")) }
                        }
                    }
                    @if let Some(description) = &self.description {
                        p.description { (description) }
                    }
                    a.reviews href=(format!("/reviews/{}", urlencoding::encode(&self.title))) {
                        "Reviews"
                    }
                }
            },
        )
    }
}
