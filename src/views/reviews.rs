use maud::{Markup, html};

use super::{View, layout};
use crate::services::ReviewView;

impl View for ReviewView {
    fn render(&self) -> Markup {
        layout(
            &format!("Reviews for {}", self.title),
            html! {
                h1 { "Reviews for \"" (self.title) "\"" }
                @if let Some(first) = &self.first {
                    section.featured {
                        @if let Some(summary) = &first.summary {
                            blockquote { (summary) }
                        }
                        @if let Some(byline) = &first.byline {
                            p.byline { (byline) }
                        }
                    }
                }
                @if self.has_results {
                    ul.reviews {
                        @for review in &self.results {
                            li {
                                @if let Some(url) = &review.url {
                                    a href=(url) {
                                        (review.book_title.as_deref().unwrap_or(self.title.as_str()))
                                    }
                                } @else {
                                    (review.book_title.as_deref().unwrap_or(self.title.as_str()))
                                }
                                @if let Some(author) = &review.book_author {
                                    " by " (author)
                                }
                                @if let Some(date) = &review.publication_dt {
                                    " (" (date) ")"
                                }
                            }
                        }
                    }
                } @else {
                    p.empty { "No reviews found." }
                }
                @if !self.copyright.is_empty() {
                    footer.copyright { small { (self.copyright) } }
                }
            },
        )
    }
}
