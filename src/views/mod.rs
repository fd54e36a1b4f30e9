//! HTML rendering for every view-model the handlers produce.

mod catalogue;
mod reviews;

pub use catalogue::Home;

use maud::{DOCTYPE, Markup, html};
use serde::Serialize;

/// A view-model that can be answered as a page or as JSON.
pub trait View: Serialize {
    fn render(&self) -> Markup;
}

pub(crate) fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Book Browser" }
                link rel="stylesheet" href="/css/style.css";
            }
            body {
                header {
                    a href="/" { "Book Browser" }
                }
                main {
                    (content)
                }
            }
        }
    }
}
