use axum::{http::Uri, response::Redirect, response::Response};

use crate::api::negotiate::Representation;
use crate::views::Home;

pub async fn home(representation: Representation) -> Response {
    representation.respond(&Home::default())
}

/// Anything unmatched lands back on the home page
pub async fn redirect_home(uri: Uri) -> Redirect {
    tracing::debug!("No route for {}, redirecting home", uri);
    Redirect::to("/")
}
