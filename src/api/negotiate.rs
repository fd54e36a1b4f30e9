//! Accept-header negotiation between the HTML page and the JSON body.
//!
//! Every handler takes a [`Representation`] as its first extractor, so an
//! unsupported `Accept` header is answered with 406 before any datastore or
//! upstream work happens. The handler then hands its view-model to
//! [`Representation::respond`], the only place where the output format is
//! chosen.

use axum::{
    Json, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{Html, IntoResponse, Response},
};

use crate::views::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

/// Offered media types, most preferred first
const OFFERED: [(Representation, &str, &str); 2] = [
    (Representation::Html, "text", "html"),
    (Representation::Json, "application", "json"),
];

struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    quality: f32,
    /// Index of the range in the `Accept` header
    position: usize,
}

/// How well one offered type is accepted
#[derive(Debug, Clone, Copy)]
struct Acceptance {
    representation: Representation,
    quality: f32,
    specificity: u8,
    position: usize,
    offer: usize,
}

impl Acceptance {
    /// Quality first, then the more specific range, then the range the
    /// client listed first, then the server's offer order.
    fn beats(&self, other: &Acceptance) -> bool {
        if self.quality != other.quality {
            return self.quality > other.quality;
        }
        if self.specificity != other.specificity {
            return self.specificity > other.specificity;
        }
        if self.position != other.position {
            return self.position < other.position;
        }
        self.offer < other.offer
    }
}

impl MediaRange<'_> {
    fn parse(position: usize, raw: &str) -> Option<MediaRange<'_>> {
        let mut parts = raw.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            match param.split_once('=') {
                Some((name, value)) if name.trim().eq_ignore_ascii_case("q") => {
                    quality = value.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
                }
                _ => {}
            }
        }

        Some(MediaRange {
            kind,
            subtype,
            quality,
            position,
        })
    }

    /// 2 for an exact match, 1 for `type/*`, 0 for `*/*`
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        if self.kind == "*" && self.subtype == "*" {
            Some(0)
        } else if self.kind.eq_ignore_ascii_case(kind) && self.subtype == "*" {
            Some(1)
        } else if self.kind.eq_ignore_ascii_case(kind) && self.subtype.eq_ignore_ascii_case(subtype) {
            Some(2)
        } else {
            None
        }
    }
}

impl Representation {
    /// Pick a representation for an `Accept` header value.
    ///
    /// A missing or blank header accepts anything, which means HTML.
    pub fn negotiate(accept: Option<&str>) -> Option<Self> {
        let Some(accept) = accept.map(str::trim).filter(|a| !a.is_empty()) else {
            return Some(Representation::Html);
        };

        let ranges: Vec<MediaRange> = accept
            .split(',')
            .enumerate()
            .filter_map(|(position, raw)| MediaRange::parse(position, raw))
            .collect();

        let mut best: Option<Acceptance> = None;
        for (offer, (representation, kind, subtype)) in OFFERED.into_iter().enumerate() {
            // the most specific range that matches decides the quality
            let Some((specificity, range)) = ranges
                .iter()
                .filter_map(|r| r.specificity(kind, subtype).map(|s| (s, r)))
                .min_by(|(sa, a), (sb, b)| sb.cmp(sa).then(a.position.cmp(&b.position)))
            else {
                continue;
            };

            let candidate = Acceptance {
                representation,
                quality: range.quality,
                specificity,
                position: range.position,
                offer,
            };
            if candidate.quality > 0.0 && best.is_none_or(|b| candidate.beats(&b)) {
                best = Some(candidate);
            }
        }

        best.map(|b| b.representation)
    }

    /// Render the view as a page or serialize it, depending on `self`.
    pub fn respond<V: View>(self, view: &V) -> Response {
        let vary = [(header::VARY, "Accept")];
        match self {
            Representation::Html => (vary, Html(view.render().into_string())).into_response(),
            Representation::Json => (vary, Json(view)).into_response(),
        }
    }
}

/// Rejection for callers that accept neither HTML nor JSON
#[derive(Debug)]
pub struct NotAcceptable;

impl IntoResponse for NotAcceptable {
    fn into_response(self) -> Response {
        (StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Representation
where
    S: Send + Sync,
{
    type Rejection = NotAcceptable;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut values = Vec::new();
        for value in parts.headers.get_all(header::ACCEPT) {
            match value.to_str() {
                Ok(v) => values.push(v),
                Err(_) => return Err(NotAcceptable),
            }
        }

        let accept = if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        };

        match Representation::negotiate(accept.as_deref()) {
            Some(representation) => Ok(representation),
            None => {
                tracing::debug!("No acceptable representation for Accept: {:?}", accept);
                Err(NotAcceptable)
            }
        }
    }
}
