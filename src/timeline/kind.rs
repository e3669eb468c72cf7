//! Response kinds and request classification.
//!
//! The kind of a response is never inferred from its body. It comes from the
//! request that produced it: a GraphQL operation name such as `HomeTimeline`
//! or the legacy `search/adaptive.json` endpoint.

use log::debug;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ExtractError;

/// The response shapes the extractor knows how to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    HomeLatestTimeline,
    HomeTimeline,
    SearchTimeline,
    UserTweets,
    TweetDetail,
    /// The v1.1-era `2/search/adaptive.json` endpoint.
    LegacyAdaptiveSearch,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 6] = [
        ResponseKind::HomeLatestTimeline,
        ResponseKind::HomeTimeline,
        ResponseKind::SearchTimeline,
        ResponseKind::UserTweets,
        ResponseKind::TweetDetail,
        ResponseKind::LegacyAdaptiveSearch,
    ];

    /// The name the request path carries for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::HomeLatestTimeline => "HomeLatestTimeline",
            ResponseKind::HomeTimeline => "HomeTimeline",
            ResponseKind::SearchTimeline => "SearchTimeline",
            ResponseKind::UserTweets => "UserTweets",
            ResponseKind::TweetDetail => "TweetDetail",
            ResponseKind::LegacyAdaptiveSearch => "search/adaptive.json",
        }
    }

    /// Classifies an intercepted request URL.
    ///
    /// Returns `Ok(None)` for requests that are not timeline requests at all,
    /// or whose GraphQL operation is not one we extract from. Only a URL that
    /// cannot be parsed is an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timeline_users::ResponseKind;
    ///
    /// let kind = ResponseKind::from_request_url(
    ///     "https://x.com/i/api/graphql/abc123/HomeTimeline?variables=%7B%7D",
    /// )
    /// .unwrap();
    /// assert_eq!(kind, Some(ResponseKind::HomeTimeline));
    /// ```
    pub fn from_request_url(request_url: &str) -> Result<Option<ResponseKind>, ExtractError> {
        let parsed = url::Url::parse(request_url).map_err(|source| ExtractError::InvalidUrl {
            url: request_url.to_string(),
            source,
        })?;

        let Some(name) = operation_name(parsed.path()) else {
            debug!("Request path {} is not a timeline request", parsed.path());
            return Ok(None);
        };

        match name.parse::<ResponseKind>() {
            Ok(kind) => {
                debug!("Classified request {} as {}", parsed.path(), kind);
                Ok(Some(kind))
            }
            Err(_) => {
                debug!("Operation {} has no instructions mapping", name);
                Ok(None)
            }
        }
    }
}

/// Captures the operation name from a request path.
///
/// `/i/api/graphql/<query id>/<Operation>` yields `<Operation>`, and
/// `/i/api/2/search/adaptive.json` yields `search/adaptive.json`.
pub fn operation_name(path: &str) -> Option<&str> {
    let captures = operation_regex().captures(path)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}

fn operation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/i/api/(?:graphql/[\w-]+/(\w+)|2/(search/adaptive\.json))$")
            .expect("operation regex is valid")
    })
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ExtractError::UnregisteredKind(s.to_string()))
    }
}
