//! Locating the `instructions` array inside a response body.
//!
//! Many timeline responses share the same instruction list but bury it at a
//! different depth depending on the operation. Each kind maps to the keys to
//! follow from the document root.

use serde_json::Value;

use super::kind::ResponseKind;

/// Keys leading from the tweet item down to the author's user object.
///
/// Keys missing at the current node are skipped rather than treated as a dead
/// end, so the same path works from an item wrapper, a bare tweet result, or a
/// `TweetWithVisibilityResults` wrapper.
pub const USER_OBJECT_PATH: [&str; 6] = [
    "tweet_results",
    "result",
    "tweet",
    "core",
    "user_results",
    "result",
];

/// The key path from the document root to the instructions array for `kind`.
pub fn instructions_path(kind: ResponseKind) -> &'static [&'static str] {
    match kind {
        ResponseKind::HomeLatestTimeline | ResponseKind::HomeTimeline => {
            &["data", "home", "home_timeline_urt", "instructions"]
        }
        ResponseKind::SearchTimeline => &[
            "data",
            "search_by_raw_query",
            "search_timeline",
            "timeline",
            "instructions",
        ],
        ResponseKind::UserTweets => &[
            "data",
            "user",
            "result",
            "timeline_v2",
            "timeline",
            "instructions",
        ],
        ResponseKind::TweetDetail => &[
            "data",
            "threaded_conversation_with_injections_v2",
            "instructions",
        ],
        ResponseKind::LegacyAdaptiveSearch => &["timeline", "instructions"],
    }
}

/// Follows `path` one key at a time. Any missing key yields `None`.
pub fn descend<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

pub fn descend_mut<'a>(root: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    path.iter().try_fold(root, |node, key| node.get_mut(*key))
}

/// Finds the instructions node for `kind` in `document`.
///
/// The result is whatever sits at the end of the path; callers check that it
/// is actually an array.
pub fn resolve_instructions(kind: ResponseKind, document: &Value) -> Option<&Value> {
    descend(document, instructions_path(kind))
}

pub fn resolve_instructions_mut(kind: ResponseKind, document: &mut Value) -> Option<&mut Value> {
    descend_mut(document, instructions_path(kind))
}
