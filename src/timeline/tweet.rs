//! Pulling users out of individual tweet items.

use log::debug;
use serde_json::Value;

use super::entry::is_ignored;
use super::paths::{descend, USER_OBJECT_PATH};
use super::promoted::is_promoted;
use super::record::UserRecord;
use super::{TimelineExtractor, UserSink};
use crate::report::{ErrorReporter, ReportKind};

impl<'c, C, S, R> TimelineExtractor<'c, C, S, R>
where
    S: UserSink<C>,
    R: ErrorReporter,
{
    /// Handles one timeline item: the object holding `itemContent` and,
    /// optionally, `clientEventInfo`.
    ///
    /// A quoted tweet's author is emitted first. Failing that, a retweeted
    /// tweet's author. The item's own author is always emitted last. All of
    /// them share the item's promoted flag.
    pub fn parse_timeline_tweet(&mut self, item: &Value) {
        let Some(item_content) = item.get("itemContent") else {
            self.reporter.report(ReportKind::MalformedEntry, item);
            return;
        };
        if let Some(item_type) = item_content.get("itemType").and_then(Value::as_str) {
            if is_ignored(item_type) {
                return;
            }
        }

        let promoted = is_promoted(item);

        if let Some(result) = tweet_result(item_content) {
            if let Some(quoted) = origin(result, &["quoted_status_result", "result"]) {
                debug!("Extracting quoted tweet author");
                self.extract_user(quoted, promoted);
            } else if let Some(retweeted) =
                origin(result, &["legacy", "retweeted_status_result", "result"])
            {
                debug!("Extracting retweeted tweet author");
                self.extract_user(retweeted, promoted);
            }
        }

        self.extract_user(item_content, promoted);
    }

    /// Descends [`USER_OBJECT_PATH`] from `node` and emits the user found there.
    ///
    /// The text of the tweet whose `core` is followed is attached as
    /// `full_text`. Anything other than a `User` at the end of the path is
    /// reported with the original node and emits nothing.
    pub fn extract_user(&mut self, node: &Value, promoted: bool) {
        let mut ptr = node;
        let mut full_text = None;

        for key in USER_OBJECT_PATH {
            let Some(next) = ptr.get(key) else {
                continue;
            };
            if key == "core" {
                full_text = ptr
                    .get("legacy")
                    .and_then(|legacy| legacy.get("full_text"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
            }
            ptr = next;
        }

        let is_user = ptr.get("__typename").and_then(Value::as_str) == Some("User");
        match ptr {
            Value::Object(user) if is_user => {
                self.emit(UserRecord::new(user.clone(), promoted, full_text));
            }
            _ => self.reporter.report(ReportKind::MalformedTweetShape, node),
        }
    }
}

/// The tweet result under an item's `tweet_results`, looking through the
/// `TweetWithVisibilityResults` wrapper.
fn tweet_result(item_content: &Value) -> Option<&Value> {
    let result = descend(item_content, &["tweet_results", "result"])?;
    if result.get("__typename").and_then(Value::as_str) == Some("TweetWithVisibilityResults") {
        return result.get("tweet").or(Some(result));
    }
    Some(result)
}

fn origin<'a>(result: &'a Value, path: &[&str]) -> Option<&'a Value> {
    descend(result, path).filter(|node| node.is_object())
}
