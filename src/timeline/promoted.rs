//! Promoted (advertised) tweet detection.

use serde_json::Value;

/// Values of the client event fields that mark an item as an ad.
pub const PROMOTED_MARKERS: [&str; 3] = ["suggest_promoted", "Promoted", "promoted"];

/// Whether a timeline item (the object holding `itemContent` and
/// `clientEventInfo`) is a promoted tweet.
///
/// Any one of the three signals is enough.
pub fn is_promoted(item: &Value) -> bool {
    if item
        .get("itemContent")
        .and_then(|content| content.get("promotedMetadata"))
        .is_some()
    {
        return true;
    }

    let Some(event_info) = item.get("clientEventInfo") else {
        return false;
    };

    is_marker(event_info.get("component"))
        || is_marker(
            event_info
                .get("details")
                .and_then(|details| details.get("timelinesDetails"))
                .and_then(|timelines| timelines.get("injectionType")),
        )
}

fn is_marker(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| PROMOTED_MARKERS.contains(&s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_promoted_metadata() {
        let item = json!({"itemContent": {"promotedMetadata": {"advertiser_results": {}}}});
        assert!(is_promoted(&item));
    }

    #[test]
    fn test_component_marker() {
        let item = json!({"itemContent": {}, "clientEventInfo": {"component": "Promoted"}});
        assert!(is_promoted(&item));
    }

    #[test]
    fn test_injection_type_marker() {
        let item = json!({
            "itemContent": {},
            "clientEventInfo": {
                "component": "tweet",
                "details": {"timelinesDetails": {"injectionType": "suggest_promoted"}}
            }
        });
        assert!(is_promoted(&item));
    }

    #[test]
    fn test_organic_tweet() {
        let item = json!({
            "itemContent": {"itemType": "TimelineTweet"},
            "clientEventInfo": {"component": "suggest_ranked_organic_tweet"}
        });
        assert!(!is_promoted(&item));
        assert!(!is_promoted(&json!({})));
    }

    #[test]
    fn test_non_string_component_is_ignored() {
        let item = json!({"clientEventInfo": {"component": ["Promoted"]}});
        assert!(!is_promoted(&item));
    }
}
