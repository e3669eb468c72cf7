//! Classification of instructions and timeline entries.

use serde_json::Value;
use std::borrow::Cow;

/// Entry (and item) types that carry no user and are skipped silently.
pub const IGNORED_ENTRY_TYPES: [&str; 1] = ["TimelineTimelineCursor"];

pub(crate) fn is_ignored(entry_type: &str) -> bool {
    IGNORED_ENTRY_TYPES.contains(&entry_type)
}

/// The instruction types that add tweets to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addition {
    /// `TimelineAddEntries`: a flat `entries` list.
    AddEntries,
    /// `TimelineAddToModule`: `moduleItems` appended to an existing module.
    AddToModule,
}

impl Addition {
    pub fn of(instruction: &Value) -> Option<Addition> {
        match instruction.get("type").and_then(Value::as_str)? {
            "TimelineAddEntries" => Some(Addition::AddEntries),
            "TimelineAddToModule" => Some(Addition::AddToModule),
            _ => None,
        }
    }
}

/// What a single timeline entry turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind<'a> {
    /// No `content`, or a missing/null `content.entryType`.
    Malformed,
    /// A single tweet item; holds the entry's `content`.
    Tweet(&'a Value),
    /// A single item that is not a tweet (user cell, prompt, ...).
    OtherItem(Option<&'a str>),
    /// A module of several items.
    Module(&'a [Value]),
    Ignored(&'a str),
    /// An entry type with no mapping. Non-string tags carry their JSON text.
    Unexpected(Cow<'a, str>),
}

pub fn classify_entry(entry: &Value) -> EntryKind<'_> {
    let Some(content) = entry.get("content") else {
        return EntryKind::Malformed;
    };
    let entry_type = match content.get("entryType") {
        None | Some(Value::Null) => return EntryKind::Malformed,
        Some(Value::String(entry_type)) => entry_type.as_str(),
        Some(other) => return EntryKind::Unexpected(Cow::Owned(other.to_string())),
    };

    match entry_type {
        "TimelineTimelineItem" => {
            let item_type = content
                .get("itemContent")
                .and_then(|item| item.get("itemType"))
                .and_then(Value::as_str);
            if item_type == Some("TimelineTweet") {
                EntryKind::Tweet(content)
            } else {
                EntryKind::OtherItem(item_type)
            }
        }
        "TimelineTimelineModule" => EntryKind::Module(
            content
                .get("items")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        ),
        other if is_ignored(other) => EntryKind::Ignored(other),
        other => EntryKind::Unexpected(Cow::Borrowed(other)),
    }
}

/// Rewrites a `TimelineAddToModule` instruction so its `moduleItems` sit in a
/// single synthetic module entry under `entries`.
pub fn wrap_module_items(instruction: &mut Value) {
    let Some(fields) = instruction.as_object_mut() else {
        return;
    };
    let items = fields
        .remove("moduleItems")
        .unwrap_or_else(|| Value::Array(Vec::new()));
    fields.insert(
        "entries".to_string(),
        serde_json::json!([
            {
                "content": {
                    "entryType": "TimelineTimelineModule",
                    "items": items,
                }
            }
        ]),
    );
}

/// Undoes [`wrap_module_items`]: the synthetic entry's items go back to
/// `moduleItems` and `entries` is removed.
pub fn restore_module_items(instruction: &mut Value) {
    let Some(fields) = instruction.as_object_mut() else {
        return;
    };
    let items = fields
        .remove("entries")
        .and_then(|mut entries| {
            entries
                .get_mut(0)
                .and_then(|entry| entry.get_mut("content"))
                .and_then(|content| content.get_mut("items"))
                .map(Value::take)
        })
        .unwrap_or_else(|| Value::Array(Vec::new()));
    fields.insert("moduleItems".to_string(), items);
}
