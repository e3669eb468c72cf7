//! # Timeline Users Library
//!
//! Extracts user records from the JSON bodies of Twitter/X internal timeline
//! API responses so that a downstream policy can decide what to do with each
//! user. Home timelines, search, user tweets, tweet detail threads and the
//! legacy adaptive search endpoint are supported.
//!
//! ## Features
//!
//! - Locates the `instructions` list for each supported response kind
//! - Handles both `TimelineAddEntries` and `TimelineAddToModule` layouts
//! - Emits quoted and retweeted authors alongside the tweet's own author
//! - Flags promoted (ad) tweets and attaches the tweet text to each record
//! - Reports malformed entries without aborting the rest of the response
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use timeline_users::{LogReporter, ResponseKind, TimelineExtractor, UserRecord};
//!
//! let mut body = json!({"data": {"home": {"home_timeline_urt": {"instructions": []}}}});
//! let mut handles = Vec::new();
//! let mut extractor = TimelineExtractor::new(
//!     &(),
//!     |user: UserRecord, _: &()| handles.push(user.screen_name().map(str::to_string)),
//!     LogReporter::default(),
//! );
//! extractor.process_response(ResponseKind::HomeTimeline, &mut body).unwrap();
//! assert!(extractor.reporter().has_errors());
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod timeline;

// Re-export commonly used types and functions
pub use config::OutputConfig;
pub use error::ExtractError;
pub use report::{sanitize_for_logging, ErrorReporter, LogReporter, ReportKind};
pub use timeline::{
    extract_users, resolve_instructions, ResponseKind, TimelineExtractor, UserRecord, UserSink,
};
