//! Timeline response parsing.
//!
//! Many responses from the internal API share an "instructions" list that
//! describes how to mutate the client's timeline. This module locates that
//! list, walks the entries it adds, and pulls the author (plus any quoted or
//! retweeted author) out of every tweet it finds.

mod entry;
mod instructions;
mod kind;
mod paths;
mod promoted;
mod record;
mod tweet;

use log::debug;
use serde_json::Value;

use crate::error::ExtractError;
use crate::report::{ErrorReporter, LogReporter, ReportKind};

pub use entry::{
    classify_entry, restore_module_items, wrap_module_items, Addition, EntryKind,
    IGNORED_ENTRY_TYPES,
};
pub use kind::{operation_name, ResponseKind};
pub use paths::{
    descend, instructions_path, resolve_instructions, resolve_instructions_mut, USER_OBJECT_PATH,
};
pub use promoted::{is_promoted, PROMOTED_MARKERS};
pub use record::UserRecord;

/// Receives every extracted user along with the caller's configuration.
pub trait UserSink<C> {
    fn emit(&mut self, record: UserRecord, config: &C);
}

impl<C, F> UserSink<C> for F
where
    F: FnMut(UserRecord, &C),
{
    fn emit(&mut self, record: UserRecord, config: &C) {
        self(record, config)
    }
}

/// Walks timeline responses and feeds the users it finds to a sink.
///
/// The extractor holds no per-document state; one instance can process any
/// number of responses in sequence.
pub struct TimelineExtractor<'c, C, S, R> {
    config: &'c C,
    sink: S,
    reporter: R,
    emitted: usize,
}

impl<'c, C, S, R> TimelineExtractor<'c, C, S, R>
where
    S: UserSink<C>,
    R: ErrorReporter,
{
    pub fn new(config: &'c C, sink: S, reporter: R) -> Self {
        TimelineExtractor {
            config,
            sink,
            reporter,
            emitted: 0,
        }
    }

    /// Processes one response body of the given kind.
    ///
    /// Returns the number of user records emitted for this document. An
    /// `AddToModule` instruction is temporarily reshaped while it is walked and
    /// restored before returning; nothing else in `document` is modified.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnexpectedEntryType`] when an entry type has no mapping.
    /// Records emitted before that entry stay emitted.
    pub fn process_response(
        &mut self,
        kind: ResponseKind,
        document: &mut Value,
    ) -> Result<usize, ExtractError> {
        let before = self.emitted;

        let Some(instructions) = resolve_instructions_mut(kind, document) else {
            self.reporter.report(ReportKind::MissingInstructions, document);
            return Ok(0);
        };
        debug!(
            "Parsed instructions path for {}: {} instructions",
            kind,
            instructions.as_array().map_or(0, Vec::len)
        );

        self.reduce_instructions(instructions)?;
        Ok(self.emitted - before)
    }

    /// Total records emitted over the extractor's lifetime.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (S, R) {
        (self.sink, self.reporter)
    }

    fn emit(&mut self, record: UserRecord) {
        self.emitted += 1;
        self.sink.emit(record, self.config);
    }
}

/// Collects every user in `document`, logging recoverable problems.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use timeline_users::{extract_users, ResponseKind};
///
/// let mut body = json!({"timeline": {"instructions": [
///     {"type": "TimelineAddEntries", "entries": []}
/// ]}});
/// let users = extract_users(ResponseKind::LegacyAdaptiveSearch, &mut body).unwrap();
/// assert!(users.is_empty());
/// ```
pub fn extract_users(
    kind: ResponseKind,
    document: &mut Value,
) -> Result<Vec<UserRecord>, ExtractError> {
    let mut users = Vec::new();
    {
        let mut extractor = TimelineExtractor::new(
            &(),
            |record: UserRecord, _: &()| users.push(record),
            LogReporter::default(),
        );
        extractor.process_response(kind, document)?;
    }
    Ok(users)
}
