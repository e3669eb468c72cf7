//! Reporting of recoverable extraction problems.
//!
//! The extractor never aborts a document for a malformed entry or tweet. It
//! hands the condition and the offending JSON to an [`ErrorReporter`] and
//! carries on with the next sibling.

use log::{error, warn};
use serde_json::Value;
use std::fmt;

/// A recoverable condition found while walking a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// The instructions path resolved to nothing, or to something that is not an array.
    MissingInstructions,
    /// No `TimelineAddEntries` or `TimelineAddToModule` instruction was present.
    MissingAdditionInstruction,
    /// An entry (or module item) lacked the fields needed to classify it.
    MalformedEntry,
    /// A tweet whose user path did not end at a `User` node.
    MalformedTweetShape,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::MissingInstructions => "missing_instructions",
            ReportKind::MissingAdditionInstruction => "missing_addition_instruction",
            ReportKind::MalformedEntry => "malformed_entry",
            ReportKind::MalformedTweetShape => "malformed_tweet_shape",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ReportKind::MissingInstructions => "could not locate the instructions array",
            ReportKind::MissingAdditionInstruction => {
                "response object does not contain an instruction to add entries"
            }
            ReportKind::MalformedEntry => "entry structure does not match expectation",
            ReportKind::MalformedTweetShape => "found unexpected tweet shape",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives recoverable conditions. Implementations must not panic or block.
pub trait ErrorReporter {
    fn report(&mut self, kind: ReportKind, context: &Value);
}

impl<F> ErrorReporter for F
where
    F: FnMut(ReportKind, &Value),
{
    fn report(&mut self, kind: ReportKind, context: &Value) {
        self(kind, context)
    }
}

/// Logs every condition and remembers that something went wrong.
#[derive(Debug, Clone)]
pub struct LogReporter {
    max_context_len: usize,
    reported: usize,
}

impl LogReporter {
    pub fn new(max_context_len: usize) -> Self {
        LogReporter {
            max_context_len,
            reported: 0,
        }
    }

    /// Number of conditions reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn has_errors(&self) -> bool {
        self.reported > 0
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        LogReporter::new(512)
    }
}

impl ErrorReporter for LogReporter {
    fn report(&mut self, kind: ReportKind, context: &Value) {
        self.reported += 1;
        let context = sanitize_for_logging(&context.to_string(), self.max_context_len);
        match kind {
            ReportKind::MalformedEntry => warn!("{} ({}): {}", kind.describe(), kind, context),
            _ => error!("{} ({}): {}", kind.describe(), kind, context),
        }
    }
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// Newlines and tabs become spaces, other control characters become `?`, and
/// anything longer than `max_len` bytes is cut at the nearest char boundary.
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.len() > max_len {
        let mut cut = max_len;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..cut],
            text.len()
        )
    } else {
        sanitized
    }
}
