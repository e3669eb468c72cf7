//! Reducing an instructions list to the tweets it adds.

use log::debug;
use serde_json::Value;

use super::entry::{classify_entry, restore_module_items, wrap_module_items, Addition, EntryKind};
use super::{TimelineExtractor, UserSink};
use crate::error::ExtractError;
use crate::report::{ErrorReporter, ReportKind};

impl<'c, C, S, R> TimelineExtractor<'c, C, S, R>
where
    S: UserSink<C>,
    R: ErrorReporter,
{
    /// Finds the first addition instruction and processes the entries it adds.
    ///
    /// A response without one is reported and yields nothing. An
    /// `AddToModule` instruction is handled as one module entry and put back
    /// in its original shape afterwards, including when an entry fails.
    pub fn reduce_instructions(&mut self, instructions: &mut Value) -> Result<(), ExtractError> {
        let position = match instructions.as_array() {
            Some(list) => list.iter().position(|i| Addition::of(i).is_some()),
            None => {
                self.reporter
                    .report(ReportKind::MissingInstructions, instructions);
                return Ok(());
            }
        };
        let Some(position) = position else {
            self.reporter
                .report(ReportKind::MissingAdditionInstruction, instructions);
            return Ok(());
        };
        let Some(instruction) = instructions.get_mut(position) else {
            return Ok(());
        };

        match Addition::of(instruction) {
            Some(Addition::AddToModule) => {
                debug!("Unwrapping TimelineAddToModule instruction");
                wrap_module_items(instruction);
                let result = self.process_entries(entries_of(instruction));
                restore_module_items(instruction);
                result
            }
            _ => self.process_entries(entries_of(instruction)),
        }
    }

    fn process_entries(&mut self, entries: &[Value]) -> Result<(), ExtractError> {
        debug!("Processing {} timeline entries", entries.len());

        for entry in entries {
            match classify_entry(entry) {
                EntryKind::Malformed => self.reporter.report(ReportKind::MalformedEntry, entry),
                EntryKind::Tweet(content) => self.parse_timeline_tweet(content),
                EntryKind::OtherItem(item_type) => {
                    debug!("Skipping non-tweet item {:?}", item_type)
                }
                EntryKind::Module(items) => {
                    for inner in items {
                        match inner.get("item") {
                            Some(item) => self.parse_timeline_tweet(item),
                            None => self.reporter.report(ReportKind::MalformedEntry, inner),
                        }
                    }
                }
                EntryKind::Ignored(_) => {}
                EntryKind::Unexpected(entry_type) => {
                    return Err(ExtractError::UnexpectedEntryType {
                        entry_type: entry_type.into_owned(),
                        entry: entry.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn entries_of(instruction: &Value) -> &[Value] {
    instruction
        .get("entries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
