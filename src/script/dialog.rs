/*!
 * Dialog extraction: turns label bodies into speaker/utterance messages.
 */

use log::debug;

use crate::document::Message;
use crate::errors::ScriptError;
use crate::script::characters::CharacterRegistry;
use crate::script::grammar;
use crate::script::labels::LabelIndex;

/// Extracts messages from a label index.
#[derive(Debug)]
pub struct DialogExtractor<'a> {
    registry: &'a CharacterRegistry,
    narrator: &'a str,
}

impl<'a> DialogExtractor<'a> {
    /// Create an extractor resolving speakers through `registry`.
    ///
    /// Lines without a speaker id are attributed to `narrator`.
    pub fn new(registry: &'a CharacterRegistry, narrator: &'a str) -> Self {
        Self { registry, narrator }
    }

    /// Extract all messages, labels in first-opened order, lines in order.
    ///
    /// Lines indented by a tab or four spaces are nested block content and
    /// are never emitted. An unknown speaker id is fatal.
    pub fn extract(&self, index: &LabelIndex) -> Result<Vec<Message>, ScriptError> {
        let mut messages = Vec::new();

        for label in index.iter() {
            let mut skipped = 0usize;
            for line in &label.lines {
                if grammar::is_indented_block_line(&line.text) {
                    skipped += 1;
                    continue;
                }

                let Some(dialog) = grammar::match_dialog_line(&line.text) else {
                    skipped += 1;
                    continue;
                };

                let message = match dialog.speaker_id {
                    None => Message::narration(self.narrator, dialog.utterance),
                    Some(id) => {
                        let speaker = self.registry.resolve(id).ok_or_else(|| {
                            ScriptError::UnknownCharacter {
                                id: id.to_string(),
                                label: label.name.clone(),
                                origin: line.origin.to_string(),
                                line_number: line.line_number,
                                line: line.text.trim().to_string(),
                            }
                        })?;
                        Message::new(speaker, dialog.utterance)
                    }
                };
                messages.push(message);
            }

            if skipped > 0 {
                debug!("Label '{}': skipped {} non-dialog line(s)", label.name, skipped);
            }
        }

        Ok(messages)
    }
}

/// Extract messages with the given registry and narrator name.
pub fn extract_dialog(
    index: &LabelIndex,
    registry: &CharacterRegistry,
    narrator: &str,
) -> Result<Vec<Message>, ScriptError> {
    DialogExtractor::new(registry, narrator).extract(index)
}
