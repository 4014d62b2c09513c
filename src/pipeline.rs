/*!
 * Full extraction pipeline: filter, registry, label index, dialog.
 */

use std::fmt;

use log::debug;

use crate::document::DialogDocument;
use crate::errors::ScriptError;
use crate::script::{CharacterRegistry, LabelIndex, ScriptSource, extract_dialog, filter_sources};

/// Counts gathered during one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub files: usize,
    pub lines_read: usize,
    pub lines_retained: usize,
    pub characters: usize,
    pub labels: usize,
    pub messages: usize,
}

impl fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s), {} characters, {} labels, {} messages ({} of {} lines kept)",
            self.files,
            self.characters,
            self.labels,
            self.messages,
            self.lines_retained,
            self.lines_read
        )
    }
}

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub document: DialogDocument,
    pub summary: ExtractionSummary,
}

/// Runs the extraction stages in sequence.
#[derive(Debug, Clone)]
pub struct DialogPipeline {
    narrator: String,
}

impl DialogPipeline {
    /// Create a pipeline attributing unspoken lines to `narrator`
    pub fn new(narrator: impl Into<String>) -> Self {
        Self {
            narrator: narrator.into(),
        }
    }

    /// Narrator display name
    pub fn narrator(&self) -> &str {
        &self.narrator
    }

    /// Run every stage over the sources, in the order given.
    ///
    /// Empty input produces an empty document.
    pub fn run(&self, sources: &[ScriptSource]) -> Result<Extraction, ScriptError> {
        let filtered = filter_sources(sources);
        debug!("Filtered {} line(s) down to {}", filtered.lines_read, filtered.len());

        let registry = CharacterRegistry::from_lines(&filtered.lines);
        let index = LabelIndex::from_lines(&filtered.lines);
        let messages = extract_dialog(&index, &registry, &self.narrator)?;

        let summary = ExtractionSummary {
            files: sources.len(),
            lines_read: filtered.lines_read,
            lines_retained: filtered.len(),
            characters: registry.len(),
            labels: index.len(),
            messages: messages.len(),
        };

        Ok(Extraction {
            document: DialogDocument::new(&registry, messages),
            summary,
        })
    }
}
