/*!
 * Label indexing.
 *
 * Groups filtered lines under the label that was most recently opened.
 * Only unindented lines can be block headers; indented ones are plain lines
 * of the current label. Nested blocks (`menu:`, `if ...:`) do not change
 * the current label, their bodies are flattened into it in declaration order. A label opened again
 * later, in the same file or another one, keeps accumulating lines.
 */

use std::collections::HashMap;

use log::{debug, trace};

use crate::script::grammar;
use crate::script::source::ScriptLine;

/// A label and the lines attributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub lines: Vec<ScriptLine>,
}

/// Label name to lines, iterated in the order labels were first opened.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: Vec<Label>,
    positions: HashMap<String, usize>,
}

impl LabelIndex {
    /// Build the index from filtered lines
    pub fn from_lines(lines: &[ScriptLine]) -> Self {
        let mut indexer = LabelIndexer::new();
        for line in lines {
            indexer.push(line);
        }
        indexer.finish()
    }

    /// Get the entry for `name`, creating an empty one if needed
    fn entry(&mut self, name: &str) -> &mut Label {
        let position = match self.positions.get(name) {
            Some(&position) => position,
            None => {
                self.labels.push(Label {
                    name: name.to_string(),
                    lines: Vec::new(),
                });
                let position = self.labels.len() - 1;
                self.positions.insert(name.to_string(), position);
                position
            }
        };
        &mut self.labels[position]
    }

    /// Lines of a label, if it was ever opened
    pub fn get(&self, name: &str) -> Option<&[ScriptLine]> {
        self.positions
            .get(name)
            .map(|&position| self.labels[position].lines.as_slice())
    }

    /// Iterate labels in first-opened order
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// Label names in first-opened order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no label was opened
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Single-pass state machine behind [`LabelIndex::from_lines`].
#[derive(Debug, Default)]
pub struct LabelIndexer {
    current_label: Option<String>,
    index: LabelIndex,
    dropped: usize,
}

impl LabelIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label lines are currently attributed to
    pub fn current_label(&self) -> Option<&str> {
        self.current_label.as_deref()
    }

    /// Feed the next line
    pub fn push(&mut self, line: &ScriptLine) {
        if let Some(header) = grammar::match_block_header(&line.text) {
            if header.is_label() {
                debug!("Entering label '{}' at {}", header.name, line.location());
                // An opened label is a valid entry even before it has lines
                self.index.entry(header.name);
                self.current_label = Some(header.name.to_string());
            } else {
                trace!("Flattening '{}' block at {}", header.kind, line.location());
            }
            return;
        }

        match &self.current_label {
            Some(label) => self.index.entry(label).lines.push(line.clone()),
            None => self.dropped += 1,
        }
    }

    /// Finish indexing and return the index
    pub fn finish(self) -> LabelIndex {
        if self.dropped > 0 {
            debug!("Dropped {} line(s) outside of any label", self.dropped);
        }
        self.index
    }
}
