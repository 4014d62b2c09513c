/*!
 * Line filter: the first stage of dialog extraction.
 *
 * Drops blank lines and lines starting with a presentation command. Labels,
 * control flow and dialog lines pass through untouched, indentation included.
 */

use log::debug;

use crate::script::grammar;
use crate::script::source::{ScriptLine, ScriptSource};

/// Result of filtering a set of sources.
#[derive(Debug, Clone, Default)]
pub struct FilteredLines {
    /// Retained lines in source order
    pub lines: Vec<ScriptLine>,

    /// Number of lines read before filtering
    pub lines_read: usize,
}

impl FilteredLines {
    /// Number of retained lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line was retained
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Filter every line of the given sources, in the order given.
pub fn filter_sources(sources: &[ScriptSource]) -> FilteredLines {
    let mut filtered = FilteredLines::default();

    for source in sources {
        let before = filtered.lines.len();
        for line in source.lines() {
            filtered.lines_read += 1;
            if keep_line(&line.text) {
                filtered.lines.push(line);
            }
        }
        debug!(
            "Kept {} line(s) from {}",
            filtered.lines.len() - before,
            source.name
        );
    }

    filtered
}

/// Whether a single line survives the filter.
pub fn keep_line(line: &str) -> bool {
    !grammar::is_excluded_line(line)
}
