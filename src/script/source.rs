/*!
 * Script sources and the lines read from them.
 *
 * Every line keeps a handle to the file it came from and its 1-based line
 * number, so later stages can point back into the source when they fail.
 */

use std::fmt;
use std::sync::Arc;

/// A whole script file held in memory.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    /// Display name of the source (usually the file path)
    pub name: String,

    /// Full text content
    pub content: String,
}

impl ScriptSource {
    /// Create a new script source
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Iterate over the lines of this source, tagged with their location.
    ///
    /// Line terminators (`\n` or `\r\n`) are not part of the yielded text.
    pub fn lines(&self) -> impl Iterator<Item = ScriptLine> + '_ {
        let origin: Arc<str> = Arc::from(self.name.as_str());
        self.content
            .lines()
            .enumerate()
            .map(move |(index, text)| ScriptLine {
                origin: Arc::clone(&origin),
                line_number: index + 1,
                text: text.to_string(),
            })
    }
}

/// One line of script text with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// Name of the source this line was read from
    pub origin: Arc<str>,

    /// 1-based line number inside `origin`
    pub line_number: usize,

    /// Line text, original indentation included
    pub text: String,
}

impl ScriptLine {
    /// Build a line that is not tied to a real file
    pub fn detached(text: impl Into<String>) -> Self {
        Self {
            origin: Arc::from("<memory>"),
            line_number: 0,
            text: text.into(),
        }
    }

    /// Location formatted as `file:line`
    pub fn location(&self) -> String {
        format!("{}:{}", self.origin, self.line_number)
    }
}

impl fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
