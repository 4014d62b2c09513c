/*!
 * Character registry: maps character ids to display names.
 */

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use log::debug;

use crate::script::grammar;
use crate::script::source::ScriptLine;

/// Lookup table from character id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRegistry {
    characters: BTreeMap<String, String>,
}

impl CharacterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from filtered script lines.
    ///
    /// `define` lines that do not declare a `Character` are skipped. A
    /// later declaration of the same id replaces the earlier one.
    pub fn from_lines(lines: &[ScriptLine]) -> Self {
        let mut registry = Self::new();

        for line in lines.iter().filter(|l| l.text.starts_with(grammar::DEFINE_KEYWORD)) {
            match grammar::match_character_definition(&line.text) {
                Some(definition) => {
                    if let Some(previous) = registry.insert(definition.id, definition.name) {
                        debug!(
                            "Character '{}' redefined at {} ('{}' -> '{}')",
                            definition.id,
                            line.location(),
                            previous,
                            definition.name
                        );
                    }
                }
                None => debug!("Skipping non-character define at {}", line.location()),
            }
        }

        registry
    }

    /// Insert a character, returning the name it replaced
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.characters.insert(id.into(), name.into())
    }

    /// Resolve an id to its display name
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.characters.get(id).map(String::as_str)
    }

    /// Number of registered ids
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether no character was registered
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Distinct display names, sorted
    pub fn display_names(&self) -> BTreeSet<&str> {
        self.characters.values().map(String::as_str).collect()
    }
}
