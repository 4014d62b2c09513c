/*!
 * Output document model.
 *
 * The document is what gets written to disk: a `characters` map from every
 * known display name to an empty placeholder, and the ordered `messages`.
 * Keys serialize in sorted order so repeated runs produce identical bytes.
 */

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::script::CharacterRegistry;

/// One line of extracted dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the speaker
    pub speaker: String,

    /// Spoken (or narrated) text
    pub utterance: String,
}

impl Message {
    /// Create a message spoken by a character
    pub fn new(speaker: impl Into<String>, utterance: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            utterance: utterance.into(),
        }
    }

    /// Create a narration message, with the text wrapped in asterisks
    pub fn narration(narrator: impl Into<String>, text: &str) -> Self {
        Self {
            speaker: narrator.into(),
            utterance: format!("*{}*", text),
        }
    }
}

/// Extracted dialog ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogDocument {
    /// Display name to annotation placeholder
    pub characters: BTreeMap<String, String>,

    /// Messages in extraction order
    pub messages: Vec<Message>,
}

impl DialogDocument {
    /// Build a document listing every display name in the registry
    pub fn new(registry: &CharacterRegistry, messages: Vec<Message>) -> Self {
        let characters = registry
            .display_names()
            .into_iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();

        Self { characters, messages }
    }

    /// Serialize to JSON, compact or indented
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize dialog document to JSON")
    }
}
