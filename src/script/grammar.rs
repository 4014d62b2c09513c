/*!
 * Line-level grammar for RPY scripts.
 *
 * Each rule of the grammar lives behind its own recognizer returning a
 * structured match, so the rules can be tested and replaced one at a time:
 * - Excluded commands (scene, show, play, ...)
 * - Block headers (`label start:`, `menu:`, `if flag:`)
 * - Character definitions (`define e = Character('Eileen')`)
 * - Dialog lines (`e "Hello"` or `"Narration"`)
 */

use std::sync::LazyLock;

use regex::Regex;

/// Commands whose lines carry nothing needed for dialog extraction.
///
/// Matching is a plain prefix test on the left-trimmed line, so `imagex`
/// is dropped along with `image`.
pub const EXCLUDED_COMMANDS: &[&str] = &[
    "$", "centered", "xalign", "yalign", "xoffset", "yoffset",
    "scene", "with", "play", "pause", "stop", "queue", "show", "hide",
    "transform", "linear", "on", "easein", "easeout", "image", "window",
    "init", "screen", "python",
];

/// Block type token that opens a label scope.
pub const LABEL_KEYWORD: &str = "label";

/// Prefix of lines that may declare a character.
pub const DEFINE_KEYWORD: &str = "define";

/// Block header: a word token at the very start of the line, an optional
/// name, then a colon that ends the line (trailing whitespace or a `#`
/// comment allowed). Indented lines are never headers. The name may not
/// contain a double quote, which keeps `e "Hello: there"` out.
static BLOCK_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\w+)[ \t]*([^:"\r\n]*):[ \t]*(?:#.*)?$"#)
        .expect("Invalid block header regex")
});

/// `define <id> = Character('<name>'` with the name running to the next `'`.
static CHARACTER_DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"define\s*(\w+)\s*=\s*Character\s*\(\s*'([^']+)")
        .expect("Invalid character definition regex")
});

/// Optional speaker id, then a double-quoted utterance. Escaped quotes are
/// not understood: the utterance stops at the first `"`.
static DIALOG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:(\w+)\s+)?"([^"]*)""#).expect("Invalid dialog regex")
});

/// A recognized block header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader<'a> {
    /// Block type token (`label`, `menu`, `if`, ...)
    pub kind: &'a str,

    /// Trimmed free text between the token and the colon, possibly empty
    pub name: &'a str,
}

impl BlockHeader<'_> {
    /// Whether this header opens a label scope
    pub fn is_label(&self) -> bool {
        self.kind == LABEL_KEYWORD
    }
}

/// A recognized `Character` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDefinition<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// A recognized dialog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLine<'a> {
    /// Leading speaker id, absent for narration
    pub speaker_id: Option<&'a str>,

    /// Text between the quotes
    pub utterance: &'a str,
}

/// Check whether a line is blank or starts with an excluded command.
pub fn is_excluded_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || is_excluded_command(trimmed)
}

/// Check whether the left-trimmed line starts with an excluded command.
pub fn is_excluded_command(line: &str) -> bool {
    let trimmed = line.trim_start();
    EXCLUDED_COMMANDS
        .iter()
        .any(|command| trimmed.starts_with(command))
}

/// Recognize a block header.
pub fn match_block_header(line: &str) -> Option<BlockHeader<'_>> {
    let captures = BLOCK_HEADER_PATTERN.captures(line)?;
    let kind = captures.get(1)?.as_str();
    let name = captures.get(2).map_or("", |m| m.as_str().trim());
    Some(BlockHeader { kind, name })
}

/// Recognize a character declaration.
///
/// Only lines that start with `define` (without indentation) are candidates.
pub fn match_character_definition(line: &str) -> Option<CharacterDefinition<'_>> {
    if !line.starts_with(DEFINE_KEYWORD) {
        return None;
    }
    let captures = CHARACTER_DEFINITION_PATTERN.captures(line)?;
    Some(CharacterDefinition {
        id: captures.get(1)?.as_str(),
        name: captures.get(2)?.as_str(),
    })
}

/// Recognize a dialog line. The line is trimmed before matching.
pub fn match_dialog_line(line: &str) -> Option<DialogLine<'_>> {
    let captures = DIALOG_PATTERN.captures(line.trim())?;
    Some(DialogLine {
        speaker_id: captures.get(1).map(|m| m.as_str()),
        utterance: captures.get(2)?.as_str(),
    })
}

/// Lines indented by a tab or four spaces belong to nested blocks.
pub fn is_indented_block_line(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with("    ")
}
