/*!
 * RPY script processing.
 *
 * Dialog extraction runs as a chain of stages over in-memory lines:
 * - `filter`: drops blank lines and presentation commands
 * - `characters`: builds the character id registry
 * - `labels`: groups lines under their label
 * - `dialog`: turns label bodies into messages
 *
 * The line-level rules all live in `grammar`.
 */

pub mod characters;
pub mod dialog;
pub mod filter;
pub mod grammar;
pub mod labels;
pub mod source;

pub use characters::CharacterRegistry;
pub use dialog::{DialogExtractor, extract_dialog};
pub use filter::{FilteredLines, filter_sources};
pub use labels::{Label, LabelIndex, LabelIndexer};
pub use source::{ScriptLine, ScriptSource};
