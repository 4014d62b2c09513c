/*!
 * # rpydialog - Dialog extraction for RPY scripts
 *
 * A Rust library for turning visual novel scripts into a clean,
 * speaker-annotated transcript.
 *
 * ## Features
 *
 * - Filter presentation commands (scene, show, play, ...) out of the script
 * - Resolve character ids declared with `define x = Character('Name')`
 * - Group lines by label, flattening nested blocks
 * - Extract speaker/utterance pairs, with a configurable narrator for
 *   unattributed lines
 * - Deterministic JSON output for reproducible diffs
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script`: The extraction stages:
 *   - `script::grammar`: Line-level recognizers
 *   - `script::filter`: Line filter
 *   - `script::characters`: Character registry
 *   - `script::labels`: Label indexing
 *   - `script::dialog`: Dialog extraction
 * - `pipeline`: Runs the stages in sequence
 * - `document`: Output document model
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod pipeline;
pub mod script;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{DialogDocument, Message};
pub use errors::{AppError, ConfigError, ScriptError};
pub use pipeline::{DialogPipeline, Extraction, ExtractionSummary};
pub use script::{CharacterRegistry, LabelIndex, ScriptLine, ScriptSource};
