/*!
 * Common test utilities for the rpydialog test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;
use rpydialog::script::ScriptLine;

/// Routes library logs to the test output; safe to call more than once
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Turns literal lines into detached script lines
pub fn lines(texts: &[&str]) -> Vec<ScriptLine> {
    texts.iter().map(|text| ScriptLine::detached(*text)).collect()
}

/// A small but complete script with definitions, labels, menus and narration
pub const SAMPLE_SCRIPT: &str = r##"define e = Character('Eileen', color="#c8ffc8")
define m = Character('Me')
define config.rollback = True
image bg room = "room.png"

label start:
    scene bg room
    show eileen happy
    "It was a quiet morning."
e "Good morning!"
m "Morning, Eileen."
    menu:
        "Stay":
            jump stay
        "Leave":
            jump leave

label stay:
e "Glad you stayed."
$ score += 1
"The end."
"##;

/// Writes the sample script into `dir` as `script.rpy`
pub fn create_sample_script(dir: &Path) -> Result<PathBuf> {
    create_test_file(dir, "script.rpy", SAMPLE_SCRIPT)
}
