use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::pipeline::{DialogPipeline, Extraction, ExtractionSummary};
use crate::script::ScriptSource;

// @module: Application controller for dialog extraction

/// Main application controller for dialog extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(AppError::from)
            .context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Configuration the controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the main workflow: read scripts, extract dialog, write the document
    pub fn run(&self, input_dir: &Path) -> Result<ExtractionSummary> {
        let start_time = std::time::Instant::now();

        let extraction = self.extract(input_dir)?;
        self.write_document(&extraction, &self.config.output)?;

        info!("Parsing finished: {}", extraction.summary);
        info!(
            "Successfully wrote to {:?} in {:.2?}.",
            self.config.output,
            start_time.elapsed()
        );

        Ok(extraction.summary)
    }

    /// Read every script under `input_dir` and run the pipeline, without writing
    pub fn extract(&self, input_dir: &Path) -> Result<Extraction> {
        let files = FileManager::find_scripts(
            input_dir,
            self.config.normalized_extension(),
            self.config.recursive,
        )?;

        if files.is_empty() {
            warn!(
                "No .{} files found in {:?}",
                self.config.normalized_extension(),
                input_dir
            );
        } else {
            debug!("Found {} script file(s)", files.len());
        }

        let sources = self.read_sources(&files)?;
        let pipeline = DialogPipeline::new(self.config.narrator.clone());
        let extraction = pipeline
            .run(&sources)
            .map_err(AppError::from)
            .context("Dialog extraction failed")?;

        Ok(extraction)
    }

    /// Read all files eagerly, in order, with a progress bar
    fn read_sources(&self, files: &[PathBuf]) -> Result<Vec<ScriptSource>> {
        let progress_bar = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            if let Some(name) = path.file_name() {
                progress_bar.set_message(name.to_string_lossy().to_string());
            }
            sources.push(FileManager::read_script(path)?);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        Ok(sources)
    }

    /// Serialize the document and write it to `output`
    pub fn write_document(&self, extraction: &Extraction, output: &Path) -> Result<()> {
        let json = extraction.document.to_json(self.config.pretty)?;
        FileManager::write_to_file(output, &json)
            .with_context(|| format!("Failed to write dialog document: {:?}", output))
    }
}
