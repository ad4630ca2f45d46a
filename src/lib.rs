//! Kanji Colorize - colored stroke order diagrams from KanjiVG data
//!
//! This library recolors, resizes and annotates KanjiVG stroke order
//! diagrams: every stroke (or every stroke group) and its number label get a
//! color from a deterministic sequence.
//!
//! # Example
//!
//! ```rust
//! use kanji_colorize::{transform, ColorizerConfig, ColorMode};
//!
//! let source = r#"<!-- license -->
//! <svg width="109" height="109" viewBox="0 0 109 109">
//!   <path d="M10,10"/>
//!   <path d="M20,20"/>
//!   <text>1</text>
//!   <text>2</text>
//! </svg>"#;
//!
//! let config = ColorizerConfig::new().with_mode(ColorMode::Contrast).with_image_size(218);
//! let svg = transform(source, &config).unwrap();
//!
//! assert!(svg.contains(r#"width="218""#));
//! assert!(svg.contains("scale(2.0,2.0)"));
//! ```

pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod kanjivg;
pub mod output;
pub mod transform;

pub use color::{generate, hsv_to_rgb_hex, ColorSequence};
pub use config::{ColorMode, ColorizerConfig, ConfigError};
pub use document::{Document, Element, Node};
pub use error::DocumentError;
pub use kanjivg::{parse_character_list, KanjiVg, KanjiVgError, KanjiVgSource};
pub use output::{FilenameMode, OutputDirectory};
pub use transform::{transform, transform_document};

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while colorizing diagrams
#[derive(Debug, Error)]
pub enum ColorizeError {
    /// The source diagram could not be read as a document
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// The source diagram could not be found or read
    #[error(transparent)]
    Source(#[from] KanjiVgError),

    /// Writing an output file failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Colorizes diagrams from a KanjiVG directory with one configuration
#[derive(Debug, Clone)]
pub struct Colorizer {
    /// Settings applied to every diagram
    pub config: ColorizerConfig,
    /// Where source diagrams are read from
    pub source: KanjiVgSource,
    /// How output files are named
    pub filename_mode: FilenameMode,
}

impl Colorizer {
    /// Create a colorizer with character filenames
    pub fn new(config: ColorizerConfig, source: KanjiVgSource) -> Self {
        Self {
            config,
            source,
            filename_mode: FilenameMode::default(),
        }
    }

    /// Set how output files are named
    pub fn with_filename_mode(mut self, mode: FilenameMode) -> Self {
        self.filename_mode = mode;
        self
    }

    /// Colored diagram for a single character
    pub fn colored_svg(&self, character: &str) -> Result<String, ColorizeError> {
        let kanji = self.source.load(character, "")?;
        Ok(transform(&kanji.svg, &self.config)?)
    }

    /// Colored diagram for an already loaded source
    pub fn colorize(&self, kanji: &KanjiVg) -> Result<String, ColorizeError> {
        Ok(transform(&kanji.svg, &self.config)?)
    }

    /// Colorize the requested characters (or every diagram when `None`) into `output`
    ///
    /// Requests without source data are skipped. Returns the paths written.
    pub fn write_all(
        &self,
        characters: Option<&str>,
        output: &OutputDirectory,
    ) -> Result<Vec<PathBuf>, ColorizeError> {
        output.ensure()?;

        let diagrams = match characters {
            None => self.source.load_all()?,
            Some(list) => {
                let mut diagrams = Vec::new();
                for (character, variant) in parse_character_list(list) {
                    match self.source.load(&character, &variant) {
                        Ok(kanji) => diagrams.push(kanji),
                        Err(KanjiVgError::InvalidCharacter { .. }) => {
                            debug!(%character, %variant, "skipping character without data");
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                diagrams
            }
        };

        let mut written = Vec::with_capacity(diagrams.len());
        for kanji in &diagrams {
            let svg = self.colorize(kanji)?;
            written.push(output.write(&self.filename_mode.filename(kanji), &svg)?);
        }
        info!(count = written.len(), directory = %output.path().display(), "wrote diagrams");
        Ok(written)
    }
}

/// Colorize a single character from `source` with `config`
pub fn colorize(
    character: &str,
    config: &ColorizerConfig,
    source: &KanjiVgSource,
) -> Result<String, ColorizeError> {
    Colorizer::new(config.clone(), source.clone()).colored_svg(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGRAM: &str = "<!--\nCopyright\n-->\n<svg width=\"109\" height=\"109\" viewBox=\"0 0 109 109\"><path/><text>1</text></svg>\n";

    fn source() -> (tempfile::TempDir, KanjiVgSource) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00061.svg"), DIAGRAM).unwrap();
        std::fs::write(dir.path().join("03042.svg"), DIAGRAM).unwrap();
        std::fs::write(dir.path().join("00062.svg"), "").unwrap();
        let source = KanjiVgSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn test_colored_svg() {
        let (_dir, source) = source();
        let svg = colorize("a", &ColorizerConfig::default(), &source).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains("has been modified"));
        assert!(svg.contains("stroke: #bf0909;"));
    }

    #[test]
    fn test_colored_svg_unknown_character() {
        let (_dir, source) = source();
        let result = colorize("Л", &ColorizerConfig::default(), &source);
        assert!(matches!(
            result,
            Err(ColorizeError::Source(KanjiVgError::InvalidCharacter { .. }))
        ));
    }

    #[test]
    fn test_empty_source_gives_empty_output() {
        let (_dir, source) = source();
        assert_eq!(
            colorize("b", &ColorizerConfig::default(), &source).unwrap(),
            ""
        );
    }

    #[test]
    fn test_write_all_skips_invalid() {
        let (_dir, source) = source();
        let out = tempfile::tempdir().unwrap();
        let output = OutputDirectory::new(out.path().join("colorized"));
        let colorizer = Colorizer::new(ColorizerConfig::default(), source);

        let written = colorizer.write_all(Some("Лaあ"), &output).unwrap();
        assert_eq!(
            written,
            vec![output.path().join("a.svg"), output.path().join("あ.svg")]
        );
    }

    #[test]
    fn test_write_all_code_filenames() {
        let (_dir, source) = source();
        let out = tempfile::tempdir().unwrap();
        let output = OutputDirectory::new(out.path());
        let colorizer = Colorizer::new(ColorizerConfig::default(), source)
            .with_filename_mode(FilenameMode::Code);

        let written = colorizer.write_all(None, &output).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["00061.svg", "00062.svg", "03042.svg"]);
    }
}
