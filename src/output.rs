//! Destination for colorized diagrams

use std::io;
use std::path::{Path, PathBuf};

use crate::kanjivg::KanjiVg;

/// How output files are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilenameMode {
    /// Use the character itself, e.g. `漢.svg`
    #[default]
    Character,
    /// Keep the KanjiVG code point name, e.g. `06f22.svg`
    Code,
}

impl FilenameMode {
    /// Output filename for a diagram
    pub fn filename(self, kanji: &KanjiVg) -> String {
        match self {
            FilenameMode::Character => kanji.character_filename(),
            FilenameMode::Code => kanji.ascii_filename(),
        }
    }
}

/// A directory that colorized diagrams are written into
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory if it does not exist yet
    pub fn ensure(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.path)
    }

    /// Write `contents` to `filename` inside the directory, returning the full path
    pub fn write(&self, filename: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path.join(filename);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
