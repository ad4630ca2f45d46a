//! Lookup of KanjiVG source diagrams
//!
//! KanjiVG stores one SVG per character, named after the five digit
//! lowercase hex code point, with an optional `-Variant` suffix:
//! `06f22.svg`, `05b57-Kaisho.svg`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when looking up a source diagram
#[derive(Debug, Error)]
pub enum KanjiVgError {
    /// No diagram exists for this character and variant
    #[error("no KanjiVG data for character {character:?} variant {variant:?}")]
    InvalidCharacter { character: String, variant: String },

    /// A filename that does not follow the KanjiVG naming scheme
    #[error("not a KanjiVG filename: {name}")]
    InvalidFilename { name: String },

    /// Any other problem reading the data directory
    #[error("error reading KanjiVG data: {0}")]
    Io(#[from] io::Error),
}

impl KanjiVgError {
    fn invalid(character: &str, variant: &str) -> Self {
        Self::InvalidCharacter {
            character: character.to_string(),
            variant: variant.to_string(),
        }
    }
}

/// One source diagram
#[derive(Debug, Clone, PartialEq)]
pub struct KanjiVg {
    pub character: char,
    /// Empty when the diagram is the default form
    pub variant: String,
    /// Raw SVG text
    pub svg: String,
}

impl KanjiVg {
    /// Filename KanjiVG uses: hex code point plus optional variant
    pub fn ascii_filename(&self) -> String {
        ascii_filename(self.character, &self.variant)
    }

    /// Filename built from the character itself plus optional variant
    pub fn character_filename(&self) -> String {
        if self.variant.is_empty() {
            format!("{}.svg", self.character)
        } else {
            format!("{}-{}.svg", self.character, self.variant)
        }
    }
}

fn ascii_filename(character: char, variant: &str) -> String {
    let code = format!("{:05x}", u32::from(character));
    if variant.is_empty() {
        format!("{code}.svg")
    } else {
        format!("{code}-{variant}.svg")
    }
}

/// Split a KanjiVG filename into its character and variant
pub fn parse_filename(name: &str) -> Result<(char, String), KanjiVgError> {
    let invalid = || KanjiVgError::InvalidFilename {
        name: name.to_string(),
    };
    let stem = name.strip_suffix(".svg").ok_or_else(invalid)?;
    let (code, variant) = stem.split_once('-').unwrap_or((stem, ""));
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let character = u32::from_str_radix(code, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(invalid)?;
    Ok((character, variant.to_string()))
}

/// A directory of KanjiVG diagrams
#[derive(Debug, Clone)]
pub struct KanjiVgSource {
    directory: PathBuf,
}

impl KanjiVgSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Load the diagram for `character` (exactly one character) and `variant`
    ///
    /// A missing file is reported as [`KanjiVgError::InvalidCharacter`]; any
    /// other I/O problem is passed through.
    pub fn load(&self, character: &str, variant: &str) -> Result<KanjiVg, KanjiVgError> {
        let mut chars = character.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(KanjiVgError::invalid(character, variant));
        };
        let path = self.directory.join(ascii_filename(c, variant));
        match std::fs::read_to_string(&path) {
            Ok(svg) => Ok(KanjiVg {
                character: c,
                variant: variant.to_string(),
                svg,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(KanjiVgError::invalid(character, variant))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Load the diagram stored under a KanjiVG filename
    pub fn load_filename(&self, name: &str) -> Result<KanjiVg, KanjiVgError> {
        let (character, variant) = parse_filename(name)?;
        self.load(&character.to_string(), &variant)
    }

    /// Every diagram in the directory, sorted by filename
    pub fn load_all(&self) -> Result<Vec<KanjiVg>, KanjiVgError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.directory)? {
            let name = entry?.file_name();
            if let Some(name) = name.to_str().filter(|n| n.ends_with(".svg")) {
                names.push(name.to_string());
            }
        }
        names.sort();
        names.iter().map(|name| self.load_filename(name)).collect()
    }
}

/// Split a `--characters` argument into (character, variant) requests
///
/// With a comma and more than one character the list is comma separated,
/// otherwise every character is its own entry. An entry `X-Variant` asks for
/// a variant; the split happens at the first `-`.
pub fn parse_character_list(list: &str) -> Vec<(String, String)> {
    let entries: Vec<String> = if list.contains(',') && list.chars().count() > 1 {
        list.split(',').map(str::to_string).collect()
    } else {
        list.chars().map(String::from).collect()
    };
    entries
        .into_iter()
        .map(|entry| match entry.split_once('-') {
            Some((character, variant)) => (character.to_string(), variant.to_string()),
            None => (entry, String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanji(character: char, variant: &str) -> KanjiVg {
        KanjiVg {
            character,
            variant: variant.to_string(),
            svg: String::new(),
        }
    }

    fn source_with(files: &[&str]) -> (tempfile::TempDir, KanjiVgSource) {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            std::fs::write(dir.path().join(name), format!("<svg id=\"{name}\"/>")).unwrap();
        }
        let source = KanjiVgSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn test_ascii_filename() {
        assert_eq!(kanji('あ', "").ascii_filename(), "03042.svg");
        assert_eq!(kanji('字', "Kaisho").ascii_filename(), "05b57-Kaisho.svg");
        assert_eq!(kanji('𦥑', "").ascii_filename(), "26951.svg");
        assert_eq!(kanji('a', "").ascii_filename(), "00061.svg");
    }

    #[test]
    fn test_character_filename() {
        assert_eq!(kanji('あ', "").character_filename(), "あ.svg");
        assert_eq!(kanji('字', "Kaisho").character_filename(), "字-Kaisho.svg");
    }

    #[test]
    fn test_parse_filename() {
        assert_eq!(parse_filename("06f22.svg").unwrap(), ('漢', String::new()));
        assert_eq!(
            parse_filename("05b57-Kaisho.svg").unwrap(),
            ('字', "Kaisho".to_string())
        );
        assert_eq!(parse_filename("26951.svg").unwrap(), ('𦥑', String::new()));
    }

    #[test]
    fn test_parse_filename_rejects_bad_names() {
        assert!(parse_filename("5b57").is_err());
        assert!(parse_filename("zz.svg").is_err());
        assert!(parse_filename(".svg").is_err());
        assert!(parse_filename("d800.svg").is_err());
    }

    #[test]
    fn test_load_existing() {
        let (_dir, source) = source_with(&["00061.svg", "05b57-Kaisho.svg"]);
        let a = source.load("a", "").unwrap();
        assert_eq!(a.character, 'a');
        assert_eq!(a.variant, "");
        assert!(a.svg.contains("00061.svg"));

        let kaisho = source.load("字", "Kaisho").unwrap();
        assert_eq!(kaisho.variant, "Kaisho");
        assert!(kaisho.svg.contains("05b57-Kaisho.svg"));
    }

    #[test]
    fn test_load_missing_is_invalid_character() {
        let (_dir, source) = source_with(&["05b57-Kaisho.svg"]);
        for (character, variant) in [("Л", ""), ("字", "gobbledygook"), ("字", ""), ("", "")] {
            match source.load(character, variant) {
                Err(KanjiVgError::InvalidCharacter {
                    character: c,
                    variant: v,
                }) => {
                    assert_eq!(c, character);
                    assert_eq!(v, variant);
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_load_multiple_characters_is_invalid() {
        let (_dir, source) = source_with(&["06f22.svg", "05b57.svg"]);
        assert!(matches!(
            source.load("漢字", ""),
            Err(KanjiVgError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_error_message_names_character_and_variant() {
        let err = KanjiVgError::invalid("字", "gobbledygook");
        let message = err.to_string();
        assert!(message.contains("\"字\""));
        assert!(message.contains("\"gobbledygook\""));
    }

    #[test]
    fn test_load_all_sorted() {
        let (dir, source) = source_with(&["06f22.svg", "00061.svg", "05b57-Kaisho.svg"]);
        std::fs::write(dir.path().join("README"), "not a diagram").unwrap();
        let all = source.load_all().unwrap();
        let names: Vec<_> = all.iter().map(KanjiVg::ascii_filename).collect();
        assert_eq!(names, vec!["00061.svg", "05b57-Kaisho.svg", "06f22.svg"]);
    }

    #[test]
    fn test_load_all_missing_directory() {
        let source = KanjiVgSource::new("/nonexistent/kanjivg/kanji");
        assert!(matches!(source.load_all(), Err(KanjiVgError::Io(_))));
    }

    #[test]
    fn test_parse_character_list_per_character() {
        assert_eq!(
            parse_character_list("漢字"),
            vec![
                ("漢".to_string(), String::new()),
                ("字".to_string(), String::new())
            ]
        );
    }

    #[test]
    fn test_parse_character_list_with_variants() {
        assert_eq!(
            parse_character_list("字-Kaisho,漢"),
            vec![
                ("字".to_string(), "Kaisho".to_string()),
                ("漢".to_string(), String::new())
            ]
        );
    }

    #[test]
    fn test_parse_character_list_single_comma() {
        assert_eq!(
            parse_character_list(","),
            vec![(",".to_string(), String::new())]
        );
    }
}
