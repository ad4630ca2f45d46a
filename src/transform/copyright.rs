//! Provenance note added to the license header of every output diagram

use tracing::warn;

use crate::config::ColorizerConfig;
use crate::document::Document;

/// Where the program that modified the diagram can be found
pub const REPOSITORY: &str = "https://github.com/Darkclainer/kanji-colorize";

/// The project [`REPOSITORY`] is forked from
pub const UPSTREAM_REPOSITORY: &str = "https://github.com/cayennes/kanji-colorize";

/// Text prepended to the original copyright comment
pub fn provenance_note(config: &ColorizerConfig) -> String {
    format!(
        "This file has been modified from the original version by the kanji-colorize
program (available at {REPOSITORY},
that is a fork of {UPSTREAM_REPOSITORY}) with these
settings:
    mode: {}
    saturation: {:?}
    value: {:?}
    image_size: {}
It remains under a Creative Commons-Attribution-Share Alike 3.0 License.

The original SVG has the following copyright:

",
        config.mode, config.saturation, config.value, config.image_size
    )
}

/// Prepend the provenance note to the first top-level comment
///
/// Returns false, leaving the document untouched, when there is no such
/// comment.
pub fn annotate_copyright(document: &mut Document, config: &ColorizerConfig) -> bool {
    match document.first_comment_mut() {
        Some(comment) => {
            comment.insert_str(0, &provenance_note(config));
            true
        }
        None => {
            warn!("document has no copyright comment to annotate");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use crate::document::parse;

    const SOURCE: &str = "<!--\nCopyright (C) copyright holder (etc.)\n-->\n<svg></svg>\n";

    #[test]
    fn test_note_lists_settings() {
        let note = provenance_note(&ColorizerConfig::default());
        assert!(note.contains("mode: spectrum\n"));
        assert!(note.contains("saturation: 0.95\n"));
        assert!(note.contains("value: 0.75\n"));
        assert!(note.contains("image_size: 327\n"));
        assert!(note.contains(REPOSITORY));
        assert!(note.contains(UPSTREAM_REPOSITORY));
        assert!(!note.contains("--"));
    }

    #[test]
    fn test_note_credits_fork_and_upstream() {
        let note = provenance_note(&ColorizerConfig::default());
        let lines: Vec<_> = note.lines().take(3).collect();
        assert_eq!(
            lines,
            vec![
                "This file has been modified from the original version by the kanji-colorize",
                "program (available at https://github.com/Darkclainer/kanji-colorize,",
                "that is a fork of https://github.com/cayennes/kanji-colorize) with these",
            ]
        );
    }

    #[test]
    fn test_whole_number_settings_keep_decimal_point() {
        let config = ColorizerConfig::default()
            .with_saturation(1.0)
            .with_value(0.0);
        let note = provenance_note(&config);
        assert!(note.contains("saturation: 1.0\n"));
        assert!(note.contains("value: 0.0\n"));
    }

    #[test]
    fn test_annotate_prepends() {
        for mode in [ColorMode::Spectrum, ColorMode::Contrast] {
            let config = ColorizerConfig::default().with_mode(mode);
            let mut doc = parse(SOURCE).unwrap();
            assert!(annotate_copyright(&mut doc, &config));
            let comment = doc.first_comment_mut().unwrap().clone();
            assert!(comment.starts_with("This file has been modified"));
            assert!(comment.ends_with("\nCopyright (C) copyright holder (etc.)\n"));
            assert_eq!(comment.matches("This file has been modified").count(), 1);
            assert_eq!(comment.matches(&mode.to_string()).count(), 1);
        }
    }

    #[test]
    fn test_annotate_twice_stacks_notes() {
        let config = ColorizerConfig::default();
        let mut doc = parse(SOURCE).unwrap();
        annotate_copyright(&mut doc, &config);
        annotate_copyright(&mut doc, &config);
        let comment = doc.first_comment_mut().unwrap();
        assert_eq!(comment.matches("This file has been modified").count(), 2);
        assert!(comment.ends_with("copyright holder (etc.)\n"));
    }

    #[test]
    fn test_annotate_without_comment_is_noop() {
        let mut doc = parse("<svg><!-- inner --></svg>").unwrap();
        let before = doc.clone();
        assert!(!annotate_copyright(&mut doc, &ColorizerConfig::default()));
        assert_eq!(doc, before);
    }
}
