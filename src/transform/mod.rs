//! Stroke order diagram transformation pipeline
//!
//! Turns a source diagram into a colored, resized and annotated one:
//!
//! 1. parse the text into a [`Document`]
//! 2. drop whitespace-only text nodes everywhere
//! 3. color strokes, or stroke groups in group mode
//! 4. optionally add the guide grid
//! 5. resize with one wrapping scale transform
//! 6. prepend the provenance note to the copyright comment
//! 7. serialize

pub mod coloring;
pub mod copyright;
pub mod grid;
pub mod resize;

pub use coloring::{color_groups, color_strokes, is_stroke_group, GROUP_ATTRIBUTE};
pub use copyright::{annotate_copyright, provenance_note};
pub use grid::add_grid;
pub use resize::{resize, scale_ratio};

use tracing::debug;

use crate::config::ColorizerConfig;
use crate::document::Document;
use crate::error::DocumentError;

/// Width and height of the source diagrams' coordinate box
pub const SOURCE_SIZE: i32 = 109;

/// Position of the center guide lines in the source box
pub const SOURCE_CENTER: i32 = 55;

/// Transform source SVG text into the colored output document
///
/// An empty source is passed through as an empty result.
///
/// # Example
///
/// ```rust
/// use kanji_colorize::{transform, ColorizerConfig};
///
/// let source = "<!-- license --><svg width=\"109\" height=\"109\" viewBox=\"0 0 109 109\">\
///               <path d=\"M1,1\"/><text>1</text></svg>";
/// let svg = transform(source, &ColorizerConfig::default()).unwrap();
///
/// assert!(svg.starts_with("<?xml"));
/// assert!(svg.contains("stroke: #bf0909;"));
/// assert!(svg.contains("scaleTransform"));
/// ```
#[tracing::instrument(skip_all, fields(mode = %config.mode, group_mode = config.group_mode))]
pub fn transform(source: &str, config: &ColorizerConfig) -> Result<String, DocumentError> {
    if source.is_empty() {
        return Ok(String::new());
    }
    let mut document = Document::parse(source)?;
    transform_document(&mut document, config)?;
    Ok(document.to_pretty_string())
}

/// Apply every transformation stage to an already parsed document
pub fn transform_document(
    document: &mut Document,
    config: &ColorizerConfig,
) -> Result<(), DocumentError> {
    document.strip_whitespace_text();
    let svg = document.svg_mut()?;

    let colors = if config.group_mode {
        color_groups(svg, config)
    } else {
        color_strokes(svg, config)
    };

    if config.enable_grid {
        add_grid(svg, config);
    }

    resize(svg, config.image_size);
    debug!(colors, image_size = config.image_size, "transformed diagram");

    annotate_copyright(document, config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse, Node};

    const SOURCE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!--
Copyright (C) holder
-->
<svg xmlns="http://www.w3.org/2000/svg" width="109" height="109" viewBox="0 0 109 109">
  <g id="strokes">
    <path d="M1,1"/>
    <path d="M2,2"/>
  </g>
  <g id="numbers">
    <text>1</text>
    <text>2</text>
  </g>
</svg>
"#;

    #[test]
    fn test_empty_source_passthrough() {
        assert_eq!(transform("", &ColorizerConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_malformed_source_fails() {
        assert!(matches!(
            transform("<svg><g></svg>", &ColorizerConfig::default()),
            Err(DocumentError::Syntax { .. })
        ));
    }

    #[test]
    fn test_grid_with_huge_offset_still_transforms() {
        let config = ColorizerConfig::default()
            .with_grid(true)
            .with_grid_offset(i32::MAX / 2 + 1);
        let output = transform("<!-- c --><svg><path/></svg>", &config).unwrap();
        assert!(output.contains(r#"<g id="Grid">"#));
    }

    #[test]
    fn test_missing_svg_fails() {
        assert_eq!(
            transform("<html><path/></html>", &ColorizerConfig::default()),
            Err(DocumentError::MissingSvg)
        );
    }

    #[test]
    fn test_pipeline_structure() {
        let mut doc = parse(SOURCE).unwrap();
        transform_document(&mut doc, &ColorizerConfig::default()).unwrap();

        let svg = doc.root().unwrap();
        assert_eq!(svg.attribute("width"), Some("327"));
        assert_eq!(svg.children.len(), 1);
        let scale = svg.child_elements().next().unwrap();
        assert_eq!(scale.attribute("id"), Some("scaleTransform"));
        assert_eq!(scale.attribute("transform"), Some("scale(3.0,3.0)"));
        assert!(!scale
            .descendants()
            .flat_map(|e| e.children.iter())
            .any(|n| matches!(n, Node::Text(t) if t.trim().is_empty())));

        match &doc.children[0] {
            Node::Comment(text) => assert!(text.starts_with("This file has been modified")),
            other => panic!("expected comment, got {:?}", other),
        }
    }

    #[test]
    fn test_grid_is_scaled_with_strokes() {
        let mut doc = parse(SOURCE).unwrap();
        let config = ColorizerConfig::default().with_grid(true);
        transform_document(&mut doc, &config).unwrap();
        let scale = doc.root().unwrap().child_elements().next().unwrap();
        let ids: Vec<_> = scale
            .child_elements()
            .map(|e| e.attribute("id").unwrap())
            .collect();
        assert_eq!(ids, vec!["Grid", "strokes", "numbers"]);
    }

    #[test]
    fn test_group_mode_without_groups_leaves_strokes_plain() {
        let mut doc = parse(SOURCE).unwrap();
        let config = ColorizerConfig::default().with_group_mode(true);
        transform_document(&mut doc, &config).unwrap();
        let svg = doc.root().unwrap();
        assert!(svg
            .elements_by_name("path")
            .all(|p| !p.has_attribute("style")));
    }
}
