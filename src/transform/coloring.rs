//! Assign colors to strokes and their number labels

use tracing::debug;

use crate::color;
use crate::config::ColorizerConfig;
use crate::document::{Element, Node};

/// Attribute that marks a group as a semantic stroke group (e.g. a radical)
pub const GROUP_ATTRIBUTE: &str = "kvg:element";

fn stroke_style(color: &str) -> String {
    format!("stroke: {color};")
}

fn label_style(color: &str) -> String {
    format!("fill: {color};")
}

/// Color every stroke with its own color
///
/// The i-th path and the i-th text element (both in document order) share the
/// i-th color. Paths without a matching label are still colored; text
/// elements beyond the number of paths are left alone.
///
/// Returns the number of colors used.
pub fn color_strokes(svg: &mut Element, config: &ColorizerConfig) -> usize {
    let stroke_count = svg.elements_by_name("path").count();
    let colors: Vec<String> = color::generate(stroke_count, config).collect();

    let mut stroke_colors = colors.iter();
    svg.for_each_descendant_mut(&mut |element| {
        if element.name == "path" {
            if let Some(color) = stroke_colors.next() {
                element.set_style(stroke_style(color));
            }
        }
    });

    let labeled = color_labels(svg, &colors);
    debug!(strokes = stroke_count, labels = labeled, "colored strokes");
    stroke_count
}

/// Whether `element` is a stroke group with at least one direct path child
pub fn is_stroke_group(element: &Element) -> bool {
    element.name == "g"
        && element.has_attribute(GROUP_ATTRIBUTE)
        && element.direct_children_named("path").next().is_some()
}

/// Color every stroke group with its own color
///
/// Only the direct path children of a group take its color; paths inside a
/// nested group belong to that group if it qualifies itself. Labels are
/// handed out in document order, as many per group as it has direct paths.
///
/// Returns the number of colors used.
pub fn color_groups(svg: &mut Element, config: &ColorizerConfig) -> usize {
    let group_count = svg.descendants().filter(|e| is_stroke_group(e)).count();
    let mut colors = color::generate(group_count, config);
    let mut label_colors = Vec::new();

    svg.for_each_descendant_mut(&mut |element| {
        if !is_stroke_group(element) {
            return;
        }
        let Some(color) = colors.next() else {
            return;
        };
        for path in element
            .children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .filter(|child| child.name == "path")
        {
            path.set_style(stroke_style(&color));
            label_colors.push(color.clone());
        }
    });

    let labeled = color_labels(svg, &label_colors);
    debug!(groups = group_count, labels = labeled, "colored stroke groups");
    group_count
}

/// Give the i-th text element the i-th color as its fill
fn color_labels(svg: &mut Element, colors: &[String]) -> usize {
    let mut label_colors = colors.iter();
    let mut labeled = 0;
    svg.for_each_descendant_mut(&mut |element| {
        if element.name == "text" {
            if let Some(color) = label_colors.next() {
                element.set_style(label_style(color));
                labeled += 1;
            }
        }
    });
    labeled
}
