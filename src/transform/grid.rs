//! Dashed guide grid drawn underneath the strokes

use super::{SOURCE_CENTER, SOURCE_SIZE};
use crate::config::ColorizerConfig;
use crate::document::Element;

/// Id of the group holding the grid lines
pub const GRID_ID: &str = "Grid";

/// Insert the guide grid as the first child of `svg`
///
/// The grid is a vertical and a horizontal center line plus a bounding
/// square, all inset by `grid_offset` from the 109x109 source box.
pub fn add_grid(svg: &mut Element, config: &ColorizerConfig) {
    svg.insert_child(0, grid(config));
}

fn grid(config: &ColorizerConfig) -> Element {
    // Widened so any i32 offset stays in range
    let size = i64::from(SOURCE_SIZE);
    let center = i64::from(SOURCE_CENTER);
    let start = i64::from(config.grid_offset);
    let stop = size - start;
    let rect_size = size - start * 2;
    let line_style = format!(
        "stroke:{};stroke-width:0.5;stroke-dasharray:5,5;",
        config.grid_color
    );
    let rect_style = format!(
        "fill:transparent;stroke:{};stroke-width:0.5;",
        config.grid_color
    );

    Element::new("g")
        .with_attribute("id", GRID_ID)
        .with_child(line((center, start), (center, stop), &line_style))
        .with_child(line((start, center), (stop, center), &line_style))
        .with_child(
            Element::new("rect")
                .with_attribute("x", start.to_string())
                .with_attribute("y", start.to_string())
                .with_attribute("width", rect_size.to_string())
                .with_attribute("height", rect_size.to_string())
                .with_attribute("style", rect_style),
        )
}

fn line(from: (i64, i64), to: (i64, i64), style: &str) -> Element {
    Element::new("line")
        .with_attribute("x1", from.0.to_string())
        .with_attribute("y1", from.1.to_string())
        .with_attribute("x2", to.0.to_string())
        .with_attribute("y2", to.1.to_string())
        .with_attribute("style", style)
}
