//! Resize a diagram by wrapping its content in a single scale transform

use super::SOURCE_SIZE;
use crate::document::Element;

/// Id of the synthetic group that carries the scale transform
pub const SCALE_GROUP_ID: &str = "scaleTransform";

/// Scale factor from the 109x109 source box to `image_size`
pub fn scale_ratio(image_size: u32) -> f64 {
    f64::from(image_size) / f64::from(SOURCE_SIZE)
}

/// Set the size of `svg` to `image_size` and scale its content to match
///
/// All existing children move, in order, into one new group carrying
/// `transform="scale(r,r)"`, so no coordinate inside the diagram is touched.
pub fn resize(svg: &mut Element, image_size: u32) {
    let ratio = scale_ratio(image_size);
    let size = image_size.to_string();
    svg.set_attribute("width", size.as_str());
    svg.set_attribute("height", size.as_str());
    svg.set_attribute("viewBox", format!("0 0 {size} {size}"));

    let mut scale = Element::new("g")
        .with_attribute("id", SCALE_GROUP_ID)
        .with_attribute("transform", format!("scale({ratio:?},{ratio:?})"));
    scale.children = svg.take_children();
    svg.append_child(scale);
}
