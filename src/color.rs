//! Deterministic color sequences for strokes and stroke groups

use crate::config::{ColorMode, ColorizerConfig};

/// Conjugate of the golden ratio, used as the hue step in contrast mode
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Convert an HSV color into an `#rrggbb` hex code
///
/// Hues outside `[0, 1)` wrap around the color wheel. Channels are scaled to
/// 0..=255 and truncated.
pub fn hsv_to_rgb_hex(h: f64, s: f64, v: f64) -> String {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

fn channel(c: f64) -> u8 {
    (c * 255.0) as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Hue of the `index`-th of `count` colors
fn hue(mode: ColorMode, index: usize, count: usize) -> f64 {
    match mode {
        ColorMode::Spectrum => index as f64 / count as f64,
        ColorMode::Contrast => index as f64 * GOLDEN_RATIO_CONJUGATE,
    }
}

/// Color of the `index`-th of `count` items, as a hex code
///
/// `index` must be below `count`.
pub fn color_at(index: usize, count: usize, config: &ColorizerConfig) -> String {
    debug_assert!(index < count);
    hex_color(config.mode, config.saturation, config.value, index, count)
}

fn hex_color(mode: ColorMode, saturation: f64, value: f64, index: usize, count: usize) -> String {
    hsv_to_rgb_hex(hue(mode, index, count), saturation, value)
}

/// Iterator over exactly `count` colors
#[derive(Debug, Clone)]
pub struct ColorSequence {
    mode: ColorMode,
    saturation: f64,
    value: f64,
    count: usize,
    next: usize,
}

impl Iterator for ColorSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let color = hex_color(self.mode, self.saturation, self.value, self.next, self.count);
        self.next += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColorSequence {}

/// Generate `count` colors using the mode, saturation and value of `config`
pub fn generate(count: usize, config: &ColorizerConfig) -> ColorSequence {
    ColorSequence {
        mode: config.mode,
        saturation: config.saturation,
        value: config.value,
        count,
        next: 0,
    }
}
