pub mod bar;
pub mod heatmap;

use plotters::style::RGBColor;

use crate::model::render_config::{BarPalette, RenderConfig};

/// Pixels between the plot edge and the start of a rotated axis label.
pub const LABEL_GAP: i32 = 8;

pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

pub fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

pub fn rgb(c: (u8, u8, u8)) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Colour of bar `idx` out of `n`, spread evenly over the palette.
pub fn palette_color(palette: BarPalette, idx: usize, n: usize) -> (u8, u8, u8) {
    if n <= 1 {
        return palette.start;
    }
    lerp_rgb(palette.start, palette.end, idx as f64 / (n - 1) as f64)
}

/// Three-stop ramp; `t` is count / max count.
pub fn heat_color(config: &RenderConfig, t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 {
        lerp_rgb(config.heatmap_low, config.heatmap_mid, t * 2.0)
    } else {
        lerp_rgb(config.heatmap_mid, config.heatmap_high, (t - 0.5) * 2.0)
    }
}

pub fn is_dark(c: (u8, u8, u8)) -> bool {
    let luma = 0.299 * c.0 as f64 + 0.587 * c.1 as f64 + 0.114 * c.2 as f64;
    luma < 128.0
}

/// Segment index for item `idx` so that the first item is drawn at the top.
pub fn top_down_slot(idx: usize, n: usize) -> i32 {
    (n - 1 - idx) as i32
}

pub fn slot_label<S: AsRef<str>>(labels: &[S], slot: i32) -> String {
    let n = labels.len() as i32;
    if slot < 0 || slot >= n {
        return String::new();
    }
    labels[(n - 1 - slot) as usize].as_ref().to_string()
}

/// Height of an x label area holding labels rotated a quarter turn, plus the
/// axis description underneath them.
pub fn rotated_label_area(widest_label: u32, desc_font_size: u32) -> u32 {
    widest_label + LABEL_GAP as u32 + 2 * desc_font_size + 12
}

/// Colour bar ticks: zero, midpoint and maximum, without repeats.
pub fn legend_ticks(max_count: u64) -> Vec<u64> {
    let mut ticks = vec![0, max_count / 2, max_count];
    ticks.dedup();
    ticks
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
