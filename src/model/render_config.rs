/// Cosmetic parameters for chart rendering. Passed to every renderer
/// explicitly instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub font_family: String,
    pub bar_size: (u32, u32),
    pub heatmap_size: (u32, u32),
    pub title_font_size: u32,
    pub axis_font_size: u32,
    pub label_font_size: u32,
    pub annotation_font_size: u32,
    pub bar_x_max: f64,
    pub strict_palette: BarPalette,
    pub loose_palette: BarPalette,
    pub heatmap_low: (u8, u8, u8),
    pub heatmap_mid: (u8, u8, u8),
    pub heatmap_high: (u8, u8, u8),
}

/// Bar colours are interpolated from `start` to `end` across the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPalette {
    pub start: (u8, u8, u8),
    pub end: (u8, u8, u8),
}

impl RenderConfig {
    pub fn default_v1() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            bar_size: (1000, 600),
            heatmap_size: (1200, 800),
            title_font_size: 28,
            axis_font_size: 18,
            label_font_size: 15,
            annotation_font_size: 15,
            bar_x_max: 105.0,
            // viridis endpoints
            strict_palette: BarPalette {
                start: (68, 1, 84),
                end: (94, 201, 98),
            },
            // plasma endpoints
            loose_palette: BarPalette {
                start: (13, 8, 135),
                end: (240, 249, 33),
            },
            heatmap_low: (255, 255, 217),
            heatmap_mid: (65, 182, 196),
            heatmap_high: (8, 29, 88),
        }
    }

    pub fn with_font(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }
}
