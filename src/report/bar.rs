use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::ReportError;
use crate::model::category::Category;
use crate::model::render_config::{BarPalette, RenderConfig};
use crate::report::{format_percent, palette_color, rgb, slot_label, top_down_slot};

/// Horizontal accuracy bars, one per category in the given order, values in percent.
pub fn render_accuracy_bars(
    out_path: &Path,
    title: &str,
    bars: &[(Category, f64)],
    palette: BarPalette,
    config: &RenderConfig,
) -> Result<(), ReportError> {
    draw_accuracy_bars(out_path, title, bars, palette, config)
        .map_err(|e| ReportError::render(out_path, e))
}

fn draw_accuracy_bars(
    out_path: &Path,
    title: &str,
    bars: &[(Category, f64)],
    palette: BarPalette,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let font = config.font_family.as_str();
    let n = bars.len().max(1);
    let labels: Vec<&str> = bars.iter().map(|(c, _)| c.name()).collect();

    let root = BitMapBackend::new(out_path, config.bar_size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font, config.title_font_size))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(190)
        .build_cartesian_2d(0.0..config.bar_x_max, (0..n as i32 - 1).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Accuracy (%)")
        .y_desc("Expected result")
        .axis_desc_style((font, config.axis_font_size))
        .label_style((font, config.label_font_size))
        .y_labels(n)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(slot) => slot_label(&labels, *slot),
            _ => String::new(),
        })
        .draw()?;

    let annotation = TextStyle::from((font, config.annotation_font_size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (idx, (_, pct)) in bars.iter().enumerate() {
        let slot = top_down_slot(idx, n);
        let color = rgb(palette_color(palette, idx, n));
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(slot)),
                (*pct, SegmentValue::Exact(slot + 1)),
            ],
            color.filled(),
        );
        bar.set_margin(10, 10, 0, 0);
        chart.draw_series(std::iter::once(bar))?;
        chart.draw_series(std::iter::once(Text::new(
            format_percent(*pct),
            (*pct + 1.0, SegmentValue::CenterOf(slot)),
            annotation.clone(),
        )))?;
    }

    root.present()?;
    Ok(())
}
