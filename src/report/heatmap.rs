use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::ReportError;
use crate::model::confusion::ConfusionMatrix;
use crate::model::render_config::RenderConfig;
use crate::report::{
    LABEL_GAP, heat_color, is_dark, legend_ticks, rgb, rotated_label_area, slot_label,
    top_down_slot,
};

/// Right-hand space reserved for the count colour bar.
const LEGEND_WIDTH: u32 = 140;
const LEGEND_STEPS: i32 = 64;

pub fn render_distribution_heatmap(
    out_path: &Path,
    title: &str,
    matrix: &ConfusionMatrix,
    config: &RenderConfig,
) -> Result<(), ReportError> {
    draw_distribution_heatmap(out_path, title, matrix, config)
        .map_err(|e| ReportError::render(out_path, e))
}

fn draw_distribution_heatmap(
    out_path: &Path,
    title: &str,
    matrix: &ConfusionMatrix,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let font = config.font_family.as_str();
    let n_rows = matrix.rows.len().max(1);
    let n_cols = matrix.columns.len().max(1);
    let row_labels: Vec<&str> = matrix.rows.iter().map(|c| c.name()).collect();
    let max_count = matrix.max_count();
    let scale = max_count.max(1) as f64;

    let root = BitMapBackend::new(out_path, config.heatmap_size).into_drawing_area();
    root.fill(&WHITE)?;

    // Rotated labels run downwards from the tick, so the label area must be as
    // tall as the widest unrotated column name.
    let label_font = (font, config.label_font_size).into_font();
    let mut widest = 0u32;
    for name in &matrix.columns {
        let (w, _) = root.estimate_text_size(name, &TextStyle::from(label_font.clone()))?;
        widest = widest.max(w);
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font, config.title_font_size))
        .margin(20)
        .margin_right(LEGEND_WIDTH)
        .x_label_area_size(rotated_label_area(widest, config.axis_font_size))
        .y_label_area_size(190)
        .build_cartesian_2d(
            (0..n_cols as i32 - 1).into_segmented(),
            (0..n_rows as i32 - 1).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Actual response")
        .y_desc("Expected result")
        .axis_desc_style((font, config.axis_font_size))
        .label_style((font, config.label_font_size))
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(slot) => slot_label(&row_labels, *slot),
            _ => String::new(),
        })
        .draw()?;

    let column_label = TextStyle::from(label_font.transform(FontTransform::Rotate90))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (col, name) in matrix.columns.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(
            SegmentValue::CenterOf(col as i32),
            SegmentValue::Exact(0),
        ));
        root.draw(&Text::new(
            name.as_str(),
            (x, y + LABEL_GAP),
            column_label.clone(),
        ))?;
    }

    let light_text = TextStyle::from((font, config.annotation_font_size).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let dark_text = TextStyle::from((font, config.annotation_font_size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (r, counts) in matrix.counts.iter().enumerate() {
        let slot = top_down_slot(r, n_rows);
        for (c, &count) in counts.iter().enumerate() {
            let col = c as i32;
            let fill = heat_color(config, count as f64 / scale);
            let mut cell = Rectangle::new(
                [
                    (SegmentValue::Exact(col), SegmentValue::Exact(slot)),
                    (SegmentValue::Exact(col + 1), SegmentValue::Exact(slot + 1)),
                ],
                rgb(fill).filled(),
            );
            cell.set_margin(1, 1, 1, 1);
            chart.draw_series(std::iter::once(cell))?;

            let style = if is_dark(fill) { &light_text } else { &dark_text };
            chart.draw_series(std::iter::once(Text::new(
                count.to_string(),
                (SegmentValue::CenterOf(col), SegmentValue::CenterOf(slot)),
                style.clone(),
            )))?;
        }
    }

    // count colour bar, aligned with the plotting area
    let (x_range, y_range) = chart.plotting_area().get_pixel_range();
    let bar_x0 = x_range.end + 30;
    let bar_x1 = bar_x0 + 24;
    let bar_height = (y_range.end - y_range.start).max(1);
    for step in 0..LEGEND_STEPS {
        let y_bottom = y_range.end - bar_height * step / LEGEND_STEPS;
        let y_top = y_range.end - bar_height * (step + 1) / LEGEND_STEPS;
        let t = (step as f64 + 0.5) / LEGEND_STEPS as f64;
        root.draw(&Rectangle::new(
            [(bar_x0, y_top), (bar_x1, y_bottom)],
            rgb(heat_color(config, t)).filled(),
        ))?;
    }
    root.draw(&Rectangle::new(
        [(bar_x0, y_range.start), (bar_x1, y_range.end)],
        &BLACK,
    ))?;

    let tick_text = TextStyle::from((font, config.label_font_size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for tick in legend_ticks(max_count) {
        let y = y_range.end - (bar_height as f64 * tick as f64 / scale).round() as i32;
        root.draw(&PathElement::new(
            vec![(bar_x1, y), (bar_x1 + 4, y)],
            &BLACK,
        ))?;
        root.draw(&Text::new(
            tick.to_string(),
            (bar_x1 + 8, y),
            tick_text.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/heatmap.rs"]
mod tests;
