// File: crates/bench-chart/src/export.rs
// Summary: Tight layout pass and headless PNG export using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::chart::{axis_block_height, BarChart, ChartLayout, RenderOptions};
use crate::error::{ChartError, Result};
use crate::text::{ApproxMetrics, TextMetrics, TextShaper};
use crate::types::{Insets, GAP, TICK_FONT, TICK_LEN, TITLE_FONT};

/// Smallest margins that keep every label of `chart` on the canvas.
pub fn tight_insets(chart: &BarChart, opts: &RenderOptions, metrics: &dyn TextMetrics) -> Insets {
    let pad = opts.pad;
    let tick_h = metrics.line_height(TICK_FONT);

    let category_w = chart
        .categories
        .iter()
        .map(|c| metrics.text_width(c, TICK_FONT))
        .fold(0.0, f32::max);
    let left = pad + category_w + GAP + TICK_LEN;

    let bottom = pad + axis_block_height(&chart.primary.axis, metrics);

    let mut top = pad + metrics.line_height(TITLE_FONT) + GAP;
    if let Some(secondary) = &chart.secondary {
        top += axis_block_height(&secondary.axis, metrics);
    }

    // Rotated primary labels stick out by half a line past the last tick.
    // Unrotated labels are nudged inward at layout time instead.
    let overhang = if chart.primary.axis.rotate_ticks { tick_h * 0.5 } else { 0.0 };
    let right = pad + overhang;

    Insets::new(left, right, top, bottom)
}

/// Lay out `chart` with tight margins, measuring text with the shaper or,
/// when labels are off, with font-independent metrics.
pub fn tight_layout(chart: &BarChart, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Result<ChartLayout> {
    let approx = ApproxMetrics::default();
    let metrics: &dyn TextMetrics = match shaper {
        Some(s) => s,
        None => &approx,
    };
    let insets = tight_insets(chart, opts, metrics);
    log::debug!("tight insets {insets:?} for {}x{} canvas", opts.width, opts.height);
    chart.layout(opts, insets, metrics)
}

/// Render the chart and encode it as PNG bytes.
pub fn render_to_png_bytes(chart: &BarChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let shaper = opts.draw_labels.then(TextShaper::new);
    let layout = tight_layout(chart, opts, shaper.as_ref())?;

    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| ChartError::render(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
    layout.paint(surface.canvas(), &opts.theme, shaper.as_ref());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::render("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`. The file is only touched
/// once encoding has succeeded.
pub fn render_to_png(chart: &BarChart, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
    }
    std::fs::write(path, &bytes).map_err(|e| ChartError::io(path, e))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
