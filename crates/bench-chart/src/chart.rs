// File: crates/bench-chart/src/chart.rs
// Summary: Horizontal bar chart model (single or dual metric), pixel layout, and Skia painting.

use skia_safe as skia;

use crate::axis::{Axis, AxisSide};
use crate::error::{ChartError, Result};
use crate::geometry::{clamp, RectF};
use crate::legend::{self, Legend, LegendAnchor, LegendEntry};
use crate::order::ChartSpec;
use crate::scale::{BandScale, ValueScale};
use crate::series::{
    BarPlacement, BarSeries, ChartMode, MetricColumns, PEAK_MEMORY_AXIS, PEAK_MEMORY_SERIES, THROUGHPUT_LABEL,
};
use crate::table::Dataset;
use crate::text::{Align, TextMetrics, TextShaper};
use crate::theme::{Theme, SECONDARY_ALPHA};
use crate::types::{Insets, GAP, HEIGHT, LABEL_FONT, LEGEND_FONT, PAD, TICK_FONT, TICK_LEN, TITLE_FONT, WIDTH};

/// Default chart title.
pub const TITLE: &str = "json generator benchmark";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Free space kept around all content by the tight layout pass.
    pub pad: f32,
    pub theme: Theme,
    /// Draw text. When off, layout uses approximate metrics so output is font independent.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, pad: PAD, theme: Theme::light(), draw_labels: true }
    }
}

/// A value axis together with the series measured against it.
#[derive(Clone, Debug)]
pub struct ValueAxisPanel {
    pub axis: Axis,
    pub series: BarSeries,
    /// The axis' own legend; taken away when legends are merged.
    pub legend: Option<Legend>,
}

impl ValueAxisPanel {
    fn new(axis: Axis, series: BarSeries) -> Self {
        let legend = Some(Legend::for_axis(&[&series]));
        Self { axis, series, legend }
    }
}

pub struct BarChart {
    pub title: String,
    /// Category labels by slot; slot 0 is the bottom of the plot.
    pub categories: Vec<String>,
    pub primary: ValueAxisPanel,
    pub secondary: Option<ValueAxisPanel>,
    /// Combined legend installed in dual mode.
    pub figure_legend: Option<Legend>,
}

impl BarChart {
    /// Build the chart for `dataset` in the order and mode given by `spec`.
    pub fn build(dataset: &Dataset, spec: &ChartSpec, title: impl Into<String>, theme: &Theme) -> Result<Self> {
        if dataset.is_empty() {
            return Err(ChartError::render("dataset is empty"));
        }
        if spec.rank_order.len() != dataset.len() {
            return Err(ChartError::render(format!(
                "rank order has {} entries for {} rows",
                spec.rank_order.len(),
                dataset.len()
            )));
        }
        if let Some(&bad) = spec.rank_order.iter().find(|&&i| i >= dataset.len()) {
            return Err(ChartError::render(format!("rank order refers to missing row {bad}")));
        }
        let columns = MetricColumns::select(dataset, spec)
            .ok_or_else(|| ChartError::render("dual-metric mode needs peak memory on every row"))?;

        let rows = dataset.rows();
        let categories = spec.rank_order.iter().map(|&i| rows[i].label.clone()).collect();

        let (primary, secondary, figure_legend) = match columns {
            MetricColumns::Single { throughput } => (throughput_panel(throughput, theme), None, None),
            MetricColumns::Dual { throughput, peak_memory } => {
                let mut primary = throughput_panel(throughput, theme);
                let mut secondary = peak_memory_panel(peak_memory, theme);
                let merged = legend::merge([&mut primary.legend, &mut secondary.legend]);
                (primary, Some(secondary), Some(merged))
            }
        };

        Ok(Self { title: title.into(), categories, primary, secondary, figure_legend })
    }

    pub fn mode(&self) -> ChartMode {
        if self.secondary.is_some() { ChartMode::Dual } else { ChartMode::Single }
    }

    /// Value axes, primary first.
    pub fn panels(&self) -> impl Iterator<Item = &ValueAxisPanel> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }

    /// Legends that will be drawn: the figure legend plus any axis legend still in place.
    pub fn legends(&self) -> Vec<&Legend> {
        self.figure_legend
            .iter()
            .chain(self.panels().filter_map(|p| p.legend.as_ref()))
            .collect()
    }

    /// Pixel geometry of every element for a canvas with the given margins.
    pub fn layout(&self, opts: &RenderOptions, insets: Insets, metrics: &dyn TextMetrics) -> Result<ChartLayout> {
        let (w, h) = (opts.width as f32, opts.height as f32);
        let plot = RectF::from_ltrb(insets.left, insets.top, w - insets.right, h - insets.bottom);
        if plot.width() < 1.0 || plot.height() < 1.0 {
            return Err(ChartError::render(format!(
                "canvas {}x{} is too small for the chart content",
                opts.width, opts.height
            )));
        }

        let band = BandScale::new(plot.top, plot.bottom, self.categories.len());
        let tick_h = metrics.line_height(TICK_FONT);
        let label_h = metrics.line_height(LABEL_FONT);

        let categories = self
            .categories
            .iter()
            .enumerate()
            .map(|(slot, label)| {
                let y = band.center_px(slot);
                CategoryTick { label: label.clone(), y, label_top: y - tick_h * 0.5 }
            })
            .collect();

        let mut bars = Vec::new();
        let mut axes = Vec::new();
        for panel in self.panels() {
            let scale = ValueScale::new(plot.left, plot.right, panel.axis.min, panel.axis.max);
            bars.extend(bar_geometry(panel, &scale, &band));
            axes.push(axis_layout(&panel.axis, &scale, &plot, opts, metrics, tick_h, label_h));
        }

        let title = TextBox {
            text: self.title.clone(),
            x: plot.center_x(),
            top: opts.pad,
        };

        let legends = self
            .legends()
            .into_iter()
            .map(|l| legend_layout(l, &plot, &bars, opts, metrics))
            .collect();

        Ok(ChartLayout { width: opts.width, height: opts.height, insets, plot, bars, categories, axes, title, legends })
    }
}

fn throughput_panel(values: Vec<f64>, theme: &Theme) -> ValueAxisPanel {
    let axis = Axis::fit(THROUGHPUT_LABEL, &values, AxisSide::Bottom).with_rotated_ticks(true);
    ValueAxisPanel::new(axis, BarSeries::new(THROUGHPUT_LABEL, values, theme.primary_bar))
}

fn peak_memory_panel(values: Vec<f64>, theme: &Theme) -> ValueAxisPanel {
    let axis = Axis::fit(PEAK_MEMORY_AXIS, &values, AxisSide::Top);
    let series = BarSeries::new(PEAK_MEMORY_SERIES, values, theme.secondary_bar)
        .with_alpha(SECONDARY_ALPHA)
        .with_placement(BarPlacement::OFFSET);
    ValueAxisPanel::new(axis, series)
}

// ---- layout -----------------------------------------------------------------

/// Resolved pixel positions for one rendering pass.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Plot frame; bars live inside it.
    pub plot: RectF,
    /// Primary bars first, then secondary bars, each in slot order.
    pub bars: Vec<BarGeom>,
    pub categories: Vec<CategoryTick>,
    pub axes: Vec<AxisLayout>,
    pub title: TextBox,
    pub legends: Vec<LegendLayout>,
}

impl ChartLayout {
    /// Bars measured against the axis on `side`.
    pub fn bars_on(&self, side: AxisSide) -> impl Iterator<Item = &BarGeom> {
        self.bars.iter().filter(move |b| b.side == side)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeom {
    pub slot: usize,
    pub series: String,
    pub side: AxisSide,
    pub value: f64,
    pub rect: RectF,
    pub fill: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    pub label: String,
    pub y: f32,
    pub label_top: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    pub x: f32,
    pub label: String,
    /// Horizontal center of the label; may be nudged inward to stay on the canvas.
    pub label_x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub side: AxisSide,
    pub rotate_ticks: bool,
    pub ticks: Vec<PlacedTick>,
    pub tick_label_top: f32,
    pub label: TextBox,
}

/// Text centered on `x` with its top edge at `top`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    pub text: String,
    pub x: f32,
    pub top: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub entry: LegendEntry,
    pub swatch: RectF,
    pub text_left: f32,
    pub text_top: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: RectF,
    pub rows: Vec<LegendRow>,
}

fn bar_geometry<'a>(panel: &'a ValueAxisPanel, scale: &'a ValueScale, band: &'a BandScale) -> impl Iterator<Item = BarGeom> + 'a {
    let series = &panel.series;
    let origin = scale.to_px(panel.axis.min.max(0.0));
    series.values.iter().enumerate().map(move |(slot, &value)| {
        let (lo, hi) = series.placement.extent(slot);
        BarGeom {
            slot,
            series: series.name.clone(),
            side: panel.axis.side,
            value,
            rect: RectF::from_ltrb(origin, band.to_px(hi), scale.to_px(value), band.to_px(lo)),
            fill: series.fill(),
        }
    })
}

fn axis_layout(
    axis: &Axis,
    scale: &ValueScale,
    plot: &RectF,
    opts: &RenderOptions,
    metrics: &dyn TextMetrics,
    tick_h: f32,
    label_h: f32,
) -> AxisLayout {
    let canvas_right = opts.width as f32 - opts.pad;
    let ticks: Vec<PlacedTick> = axis
        .ticks()
        .into_iter()
        .map(|t| {
            let x = scale.to_px(t.value);
            let label_x = if axis.rotate_ticks {
                x
            } else {
                let half = metrics.text_width(&t.label, TICK_FONT) * 0.5;
                clamp(x, opts.pad + half, (canvas_right - half).max(opts.pad + half))
            };
            PlacedTick { x, label: t.label, label_x }
        })
        .collect();

    let extent = tick_label_extent(axis, &ticks, metrics, tick_h);
    let (tick_label_top, label_top) = match axis.side {
        AxisSide::Bottom => {
            let top = plot.bottom + TICK_LEN + GAP;
            (top, top + extent + GAP)
        }
        AxisSide::Top => {
            let top = plot.top - TICK_LEN - GAP - extent;
            (top, top - GAP - label_h)
        }
    };

    AxisLayout {
        side: axis.side,
        rotate_ticks: axis.rotate_ticks,
        ticks,
        tick_label_top,
        label: TextBox { text: axis.label.clone(), x: plot.center_x(), top: label_top },
    }
}

/// Space tick labels take away from the plot, perpendicular to the axis.
fn tick_label_extent(axis: &Axis, ticks: &[PlacedTick], metrics: &dyn TextMetrics, tick_h: f32) -> f32 {
    if axis.rotate_ticks {
        ticks.iter().map(|t| metrics.text_width(&t.label, TICK_FONT)).fold(0.0, f32::max)
    } else {
        tick_h
    }
}

/// Height an axis needs outside the plot frame: ticks, tick labels, axis label.
pub(crate) fn axis_block_height(axis: &Axis, metrics: &dyn TextMetrics) -> f32 {
    let tick_h = metrics.line_height(TICK_FONT);
    let extent = if axis.rotate_ticks {
        axis.ticks().iter().map(|t| metrics.text_width(&t.label, TICK_FONT)).fold(0.0, f32::max)
    } else {
        tick_h
    };
    let label = if axis.label.is_empty() { 0.0 } else { GAP + metrics.line_height(LABEL_FONT) };
    TICK_LEN + GAP + extent + label
}

const LEGEND_INNER: f32 = 4.0;
const LEGEND_OFFSET: f32 = 4.0;
const SWATCH_W: f32 = 16.0;
const SWATCH_H: f32 = 7.0;
const SWATCH_GAP: f32 = 5.0;

fn legend_layout(
    legend: &Legend,
    plot: &RectF,
    bars: &[BarGeom],
    opts: &RenderOptions,
    metrics: &dyn TextMetrics,
) -> LegendLayout {
    let line_h = metrics.line_height(LEGEND_FONT);
    let text_w = legend
        .entries
        .iter()
        .map(|e| metrics.text_width(&e.label, LEGEND_FONT))
        .fold(0.0, f32::max);
    let w = 2.0 * LEGEND_INNER + SWATCH_W + SWATCH_GAP + text_w;
    let h = 2.0 * LEGEND_INNER + line_h * legend.entries.len() as f32;

    let frame = match legend.anchor {
        LegendAnchor::PlotRight => {
            let right = plot.right - LEGEND_OFFSET;
            let upper = RectF::from_ltwh(right - w, plot.top + LEGEND_OFFSET, w, h);
            let lower = RectF::from_ltwh(right - w, plot.bottom - LEGEND_OFFSET - h, w, h);
            let hidden = |frame: &RectF| bars.iter().map(|b| b.rect.overlap_area(frame)).sum::<f32>();
            if hidden(&lower) < hidden(&upper) { lower } else { upper }
        }
        LegendAnchor::FigureUpperRight => RectF::from_ltwh(opts.width as f32 - opts.pad - w, opts.pad, w, h),
    };

    let rows = legend
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row_top = frame.top + LEGEND_INNER + line_h * i as f32;
            let swatch_top = row_top + (line_h - SWATCH_H) * 0.5;
            LegendRow {
                entry: entry.clone(),
                swatch: RectF::from_ltwh(frame.left + LEGEND_INNER, swatch_top, SWATCH_W, SWATCH_H),
                text_left: frame.left + LEGEND_INNER + SWATCH_W + SWATCH_GAP,
                text_top: row_top,
            }
        })
        .collect();

    LegendLayout { frame, rows }
}

// ---- painting ---------------------------------------------------------------

impl ChartLayout {
    /// Paint onto `canvas`. Text is skipped when `text` is `None`.
    pub fn paint(&self, canvas: &skia::Canvas, theme: &Theme, text: Option<&TextShaper>) {
        canvas.clear(theme.background);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for bar in &self.bars {
            fill.set_color(bar.fill);
            canvas.draw_rect(bar.rect.to_skia(), &fill);
        }

        draw_frame(canvas, &self.plot, theme);
        draw_ticks(canvas, self, theme);

        if let Some(shaper) = text {
            draw_labels(canvas, self, theme, shaper);
        }
        for legend in &self.legends {
            draw_legend(canvas, legend, theme, text);
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectF, theme: &Theme) {
    canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

fn draw_ticks(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let paint = stroke_paint(theme.tick, 1.0);
    let plot = &layout.plot;

    for c in &layout.categories {
        canvas.draw_line((plot.left - TICK_LEN, c.y), (plot.left, c.y), &paint);
    }
    for axis in &layout.axes {
        let (y0, y1) = match axis.side {
            AxisSide::Bottom => (plot.bottom, plot.bottom + TICK_LEN),
            AxisSide::Top => (plot.top - TICK_LEN, plot.top),
        };
        for t in &axis.ticks {
            canvas.draw_line((t.x, y0), (t.x, y1), &paint);
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme, shaper: &TextShaper) {
    let label_right = layout.plot.left - TICK_LEN - GAP;
    for c in &layout.categories {
        shaper.draw(canvas, &c.label, label_right, c.label_top, TICK_FONT, theme.tick, Align::Right);
    }

    for axis in &layout.axes {
        for t in &axis.ticks {
            if axis.rotate_ticks {
                shaper.draw_rotated(canvas, &t.label, t.label_x, axis.tick_label_top, TICK_FONT, theme.tick);
            } else {
                shaper.draw(canvas, &t.label, t.label_x, axis.tick_label_top, TICK_FONT, theme.tick, Align::Center);
            }
        }
        if !axis.label.text.is_empty() {
            let l = &axis.label;
            shaper.draw(canvas, &l.text, l.x, l.top, LABEL_FONT, theme.axis_label, Align::Center);
        }
    }

    let t = &layout.title;
    shaper.draw(canvas, &t.text, t.x, t.top, TITLE_FONT, theme.title, Align::Center);
}

fn draw_legend(canvas: &skia::Canvas, legend: &LegendLayout, theme: &Theme, text: Option<&TextShaper>) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(legend.frame.to_skia(), &fill);
    canvas.draw_rect(legend.frame.to_skia(), &stroke_paint(theme.legend_frame, 1.0));

    for row in &legend.rows {
        fill.set_color(row.entry.swatch);
        canvas.draw_rect(row.swatch.to_skia(), &fill);
        if let Some(shaper) = text {
            shaper.draw(canvas, &row.entry.label, row.text_left, row.text_top, LEGEND_FONT, theme.axis_label, Align::Left);
        }
    }
}
