// File: crates/bench-chart/src/text.rs
// Summary: Text measurement seam plus a Skia textlayout shaper for drawing labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Text measurement used by the layout pass.
pub trait TextMetrics {
    /// Advance width of `text` at font `size`, in pixels.
    fn text_width(&self, text: &str, size: f32) -> f32;
    /// Height of one line of text at font `size`, in pixels.
    fn line_height(&self, size: f32) -> f32 {
        size * 1.2
    }
}

/// Font-independent approximation: every character is `char_em` of the font size wide.
/// Gives the same geometry on every machine, which snapshots rely on.
#[derive(Clone, Copy, Debug)]
pub struct ApproxMetrics {
    pub char_em: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self { Self { char_em: 0.6 } }
}

impl TextMetrics for ApproxMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.char_em
    }
}

/// Horizontal anchor for a drawn label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its top edge at `top`, anchored horizontally at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color, align: Align) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, reading bottom to top,
    /// horizontally centered on `x` with its end at `top`.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        canvas.save();
        canvas.translate((x - h * 0.5, top + w));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (0.0, 0.0));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextMetrics for TextShaper {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        // width of the longest line
        self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0)).longest_line()
    }

    fn line_height(&self, size: f32) -> f32 {
        self.layout("Ag", size, skia::Color::from_argb(0, 0, 0, 0)).height()
    }
}
