// File: crates/bench-chart/src/scale.rs
// Summary: Value (X) and category band (Y) scale transforms for horizontal bars.

/// Value coordinate on a horizontal axis (e.g. objects per second).
pub type Value = f64;

/// Horizontal value scale mapping `[vmin, vmax]` to `[left, right]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(left_px: f32, right_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { left_px, right_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.left_px + ((v - self.vmin) / span) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * span
    }
}

/// Vertical category scale: `n` equal slots stacked from the bottom of the
/// plot upward. Slot positions are in logical units where slot `i` is
/// centered on `i`, so a bar of width `w` spans `i - w/2 .. i + w/2`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub slots: usize,
}

impl BandScale {
    pub fn new(top_px: f32, bottom_px: f32, slots: usize) -> Self {
        Self { top_px, bottom_px, slots: slots.max(1) }
    }
    /// Height of one slot in pixels.
    #[inline]
    pub fn slot_px(&self) -> f32 {
        (self.bottom_px - self.top_px) / self.slots as f32
    }
    /// Pixel y of logical position `y` (slot `i` is centered on `y == i`).
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        self.bottom_px - ((y + 0.5) as f32) * self.slot_px()
    }
    #[inline]
    pub fn center_px(&self, slot: usize) -> f32 {
        self.to_px(slot as f64)
    }
}
