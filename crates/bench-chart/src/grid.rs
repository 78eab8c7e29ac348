// File: crates/bench-chart/src/grid.rs
// Summary: Tick layout helpers: nice tick steps and tick label formatting.

/// Upper bound on the number of ticks per value axis.
pub const MAX_TICKS: usize = 8;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest "nice" step (1, 2, 2.5 or 5 times a power of ten) that covers
/// `span` with at most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let span = if span.is_finite() && span > 0.0 { span } else { 1.0 };
    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    // Subnormal spans underflow the power of ten: fall back to a single interval.
    if !(magnitude.is_finite() && magnitude > 0.0) {
        return span;
    }
    for m in NICE_STEPS {
        let step = m * magnitude;
        if step >= raw * (1.0 - 1e-9) {
            return step;
        }
    }
    let step = 10.0 * magnitude;
    if step.is_finite() { step } else { span }
}

/// Tick values in `[min, max]` on multiples of a nice step.
/// Degenerate ranges yield just the end points.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let step = nice_step(max - min, max_ticks);
    let (first, last) = ((min / step).ceil(), (max / step + 1e-9).floor());
    let count = last - first;
    if !(step > 0.0 && count.is_finite() && count >= 0.0 && count <= 2.0 * max_ticks.max(1) as f64) {
        return if min < max { vec![min, max] } else { vec![min] };
    }
    let (first, last) = (first as i64, last as i64);
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Tick steps outside this range are labelled in scientific notation.
const PLAIN_STEPS: std::ops::Range<f64> = 1e-6..1e15;

/// Format a tick value with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    if step.is_finite() && step > 0.0 && !PLAIN_STEPS.contains(&step) {
        return format_scientific(value, step);
    }
    let decimals = if step <= 0.0 || !step.is_finite() {
        0
    } else {
        let base = if step >= 1.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize };
        base + usize::from(step < 10.0 && is_half_decade(step))
    };
    let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{v:.decimals$}")
}

// Mantissa digits down to the step's own magnitude, e.g. `2.5e307`.
fn format_scientific(value: f64, step: f64) -> String {
    if value.abs() < step * 1e-9 {
        return "0".to_string();
    }
    let exponent = |v: f64| v.abs().log10().floor();
    let digits = (exponent(value) - exponent(step)).max(0.0) as usize + usize::from(is_half_decade(step));
    format!("{value:.digits$e}")
}

// 0.25, 0.025, ... need one more decimal than their magnitude suggests.
fn is_half_decade(step: f64) -> bool {
    let mantissa = step / 10f64.powf(step.log10().floor());
    (mantissa - 2.5).abs() < 1e-9
}
