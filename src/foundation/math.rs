pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Linear interpolation between `a` and `b`; `t = 1` returns `b` exactly.
pub(crate) fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Normalized progress of step `i` in a phase of `n` steps.
///
/// `n <= 1` yields `1.0` so degenerate phases land on their end state.
pub(crate) fn phase_progress(i: u32, n: u32) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    f64::from(i.min(n - 1)) / f64::from(n - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
