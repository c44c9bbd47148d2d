use std::f64::consts::PI;

/// `x * y / 255`, truncated.
pub(crate) fn mul_div255_trunc(x: u8, y: u8) -> u8 {
    ((u32::from(x) * u32::from(y)) / 255) as u8
}

/// `sin(i * 2π / period)` with floating-point noise around zero snapped to exactly zero.
pub(crate) fn cycle_phase(i: usize, period: usize) -> f64 {
    let s = (i as f64 * 2.0 * PI / period as f64).sin();
    // sin(π) is ~1.2e-16, not 0.
    if s.abs() < 1e-12 { 0.0 } else { s }
}

pub(crate) fn clamp_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
