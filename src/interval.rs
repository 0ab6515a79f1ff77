//! # Interval
//!
//! The bounds `[a, b]` of the integral. No ordering is imposed: a reversed
//! interval integrates with a negative width and a degenerate one with zero
//! width. Only non-finite bounds are rejected.

use crate::error::{QuadratureError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates an interval, rejecting NaN or infinite bounds.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        check_bound("a", a)?;
        check_bound("b", b)?;
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Signed width `b - a`.
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Signed width of one of `parts` equal sub-intervals.
    pub fn part_width(&self, parts: usize) -> f64 {
        self.width() / parts as f64
    }
}

fn check_bound(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(QuadratureError::InvalidArgument(format!(
            "Bound {} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}
