//! Generic numeric capability for histogram inputs
//!
//! Any slice whose element type implements [`Numeric`] can be binned. The
//! associated [`Numeric::Float`] type is where all derived quantities live:
//! bin values, weights, and accumulated frequencies. Integer inputs promote
//! to `f64` so that bin arithmetic never overflows or truncates.

use num_traits::{Float, NumCast};
use std::fmt::Debug;
use std::ops::AddAssign;

/// Base trait for value types that can be histogrammed
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync {
    /// Floating-point type used for edges, weights, and frequencies
    type Float: Float + From<Self> + Into<f64> + NumCast + Send + Sync + AddAssign;

    /// Convert to floating point for edge and frequency arithmetic
    fn to_float(self) -> Self::Float;

    /// Check if the value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert from f64 (for creating constants)
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    type Float = f64;

    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn from_f64(val: f64) -> Self {
        val
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    type Float = f32;

    fn to_float(self) -> f32 {
        self
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for i32 {
    type Float = f64; // Use f64 to prevent overflow

    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        true // Integers are always finite
    }

    fn from_f64(val: f64) -> Self {
        val as i32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for u32 {
    type Float = f64; // Use f64 to prevent overflow

    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn from_f64(val: f64) -> Self {
        val as u32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

// =============================================================================
// Tests
// =============================================================================
