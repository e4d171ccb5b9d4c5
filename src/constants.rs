//! Numeric limits and mathematical constants shared by every evaluator.
//!
//! The limits are fixed properties of IEEE double precision, so they are plain
//! `const` items rather than values computed at start-up.

// ============================================================================
// Machine Limits
// ============================================================================

/// Machine epsilon: distance from 1.0 to the next representable value.
pub const EPSILON: f64 = f64::EPSILON;

/// ⌊ln(f64::MAX)⌋, the largest exponent `exp` accepts without overflowing.
pub const MAX_LOG: f64 = 709.0;

/// ⌈ln(smallest subnormal)⌉, below which `exp` underflows to zero.
pub const MIN_LOG: f64 = -744.0;

/// Mantissa bits of an f64.
pub const PRECISION_BITS: u32 = 53;

/// Decimal digits carried by an f64 (⌊53 · log10(2)⌋).
pub const DIGITS10: u32 = 15;

/// Maximum number of terms any series or continued fraction may consume.
pub const SERIES_ITERATIONS_MAX: usize = 1_000_000;

/// Largest n for which n! is finite in double precision.
pub const MAX_FACTORIAL: u32 = 170;

/// √ε, used to detect arguments close enough to zero for a linear expansion.
pub const ROOT_EPSILON: f64 = 1.490_116_119_384_765_6e-8;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// π
pub const PI: f64 = std::f64::consts::PI;

/// Square root of pi: √π ≈ 1.7724538509055159
pub const SQRT_PI: f64 = 1.772_453_850_905_516;

/// √(2π) ≈ 2.5066282746310002
pub const ROOT_TWO_PI: f64 = 2.506_628_274_631_000_7;

/// ln(√(2π)) ≈ 0.9189385332046727 (used in Stirling's approximation)
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Euler-Mascheroni constant: γ ≈ 0.5772156649015329
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;
