//! Tuning constants for curve construction and trimming

/// Below this superellipse exponent a corner is drawn as a notch.
pub const NOTCH_EXPONENT: f64 = 0.001;

/// Above this superellipse exponent a corner is drawn as a square.
pub const SQUARE_EXPONENT: f64 = 1000.0;

/// How close a curvature must be to 1 to count as round.
pub const ROUND_TOLERANCE: f64 = 1e-9;

/// Relative tolerance for the cubic root solver's `approximately` checks.
pub const ROOT_EPSILON: f64 = 1e-9;

/// Roots this far outside `[0, 1]` are still accepted (and clamped).
pub const ROOT_TOLERANCE: f64 = 1e-7;

/// Distance below which a point counts as lying on a trim line.
pub const TRIM_EPSILON: f64 = 1e-9;

/// `1 - κ` for the classic quarter-circle cubic, `κ = 4(√2 - 1)/3`.
pub const CIRCLE_CONTROL_POINT: f64 = 0.447715;

/// Fitted constants of the two-segment superellipse approximation.
///
/// `[0]` and `[6]` are the two slopes blended by `tanh`, `[1]` is the
/// logistic midpoint, `[2..=4]` shape the exponential decay of the mid
/// control offset and `[5]` is the steepness of the slope blend.
#[rustfmt::skip]
pub const SUPERELLIPSE_FIT: [f64; 7] = [
    1.2430920942724248,
    2.010479023614843,
    0.32922901179443753,
    0.2823023142212073,
    1.3473704261055421,
    2.9149468637949814,
    0.9106507102917086,
];
