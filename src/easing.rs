//! Timing functions for manual tweens.
//!
//! Evaluates CSS `cubic-bezier(x1, y1, x2, y2)` curves so that tweens driven
//! from Rust look identical to the ones a stylesheet would produce.

use crate::float::Float;

/// A CSS `cubic-bezier()` timing function with implicit endpoints (0,0) and (1,1).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

/// Slow start, strong finish. Used for the launch out of a splash.
pub const LAUNCH: CubicBezier = CubicBezier::new(0.3, 0.0, 0.8, 0.8);

/// Ease-out with overshoot ("back-out"). Used for the bob-up after a release underwater.
pub const OVERSHOOT: CubicBezier = CubicBezier::new(0.175, 0.885, 0.32, 1.55);

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// Build the polynomial coefficients from the two control points.
    ///
    /// `x1` and `x2` are expected in `[0, 1]`; `y` values may overshoot.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        CubicBezier { ax, bx, cx, ay, by, cy }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter whose x equals `x`.
    ///
    /// Newton-Raphson first, bisection if the derivative flattens out.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if Float::abs(err) < EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if Float::abs(d) < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let sx = self.sample_x(t);
            if Float::abs(sx - x) < EPSILON {
                return t;
            }
            if x > sx {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) * 0.5;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }
}

/// Timing function applied to a [`Tween`](crate::tween::Tween).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Easing::Linear => x.clamp(0.0, 1.0),
            Easing::Bezier(curve) => curve.ease(x),
        }
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Easing::Bezier(curve)
    }
}
