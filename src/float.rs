//! Floating-point helpers for `no_std` builds.
//!
//! `core` does not provide the rounding family on `f64`, so everything the
//! controller needs goes through `libm`.

/// Scalar operations used by the simulation.
///
/// Implemented for `f32` and `f64`. Layout values coming from a DOM are
/// always `f64`, so that is what the controller uses.
pub trait Float: Copy + PartialOrd {
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Round half away from zero (matches `Math.round` for positive inputs).
    fn round(self) -> Self;
    /// Floating-point remainder with the sign of `self`.
    fn fmod(self, span: Self) -> Self;

    /// Wrap `self` into `[0, span)`. A non-positive span leaves the value untouched.
    fn wrap(self, span: Self) -> Self;

    /// Clamp into `[-limit, limit]`.
    fn clamp_abs(self, limit: Self) -> Self;
}

impl Float for f32 {
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn round(self) -> Self { libm::roundf(self) }
    fn fmod(self, span: Self) -> Self { libm::fmodf(self, span) }

    fn wrap(self, span: Self) -> Self {
        if !(span > 0.0) {
            return self;
        }
        let r = libm::fmodf(libm::fmodf(self, span) + span, span);
        if r >= span { 0.0 } else { r }
    }

    fn clamp_abs(self, limit: Self) -> Self {
        if self > limit { limit } else if self < -limit { -limit } else { self }
    }
}

impl Float for f64 {
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn round(self) -> Self { libm::round(self) }
    fn fmod(self, span: Self) -> Self { libm::fmod(self, span) }

    fn wrap(self, span: Self) -> Self {
        if !(span > 0.0) {
            return self;
        }
        let r = libm::fmod(libm::fmod(self, span) + span, span);
        // fmod(-tiny + span, span) can round up to exactly `span`
        if r >= span { 0.0 } else { r }
    }

    fn clamp_abs(self, limit: Self) -> Self {
        if self > limit { limit } else if self < -limit { -limit } else { self }
    }
}
