//! Pure easing functions for animation pacing
//!
//! Maps input [0, 1] to output [0, 1] with various acceleration curves.

use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::CubicInOut => cubic_in_out(t),
            EasingType::CubicOut => cubic_out(t),
            EasingType::QuinticOut => quintic_out(t),
        }
    }
}

/// Cubic ease-in/ease-out: accelerates through the first half, decelerates
/// through the second
#[inline]
fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingType::Linear,
            EasingType::CubicInOut,
            EasingType::CubicOut,
            EasingType::QuinticOut,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingType::Linear,
            EasingType::CubicInOut,
            EasingType::CubicOut,
            EasingType::QuinticOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_shape() {
        // Slow start, fast middle: the first quarter covers far less than a
        // quarter of the distance, the midpoint is exactly half
        assert!(EasingType::CubicInOut.apply(0.25) < 0.1);
        assert!((EasingType::CubicInOut.apply(0.5) - 0.5).abs() < 0.001);
        assert!(EasingType::CubicInOut.apply(0.75) > 0.9);
    }

    #[test]
    fn test_apply_clamps_input() {
        assert_eq!(EasingType::CubicInOut.apply(-1.0), 0.0);
        assert_eq!(EasingType::CubicInOut.apply(2.0), 1.0);
    }
}
