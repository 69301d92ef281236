//! Easing curves
//!
//! Power curves follow the usual animation-library naming: `power1` is
//! quadratic, `power2` cubic, `power3` quartic, `power4` quintic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear
    None,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::PowerOut(1)
    }
}

impl Ease {
    pub const POWER2_IN: Ease = Ease::PowerIn(2);
    pub const POWER2_OUT: Ease = Ease::PowerOut(2);
    pub const POWER2_IN_OUT: Ease = Ease::PowerInOut(2);
    pub const POWER3_IN: Ease = Ease::PowerIn(3);
    pub const POWER3_OUT: Ease = Ease::PowerOut(3);
    pub const POWER4_OUT: Ease = Ease::PowerOut(4);
    pub const POWER4_IN_OUT: Ease = Ease::PowerInOut(4);

    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::None => t,
            Ease::PowerIn(p) => t.powi(exponent(p)),
            Ease::PowerOut(p) => 1.0 - (1.0 - t).powi(exponent(p)),
            Ease::PowerInOut(p) => {
                let e = exponent(p);
                if t < 0.5 {
                    (2.0 * t).powi(e) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(e) / 2.0
                }
            }
        }
    }
}

fn exponent(power: u8) -> i32 {
    i32::from(power.clamp(1, 4)) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_fixed() {
        for ease in [
            Ease::None,
            Ease::default(),
            Ease::POWER2_IN,
            Ease::POWER3_OUT,
            Ease::POWER4_IN_OUT,
        ] {
            assert_relative_eq!(ease.apply(0.0), 0.0);
            assert_relative_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_curves_lead_and_in_curves_lag() {
        assert!(Ease::POWER2_OUT.apply(0.3) > 0.3);
        assert!(Ease::POWER2_IN.apply(0.3) < 0.3);
        assert_relative_eq!(Ease::POWER2_IN_OUT.apply(0.5), 0.5);
    }

    #[test]
    fn power2_out_is_cubic() {
        assert_relative_eq!(Ease::POWER2_OUT.apply(0.5), 0.875);
    }

    #[test]
    fn input_is_clamped() {
        assert_relative_eq!(Ease::None.apply(-1.0), 0.0);
        assert_relative_eq!(Ease::None.apply(2.0), 1.0);
        assert_relative_eq!(Ease::None.apply(f64::NAN), 0.0);
    }
}
