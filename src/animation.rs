use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Remaining displacement below which a spring counts as settled.
const SETTLE_EPSILON: f32 = 1e-3;

/// An interactive spring, parameterised like the usual mobile toolkits:
/// `response` is the period of the undamped oscillation in seconds and
/// `damping_fraction` the damping ratio (< 1 overshoots, >= 1 does not).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Spring {
    pub response: f32,
    pub damping_fraction: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            response: 0.5,
            damping_fraction: 1.8,
        }
    }
}

impl Spring {
    /// A spring needs a positive, finite period and damping, or it never settles.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.response.is_finite() && self.response > 0.0,
            "spring response must be a positive number of seconds, got {}",
            self.response
        );
        anyhow::ensure!(
            self.damping_fraction.is_finite() && self.damping_fraction > 0.0,
            "spring damping_fraction must be positive, got {}",
            self.damping_fraction
        );
        Ok(())
    }

    fn omega(&self) -> f32 {
        TAU / self.response.max(0.01)
    }

    fn zeta(&self) -> f32 {
        self.damping_fraction.max(0.0)
    }

    /// Displacement from the target `t` seconds after release, starting at 1
    /// with zero velocity.
    fn displacement(&self, t: f32) -> f32 {
        let omega = self.omega();
        let zeta = self.zeta();
        if (zeta - 1.0).abs() < 1e-4 {
            (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            (-zeta * omega * t).exp()
                * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Slowest exponential decay rate of the displacement envelope.
    fn decay_rate(&self) -> f32 {
        let omega = self.omega();
        let zeta = self.zeta();
        if zeta < 1.0 {
            (zeta * omega).max(1e-3)
        } else if (zeta - 1.0).abs() < 1e-4 {
            // (1 + wt) slows the decay down a little
            omega * 0.7
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        }
    }

    /// Time in seconds after which the spring is considered at rest.
    pub fn settle_time(&self) -> f32 {
        let zeta = self.zeta();
        let amplitude = if zeta < 1.0 {
            (1.0 / (1.0 - zeta * zeta)).sqrt()
        } else {
            1.0
        };
        ((amplitude / SETTLE_EPSILON).ln() / self.decay_rate()).min(10.0)
    }

    /// Normalised progress from 0 to 1. May overshoot above 1 for
    /// underdamped springs, is exactly 1 once settled.
    pub fn progress(&self, t: f32) -> f32 {
        if t <= 0.0 {
            0.0
        } else if t >= self.settle_time() {
            1.0
        } else {
            1.0 - self.displacement(t)
        }
    }
}

/// An `f32` that follows its target along a [`Spring`]. Time is passed in
/// explicitly (seconds, usually `egui::InputState::time`).
#[derive(Debug, Clone)]
pub struct SpringValue {
    spring: Spring,
    start: f32,
    target: f32,
    start_time: Option<f64>,
}

impl SpringValue {
    pub fn new(initial: f32, spring: Spring) -> Self {
        Self {
            spring,
            start: initial,
            target: initial,
            start_time: None,
        }
    }

    /// Retarget from wherever the value currently is.
    pub fn set_target(&mut self, target: f32, now: f64) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.start = self.value(now);
        self.target = target;
        self.start_time = Some(now);
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn value(&self, now: f64) -> f32 {
        match self.start_time {
            None => self.target,
            Some(start_time) => {
                let t = (now - start_time) as f32;
                let p = self.spring.progress(t);
                self.start + (self.target - self.start) * p
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn is_animating(&self, now: f64) -> bool {
        self.start_time
            .is_some_and(|start| ((now - start) as f32) < self.spring.settle_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bouncy() -> Spring {
        Spring {
            response: 0.5,
            damping_fraction: 0.4,
        }
    }

    #[test]
    fn progress_starts_at_zero_and_settles_at_one() {
        for damping_fraction in [0.3, 1.0, 1.8] {
            let spring = Spring {
                response: 0.5,
                damping_fraction,
            };
            assert!(spring.progress(0.0).abs() < 1e-6);
            assert!((spring.progress(spring.settle_time()) - 1.0).abs() < 1e-6);
            // just before settling it must already be close
            let almost = spring.progress(spring.settle_time() * 0.999);
            assert!((almost - 1.0).abs() < 0.01, "{damping_fraction}: {almost}");
        }
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let spring = bouncy();
        let max = (1..200)
            .map(|i| spring.progress(i as f32 / 200.0))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.05, "max progress was {max}");
    }

    #[test]
    fn overdamped_spring_is_monotonic_and_bounded() {
        let spring = Spring::default();
        let mut last = 0.0;
        for i in 0..=400 {
            let p = spring.progress(i as f32 / 100.0);
            assert!(p <= 1.0 + 1e-6);
            assert!(p + 1e-6 >= last);
            last = p;
        }
    }

    #[test]
    fn validate_rejects_springs_that_never_settle() {
        assert!(Spring::default().validate().is_ok());
        assert!(bouncy().validate().is_ok());
        for (response, damping_fraction) in [
            (f32::NAN, 1.0),
            (f32::INFINITY, 1.0),
            (0.0, 1.0),
            (-0.5, 1.0),
            (0.5, f32::NAN),
            (0.5, 0.0),
            (0.5, -1.0),
        ] {
            let spring = Spring {
                response,
                damping_fraction,
            };
            assert!(spring.validate().is_err(), "{spring:?}");
        }
    }

    #[test]
    fn spring_value_follows_target() {
        let mut value = SpringValue::new(0.0, Spring::default());
        assert!(value.value(0.0).abs() < f32::EPSILON);
        assert!(!value.is_animating(0.0));

        value.set_target(250.0, 1.0);
        assert!(value.is_animating(1.1));
        let mid = value.value(1.1);
        assert!(mid > 0.0 && mid < 250.0);
        assert!((value.value(20.0) - 250.0).abs() < 1e-3);
        assert!(!value.is_animating(20.0));
    }

    #[test]
    fn retargeting_starts_from_current_value() {
        let mut value = SpringValue::new(0.0, bouncy());
        value.set_target(100.0, 0.0);
        let current = value.value(0.1);
        value.set_target(0.0, 0.1);
        assert!((value.value(0.1) - current).abs() < 1e-3);
        assert!(value.value(20.0).abs() < 1e-3);
    }
}
