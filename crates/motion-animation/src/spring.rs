//! Closed-form damped harmonic oscillator.
//!
//! Displacement is measured from the spring's rest position (the target),
//! so a spring starting at `x0` with velocity `v0` is evaluated directly at
//! any time `t` without integrating frame by frame. Frame rate therefore has
//! no effect on the path a spring takes.

/// Velocity threshold as a multiple of the displacement threshold, per second.
const VELOCITY_THRESHOLD_FACTOR: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    damping_ratio: f32,
    natural_freq: f32,
}

impl SpringSimulation {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio: damping_ratio.max(0.0),
            natural_freq: stiffness.max(f32::EPSILON).sqrt(),
        }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    pub fn natural_freq(&self) -> f32 {
        self.natural_freq
    }

    /// Displacement and velocity after `t` seconds.
    pub fn update(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let zeta = self.damping_ratio;
        let omega = self.natural_freq;

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped.
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (x0 + b * t) * decay;
            let v = (b - omega * (x0 + b * t)) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / damped;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * (-zeta * omega * (a * cos + b * sin) + damped * (b * cos - a * sin));
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            let x = c1 * e1 + c2 * e2;
            let v = c1 * r1 * e1 + c2 * r2 * e2;
            (x, v)
        }
    }

    pub fn is_at_rest(&self, displacement: f32, velocity: f32, threshold: f32) -> bool {
        displacement.abs() < threshold && velocity.abs() < threshold * VELOCITY_THRESHOLD_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_displacement() {
        for damping in [0.2, 0.5, 1.0, 2.0] {
            let spring = SpringSimulation::new(damping, 400.0);
            let (x, v) = spring.update(10.0, 3.0, 0.0);
            assert!((x - 10.0).abs() < 1e-4, "damping {damping}: x = {x}");
            assert!((v - 3.0).abs() < 1e-3, "damping {damping}: v = {v}");
        }
    }

    #[test]
    fn decays_towards_rest() {
        for damping in [0.2, 0.5, 1.0, 2.0] {
            let spring = SpringSimulation::new(damping, 1500.0);
            let (x, v) = spring.update(100.0, 0.0, 3.0);
            assert!(spring.is_at_rest(x, v, 0.01), "damping {damping}: x={x} v={v}");
        }
    }

    #[test]
    fn bouncy_spring_overshoots() {
        let spring = SpringSimulation::new(0.2, 1500.0);
        let overshoot = (1..200)
            .map(|step| spring.update(-1.0, 0.0, step as f32 / 1000.0).0)
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 0.3, "overshoot = {overshoot}");
    }

    #[test]
    fn critically_damped_never_crosses_target() {
        let spring = SpringSimulation::new(1.0, 200.0);
        for step in 0..400 {
            let (x, _) = spring.update(-1.0, 0.0, step as f32 / 100.0);
            assert!(x <= 1e-6, "crossed at step {step}: {x}");
        }
    }
}
