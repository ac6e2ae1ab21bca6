//! Frame-driven motion state for the hero curtain and the scroll badge.
//!
//! Everything in here is plain arithmetic over `f64` so it can be ticked and
//! asserted on the host. The components in `crate::components` own one
//! controller each and paint whatever snapshot the controller hands back.

pub mod badge;
pub mod curtain;

pub use badge::{BadgeController, BadgeFrame, BadgeLayout, ObstructionTracker, PhaseSegment};
pub use curtain::{CurtainController, CurtainFrame, Dominance, Panel, Tick};

/// Layout mode derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Mobile,
    Desktop,
}

impl Mode {
    /// Anything narrower than `breakpoint` is treated as mobile.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Mode::Mobile
    }
}

/// One eased value: `current` chases `target` by a fixed fraction per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub current: f64,
    pub target: f64,
}

impl MotionState {
    pub fn at(value: f64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn diff(&self) -> f64 {
        self.target - self.current
    }

    /// Covers `ease` of the remaining distance. Never overshoots for `ease` in `(0, 1]`.
    pub fn step(&mut self, ease: f64) {
        self.current += self.diff() * ease;
    }

    pub fn snap(&mut self) {
        self.current = self.target;
    }

    pub fn reset(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }
}

/// Easing curves used by the badge path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutQuad,
    OutCubic,
}

impl Easing {
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Easing::Linear => p,
            Easing::OutQuad => 1.0 - (1.0 - p).powi(2),
            Easing::OutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }
}

/// Screen position in viewport units (`x` in vw, `y` in vh).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Point, t: f64) -> Point {
        if t >= 1.0 {
            return to;
        }
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_never_overshoots() {
        for &(current, target) in &[(0.0, 100.0), (640.0, 12.5), (-3.0, -3.05), (5.0, 5.0)] {
            for &ease in &[0.08, 0.12, 0.5, 1.0] {
                let mut m = MotionState { current, target };
                let before = m.diff().abs();
                m.step(ease);
                assert!(m.diff().abs() <= before, "ease {} from {} to {}", ease, current, target);
            }
        }
    }

    #[test]
    fn full_ease_lands_on_target() {
        let mut m = MotionState { current: 10.0, target: 30.0 };
        m.step(1.0);
        assert_eq!(m.current, 30.0);
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::OutQuad, Easing::OutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!((Easing::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((Easing::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn mode_breakpoint_is_exclusive() {
        assert_eq!(Mode::from_width(979.0, 980.0), Mode::Mobile);
        assert_eq!(Mode::from_width(980.0, 980.0), Mode::Desktop);
    }
}
