use super::{Mode, MotionState};

pub const CURTAIN_EASE: f64 = 0.12;
pub const SETTLE_THRESHOLD: f64 = 0.1;
pub const CURTAIN_BREAKPOINT: f64 = 980.0;

const LIGHT_BELOW: f64 = 0.35;
const DARK_ABOVE: f64 = 0.65;

/// The two hero panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Light,
    Dark,
}

/// Which panel currently covers most of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Light,
    Dark,
    Neutral,
}

impl Dominance {
    pub fn classify(percent: f64) -> Self {
        if percent < LIGHT_BELOW {
            Dominance::Light
        } else if percent > DARK_ABOVE {
            Dominance::Dark
        } else {
            Dominance::Neutral
        }
    }

    pub fn emphasises(self, panel: Panel) -> bool {
        matches!(
            (self, panel),
            (Dominance::Light, Panel::Light) | (Dominance::Dark, Panel::Dark)
        )
    }
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Settled,
}

/// What the painter needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurtainFrame {
    pub divider_x: f64,
    pub dominance: Dominance,
}

impl CurtainFrame {
    pub fn panel_style(&self) -> String {
        format!("width: {}px;", self.divider_x)
    }

    pub fn divider_style(&self) -> String {
        format!("left: {}px;", self.divider_x)
    }
}

/// Pointer-tracking divider state. Demand-driven: a frame is only wanted
/// between a pointer move and the tick that settles.
#[derive(Debug, Clone)]
pub struct CurtainController {
    divider: MotionState,
    viewport_width: f64,
    mode: Mode,
    dominance: Dominance,
    focus: Panel,
    running: bool,
}

impl CurtainController {
    pub fn new(viewport_width: f64) -> Self {
        let mut controller = Self {
            divider: MotionState::at(0.0),
            viewport_width,
            mode: Mode::Mobile,
            dominance: Dominance::Neutral,
            focus: Panel::Light,
            running: false,
        };
        controller.resize(viewport_width);
        controller
    }

    /// Recomputes the mode. Desktop always recenters instantly.
    pub fn resize(&mut self, viewport_width: f64) -> Mode {
        self.viewport_width = viewport_width;
        self.mode = Mode::from_width(viewport_width, CURTAIN_BREAKPOINT);
        if !self.mode.is_mobile() {
            self.divider.reset(viewport_width / 2.0);
        }
        self.mode
    }

    /// Retargets the divider. Returns true when the caller has to request a
    /// frame, i.e. the loop was idle.
    pub fn pointer_move(&mut self, client_x: f64) -> bool {
        if self.mode.is_mobile() {
            return false;
        }
        self.divider.target = client_x;
        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.mode.is_mobile() {
            self.running = false;
            return Tick::Settled;
        }

        if self.divider.diff().abs() < SETTLE_THRESHOLD {
            self.divider.snap();
            self.running = false;
            return Tick::Settled;
        }

        self.divider.step(CURTAIN_EASE);
        self.dominance = Dominance::classify(self.divider.current / self.viewport_width);
        Tick::Continue
    }

    /// Mobile selector. Switching is immediate; the cross-fade is CSS.
    pub fn select(&mut self, panel: Panel) {
        self.focus = panel;
    }

    pub fn focus(&self) -> Panel {
        self.focus
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn dominance(&self) -> Dominance {
        self.dominance
    }

    pub fn divider(&self) -> MotionState {
        self.divider
    }

    pub fn frame(&self) -> CurtainFrame {
        CurtainFrame {
            divider_x: self.divider.current,
            dominance: self.dominance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(c: &mut CurtainController) -> usize {
        let mut ticks = 0;
        while c.tick() == Tick::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "curtain never settled");
        }
        ticks
    }

    #[test]
    fn desktop_starts_centered() {
        let c = CurtainController::new(1600.0);
        assert_eq!(c.mode(), Mode::Desktop);
        assert_eq!(c.divider(), MotionState::at(800.0));
        assert!(!c.is_running());
    }

    #[test]
    fn pointer_move_requests_once_until_settled() {
        let mut c = CurtainController::new(1000.0);
        assert!(c.pointer_move(100.0));
        assert!(!c.pointer_move(120.0));
        run_until_settled(&mut c);
        assert_eq!(c.divider().current, 120.0);
        assert!(!c.is_running());
        assert!(c.pointer_move(900.0));
    }

    #[test]
    fn settled_tick_snaps_without_further_requests() {
        let mut c = CurtainController::new(1000.0);
        c.pointer_move(500.05);
        assert_eq!(c.tick(), Tick::Settled);
        assert_eq!(c.divider().current, 500.05);
        assert_eq!(c.tick(), Tick::Settled);
    }

    #[test]
    fn one_tick_moves_twelve_percent() {
        let mut c = CurtainController::new(1000.0);
        c.pointer_move(600.0);
        assert_eq!(c.tick(), Tick::Continue);
        assert!((c.divider().current - 512.0).abs() < 1e-9);
    }

    #[test]
    fn dominance_follows_divider() {
        let mut c = CurtainController::new(1000.0);
        c.pointer_move(50.0);
        run_until_settled(&mut c);
        assert_eq!(c.dominance(), Dominance::Light);

        c.pointer_move(950.0);
        run_until_settled(&mut c);
        assert_eq!(c.dominance(), Dominance::Dark);

        c.pointer_move(500.0);
        run_until_settled(&mut c);
        assert_eq!(c.dominance(), Dominance::Neutral);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(Dominance::classify(0.34), Dominance::Light);
        assert_eq!(Dominance::classify(0.66), Dominance::Dark);
        assert_eq!(Dominance::classify(0.5), Dominance::Neutral);
        assert_eq!(Dominance::classify(0.35), Dominance::Neutral);
        assert_eq!(Dominance::classify(0.65), Dominance::Neutral);
    }

    #[test]
    fn mobile_ignores_pointer() {
        let mut c = CurtainController::new(600.0);
        assert_eq!(c.mode(), Mode::Mobile);
        assert!(!c.pointer_move(300.0));
        assert_eq!(c.tick(), Tick::Settled);

        c.select(Panel::Dark);
        assert_eq!(c.focus(), Panel::Dark);
    }

    #[test]
    fn entering_desktop_recenters() {
        let mut c = CurtainController::new(600.0);
        assert_eq!(c.resize(1400.0), Mode::Desktop);
        assert_eq!(c.divider(), MotionState::at(700.0));

        c.pointer_move(10.0);
        c.tick();
        c.resize(2000.0);
        assert_eq!(c.divider(), MotionState::at(1000.0));
    }
}
