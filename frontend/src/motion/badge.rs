use std::collections::BTreeSet;

use super::{Easing, Mode, MotionState, Point};

pub const POSITION_EASE: f64 = 0.08;
pub const ROTATION_EASE: f64 = 0.12;
pub const ROTATION_PER_PX: f64 = 0.25;
pub const BADGE_BREAKPOINT: f64 = 768.0;

/// Page sections the badge must not sit on top of.
pub const OBSERVED_SECTIONS: [&str; 3] = ["services", "process", "contact"];
pub const OBSERVER_THRESHOLD: f64 = 0.05;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -10% 0px";

const SLIDE_END: f64 = 0.35;
const DROP_END: f64 = 0.85;

const OBSTRUCTED_SCALE: f64 = 0.8;
const OBSTRUCTED_OPACITY: f64 = 0.4;

/// Per-mode anchor points, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    pub start: Point,
    pub left_edge_x: f64,
    pub bottom_y: f64,
    pub parked: Point,
}

impl BadgeLayout {
    pub const DESKTOP: BadgeLayout = BadgeLayout {
        start: Point::new(88.0, 40.0),
        left_edge_x: 8.0,
        bottom_y: 75.0,
        parked: Point::new(4.0, 88.0),
    };

    pub const MOBILE: BadgeLayout = BadgeLayout {
        start: Point::new(85.0, 35.0),
        left_edge_x: 12.0,
        bottom_y: 85.0,
        parked: Point::new(5.0, 92.0),
    };

    pub fn for_mode(mode: Mode) -> &'static BadgeLayout {
        match mode {
            Mode::Desktop => &Self::DESKTOP,
            Mode::Mobile => &Self::MOBILE,
        }
    }

    /// The scroll path: slide left, drop down the left edge, then hold.
    pub fn path(&self) -> [PhaseSegment; 3] {
        let corner = Point::new(self.left_edge_x, self.start.y);
        let rest = Point::new(self.left_edge_x, self.bottom_y);
        [
            PhaseSegment {
                range_start: 0.0,
                range_end: SLIDE_END,
                easing: Easing::OutCubic,
                start_pos: self.start,
                end_pos: corner,
            },
            PhaseSegment {
                range_start: SLIDE_END,
                range_end: DROP_END,
                easing: Easing::OutQuad,
                start_pos: corner,
                end_pos: rest,
            },
            PhaseSegment {
                range_start: DROP_END,
                range_end: f64::INFINITY,
                easing: Easing::Linear,
                start_pos: rest,
                end_pos: rest,
            },
        ]
    }
}

/// A scroll sub-range, in multiples of viewport height. The range is
/// `(range_start, range_end]`, except the first segment which includes 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSegment {
    pub range_start: f64,
    pub range_end: f64,
    pub easing: Easing,
    pub start_pos: Point,
    pub end_pos: Point,
}

impl PhaseSegment {
    fn contains(&self, scroll: f64, vh: f64) -> bool {
        scroll <= self.range_end * vh
    }

    fn position(&self, scroll: f64, vh: f64) -> Point {
        if self.range_end.is_infinite() {
            return self.end_pos;
        }
        let from = self.range_start * vh;
        let to = self.range_end * vh;
        let p = ((scroll - from) / (to - from)).clamp(0.0, 1.0);
        self.start_pos.lerp(self.end_pos, self.easing.apply(p))
    }
}

/// True when the table starts at 0, has no gaps or overlaps, and ends open.
pub fn segments_are_contiguous(segments: &[PhaseSegment]) -> bool {
    let Some(first) = segments.first() else {
        return false;
    };
    let Some(last) = segments.last() else {
        return false;
    };
    first.range_start == 0.0
        && last.range_end.is_infinite()
        && segments.iter().all(|s| s.range_start < s.range_end)
        && segments
            .windows(2)
            .all(|pair| pair[0].range_end == pair[1].range_start)
}

/// Evaluates the table in order and returns the target for `scroll`.
/// Negative offsets (overscroll bounce) are read as 0.
pub fn phase_target(segments: &[PhaseSegment], scroll: f64, vh: f64) -> Point {
    let scroll = scroll.max(0.0);
    segments
        .iter()
        .find(|s| s.contains(scroll, vh))
        .or(segments.last())
        .map(|s| s.position(scroll, vh))
        .unwrap_or(Point::new(0.0, 0.0))
}

/// Visibility bookkeeping for the observed sections. The observer callback
/// only reports the entries that changed, so the set keeps the rest.
#[derive(Debug, Clone, Default)]
pub struct ObstructionTracker {
    visible: BTreeSet<String>,
}

impl ObstructionTracker {
    /// Returns whether the obstructed state flipped.
    pub fn update(&mut self, section: &str, intersecting: bool) -> bool {
        let before = self.is_obstructed();
        if intersecting {
            self.visible.insert(section.to_string());
        } else {
            self.visible.remove(section);
        }
        before != self.is_obstructed()
    }

    pub fn is_obstructed(&self) -> bool {
        !self.visible.is_empty()
    }
}

/// Paint snapshot for the badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeFrame {
    pub left_vw: f64,
    pub top_vh: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl BadgeFrame {
    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }

    pub fn ring_transform(&self) -> String {
        format!("rotate({}deg)", self.rotation_deg)
    }
}

/// Scroll-driven badge. Ticks every frame for as long as it is mounted.
#[derive(Debug, Clone)]
pub struct BadgeController {
    mode: Mode,
    obstructed: bool,
    scroll_y: f64,
    viewport_height: f64,
    x: MotionState,
    y: MotionState,
    rotation: MotionState,
}

impl BadgeController {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mode = Mode::from_width(viewport_width, BADGE_BREAKPOINT);
        let start = BadgeLayout::for_mode(mode).start;
        Self {
            mode,
            obstructed: false,
            scroll_y: 0.0,
            viewport_height,
            x: MotionState::at(start.x),
            y: MotionState::at(start.y),
            rotation: MotionState::at(0.0),
        }
    }

    /// Only swaps the constant set; interpolation absorbs the jump.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Mode {
        self.mode = Mode::from_width(width, BADGE_BREAKPOINT);
        self.viewport_height = height;
        self.mode
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn set_obstructed(&mut self, obstructed: bool) {
        self.obstructed = obstructed;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_obstructed(&self) -> bool {
        self.obstructed
    }

    pub fn layout(&self) -> &'static BadgeLayout {
        BadgeLayout::for_mode(self.mode)
    }

    pub fn target(&self) -> Point {
        let layout = self.layout();
        if self.obstructed {
            return layout.parked;
        }
        phase_target(&layout.path(), self.scroll_y, self.viewport_height)
    }

    pub fn rotation_target(&self) -> f64 {
        // Grows without bound; the browser wraps the angle when rendering.
        self.scroll_y * ROTATION_PER_PX
    }

    pub fn tick(&mut self) -> BadgeFrame {
        let target = self.target();
        self.x.target = target.x;
        self.y.target = target.y;
        self.rotation.target = self.rotation_target();

        self.x.step(POSITION_EASE);
        self.y.step(POSITION_EASE);
        self.rotation.step(ROTATION_EASE);

        self.frame()
    }

    pub fn frame(&self) -> BadgeFrame {
        let (scale, opacity) = if self.obstructed {
            (OBSTRUCTED_SCALE, OBSTRUCTED_OPACITY)
        } else {
            (1.0, 1.0)
        };
        BadgeFrame {
            left_vw: self.x.current,
            top_vh: self.y.current,
            rotation_deg: self.rotation.current,
            scale,
            opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 900.0;

    fn target_at(layout: &BadgeLayout, y: f64) -> Point {
        phase_target(&layout.path(), y, VH)
    }

    #[test]
    fn both_paths_are_contiguous() {
        assert!(segments_are_contiguous(&BadgeLayout::DESKTOP.path()));
        assert!(segments_are_contiguous(&BadgeLayout::MOBILE.path()));
    }

    #[test]
    fn broken_tables_are_rejected() {
        let mut path = BadgeLayout::DESKTOP.path();
        path[1].range_start = 0.4;
        assert!(!segments_are_contiguous(&path));

        let mut path = BadgeLayout::DESKTOP.path();
        path[2].range_end = 2.0;
        assert!(!segments_are_contiguous(&path));

        assert!(!segments_are_contiguous(&[]));
    }

    #[test]
    fn starts_at_start_point() {
        for layout in [BadgeLayout::DESKTOP, BadgeLayout::MOBILE] {
            assert_eq!(target_at(&layout, 0.0), layout.start);
        }
    }

    #[test]
    fn holds_bottom_left_after_drop() {
        for layout in [BadgeLayout::DESKTOP, BadgeLayout::MOBILE] {
            let rest = Point::new(layout.left_edge_x, layout.bottom_y);
            for y in [0.85 * VH, 0.85 * VH + 1.0, 3.0 * VH, 1e7] {
                assert_eq!(target_at(&layout, y), rest, "y = {}", y);
            }
        }
    }

    #[test]
    fn phase_one_moves_only_horizontally() {
        let layout = BadgeLayout::DESKTOP;
        let mid = target_at(&layout, 0.175 * VH);
        assert_eq!(mid.y, layout.start.y);
        // ease-out cubic at p = 0.5 covers 87.5% of the slide
        assert!((mid.x - (88.0 - 0.875 * 80.0)).abs() < 1e-9);
    }

    #[test]
    fn phase_two_moves_only_vertically() {
        let layout = BadgeLayout::DESKTOP;
        let mid = target_at(&layout, 0.6 * VH);
        assert_eq!(mid.x, layout.left_edge_x);
        assert!((mid.y - (40.0 + 0.75 * 35.0)).abs() < 1e-9);
    }

    #[test]
    fn continuous_across_phase_boundaries() {
        for layout in [BadgeLayout::DESKTOP, BadgeLayout::MOBILE] {
            for boundary in [0.35 * VH, 0.85 * VH] {
                let before = target_at(&layout, boundary - 1e-6);
                let after = target_at(&layout, boundary + 1e-6);
                assert!((before.x - after.x).abs() < 1e-3);
                assert!((before.y - after.y).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn obstruction_parks_regardless_of_scroll() {
        let mut badge = BadgeController::new(1440.0, VH);
        badge.set_obstructed(true);
        for y in [0.0, 200.0, 0.6 * VH, 5000.0] {
            badge.set_scroll(y);
            assert_eq!(badge.target(), BadgeLayout::DESKTOP.parked);
        }
        let frame = badge.tick();
        assert_eq!(frame.scale, 0.8);
        assert_eq!(frame.opacity, 0.4);

        badge.set_obstructed(false);
        let frame = badge.tick();
        assert_eq!((frame.scale, frame.opacity), (1.0, 1.0));
    }

    #[test]
    fn tick_eases_position_and_rotation_independently() {
        let mut badge = BadgeController::new(1440.0, VH);
        badge.set_scroll(1000.0);
        let frame = badge.tick();
        // target (8, 75), start (88, 40)
        assert!((frame.left_vw - (88.0 - 80.0 * 0.08)).abs() < 1e-9);
        assert!((frame.top_vh - (40.0 + 35.0 * 0.08)).abs() < 1e-9);
        assert!((frame.rotation_deg - 250.0 * 0.12).abs() < 1e-9);
    }

    #[test]
    fn rotation_target_is_unbounded() {
        let mut badge = BadgeController::new(1440.0, VH);
        badge.set_scroll(40_000.0);
        assert_eq!(badge.rotation_target(), 10_000.0);
    }

    #[test]
    fn resize_swaps_constants_on_next_tick() {
        let mut badge = BadgeController::new(1440.0, VH);
        assert_eq!(badge.mode(), Mode::Desktop);
        assert_eq!(badge.set_viewport(400.0, 800.0), Mode::Mobile);
        assert_eq!(badge.target(), BadgeLayout::MOBILE.start);
        // current still where the desktop start left it
        assert_eq!(badge.frame().left_vw, 88.0);
    }

    #[test]
    fn tracker_stays_obstructed_while_any_section_visible() {
        let mut tracker = ObstructionTracker::default();
        assert!(tracker.update("services", true));
        assert!(!tracker.update("process", true));
        assert!(!tracker.update("services", false));
        assert!(tracker.is_obstructed());
        assert!(tracker.update("process", false));
        assert!(!tracker.is_obstructed());
    }
}
