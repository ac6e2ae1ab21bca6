// Host-side scenarios for the curtain and badge controllers. These drive the
// same state machines the components tick from requestAnimationFrame.

use mtg_frontend::motion::badge::{segments_are_contiguous, BADGE_BREAKPOINT};
use mtg_frontend::motion::curtain::CURTAIN_BREAKPOINT;
use mtg_frontend::motion::{
    BadgeController, BadgeLayout, CurtainController, Dominance, Mode, Panel, Tick,
};

const VH: f64 = 900.0;

fn settle_badge(badge: &mut BadgeController) {
    for _ in 0..2_000 {
        badge.tick();
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn pointer_sweep_settles_on_the_pointer() {
    let mut curtain = CurtainController::new(1280.0);
    assert_eq!(curtain.mode(), Mode::Desktop);
    assert_eq!(curtain.divider().current, 640.0);

    assert!(curtain.pointer_move(1200.0));
    // The loop is already running, so a second move only retargets.
    assert!(!curtain.pointer_move(1180.0));

    let mut ticks = 0;
    while curtain.tick() == Tick::Continue {
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert!(ticks > 0);
    assert_eq!(curtain.divider().current, 1180.0);
    assert_eq!(curtain.dominance(), Dominance::Dark);
    assert!(!curtain.is_running());

    // Idle again: the next move has to wake the loop.
    assert!(curtain.pointer_move(100.0));
    while curtain.tick() == Tick::Continue {}
    assert_eq!(curtain.dominance(), Dominance::Light);
    assert_eq!(curtain.frame().panel_style(), "width: 100px;");
}

#[test]
fn curtain_ignores_pointer_below_breakpoint() {
    let mut curtain = CurtainController::new(CURTAIN_BREAKPOINT - 1.0);
    assert_eq!(curtain.mode(), Mode::Mobile);
    assert!(!curtain.pointer_move(10.0));
    assert_eq!(curtain.tick(), Tick::Settled);

    curtain.select(Panel::Dark);
    assert_eq!(curtain.focus(), Panel::Dark);
}

#[test]
fn curtain_recenters_when_returning_to_desktop() {
    let mut curtain = CurtainController::new(1400.0);
    curtain.pointer_move(50.0);
    curtain.tick();

    assert_eq!(curtain.resize(700.0), Mode::Mobile);
    assert_eq!(curtain.resize(1000.0), Mode::Desktop);
    assert_eq!(curtain.divider().current, 500.0);
    assert_eq!(curtain.divider().target, 500.0);
}

#[test]
fn badge_follows_the_scroll_path() {
    let mut badge = BadgeController::new(1440.0, VH);
    let layout = BadgeLayout::DESKTOP;
    assert!(segments_are_contiguous(&layout.path()));

    let start = badge.target();
    assert!(close(start.x, layout.start.x) && close(start.y, layout.start.y));

    badge.set_scroll(0.35 * VH);
    let corner = badge.target();
    assert!(close(corner.x, layout.left_edge_x) && close(corner.y, layout.start.y));

    badge.set_scroll(3.0 * VH);
    settle_badge(&mut badge);
    let frame = badge.frame();
    assert!(close(frame.left_vw, layout.left_edge_x));
    assert!(close(frame.top_vh, layout.bottom_y));
    assert!(close(frame.rotation_deg, 3.0 * VH * 0.25));
}

#[test]
fn badge_parks_while_a_section_is_visible() {
    let mut badge = BadgeController::new(1440.0, VH);
    badge.set_scroll(0.5 * VH);
    badge.set_obstructed(true);
    settle_badge(&mut badge);

    let frame = badge.frame();
    assert!(close(frame.left_vw, BadgeLayout::DESKTOP.parked.x));
    assert!(close(frame.top_vh, BadgeLayout::DESKTOP.parked.y));
    assert_eq!(frame.scale, 0.8);
    assert_eq!(frame.opacity, 0.4);

    badge.set_obstructed(false);
    assert_eq!(badge.frame().opacity, 1.0);
}

#[test]
fn badge_switches_constant_set_on_resize() {
    let mut badge = BadgeController::new(BADGE_BREAKPOINT, VH);
    assert_eq!(badge.mode(), Mode::Desktop);
    assert_eq!(badge.set_viewport(BADGE_BREAKPOINT - 0.5, VH), Mode::Mobile);

    settle_badge(&mut badge);
    let frame = badge.frame();
    assert!(close(frame.left_vw, BadgeLayout::MOBILE.start.x));
    assert!(close(frame.top_vh, BadgeLayout::MOBILE.start.y));
}
