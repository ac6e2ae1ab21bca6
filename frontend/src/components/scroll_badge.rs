use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::frame::FrameLoop;
use crate::motion::badge::{OBSERVED_SECTIONS, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use crate::motion::{BadgeController, BadgeFrame, ObstructionTracker, Tick};
use crate::viewport;

fn paint(ring: &NodeRef, ring_inner: &NodeRef, frame: &BadgeFrame) {
    if let Some(el) = ring.cast::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("left", &format!("{}vw", frame.left_vw));
        let _ = style.set_property("top", &format!("{}vh", frame.top_vh));
        let _ = style.set_property("opacity", &frame.opacity.to_string());
        let _ = style.set_property("transform", &frame.transform());
    }
    if let Some(el) = ring_inner.cast::<HtmlElement>() {
        let _ = el.style().set_property("transform", &frame.ring_transform());
    }
}

/// Watches the observed sections and feeds the badge's obstruction flag.
/// Returns the observer (to disconnect on teardown) and its callback, which
/// has to outlive it.
fn observe_sections(
    badge: Rc<RefCell<BadgeController>>,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
    let document = web_sys::window()?.document()?;
    let mut tracker = ObstructionTracker::default();

    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if tracker.update(&entry.target().id(), entry.is_intersecting()) {
                debug!("Badge obstructed: {}", tracker.is_obstructed());
            }
        }
        badge.borrow_mut().set_obstructed(tracker.is_obstructed());
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    for id in OBSERVED_SECTIONS {
        match document.get_element_by_id(id) {
            Some(section) => observer.observe(&section),
            None => debug!("Section #{} not found, not observed", id),
        }
    }

    Some((observer, callback))
}

#[function_component(ScrollBadge)]
pub fn scroll_badge() -> Html {
    let badge = use_mut_ref(|| {
        let (width, height) = viewport::size();
        BadgeController::new(width, height)
    });
    let ring = use_node_ref();
    let ring_inner = use_node_ref();

    {
        let badge = badge.clone();
        let ring = ring.clone();
        let ring_inner = ring_inner.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let frame_loop = {
                let badge = badge.clone();
                let window = window.clone();
                FrameLoop::new(move |_| {
                    let frame = {
                        let mut badge = badge.borrow_mut();
                        if let Some(window) = &window {
                            badge.set_scroll(viewport::scroll_y(window));
                        }
                        badge.tick()
                    };
                    paint(&ring, &ring_inner, &frame);
                    // rotation never settles, so neither does the loop
                    Tick::Continue
                })
            };
            frame_loop.request();

            let resize_callback = {
                let badge = badge.clone();
                Closure::wrap(Box::new(move || {
                    let (width, height) = viewport::size();
                    let mut badge = badge.borrow_mut();
                    let before = badge.mode();
                    if badge.set_viewport(width, height) != before {
                        debug!("Scroll badge switched to {:?} mode", badge.mode());
                    }
                }) as Box<dyn FnMut()>)
            };
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                );
            }

            let observation = observe_sections(badge);

            move || {
                drop(frame_loop);
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        }, ());
    }

    let frame = badge.borrow().frame();

    html! {
        <div
            id="ring-layer"
            ref={ring}
            class="scroll-badge"
            style={format!(
                "left: {}vw; top: {}vh; opacity: {}; transform: {};",
                frame.left_vw, frame.top_vh, frame.opacity, frame.transform()
            )}
        >
            <style>{BADGE_STYLES}</style>
            <div ref={ring_inner} class="badge-ring">
                <svg viewBox="0 0 200 200">
                    <defs>
                        <path id="badgePath" d="M 100, 100 m -85, 0 a 85,85 0 1,1 170,0 a 85,85 0 1,1 -170,0" />
                    </defs>
                    <text>
                        <textPath href="#badgePath" startOffset="0%">
                            {"Financial Advisory • Capital Strategy •\u{00a0}"}
                        </textPath>
                    </text>
                </svg>
            </div>
            <div class="badge-mark">{"MTG"}<br/>{"GROUP"}</div>
        </div>
    }
}

const BADGE_STYLES: &str = r#"
.scroll-badge {
    position: fixed;
    width: 90px;
    height: 90px;
    z-index: 900;
    display: flex;
    align-items: center;
    justify-content: center;
    pointer-events: none;
    mix-blend-mode: difference;
    color: #fff;
    overflow: visible;
    transition: opacity 1s;
    will-change: left, top, transform, opacity;
}
@media (min-width: 768px) {
    .scroll-badge { width: 130px; height: 130px; }
}
.badge-ring { position: absolute; inset: 0; overflow: visible; }
.badge-ring svg { width: 100%; height: 100%; fill: currentColor; overflow: visible; }
.badge-ring text {
    font-family: var(--font-mono);
    font-size: 10px;
    font-weight: 700;
    letter-spacing: 1.5px;
    text-transform: uppercase;
}
.badge-mark {
    position: relative;
    z-index: 10;
    text-align: center;
    font-family: var(--font-mono);
    font-weight: 700;
    line-height: 1;
    font-size: 10px;
    letter-spacing: 0.1em;
}
@media (min-width: 768px) {
    .badge-ring text { font-size: 11px; }
    .badge-mark { font-size: 14px; }
}
"#;
