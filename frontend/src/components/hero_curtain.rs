use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::frame::FrameLoop;
use crate::motion::{CurtainController, CurtainFrame, Mode, Panel};
use crate::viewport;

const DARK_IMAGE: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop";
const LIGHT_IMAGE: &str = "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2070&auto=format&fit=crop";

fn paint(light_panel: &NodeRef, divider: &NodeRef, frame: &CurtainFrame) {
    let px = format!("{}px", frame.divider_x);
    if let Some(panel) = light_panel.cast::<HtmlElement>() {
        let _ = panel.style().set_property("width", &px);
    }
    if let Some(line) = divider.cast::<HtmlElement>() {
        let _ = line.style().set_property("left", &px);
    }
}

#[function_component(HeroCurtain)]
pub fn hero_curtain() -> Html {
    let controller = use_mut_ref(|| CurtainController::new(viewport::width()));
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let mode = use_state_eq(|| controller.borrow().mode());
    let dominance = use_state_eq(|| controller.borrow().dominance());
    let focus = use_state_eq(|| controller.borrow().focus());
    let light_panel = use_node_ref();
    let divider = use_node_ref();

    {
        let controller = controller.clone();
        let frame_loop = frame_loop.clone();
        let mode = mode.clone();
        let dominance = dominance.clone();
        let light_panel = light_panel.clone();
        let divider = divider.clone();
        use_effect_with_deps(move |_| {
            {
                let controller = controller.clone();
                let light_panel = light_panel.clone();
                let divider = divider.clone();
                *frame_loop.borrow_mut() = Some(FrameLoop::new(move |_| {
                    let (step, frame) = {
                        let mut curtain = controller.borrow_mut();
                        (curtain.tick(), curtain.frame())
                    };
                    paint(&light_panel, &divider, &frame);
                    dominance.set(frame.dominance);
                    step
                }));
            }

            let window = web_sys::window();
            let resize_callback = {
                let controller = controller.clone();
                Closure::wrap(Box::new(move || {
                    let (before, next, frame) = {
                        let mut curtain = controller.borrow_mut();
                        let before = curtain.mode();
                        (before, curtain.resize(viewport::width()), curtain.frame())
                    };
                    if next != before {
                        debug!("Hero curtain switched to {:?} mode", next);
                    }
                    if next == Mode::Desktop {
                        paint(&light_panel, &divider, &frame);
                    }
                    mode.set(next);
                }) as Box<dyn FnMut()>)
            };
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
                // dropping the loop cancels any pending frame
                frame_loop.borrow_mut().take();
            }
        }, ());
    }

    if mode.is_mobile() {
        let select = |panel: Panel| {
            let controller = controller.clone();
            let focus = focus.clone();
            Callback::from(move |_: MouseEvent| {
                controller.borrow_mut().select(panel);
                focus.set(panel);
            })
        };
        let shown = |panel: Panel| (*focus == panel).then(|| "shown");

        return html! {
            <section class="hero-switcher" aria-label="Strategy Focus Switcher">
                <style>{CURTAIN_STYLES}</style>
                <div class="switcher-stage">
                    <div class={classes!("switcher-panel", "light", shown(Panel::Light))}>
                        <img src={LIGHT_IMAGE} alt="" />
                        <div class="switcher-copy">
                            <span class="eyebrow">{"Individuals / JDG"}</span>
                            <h2>{"Financial"}<br/>{"Advisory"}</h2>
                            <a href="#contact" class="switcher-cta">{"Audit & Plans"}</a>
                        </div>
                    </div>
                    <div class={classes!("switcher-panel", "dark", shown(Panel::Dark))}>
                        <img src={DARK_IMAGE} alt="" />
                        <div class="switcher-copy">
                            <span class="eyebrow">{"Corporations / Entities"}</span>
                            <h2>{"Capital"}<br/>{"Strategy"}</h2>
                            <a href="#contact" class="switcher-cta">{"Management"}</a>
                        </div>
                    </div>
                </div>
                <div class="switcher-buttons">
                    <button
                        onclick={select(Panel::Light)}
                        aria-pressed={(*focus == Panel::Light).to_string()}
                        class={classes!((*focus == Panel::Light).then(|| "selected"))}
                    >
                        {"Individual"}
                    </button>
                    <button
                        onclick={select(Panel::Dark)}
                        aria-pressed={(*focus == Panel::Dark).to_string()}
                        class={classes!((*focus == Panel::Dark).then(|| "selected"))}
                    >
                        {"Corporate"}
                    </button>
                </div>
            </section>
        };
    }

    let onmousemove = {
        let controller = controller.clone();
        let frame_loop = frame_loop.clone();
        Callback::from(move |e: MouseEvent| {
            if controller.borrow_mut().pointer_move(e.client_x() as f64) {
                if let Some(frame_loop) = frame_loop.borrow().as_ref() {
                    frame_loop.request();
                }
            }
        })
    };

    let frame = controller.borrow().frame();
    let emphasised = |panel: Panel| dominance.emphasises(panel).then(|| "emphasised");

    html! {
        <section class="hero-curtain" onmousemove={onmousemove} aria-label="Interactive Strategy Showcase">
            <style>{CURTAIN_STYLES}</style>
            <div class="curtain-dark">
                <img src={DARK_IMAGE} class={classes!("curtain-image", emphasised(Panel::Dark))} alt="" />
                <div class="curtain-inner">
                    <div class="curtain-copy right">
                        <span class="eyebrow">{"Corporations / Entities"}</span>
                        <h2>{"Capital"}<br/>{"Strategy"}</h2>
                        <a href="#contact" class="curtain-cta">{"Strategic Plan"}</a>
                    </div>
                </div>
            </div>

            <div ref={light_panel} class="curtain-light" style={frame.panel_style()}>
                <div class="curtain-light-canvas">
                    <img src={LIGHT_IMAGE} class={classes!("curtain-image", emphasised(Panel::Light))} alt="" />
                    <div class="curtain-inner">
                        <div class="curtain-copy left">
                            <span class="eyebrow">{"Individuals / JDG"}</span>
                            <h2>{"Financial"}<br/>{"Advisory"}</h2>
                            <a href="#contact" class="curtain-cta">{"Audit & Plans"}</a>
                        </div>
                    </div>
                </div>
            </div>

            <div ref={divider} class="curtain-divider" style={frame.divider_style()} aria-hidden="true">
                <div class="curtain-handle">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </section>
    }
}

const CURTAIN_STYLES: &str = r#"
.hero-curtain {
    position: relative;
    width: 100%;
    height: calc(100svh - 80px);
    overflow: hidden;
    background: var(--brand-dark);
    cursor: none;
    z-index: 10;
}
.curtain-dark, .curtain-light {
    position: absolute;
    top: 0;
    bottom: 0;
    left: 0;
    overflow: hidden;
}
.curtain-dark { right: 0; z-index: 1; }
.curtain-light {
    z-index: 2;
    background: var(--brand-light);
    border-right: 1px solid rgba(255, 255, 255, 0.1);
    will-change: width;
}
.curtain-light-canvas { position: relative; width: 100vw; height: 100%; }
.curtain-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.25;
    transition: opacity 1s;
}
.curtain-dark .curtain-image { filter: brightness(0.6); opacity: 0.3; }
.curtain-light .curtain-image { filter: brightness(0.9); opacity: 0.2; }
.curtain-image.emphasised { opacity: 0.8; }
.curtain-inner {
    position: relative;
    max-width: 1280px;
    height: 100%;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
}
.curtain-copy { width: 50%; pointer-events: none; user-select: none; }
.curtain-copy.left { padding-right: 6rem; color: var(--brand-text); }
.curtain-copy.right { margin-left: auto; padding-left: 6rem; color: #fff; }
.curtain-copy h2, .switcher-copy h2 {
    font-family: var(--font-display);
    font-weight: 700;
    font-size: clamp(40px, 5.5vw, 80px);
    line-height: 1;
    text-transform: uppercase;
    margin: 0 0 2rem;
}
.eyebrow {
    display: block;
    margin-bottom: 1rem;
    font-family: var(--font-mono);
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.5;
}
.curtain-cta {
    pointer-events: auto;
    display: inline-block;
    padding: 1.25rem 2.5rem;
    border: 1px solid currentColor;
    border-radius: 9999px;
    color: inherit;
    font-family: var(--font-mono);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    text-decoration: none;
}
.curtain-divider {
    position: absolute;
    top: 0;
    bottom: 0;
    width: 1px;
    z-index: 3;
    background: rgba(255, 255, 255, 0.3);
    pointer-events: none;
    mix-blend-mode: difference;
    will-change: left;
}
.curtain-handle {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 56px;
    height: 56px;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(24px);
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
}
.curtain-handle span { width: 6px; height: 6px; border-radius: 50%; background: #fff; opacity: 0.8; }
.hero-switcher {
    position: relative;
    width: 100%;
    height: 85vh;
    overflow: hidden;
    background: var(--brand-dark);
    z-index: 10;
    display: flex;
    flex-direction: column;
}
.switcher-stage { position: relative; flex: 1; overflow: hidden; }
.switcher-panel {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 1.5rem;
    opacity: 0;
    transform: scale(0.95);
    pointer-events: none;
    z-index: 1;
    transition: all 0.7s cubic-bezier(0.23, 1, 0.32, 1);
}
.switcher-panel.shown { opacity: 1; transform: scale(1); pointer-events: auto; z-index: 2; }
.switcher-panel.light { background: var(--brand-light); color: var(--brand-text); }
.switcher-panel.dark { background: var(--brand-dark); color: #fff; }
.switcher-panel img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.2; }
.switcher-panel.dark img { opacity: 0.4; }
.switcher-copy { position: relative; z-index: 10; }
.switcher-copy h2 { font-size: 40px; line-height: 1.1; }
.switcher-cta {
    display: inline-block;
    padding: 1rem 2.5rem;
    border-radius: 9999px;
    font-family: var(--font-mono);
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    text-decoration: none;
}
.switcher-panel.light .switcher-cta { background: var(--brand-text); color: #fff; }
.switcher-panel.dark .switcher-cta { background: #fff; color: var(--brand-dark); }
.switcher-buttons {
    display: flex;
    justify-content: center;
    gap: 1rem;
    padding: 2rem;
    background: var(--brand-light);
    border-top: 1px solid rgba(0, 0, 0, 0.05);
    z-index: 20;
}
.switcher-buttons button {
    padding: 0.75rem 1.5rem;
    border-radius: 12px;
    border: 1px solid rgba(0, 0, 0, 0.05);
    background: #fff;
    color: var(--brand-text);
    font-family: var(--font-mono);
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    cursor: pointer;
}
.switcher-buttons button.selected { background: var(--brand-text); color: #fff; }
"#;
