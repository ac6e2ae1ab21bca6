use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_LINKS;

const SCROLLED_AFTER: f64 = 50.0;

fn lock_body_scroll(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    // _eq so scrolling only re-renders when the threshold is crossed
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    is_scrolled.set(window.scroll_y().unwrap_or(0.0) > SCROLLED_AFTER);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    {
        use_effect_with_deps(move |open| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        }, *menu_open);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 80px;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    background: var(--brand-light);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }
                .site-header.scrolled {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                @media (min-width: 768px) {
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                    }
                }
                .header-content {
                    width: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .header-logo {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    text-transform: uppercase;
                    font-family: var(--font-mono);
                    letter-spacing: 0.22em;
                    text-decoration: none;
                    color: transparent;
                    -webkit-text-stroke: 1.1px var(--brand-text);
                }
                .header-logo .mark { font-size: 14px; font-weight: 700; }
                .header-logo .group { font-size: 12px; font-weight: 600; }
                .header-nav { display: none; gap: 2rem; }
                @media (min-width: 768px) {
                    .header-nav { display: flex; }
                }
                .header-nav a {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    text-transform: uppercase;
                    color: inherit;
                    text-decoration: none;
                }
                .header-nav a:hover { color: var(--brand-accent); }
                .burger-menu {
                    position: relative;
                    z-index: 1102;
                    width: 44px;
                    height: 44px;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 12px;
                    background: transparent;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 5px;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 20px;
                    height: 2px;
                    background: var(--brand-text);
                    transition: all 0.3s;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .menu-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1099;
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s;
                }
                .menu-backdrop.open { opacity: 1; pointer-events: auto; }
                .menu-panel {
                    position: fixed;
                    top: 0;
                    right: 0;
                    z-index: 1100;
                    width: 100%;
                    height: 100%;
                    padding: 6rem 2.5rem 2.5rem;
                    background: var(--brand-light);
                    border-left: 1px solid rgba(0, 0, 0, 0.1);
                    transform: translateX(100%);
                    transition: transform 0.5s;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                @media (min-width: 768px) {
                    .menu-panel { width: 360px; }
                }
                .menu-panel.open { transform: translateX(0); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
                .menu-panel a {
                    font-family: var(--font-mono);
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 14px;
                    padding: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 12px;
                    color: inherit;
                    text-decoration: none;
                }
                .menu-panel a:hover { background: var(--brand-dark); color: #fff; }
                "#}
            </style>
            <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
                <div class="header-content">
                    <a href="#top" class="header-logo" aria-label="MTG GROUP Home">
                        <span class="mark">{"MTG"}</span>
                        <span class="group">{"GROUP"}</span>
                    </a>

                    <nav class="header-nav" aria-label="Main Navigation">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.href}>{link.name}</a>
                        }) }
                    </nav>

                    <button
                        class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Close Menu" } else { "Open Menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-navigation"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            <div
                class={classes!("menu-backdrop", (*menu_open).then(|| "open"))}
                onclick={close_menu.clone()}
                aria-hidden="true"
            />

            <div
                id="mobile-navigation"
                class={classes!("menu-panel", (*menu_open).then(|| "open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                { for NAV_LINKS.iter().map(|link| html! {
                    <a key={link.name} href={link.href} onclick={close_menu.clone()}>{link.name}</a>
                }) }
            </div>
        </>
    }
}
