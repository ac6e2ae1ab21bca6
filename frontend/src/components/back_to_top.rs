use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

const VISIBLE_AFTER: f64 = 400.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 2.5rem;
                    bottom: 2.5rem;
                    z-index: 1200;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: var(--brand-dark);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: all 0.3s;
                }
                .back-to-top.visible { opacity: 1; pointer-events: auto; }
                .back-to-top:hover { transform: translateY(-8px); }
                .back-to-top svg { width: 24px; height: 24px; }
                "#}
            </style>
            <button
                class={classes!("back-to-top", (scroll_y > VISIBLE_AFTER).then(|| "visible"))}
                onclick={onclick}
                aria-label="Back to Top"
            >
                <svg fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M18 15l-6-6-6 6" />
                </svg>
            </button>
        </>
    }
}
