use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: var(--brand-light);
                    color: var(--brand-text);
                    text-align: center;
                    padding: 2rem;
                }
                .not-found h1 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    text-transform: uppercase;
                    margin: 0;
                }
                .not-found .home-link {
                    padding: 1rem 2.5rem;
                    border: 1px solid var(--brand-text);
                    border-radius: 9999px;
                    font-family: var(--font-mono);
                    font-size: 12px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: inherit;
                    text-decoration: none;
                }
                "#}
            </style>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="home-link">
                {"Back to MTG GROUP"}
            </Link<Route>>
        </div>
    }
}
