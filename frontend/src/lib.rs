use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod chat;
pub mod components;
pub mod config;
pub mod content;
pub mod frame;
pub mod lead_form;
pub mod motion;
pub mod services;
pub mod viewport;

pub mod pages {
    pub mod home;
    pub mod not_found;
}

use components::header::Header;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
