use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod behavior {
    pub mod contact;
    pub mod delegate;
    pub mod nav;
    pub mod packages;
    pub mod page;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod contact;
    pub mod floating;
    pub mod header;
    pub mod packages;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
