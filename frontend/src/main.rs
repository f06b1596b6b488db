use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils {
    pub mod cyclic;
    pub mod hooks;
    pub mod motion;
    pub mod scroll;
}
mod gallery {
    pub mod catalog;
    pub mod overlay;
    pub mod state;
}
mod components {
    pub mod hero;
    pub mod lightbox;
    pub mod portfolio;
}
mod pages {
    pub mod home;
}

use gallery::catalog::Catalog;
use pages::home::Home;

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
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            info!("Loaded {} portfolio projects", catalog.len());
            catalog
        }
        Err(e) => {
            error!("Failed to load portfolio catalog: {}", e);
            Catalog::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| load_catalog(), ());

    html! {
        <ContextProvider<Rc<Catalog>> context={catalog}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
