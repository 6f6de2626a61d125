use log::{info, Level};
use yew::prelude::*;

mod config;
mod nav {
    pub mod controller;
    pub mod debounce;
    pub mod dom;
    pub mod sync;
}
mod components {
    pub mod header;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use components::header::Header;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Header />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Ahlain Dental Hospital single-page site");
    yew::Renderer::<App>::new().render();
}
