use yew::prelude::*;
use log::{info, Level};

mod config;
mod consent;
mod i18n;
mod locale;
mod variant;
mod waitlist;
mod components {
    pub mod consent_dialog;
    pub mod language_switch;
    pub mod legal_modal;
    pub mod waitlist_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
