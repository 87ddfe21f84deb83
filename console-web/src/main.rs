use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use console_web::components::{Console, SignInBoundary};
use console_web::session::{SessionExpired, SessionStore};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let session = use_context_provider(SessionStore::default);
    let expired = use_context_provider(|| SessionExpired(Signal::new(false)));

    let is_expired = (expired.0)();
    let signed_in = session.token().is_some() && !is_expired;

    rsx! {
        if signed_in {
            Console {}
        } else {
            SignInBoundary { expired: is_expired }
        }
    }
}
