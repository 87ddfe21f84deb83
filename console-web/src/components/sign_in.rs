//! Sign-in boundary rendered when no token is present or a fetch came
//! back 401. The sign-in flow itself lives outside this app; it stores
//! the bearer token this console reads at mount.

use dioxus::prelude::*;

use crate::components::styles::CONSOLE_STYLES;

#[component]
pub fn SignInBoundary(#[props(default = false)] expired: bool) -> Element {
    let message = if expired {
        "Your session has expired."
    } else {
        "You are not signed in."
    };

    rsx! {
        style { {CONSOLE_STYLES} }
        div { class: "signin-boundary",
            div { class: "signin-card",
                h2 { "Fulfillment Console" }
                p { "{message} Sign in to continue." }
                button {
                    class: "action-primary",
                    onclick: move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    },
                    "Go to sign-in"
                }
            }
        }
    }
}
