use dioxus::prelude::*;

pub mod index;
pub mod not_found;

use index::Index;
use not_found::NotFound;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Index {},

        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// Full-height gradient backdrop that centers the page content
#[component]
fn Layout() -> Element {
    rsx! {
        main {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100 p-4",
            Outlet::<Route> {}
        }
    }
}
