use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_hook(|| {
        log::warn!("No route matches {}", path);
    });

    rsx! {
        div {
            class: "text-center",
            h1 {
                class: "text-4xl font-bold mb-4",
                "404"
            }
            p {
                class: "text-xl text-gray-600 mb-4",
                "Oops! Page not found"
            }
            Link {
                to: crate::routes::Route::Index {},
                class: "text-blue-500 hover:text-blue-700 underline",
                "Return to Home"
            }
        }
    }
}
