use dioxus::prelude::*;
use crate::components::ProfileCard;

#[component]
pub fn Index() -> Element {
    rsx! {
        document::Title { "Random Profile" }
        ProfileCard {}
    }
}
