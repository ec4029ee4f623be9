use dioxus::prelude::*;
use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::hooks::use_profile;
use crate::services::random_user::{Profile, ProfileQuery, RandomUserApi, RANDOM_USER_API_BASE};
use crate::utils::{capitalize, display_name, full_name, location_label, FetchState};

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    /// API endpoint, randomuser.me unless overridden
    #[props(default = RANDOM_USER_API_BASE.to_string())]
    pub base_url: String,
    #[props(default)]
    pub query: ProfileQuery,
}

/// Fetches a random profile on mount and renders it
#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let api = RandomUserApi::new()
        .with_base_url(props.base_url.clone())
        .with_query(props.query.clone());
    let state = use_profile(api);

    rsx! {
        ProfileCardBody { state: state.read().clone() }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardBodyProps {
    pub state: FetchState<Profile>,
}

/// Stateless card shell
///
/// Loading shows a live skeleton, a failed request leaves the card hidden
/// (the toast carries the error), and a loaded profile fades in.
#[component]
pub fn ProfileCardBody(props: ProfileCardBodyProps) -> Element {
    let state = &props.state;
    let visibility = if state.is_loaded() {
        "opacity-100"
    } else if state.is_failed() {
        "opacity-0"
    } else {
        "opacity-75"
    };

    rsx! {
        div {
            class: "w-full max-w-md transform transition-all duration-500 hover:scale-[1.02] {visibility}",
            div {
                class: "relative backdrop-blur-sm bg-white/80 rounded-2xl p-8 shadow-lg border border-gray-100",
                if let Some(profile) = state.data() {
                    ProfileDetails { profile: profile.clone() }
                } else if state.is_loading() {
                    ProfileCardSkeleton {}
                } else {
                    div {
                        aria_hidden: "true",
                        SkeletonBars {}
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProfileDetailsProps {
    pub profile: Profile,
}

#[component]
pub fn ProfileDetails(props: ProfileDetailsProps) -> Element {
    let profile = &props.profile;
    let name = display_name(&profile.name);
    let formal_name = full_name(&profile.name);
    let gender = capitalize(&profile.gender);
    let location = location_label(&profile.location);

    rsx! {
        div {
            class: "flex items-start space-x-6",

            // Avatar
            div {
                class: "relative",
                img {
                    src: "{profile.picture.large}",
                    alt: "{name}",
                    class: "w-24 h-24 rounded-full object-cover ring-2 ring-white",
                    loading: "lazy"
                }
                div {
                    class: "absolute inset-0 rounded-full bg-gradient-to-tr from-white/10 to-white/30 pointer-events-none"
                }
            }

            div {
                class: "flex-1",
                div {
                    class: "inline-flex items-center rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-800 mb-2",
                    "Profile"
                }
                h1 {
                    class: "text-2xl font-semibold text-gray-900",
                    title: "{formal_name}",
                    "{name}"
                }
                p {
                    class: "text-gray-500 mt-1",
                    "{gender}"
                }
            }
        }

        div {
            class: "mt-6 space-y-4",
            ContactRow {
                MailIcon { class: "w-5 h-5 mr-3".to_string() }
                span { "{profile.email}" }
            }
            ContactRow {
                PhoneIcon { class: "w-5 h-5 mr-3".to_string() }
                span { "{profile.phone}" }
            }
            ContactRow {
                MapPinIcon { class: "w-5 h-5 mr-3".to_string() }
                span { "{location}" }
            }
        }
    }
}

#[component]
fn ContactRow(children: Element) -> Element {
    rsx! {
        div {
            class: "flex items-center text-gray-600",
            {children}
        }
    }
}

/// Placeholder shown while the request is outstanding
#[component]
pub fn ProfileCardSkeleton() -> Element {
    rsx! {
        div {
            class: "animate-pulse",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            span {
                class: "sr-only",
                "Loading..."
            }

            SkeletonBars {}
        }
    }
}

/// Grey bars matching the ProfileDetails layout
#[component]
fn SkeletonBars() -> Element {
    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "flex items-center space-x-6",
                // Avatar placeholder
                div {
                    class: "h-24 w-24 rounded-full bg-gray-200"
                }
                div {
                    class: "space-y-2 flex-1",
                    div { class: "h-4 w-[250px] max-w-full rounded-md bg-gray-200" }
                    div { class: "h-4 w-[200px] max-w-full rounded-md bg-gray-200" }
                }
            }
            div { class: "h-4 w-[300px] max-w-full rounded-md bg-gray-200" }
            div { class: "h-4 w-[250px] max-w-full rounded-md bg-gray-200" }
        }
    }
}
