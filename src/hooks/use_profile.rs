use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::services::random_user::{Profile, RandomUserApi};
use crate::utils::FetchState;

/// User-facing notice shown when the profile can't be loaded
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: Duration,
}

impl ErrorNotice {
    pub fn profile_load_failed() -> Self {
        Self {
            title: "Error",
            description: "Failed to load user data. Please try again.",
            duration: Duration::from_secs(5),
        }
    }
}

/// Hook to fetch one random profile when the calling component mounts
///
/// The request runs once per mount. A failed request raises a single error
/// toast from the task itself, so re-renders never show it twice.
pub fn use_profile(api: RandomUserApi) -> Signal<FetchState<Profile>> {
    let mut state = use_signal(FetchState::<Profile>::default);
    let toast = consume_toast();

    use_hook(move || {
        spawn(async move {
            let result = api.fetch_profile().await;

            match &result {
                Ok(profile) => {
                    log::debug!("Loaded profile for {} {}", profile.name.first, profile.name.last);
                }
                Err(e) => {
                    log::error!("Failed to load profile: {}", e);
                    let notice = ErrorNotice::profile_load_failed();
                    toast.error(
                        notice.title.to_string(),
                        ToastOptions::new()
                            .description(notice.description)
                            .duration(notice.duration)
                            .permanent(false),
                    );
                }
            }

            state.set(result.into());
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_text() {
        let notice = ErrorNotice::profile_load_failed();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, "Failed to load user data. Please try again.");
        assert_eq!(notice.duration, Duration::from_secs(5));
    }
}
