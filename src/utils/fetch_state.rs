/// State of a single fetch-and-render cycle
///
/// One enum instead of separate `is_loading` / `error` / `data` signals, so a
/// view can never be both loading and failed at once.
///
/// # Examples
///
/// ```ignore
/// let mut state = use_signal(FetchState::<Profile>::default);
///
/// // When the request resolves:
/// state.set(api.fetch_profile().await.into());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request outstanding
    Loading,

    /// Request failed with a message
    Failed(String),

    /// Request resolved with data
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }

    /// Returns the data if loaded
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state: FetchState<u8> = FetchState::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_from_result() {
        let state: FetchState<i32> = Ok::<_, String>(7).into();
        assert!(state.is_loaded());
        assert_eq!(state.data(), Some(&7));

        let state: FetchState<i32> = Err::<i32, _>("HTTP error: 500").into();
        assert!(state.is_failed());
        assert_eq!(state, FetchState::Failed("HTTP error: 500".to_string()));
        assert_eq!(state.data(), None);
    }
}
