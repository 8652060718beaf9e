use crate::post::PostRecord;

/// Latest result of the post loader.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadState {
    pub fetching: bool,
    pub error: Option<String>,
    pub data: Option<PostRecord>,
}

/// Render-determining classification of the loader result. Derived on
/// every render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Errored(&'a str),
    NotFound,
    Ready(&'a PostRecord),
}

/// First match wins: a stale error must not show while a new fetch is in
/// flight, and a missing record must not be conflated with a failure.
pub fn view_state(load: &LoadState) -> ViewState<'_> {
    if load.fetching {
        ViewState::Loading
    } else if let Some(message) = &load.error {
        ViewState::Errored(message)
    } else {
        match &load.data {
            None => ViewState::NotFound,
            Some(post) => ViewState::Ready(post),
        }
    }
}
