//! Analysts domain state and auth backend integration

use crate::AnalystRepositories;
use axum::extract::FromRef;
use crewdesk_auth::AuthBackend;

/// Application state for the Analysts domain
#[derive(Clone)]
pub struct AnalystsState {
    pub repos: AnalystRepositories,
    pub auth: AuthBackend,
}

impl FromRef<AnalystsState> for AuthBackend {
    fn from_ref(state: &AnalystsState) -> Self {
        state.auth.clone()
    }
}
