use crate::services::Recommender;

use super::session::SessionStore;

/// Shared application state
///
/// The recommender owns read-only artifacts behind `Arc`; the session store
/// is the only mutable piece.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(recommender: Recommender, sessions: SessionStore) -> Self {
        Self {
            recommender,
            sessions,
        }
    }
}
