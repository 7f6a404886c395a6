//! Shared application state for all routes.

use crate::repository::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        AppState { repos }
    }
}
