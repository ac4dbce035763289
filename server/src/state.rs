use std::sync::Arc;

use crate::store::UserStore;

/// Shared handler state. Cloning only bumps the store's reference count.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
