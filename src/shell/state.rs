use crate::modules::cart::cart_manager::CartOperations;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<dyn CartOperations>,
}
