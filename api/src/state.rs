// api/src/state.rs
use crate::config::AppConfig;
use shopping_cart_core::ShopRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub repository: Arc<dyn ShopRepository>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(repository: Arc<dyn ShopRepository>, config: Arc<AppConfig>) -> Self {
    Self { repository, config }
  }
}
