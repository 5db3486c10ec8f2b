use std::sync::Arc;

use crate::{application::ports::payment_gate::PaymentGate, infra::config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub payment_gate: Arc<dyn PaymentGate>,
}
