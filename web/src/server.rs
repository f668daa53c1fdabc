use leptos::prelude::*;
use leptos::server;

use crate::config::SalonConfig;

#[server]
pub async fn get_salon_config() -> Result<SalonConfig, ServerFnError> {
    match SalonConfig::from_env() {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::error!("Invalid salon configuration: {}", e);
            Err(ServerFnError::new(format!("Configuration error: {}", e)))
        }
    }
}
