//! Client-side tracing. The server installs its own subscriber in `main.rs`;
//! in the browser, booking-flow events go to the developer console.

use tracing::Level;

/// Most verbose level forwarded to the browser console.
pub fn client_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[cfg(feature = "hydrate")]
pub fn init_client_tracing() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(client_log_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
    tracing::debug!("Client tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_level_keeps_booking_transitions_in_debug_builds() {
        let level = client_log_level();
        if cfg!(debug_assertions) {
            assert_eq!(level, Level::DEBUG);
        } else {
            assert_eq!(level, Level::INFO);
        }
    }
}
