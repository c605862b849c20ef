//! Browser console logging

use std::sync::atomic::{AtomicBool, Ordering};

use vanilla_core::AppConfig;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Route `tracing` events to the browser console at the configured level.
///
/// Only the first call installs a subscriber; it returns `true` for that
/// call and `false` afterwards. Off `wasm32` nothing is installed.
pub fn init(config: &AppConfig) -> bool {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return false;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let layer = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.tracing_level())
            .build();
        tracing_wasm::set_as_global_default_with_config(layer);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;

    true
}
