//! WASM entry point for the Vanilla UI
//!
//! Trunk compiles this to WASM; everything else happens in
//! [`vanilla_ui::run`].

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    vanilla_ui::run();
}
