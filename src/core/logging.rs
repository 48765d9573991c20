//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade. On wasm the
//! records go to the browser console; natively they go wherever the host
//! installed a logger (nowhere by default).

use log::Level;

/// Install the console logger. Safe to call more than once.
pub fn init_logging(level: Level) {
    #[cfg(target_arch = "wasm32")]
    {
        // Err means a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::set_max_level(level.to_level_filter());
    }
}
