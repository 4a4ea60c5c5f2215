//! Console logging
//!
//! In the browser everything goes to the devtools console through `web_sys`.
//! Native builds (unit tests, tooling) write to stderr instead, since calling
//! an imported JS function outside wasm32 aborts.
//!
//! Usage:
//! ```rust
//! use medal_pusher_engine::console_log;
//!
//! let medals = 100;
//! console_log!("seeded {} medals", medals);
//! ```

#[doc(hidden)]
pub fn write_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{}", message);
    }
}

#[doc(hidden)]
pub fn write_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("warning: {}", message);
    }
}

/// Log a formatted message to the console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::write_log(&format!($($arg)*))
    };
}

/// Log a formatted warning to the console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::write_warn(&format!($($arg)*))
    };
}
