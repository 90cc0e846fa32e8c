//! Logging abstraction
//!
//! Unified logging macros for library code:
//! - Firmware (`rp2040` feature): forwards to defmt (RTT transport)
//! - Host tests: prints to stdout/stderr
//! - Host non-test: no-op
//!
//! Format strings must stay within the subset both defmt and `core::fmt`
//! understand: `{}` and `{:?}`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
