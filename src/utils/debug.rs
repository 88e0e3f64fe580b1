use once_cell::sync::Lazy;

/// Global debug mode flag, read once from `LINKCOST_DEBUG`
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("LINKCOST_DEBUG").is_ok());

/// Print to stderr only when debug mode is enabled
///
/// # Examples
///
/// ```
/// linkcost::debug_println!("config: loaded {}", "config.toml");
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}
