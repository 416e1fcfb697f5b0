// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbosity flag. Off until a binary turns it on.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }}
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "✅".green(), format!($($arg)*));
    }}
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for warnings that only show in verbose mode.
#[macro_export]
macro_rules! verbose_warn {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::warn!($($arg)*);
        }
    }
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::logging::is_verbose() {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }}
}
