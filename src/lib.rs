/// Macro for prefixed status logging to stderr.
///
/// Usage:
/// ```ignore
/// log_status!("io", "Error reading {}: {}", path.display(), cause);
/// log_status!("scan", "Cannot read directory {}", dir.display());
/// ```
///
/// Always prints, even when output is piped: per-file failures must
/// surface on the console, never silently disappear.
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `navmend::scan` instead of `navmend::core::scan`
pub use crate::core::*;
pub use crate::utils::*;
