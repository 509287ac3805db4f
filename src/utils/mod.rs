// ============================================================================
// Utilities Module
// Helpers for applications embedding the long integer types
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

// Re-export logging bootstrap (requires "logging" feature)
#[cfg(feature = "logging")]
pub use logging::init_logging;
