// ============================================================================
// Logging Bootstrap
// Optional tracing subscriber for binaries and tests
// ============================================================================
//
// The library itself only emits `tracing` events:
// - trace: parsing dropped digits beyond the integer width
// - debug: division by zero returned (0, dividend)

use tracing::Level;

/// Install a global `fmt` subscriber filtered at `level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
