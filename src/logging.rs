use tracing::subscriber::SetGlobalDefaultError;

/// Installs a compact `tracing` subscriber as the global default.
///
/// Only binaries call this; the library emits events and leaves the choice of
/// subscriber to its caller.
pub fn init() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt().compact().finish();
    tracing::subscriber::set_global_default(subscriber)
}
