/// Result alias used across the crate.
/// Domain and adapter errors are `LicenseError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
