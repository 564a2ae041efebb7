/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI calls the use cases
/// directly, and the use cases reach files, state and the console
/// through the traits defined here.
pub mod outbound;
