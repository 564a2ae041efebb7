/// Application layer - Use cases, DTOs and the persisted state
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod state;
pub mod use_cases;
