/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back
/// out, keeping the domain layer isolated from both.
mod generate_request;
mod generate_response;
mod license_edit;
mod load_request;
mod load_response;
mod search_request;
mod search_response;

pub use generate_request::{Destination, GenerateRequest};
pub use generate_response::GenerateResponse;
pub use license_edit::LicenseEdit;
pub use load_request::LoadRequest;
pub use load_response::LoadResponse;
pub use search_request::SearchRequest;
pub use search_response::SearchResponse;
