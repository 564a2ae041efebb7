/// Use cases module containing application business logic orchestration
mod edit_license;
mod generate_license;
mod load_license;
mod search_licenses;

pub use edit_license::EditLicenseUseCase;
pub use generate_license::GenerateLicenseUseCase;
pub use load_license::LoadLicenseUseCase;
pub use search_licenses::SearchLicensesUseCase;
