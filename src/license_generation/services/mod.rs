mod dependency_expander;
mod global_applicator;
mod license_parser;
mod license_serializer;
mod product_arranger;

pub use dependency_expander::DependencyExpander;
pub use global_applicator::GlobalApplicator;
pub use license_parser::{
    LicenseParser, ParseDiagnostic, ParseOptions, ParseOutcome, SkipReason, UnknownProductPolicy,
};
pub use license_serializer::LicenseSerializer;
pub use product_arranger::ProductArranger;
