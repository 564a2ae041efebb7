//! license-builder - License file assembly for multi-product suites
//!
//! This library builds SERVER/ISV/FEATURE license files from a structured
//! model of server identity, global template values and product line-items,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_generation`): Catalog, model, expansion, serialization and parsing
//! - **Application Layer** (`application`): Persisted state, use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_builder::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let store = JsonStateStore::new(PathBuf::from(".license-builder/state.json"));
//! let edit = EditLicenseUseCase::new(store, StderrProgressReporter::new());
//! edit.execute(LicenseEdit::AddProduct(ProductType::Cinema4D))?;
//!
//! let generate = GenerateLicenseUseCase::new(
//!     JsonStateStore::new(PathBuf::from(".license-builder/state.json")),
//!     FileSystemWriter::new(),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(),
//! );
//! generate.execute(GenerateRequest::to_stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonStateStore, StdoutPresenter,
    };
    pub use crate::application::dto::{
        Destination, GenerateRequest, GenerateResponse, LicenseEdit, LoadRequest, LoadResponse,
        SearchRequest, SearchResponse,
    };
    pub use crate::application::state::{LicenseState, Preferences, PreferencesPatch, ThemeMode};
    pub use crate::application::use_cases::{
        EditLicenseUseCase, GenerateLicenseUseCase, LoadLicenseUseCase, SearchLicensesUseCase,
    };
    pub use crate::license_generation::domain::{
        Catalog, GlobalInfo, GlobalInfoPatch, LicenseData, ProductDependency, ProductId,
        ProductInstance, ProductPatch, ProductType, ServerInfo, ServerInfoPatch, VmToken,
        VmTokenPatch,
    };
    pub use crate::license_generation::services::{
        DependencyExpander, GlobalApplicator, LicenseParser, LicenseSerializer, ParseDiagnostic,
        ParseOptions, ParseOutcome, ProductArranger, SkipReason, UnknownProductPolicy,
    };
    pub use crate::ports::outbound::{
        LicenseDirectory, LicenseFileReader, LicenseFileWriter, OutputPresenter,
        ProgressReporter, StateRepository,
    };
    pub use crate::shared::error::{ExitCode, LicenseError};
    pub use crate::shared::Result;
}
