/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, saved state, console).
pub mod license_directory;
pub mod license_file_reader;
pub mod license_file_writer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod state_repository;

pub use license_directory::LicenseDirectory;
pub use license_file_reader::LicenseFileReader;
pub use license_file_writer::LicenseFileWriter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use state_repository::StateRepository;
