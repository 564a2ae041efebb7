/// Mock implementations for testing
mod mock_license_directory;
mod mock_license_file_reader;
mod mock_license_file_writer;
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_state_repository;

#[allow(unused_imports)]
pub use mock_license_directory::MockLicenseDirectory;
#[allow(unused_imports)]
pub use mock_license_file_reader::MockLicenseFileReader;
#[allow(unused_imports)]
pub use mock_license_file_writer::MockLicenseFileWriter;
#[allow(unused_imports)]
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_state_repository::MockStateRepository;
