use std::path::PathBuf;

/// Where the generated license text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Hand the text to the output presenter
    Stdout,
    /// Write to this exact path
    File(PathBuf),
    /// Write `<customer id>.lic` into this folder and remember the folder
    Directory(PathBuf),
}

/// GenerateRequest - Request DTO for license file generation
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub destination: Destination,
}

impl GenerateRequest {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    pub fn to_stdout() -> Self {
        Self::new(Destination::Stdout)
    }
}
