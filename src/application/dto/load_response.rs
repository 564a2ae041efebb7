use crate::license_generation::services::ParseDiagnostic;

/// LoadResponse - Outcome of a license file import
#[derive(Debug, Clone)]
pub struct LoadResponse {
    /// Products now in the state (they replaced the previous list)
    pub product_count: usize,
    /// FEATURE lines that were skipped, with the reason
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl LoadResponse {
    pub fn new(product_count: usize, diagnostics: Vec<ParseDiagnostic>) -> Self {
        Self {
            product_count,
            diagnostics,
        }
    }
}
