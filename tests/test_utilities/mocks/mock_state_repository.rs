use license_builder::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock StateRepository keeping the state in memory
///
/// Clones share the same storage, so a test can keep one handle and
/// inspect what a use case saved through another.
#[derive(Default, Clone)]
pub struct MockStateRepository {
    state: Arc<Mutex<LicenseState>>,
    saves: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: LicenseState) -> Self {
        let repository = Self::default();
        *repository.state.lock().unwrap() = state;
        repository
    }

    pub fn state(&self) -> LicenseState {
        self.state.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl StateRepository for MockStateRepository {
    fn load(&self) -> Result<LicenseState> {
        Ok(self.state())
    }

    fn save(&self, state: &LicenseState) -> Result<()> {
        *self.state.lock().unwrap() = state.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
