use license_builder::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Status(String),
    Progress {
        current: usize,
        total: usize,
        file: Option<String>,
    },
    Warning(String),
    Completion(String),
}

impl Event {
    fn render(&self) -> String {
        match self {
            Event::Status(message) => message.clone(),
            Event::Progress {
                current,
                total,
                file: Some(file),
            } => format!("Progress: {}/{} - {}", current, total, file),
            Event::Progress {
                current,
                total,
                file: None,
            } => format!("Progress: {}/{}", current, total),
            Event::Warning(message) => format!("Error: {}", message),
            Event::Completion(message) => format!("Completed: {}", message),
        }
    }
}

/// Mock ProgressReporter recording every event in order
///
/// Clones share the same log.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

#[allow(dead_code)]
impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event rendered as one line, prefixed by its kind
    pub fn get_messages(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().map(Event::render).collect()
    }

    /// Only the warnings, rendered like [`MockProgressReporter::get_messages`]
    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, Event::Warning(_)))
            .map(Event::render)
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Event::Status(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(Event::Progress {
            current,
            total,
            file: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(Event::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(Event::Completion(message.to_string()));
    }
}
