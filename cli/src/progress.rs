use crate::ui;
use std::time::Instant;

/// Step-based progress reporting for CLI operations
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<&'static str>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps(mut self, steps: Vec<&'static str>) -> Self {
        self.steps = steps;
        self
    }

    /// Announce the next step
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    /// Mark the current step as done and move on
    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    /// Skip the current step with a reason
    pub fn skip_step(&mut self, reason: &str) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::warning_message(&format!("Skipped: {} ({})", step, reason));
            self.current_step += 1;
        }
    }

    /// Report the whole operation as finished
    pub fn complete(&self) {
        let seconds = self.start_time.elapsed().as_secs();
        let elapsed = if seconds == 0 {
            "under a second".to_string()
        } else {
            format!("{seconds} seconds")
        };
        ui::success_message(&format!("{} completed in {}", self.operation_name, elapsed));
    }
}
