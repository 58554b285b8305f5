// NetVision - app/analyzer.rs
//
// Log-analysis request lifecycle. Same shape as app::profiler: one blocking
// call per background thread, completion over an mpsc channel, generation
// numbers for last-request-wins.
//
// Truncation to the prompt bound happens here, on the worker side, so the
// completion message can report exactly what was submitted.

use crate::api::client::{ApiConfig, GenerativeClient};
use crate::api::prompt;
use crate::core::model::AnalyzerProgress;
use crate::util::constants::MAX_PROGRESS_MESSAGES_PER_FRAME;
use std::sync::mpsc;

/// Manages log-analysis requests on background threads.
pub struct AnalyzerManager {
    progress_rx: Option<mpsc::Receiver<AnalyzerProgress>>,
    generation: u64,
}

impl AnalyzerManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            generation: 0,
        }
    }

    /// Generation of the request whose completion the UI is waiting for.
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Start an analysis of `log_input`. Any previous request is superseded.
    /// Returns the new request's generation.
    pub fn start_analysis(&mut self, log_input: String, config: ApiConfig) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || run_analysis(log_input, config, generation, tx));

        tracing::info!(generation, "Analysis request started");
        generation
    }

    /// Poll for completion messages without blocking.
    pub fn poll_progress(&self) -> Vec<AnalyzerProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while messages.len() < MAX_PROGRESS_MESSAGES_PER_FRAME {
                match rx.try_recv() {
                    Ok(msg) => messages.push(msg),
                    Err(_) => break,
                }
            }
        }
        messages
    }
}

impl Default for AnalyzerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background worker: truncate, one blocking call, one completion message.
fn run_analysis(
    log_input: String,
    config: ApiConfig,
    generation: u64,
    tx: mpsc::Sender<AnalyzerProgress>,
) {
    let (submitted, truncated) = prompt::truncate_log_input(&log_input);
    let input_chars = submitted.chars().count();
    if truncated {
        tracing::warn!(generation, input_chars, "Log input truncated to prompt bound");
    }

    let result = GenerativeClient::new(config).and_then(|client| client.analyze_log(submitted));

    let message = match result {
        Ok(markdown) => AnalyzerProgress::Completed {
            generation,
            markdown,
            input_chars,
            truncated,
        },
        Err(e) => {
            tracing::error!(generation, error = %e, "Analysis request failed");
            AnalyzerProgress::Failed {
                generation,
                error: e.to_string(),
            }
        }
    };

    if tx.send(message).is_err() {
        tracing::debug!(generation, "Superseded analysis result discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_request_reports_generation() {
        let mut manager = AnalyzerManager::new();
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            request_timeout: std::time::Duration::from_secs(2),
            ..ApiConfig::default()
        };
        let generation = manager.start_analysis("22/tcp open ssh".to_string(), config);

        let rx = manager.progress_rx.as_ref().unwrap();
        let msg = rx
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("worker should send a completion");
        match msg {
            AnalyzerProgress::Failed {
                generation: got, ..
            } => assert_eq!(got, generation),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
