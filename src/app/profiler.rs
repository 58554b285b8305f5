// NetVision - app/profiler.rs
//
// Profiling request lifecycle. Runs the blocking API call on a background
// thread, sending a completion message to the UI thread via an mpsc channel.
//
// Architecture:
//   - `ProfilerManager` lives on the UI thread; `run_profile` runs on a
//     background thread.
//   - Each request gets a fresh channel and a new generation number.
//     Starting a request supersedes the previous one: the old receiver is
//     dropped, and any completion tagged with a stale generation is ignored
//     by the UI (last request wins).
//   - Blocking HTTP calls cannot be interrupted cooperatively; superseded
//     threads run to completion and their send fails harmlessly.

use crate::api::client::{ApiConfig, GenerativeClient};
use crate::core::model::ProfilerProgress;
use crate::util::constants::MAX_PROGRESS_MESSAGES_PER_FRAME;
use std::sync::mpsc;

/// Manages profiling requests on background threads.
pub struct ProfilerManager {
    /// Channel receiver for the UI to poll completion messages.
    progress_rx: Option<mpsc::Receiver<ProfilerProgress>>,

    /// Generation of the most recently started request.
    generation: u64,
}

impl ProfilerManager {
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

    /// Start a profiling request for `target`.
    ///
    /// Spawns a background thread immediately. Any previous request is
    /// superseded. Returns the new request's generation.
    pub fn start_profile(&mut self, target: String, config: ApiConfig) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || run_profile(target, config, generation, tx));

        tracing::info!(generation, "Profiling request started");
        generation
    }

    /// Poll for completion messages without blocking.
    ///
    /// At most MAX_PROGRESS_MESSAGES_PER_FRAME messages are drained per call
    /// so a burst can never stall the render loop.
    pub fn poll_progress(&self) -> Vec<ProfilerProgress> {
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

impl Default for ProfilerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background worker: one blocking call, one completion message.
fn run_profile(
    target: String,
    config: ApiConfig,
    generation: u64,
    tx: mpsc::Sender<ProfilerProgress>,
) {
    let result = GenerativeClient::new(config).and_then(|client| client.profile_target(&target));

    let message = match result {
        Ok(report) => ProfilerProgress::Completed { generation, report },
        Err(e) => {
            tracing::error!(generation, error = %e, "Profiling request failed");
            ProfilerProgress::Failed {
                generation,
                error: e.to_string(),
            }
        }
    };

    // The receiver is gone when a newer request superseded this one.
    if tx.send(message).is_err() {
        tracing::debug!(generation, "Superseded profiling result discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A request against an unresolvable endpoint must surface Failed with
    /// the matching generation, not hang or panic.
    #[test]
    fn test_failed_request_reports_generation() {
        let mut manager = ProfilerManager::new();
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            request_timeout: std::time::Duration::from_secs(2),
            ..ApiConfig::default()
        };
        let generation = manager.start_profile("example.com".to_string(), config);

        // The worker owns the only sender, so recv unblocks when it finishes.
        let rx = manager.progress_rx.as_ref().unwrap();
        let msg = rx
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("worker should send a completion");
        match msg {
            ProfilerProgress::Failed {
                generation: got, ..
            } => assert_eq!(got, generation),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    /// Starting a second request bumps the generation so the UI can discard
    /// completions from the first.
    #[test]
    fn test_generations_increase_per_request() {
        let mut manager = ProfilerManager::new();
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            request_timeout: std::time::Duration::from_secs(2),
            ..ApiConfig::default()
        };
        let first = manager.start_profile("a.example".to_string(), config.clone());
        let second = manager.start_profile("b.example".to_string(), config);
        assert!(second > first);
        assert_eq!(manager.current_generation(), second);
    }
}
