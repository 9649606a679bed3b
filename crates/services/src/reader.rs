use std::io::{self, BufRead};

use tokio::sync::mpsc;

/// Spawn the blocking stdin reader for a session.
///
/// Completed lines are delivered one at a time over a single-slot channel,
/// so at most one answer is ever in flight. The task is fire-and-forget:
/// nothing joins it, it lives for the rest of the process, and a read still
/// pending when the session ends is abandoned with it. When stdin reaches
/// end-of-input or fails, the sender is dropped and consumers observe a
/// closed channel.
#[must_use]
pub fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(1);
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                // Receiver is gone; nobody wants further input.
                break;
            }
        }
    });
    rx
}
