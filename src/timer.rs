//! Bounded-wait line input.
//!
//! The blocking read runs on a detached background thread that pushes its
//! single result into a one-slot channel. The caller polls the channel every
//! 100 ms, checking the deadline between polls. On timeout the reader is
//! abandoned, not cancelled: a result arriving after the deadline is simply
//! never consumed.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::MoveToColumn,
    execute,
    terminal::{Clear, ClearType},
};

use crate::debug_log;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run `read` on a background thread and wait up to `timeout` for its line.
///
/// Returns `(Some(text), false)` when the read completes in time,
/// `(None, true)` when the deadline elapses first. A failing read degrades to
/// an empty successful read so the caller always progresses.
pub fn wait_for_line<F>(read: F, timeout: Duration) -> (Option<String>, bool)
where
    F: FnOnce() -> io::Result<String> + Send + 'static,
{
    let rx = spawn_reader(read);
    wait_for_result(&rx, timeout, false)
}

/// Print `prompt`, then read one line from stdin with a deadline, rendering a
/// per-second countdown on the prompt line while waiting.
pub fn prompt_with_timeout(prompt: &str, timeout: Duration) -> (Option<String>, bool) {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let rx = spawn_reader(|| {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    });
    let (text, timed_out) = wait_for_result(&rx, timeout, true);
    (
        text.map(|t| t.trim_end_matches(['\r', '\n']).to_string()),
        timed_out,
    )
}

fn spawn_reader<F>(read: F) -> Receiver<String>
where
    F: FnOnce() -> io::Result<String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let text = read().unwrap_or_default();
        // The receiver may already have given up; a late send goes nowhere.
        let _ = tx.send(text);
    });
    rx
}

fn wait_for_result(
    rx: &Receiver<String>,
    timeout: Duration,
    countdown: bool,
) -> (Option<String>, bool) {
    let start = Instant::now();
    let mut shown = u64::MAX;
    loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(text) => {
                if countdown {
                    clear_line();
                }
                return (Some(text), false);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Reader died without sending; treat as an empty read.
                debug_log!("input reader disconnected before sending");
                if countdown {
                    clear_line();
                }
                return (Some(String::new()), false);
            }
        }
        let elapsed = start.elapsed();
        if elapsed >= timeout {
            debug_log!("input deadline of {timeout:?} elapsed");
            if countdown {
                clear_line();
            }
            return (None, true);
        }
        if countdown {
            let remaining = (timeout - elapsed).as_secs();
            if remaining != shown {
                shown = remaining;
                draw_countdown(remaining);
            }
        }
    }
}

fn draw_countdown(seconds: u64) {
    let mut stdout = io::stdout();
    if execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine)).is_err() {
        return;
    }
    print!("  {seconds:2}s left... ");
    let _ = stdout.flush();
}

fn clear_line() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine));
}
