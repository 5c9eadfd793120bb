//! Graceful shutdown handling for the function process
//!
//! Subscribes to termination-class signals (SIGINT, SIGQUIT, SIGHUP,
//! SIGTERM) on a dedicated background task. On receipt the task prints a
//! fixed three-line teardown sequence and exits the process with status 0.
//! No resources are held, so no actual cleanup happens; the task never
//! communicates back to request handling.

use tokio::task::JoinHandle;

/// Second teardown line, shared by every signal.
const SHUTDOWN_IN_PROGRESS: &str = "[runtime] Graceful shutdown in progress ...";

/// Third teardown line, shared by every signal.
const SHUTDOWN_COMPLETED: &str = "[runtime] Graceful shutdown completed";

/// Termination-class signals the listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    Interrupt,
    Quit,
    Hangup,
    Terminate,
}

impl TermSignal {
    /// Conventional name of the signal.
    pub fn name(self) -> &'static str {
        match self {
            TermSignal::Interrupt => "SIGINT",
            TermSignal::Quit => "SIGQUIT",
            TermSignal::Hangup => "SIGHUP",
            TermSignal::Terminate => "SIGTERM",
        }
    }

    /// First teardown line. SIGTERM has a distinct notice; the other
    /// three signals share a generic one.
    pub fn notice(self) -> &'static str {
        match self {
            TermSignal::Terminate => "[runtime] SIGTERM received",
            _ => "[runtime] Other signal received",
        }
    }
}

/// The exact lines printed on shutdown, in order.
///
/// Only the first line varies by signal; the remaining two are identical
/// for all four.
pub fn shutdown_notices(signal: TermSignal) -> [&'static str; 3] {
    [signal.notice(), SHUTDOWN_IN_PROGRESS, SHUTDOWN_COMPLETED]
}

/// Register one Unix signal stream.
///
/// # Panics
/// Panics if the handler cannot be registered (OS resource exhaustion).
#[cfg(unix)]
fn register(
    kind: tokio::signal::unix::SignalKind,
    which: TermSignal,
) -> tokio::signal::unix::Signal {
    use tracing::error;

    match tokio::signal::unix::signal(kind) {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, signal = which.name(), "Failed to register signal handler");
            panic!("Cannot register {} handler: {}", which.name(), e);
        }
    }
}

/// Wait for any termination-class signal.
///
/// Blocks indefinitely until one of the four subscribed signals is
/// delivered, then reports which one it was.
#[cfg(unix)]
pub async fn wait_for_signal() -> TermSignal {
    use tokio::signal::unix::SignalKind;

    let mut sigint = register(SignalKind::interrupt(), TermSignal::Interrupt);
    let mut sigquit = register(SignalKind::quit(), TermSignal::Quit);
    let mut sighup = register(SignalKind::hangup(), TermSignal::Hangup);
    let mut sigterm = register(SignalKind::terminate(), TermSignal::Terminate);

    tokio::select! {
        _ = sigint.recv() => TermSignal::Interrupt,
        _ = sigquit.recv() => TermSignal::Quit,
        _ = sighup.recv() => TermSignal::Hangup,
        _ = sigterm.recv() => TermSignal::Terminate,
    }
}

/// Wait for Ctrl+C (non-Unix fallback), reported as an interrupt.
///
/// # Panics
/// Panics if the Ctrl+C handler cannot be registered.
#[cfg(not(unix))]
pub async fn wait_for_signal() -> TermSignal {
    use tracing::error;

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to wait for Ctrl+C");
        panic!("Cannot wait for Ctrl+C: {}", e);
    }
    TermSignal::Interrupt
}

/// Install the signal listener on a dedicated background task.
///
/// The task lives for the rest of the process: it waits for a signal,
/// prints the teardown sequence, then exits with status 0. The lines go to
/// stdout via `println!` — their text and count are an observable contract
/// and must not be subject to log filtering.
pub fn spawn_listener() -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = wait_for_signal().await;
        for line in shutdown_notices(signal) {
            println!("{}", line);
        }
        std::process::exit(0);
    })
}

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod tests;
