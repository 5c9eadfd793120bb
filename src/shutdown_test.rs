//! Tests for graceful shutdown signal handling

use super::*;

const OTHER_SIGNALS: [TermSignal; 3] = [
    TermSignal::Interrupt,
    TermSignal::Quit,
    TermSignal::Hangup,
];

/// Test that SIGTERM gets its own first-line notice
#[test]
fn test_sigterm_notice_is_distinct() {
    assert_eq!(TermSignal::Terminate.notice(), "[runtime] SIGTERM received");
    for signal in OTHER_SIGNALS {
        assert_ne!(signal.notice(), TermSignal::Terminate.notice());
    }
}

/// Test that the other three signals share a generic notice
#[test]
fn test_other_signals_share_generic_notice() {
    for signal in OTHER_SIGNALS {
        assert_eq!(signal.notice(), "[runtime] Other signal received");
    }
}

/// Test that the teardown sequence is exactly three lines in fixed order
#[test]
fn test_teardown_sequence_is_three_fixed_lines() {
    let lines = shutdown_notices(TermSignal::Terminate);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[runtime] SIGTERM received");
    assert_eq!(lines[1], "[runtime] Graceful shutdown in progress ...");
    assert_eq!(lines[2], "[runtime] Graceful shutdown completed");
}

/// Test that lines two and three are identical for every signal
#[test]
fn test_trailing_lines_identical_across_signals() {
    let reference = shutdown_notices(TermSignal::Terminate);
    for signal in OTHER_SIGNALS {
        let lines = shutdown_notices(signal);
        assert_eq!(lines[1], reference[1]);
        assert_eq!(lines[2], reference[2]);
    }
}

/// Test conventional signal names
#[test]
fn test_signal_names() {
    assert_eq!(TermSignal::Interrupt.name(), "SIGINT");
    assert_eq!(TermSignal::Quit.name(), "SIGQUIT");
    assert_eq!(TermSignal::Hangup.name(), "SIGHUP");
    assert_eq!(TermSignal::Terminate.name(), "SIGTERM");
}
