//! Hello-world Lambda function with graceful shutdown
//!
//! Two small pieces, neither holding state:
//! - `handler` maps an API Gateway proxy event to a fixed JSON greeting
//!   payload (source IP plus platform metadata), always status 200.
//! - `shutdown` listens for termination-class signals on a background task,
//!   prints a fixed three-line teardown sequence and exits the process.

pub mod handler;
pub mod shutdown;

pub use handler::{function_handler, Greeting, GREETING};
pub use shutdown::{shutdown_notices, spawn_listener, wait_for_signal, TermSignal};
