#![deny(missing_docs)]

//! Composable concurrency patterns over closable streams.
//!
//! Every primitive takes ownership of its input [`Stream`]s, spawns the tokio task(s) that bridge
//! them and hands back freshly created output streams. Composition happens purely by feeding one
//! primitive's output into another:
//!
//! ```no_run
//! use conflux_patterns_rs::{Context, repeat, take};
//!
//! # async fn run() {
//! let ctx = Context::new();
//! let first = take(&ctx, repeat(&ctx, vec![1, 2, 3]), 7).collect().await;
//! assert_eq!(first, vec![1, 2, 3, 1, 2, 3, 1]);
//! ctx.cancel();
//! # }
//! ```
//!
//! Cancellation is cooperative: each task checks its [`Context`] at every read and write and
//! closes its output on every exit path. All primitives must be called from within a Tokio
//! runtime.

/// Stream-of-streams flattening.
mod bridge;
/// Sequential execution of functions on one dedicated task.
mod confine;
/// Cancellation context.
mod context;
/// Cancellation causes.
mod context_error;
/// Merging of several streams.
mod fan_in;
/// Racing of done signals.
mod or;
/// Cancellation-safe passthrough.
mod or_done;
/// Configuration errors.
mod pattern_error;
/// Cyclic value generator.
mod repeat;
/// Closable stream handle.
mod stream;
/// Stream capacity configuration.
mod stream_config;
/// Cardinality bound.
mod take;
/// One-to-two duplication.
mod tee;
/// Test helpers.
#[cfg(test)]
mod testing;
/// Completion tracker for reader tasks.
mod wait_group;

pub use bridge::bridge;
pub use confine::confine;
pub use context::Context;
pub use context_error::ContextError;
pub use fan_in::fan_in;
pub use or::or;
pub use or_done::or_done;
pub use pattern_error::PatternError;
pub use repeat::repeat;
pub use stream::Stream;
pub use stream_config::StreamConfig;
pub use take::take;
pub use tee::tee;

/// Target under which every primitive emits its `tracing` events.
pub const LOG_TARGET: &str = "conflux::patterns";
