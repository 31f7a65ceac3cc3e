//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Parses arguments and console lines
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions for the process arguments and for each console line
//! - `commands.rs`: config resolution, the one-shot `list` command and the interactive shell
//! - `render.rs`: table, message and error rendering (returns strings)
//! - `logging.rs`: `tracing` subscriber setup
//!
//! The shell subscribes a listener to the API that redraws the table after every state
//! change, so handlers only print the messages an operation produced.

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
