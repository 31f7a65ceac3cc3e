//! # Roster Architecture
//!
//! Roster is a **UI-agnostic admin console** for a list of user records. The terminal
//! binary is one client of it; the state model underneath knows nothing about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, renders the table      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the ConsoleState, notifies listeners on change      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure state transitions over ConsoleState                 │
//! │  - Filter, edit/save/cancel, selection, delete, paging      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract UserSource trait                                │
//! │  - HttpSource (production), FileSource, InMemorySource      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Working Set and Snapshot
//!
//! After the single fetch, records live in two places: the Working Set (what the table
//! shows, mutated by every command) and the Snapshot (captured once, never touched again).
//! A search query of one character or less restores the Working Set from the Snapshot,
//! which also reverts edits and deletes made since load. See [`records`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of every state transition. Most tests live here.
//! 2. **API** (`api.rs`): load behavior and listener notification.
//! 3. **CLI** (`tests/`): drive the binary against a JSON file source.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and listener registry
//! - [`commands`]: State transitions for each console operation
//! - [`source`]: Data source abstraction and implementations
//! - [`records`]: Working Set and Snapshot
//! - [`state`]: The console state container
//! - [`model`]: Core data types (`UserRecord`, `UserId`, `StagedFields`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod source;
pub mod state;
