//! # Daybook Architecture
//!
//! Daybook is a **UI-agnostic diary library**. The CLI in `main.rs` is just one
//! client of it; the library itself never touches a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core State + Storage (state.rs, journal.rs, store/)        │
//! │  - Pure reducer over the entry list, monotonic id allocator │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The state model
//!
//! All mutation of the diary goes through a single pure reducer
//! ([`state::reduce`]): commands build an [`state::Action`], the
//! [`journal::Journal`] runs the reducer and mirrors every mutating result to
//! durable storage as a full overwrite. Storage is read exactly once per
//! process, by [`journal::Journal::load`], which also seeds the id allocator.
//! See `state.rs` and `journal.rs` for the invariants.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, journal, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Core state** (`state.rs`, `journal.rs`): thorough unit tests of the
//!    reducer, allocator, and loader. This is where the lion's share of
//!    testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 3. **CLI** (`tests/`): end-to-end binary tests against a temp home.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`state`]: Actions, the reducer, and the id allocator
//! - [`journal`]: Load-once state owner with the storage mirror
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core `Entry` type
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod model;
pub mod state;
pub mod store;
