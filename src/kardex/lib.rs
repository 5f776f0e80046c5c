//! # Kardex Architecture
//!
//! Kardex is a **UI-agnostic inventory record library**. The interactive menu
//! and the subcommands in the binary are thin clients over the same core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the menu loop, prints output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
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
//! │  - One module per operation, returns CmdResult              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, codec.rs, model.rs)                          │
//! │  - Store: ordered records, unique IDs, persist-on-mutation  │
//! │  - StateBackend trait: FileBackend (prod), MemoryBackend    │
//! │    (tests)                                                  │
//! │  - codec: records to/from persisted JSON text               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariants
//!
//! - No two records ever share an `id` at any observable point.
//! - Insertion order is preserved; nothing re-sorts the sequence.
//! - Mutations persist the full sequence before the in-memory state is
//!   swapped, so a failed operation changes nothing on either side.
//! - Read-only queries never touch the persisted resource.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic and result types
//! - [`store`]: The record store and its storage backends
//! - [`codec`]: Textual encoding of the record collection
//! - [`model`]: The `Record` type
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
