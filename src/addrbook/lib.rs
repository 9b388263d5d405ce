//! # Addrbook Architecture
//!
//! Addrbook is a contact book library with a small command-line client on top. The library
//! owns every rule about contacts; the binary only parses arguments and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the session: one book, one snapshot store           │
//! │  - Tracks unsaved changes, saves on close                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per user action, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (field.rs, record.rs, book.rs) + Storage (store/)     │
//! │  - Validated fields, records, the keyed book, snapshots     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! Everything from `api.rs` inward takes plain Rust values and returns `Result`s. It never
//! writes to stdout or stderr and never exits the process. Diagnostics go through `tracing`;
//! whoever embeds the library decides whether to install a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: Session facade, the entry point for all operations
//! - [`commands`]: One module per user-facing action
//! - [`book`]: [`AddressBook`], pagination, search, upcoming birthdays
//! - [`record`]: [`Record`], phone list editing and birthday countdown
//! - [`field`]: Validated scalar fields (`Name`, `Phone`, `Birthday`)
//! - [`store`]: Snapshot encoding and storage backends
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod store;

pub use book::AddressBook;
pub use error::{BookError, ErrorKind, Result};
pub use record::Record;
