//! Version checking layer
//!
//! This module fetches the VLC download page, extracts the advertised release,
//! compares it with the installed version and keeps a history of the results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Checker   │────▶│   History   │
//! │   (HTTP)    │     │ (one cycle) │     │  (SQLite)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │
//!                        ▼       ▼
//!              ┌─────────────┐ ┌─────────────┐
//!              │  Extractor  │ │   Compare   │
//!              │ (scoring)   │ │ (int tuple) │
//!              └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`extractor`]: Picks the most plausible version token from page text
//! - [`compare`]: Integer-tuple version parsing and ordering
//! - [`fetcher`]: Page fetcher trait and its `reqwest` implementation
//! - [`checker`]: Runs one check and folds every failure into the result
//! - [`history`]: Append-only SQLite log of check results
//! - [`error`]: Error types for fetching, parsing and storage
//! - [`types`]: `CheckResult` and `HistoryRow`

pub mod checker;
pub mod compare;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod history;
pub mod types;
