// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-memory activity reports.
//!
//! This module captures diagnostic events during a session (user actions,
//! warnings and errors surfaced as notifications), stores them in a
//! memory-bounded circular buffer, and exports them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Cheap, cloneable sender used by components
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained on each UI tick
//!   and exported as a JSON activity report from the landing page footer

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use export::{default_export_directory, generate_default_filename};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent};
