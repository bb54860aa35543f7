// SPDX-License-Identifier: MPL-2.0
//! `postify` is the desktop companion of the Postify landing page, built with
//! the Iced GUI framework.
//!
//! It renders the landing page with its contact form and informational
//! modals, and reports feedback through a stack of toast notifications.
//! Backend failures are classified into user-facing messages, and an expired
//! session offers a way to reconnect.

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
