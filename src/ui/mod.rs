// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message`, an `Event` for its parent and a `view` taking a
//! `ViewContext`.
//!
//! # Screens
//!
//! - [`landing`] - Hero, features, pricing and the contact form
//! - [`reconnect`] - Where to sign in again after a lost session
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification stack with timed dismissal
//! - [`modal`] - Single modal dialog with guarded close
//! - [`contact_form`] - Contact form state and validation
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact_form;
pub mod design_tokens;
pub mod landing;
pub mod modal;
pub mod notifications;
pub mod reconnect;
pub mod styles;
pub mod theming;
