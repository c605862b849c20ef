//! Leptos 0.7 CSR shell for the Vanilla single-page app
//!
//! Implements the `vanilla-core` platform seams on top of `web-sys` and
//! renders the layout, pages, and widgets with Leptos.
//!
//! ## Architecture
//! - Pure CSR with Leptos 0.7, compiled to `wasm32-unknown-unknown`
//! - Routing, theming, and stores live in `vanilla-core`; this crate only
//!   adapts the browser and draws views
//! - Views talk to the core through a command channel
//!
//! ## Module Structure
//! - `app`: bootstrap and the top-level error panel
//! - `browser`: `web-sys` adapters and DOM listeners
//! - `router`: route table
//! - `pages`: one component per route
//! - `components`: layout chrome and widgets
//! - `state`: signals mirrored from the core and the command handle
//! - `api`: posts endpoint
//! - `config`: inline and build-time configuration
//! - `logging`: console subscriber
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod router;
pub mod state;

pub use app::{bootstrap, run};
pub use error::{Result, UiError};

#[cfg(test)]
mod tests;
