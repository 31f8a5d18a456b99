//! Teratherm Energy website API.
//!
//! Contact-form intake and the case-study portfolio, backed by an optional
//! MongoDB with a fixed demo fallback for the portfolio.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
