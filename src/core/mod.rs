//! Core components of the `marketdash` client.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`DashClient`] and its builder.
//! - The primary [`DashError`] type.
//! - Shared data models ([`Quote`], [`Article`], [`Envelope`]).

/// The main client (`DashClient`), builder, and configuration.
pub mod client;
/// The primary error type (`DashError`) for the crate.
pub mod error;
/// Shared data models used across the fetch and presenter modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::DashClient`
pub use client::{DashClient, DashClientBuilder};
pub use error::DashError;
pub use models::{Article, Envelope, Quote};
