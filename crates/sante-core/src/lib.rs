//! Core types and trait definitions for the Santé et Travail client.
//!
//! No HTTP or database dependencies live here.
//! The client, storage backends and front end all depend on it.

// Native `async fn` in trait impls; the trait signatures spell out `Send`.
#![allow(async_fn_in_trait)]

pub mod auth;
pub mod envelope;
pub mod error;
pub mod model;
pub mod page;
pub mod storage;
pub mod theme;

pub use error::{Error, Result};
