//! Browser client for the product review analyzer.
//!
//! The crate compiles to WebAssembly and renders a single page: a submission
//! form that sends reviews to the external analysis backend, and a list of
//! previously analyzed reviews with their sentiment and key points.

pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod utils;
