//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep boundary layers (HTTP handlers, UIs) decoupled from storage
//!   details by returning explicit outcome values.

pub mod entry_service;
