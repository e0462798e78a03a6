//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate decode and repository calls into use-case level APIs.
//! - Keep transport layers decoupled from storage details.

pub mod candidate_service;
