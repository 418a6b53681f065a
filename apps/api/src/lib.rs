//! Sporting Team API Library
//!
//! This library provides the core functionality for the team service,
//! including domain logic, repositories, and infrastructure components.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
