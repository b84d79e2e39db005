//! # CourseHub Shared Library
//!
//! Domain types and persistence used by the CourseHub API server.
//!
//! ## Module Organization
//!
//! - `store`: JSON file record store behind the `RecordStore` trait
//! - `models`: Typed users and courses over the store
//! - `enrollment`: Enroll and drop workflow
//! - `auth`: Password hashing

pub mod auth;
pub mod enrollment;
pub mod models;
pub mod store;

/// Current version of the CourseHub shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
