/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Welcome and health check endpoints
/// - `auth`: Login and registration
/// - `courses`: Course listing, creation, enrollment and dropping

pub mod auth;
pub mod courses;
pub mod health;
