//! Brandframe - brand-colored frames for social media posts
//!
//! Composes a main image and a company logo into a platform-sized PNG with
//! rails in the logo's dominant color, an optional caption overlay and the
//! company website. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
