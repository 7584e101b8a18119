//! Ringboot library exports.
//!
//! The binary in `main.rs` is a thin CLI over these modules; integration
//! tests use them directly.

pub mod commands;
pub mod common;
pub mod config;
pub mod describe;
pub mod image;
pub mod layout;
pub mod verify;

pub use describe::{describe_image, ImageReport};
pub use image::{build_image, BootImage};
pub use verify::{check_image, verify_image, VerifyFailure};
