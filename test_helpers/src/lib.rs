//! Test helpers shared across the workspace.
//!
//! Provides a `figment::Jail` wrapper for layered settings tests, UTF-8
//! temporary directories backed by `cap_std`, and text helpers for
//! inspecting generated modules.

pub mod figment;
pub mod fs;
pub mod text;
