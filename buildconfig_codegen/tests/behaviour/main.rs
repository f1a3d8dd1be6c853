//! Behavioural tests for module generation using `rstest-bdd`.
//!
//! Step implementations live in [`steps`], shared state in [`fixtures`], and
//! [`scenarios`] binds the feature files to both.

mod fixtures;
mod scenarios;
mod steps;
