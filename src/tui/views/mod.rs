//! Per-view renderers.

pub mod dashboard;
pub mod home;
