//! Sixpack Creator - 12-week core training programme service
//!
//! This crate derives week unlocks, completion and progress from a static
//! programme catalog and a per-user completion log, and exposes them (along
//! with user routines and a notification feed) over a JSON API.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
