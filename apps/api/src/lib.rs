//! Dream Team API Library
//!
//! Roster management for NBA "dream teams": the roster store that keeps
//! every player on at most one team, its key-value persistence, and the
//! HTTP layer with user registration and token auth.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
