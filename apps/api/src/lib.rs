//! Skill matching and experience classification for the job board.
//!
//! `matching` and `profile` are the pure core; the remaining modules wire it
//! into the HTTP service.

pub mod config;
pub mod db;
pub mod errors;
pub mod matching;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;
pub mod store;
