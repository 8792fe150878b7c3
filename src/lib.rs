// src/lib.rs
pub mod api;
pub mod banner;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod models;
