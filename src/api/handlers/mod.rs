// src/api/handlers/mod.rs
mod health;
mod math;

pub use health::health_check;
pub use math::calculate;
