// src/application/ports/mod.rs
pub mod ids;
pub mod time;
