// src/presentation/http/controllers/mod.rs
pub mod content_definitions;
pub mod contents;
