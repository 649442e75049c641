// src/core/mod.rs
pub mod allomorph;
pub mod engine;
pub mod renderer;
pub mod resolver;
pub mod tables;
pub mod tokenizer;
pub mod types;
