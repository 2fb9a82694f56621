// src/services/mod.rs
pub mod coach;
pub mod openai;
pub mod provider;
