// src/services/mod.rs
pub mod chat_client;
pub mod edge_cache;
pub mod species_client;
