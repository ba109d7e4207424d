// src/handlers/mod.rs
pub mod chat;
pub mod docs;
pub mod health;
