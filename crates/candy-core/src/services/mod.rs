//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports (trait interfaces)
//! and domain logic. They don't know about concrete implementations.

mod candy_service;

pub use candy_service::CandyService;
