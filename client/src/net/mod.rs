//! Networking modules for the club API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the register/login submit actions. Payload shapes live in the
//! shared `wire` crate so the server relay sees the same schema.

pub mod api;
