//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Services that reference other entities receive only the narrow validator
//! capability of the owning service, never the service itself.

pub mod hotel_service;
pub mod room_service;
pub mod room_type_service;

#[cfg(test)]
pub(crate) mod testing;
