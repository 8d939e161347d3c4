//! # innkeep-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HotelRepository`: persistence for hotels
//!   - `RoomTypeRepository`: persistence for room types, queryable by hotel
//!   - `RoomRepository`: persistence for rooms, queryable by hotel
//! - Define **validator capabilities** services expose to each other:
//!   - `HotelValidator`: "does this hotel exist?"
//!   - `RoomTypeValidator`: "does this room type exist?"
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HotelService`: list, get, create, partially update
//!   - `RoomTypeService`: hotel-scoped list/get, create, partially update
//!   - `RoomService`: hotel-scoped list/get, create, partially update
//!
//! ## Dependency rule
//! Depends on `innkeep-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
