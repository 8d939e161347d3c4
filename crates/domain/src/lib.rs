//! # innkeep-domain
//!
//! Pure domain model for the innkeep hotel inventory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Hotels** (the root of the ownership tree)
//! - Define **Room types** (bed layout, occupancy and base price offered by a hotel)
//! - Define **Rooms** (physical rooms of a hotel, each of a given room type)
//! - Define **Patches** (sparse field sets merged onto a stored entity)
//! - Contain all invariant enforcement that does not need IO
//!
//! Referential checks ("does this hotel exist?") need storage and therefore
//! live in the `app` crate behind validator ports.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod hotel;
pub mod room;
pub mod room_type;
