//! Domain Layer
//!
//! The entitlement model with no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tree nodes and the persisted package selection
//! - `value_objects/` - Identifiers and small closed enums
//! - `services/` - Tree mapping and the cascade engine
//! - `ports/` - Interfaces the infrastructure layer implements

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
