//! Static game content library and read-through handlers.
//!
//! The game client expects a catalogue of configuration, war-season,
//! progression, and news documents. Each is a pre-loaded JSON structure
//! keyed by logical document name and served verbatim; none of these
//! endpoints carries state transitions. The one computed value on this
//! surface is the war clock.
//!
//! ## Core Types
//!
//! - [`Library`] — Document name → pre-loaded JSON, loaded once at startup
//! - [`seconds_since_start`] — Wall-clock seconds since the war start
//!
//! ## HTTP Handlers
//!
//! The [`handlers`] submodule exposes one actix-web route per catalogued
//! document, plus the literal endpoints (war id, customization, discounts).

mod clock;
mod library;
pub mod handlers;

pub use clock::*;
pub use handlers::*;
pub use library::*;
