//! Civil-time conversion between a pair of time zones.
//!
//! This crate provides the converter used by tzpair-cli:
//! - `civil` for wall-clock date/time values and their parsing
//! - `zone` for resolving zone names against the IANA database
//! - `convert` for civil -> absolute -> civil conversion with DST correction
//! - `status` for a zone's live offset and DST flag
//! - `pair` for the source/target zone pair a session works between
//! - `config` for the persisted zone pair

pub mod civil;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod pair;
pub mod status;
pub mod zone;

pub use civil::{AbsoluteInstant, CivilInstant};
pub use convert::{
    convert, convert_named, fixed_offset_to_absolute, offset_minutes_at, to_absolute, to_civil,
    variable_offset_to_absolute,
};
pub use error::{TzPairError, TzPairResult};
pub use pair::ZonePair;
pub use status::{OffsetStatus, current_offset_status, offset_status_at};
pub use zone::{Zone, format_offset};
