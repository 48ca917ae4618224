//! Converts published block-structured test vector files into C initializer data.
//!
//! Two record shapes are supported: GCM vectors grouped under `[Name = value]`
//! headers (`gcm`), and COUNT-numbered AES known-answer tests (`kat`).
#![forbid(unsafe_code)]

pub mod error;
pub mod line;
pub mod params;
pub mod filter;
pub mod record;
pub mod emit;
pub mod gcm;
pub mod kat;

pub use error::{FieldError, VectorError};
pub use filter::{BitLengthFilter, GroupFilter};
pub use gcm::GcmVectorIngest;
pub use kat::{KatIngest, KatRecord};
pub use line::Line;
pub use params::{GroupParams, ParamValue};
pub use record::{GcmField, GcmRecord, RawRecord};
