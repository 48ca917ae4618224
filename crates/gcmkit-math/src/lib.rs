#![no_std]
#![forbid(unsafe_code)]

pub mod tables;
pub mod format;
pub mod block;

pub use block::GcmBlock;
pub use format::CInitializer;
pub use tables::{reference_entry, ReductionTable, TableLayout, REDUCTION_TABLE};
