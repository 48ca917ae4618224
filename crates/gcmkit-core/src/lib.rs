#![no_std]
#[cfg(feature = "std")]
extern crate std;

/// Size of an AES block, and of a GCM field element, in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// Top byte of the GCM polynomial x^128 + x^7 + x^2 + x + 1 in bit-reflected form.
pub const GCM_REDUCE_BYTE: u8 = 0xE1;

/// One reduction entry per possible high byte.
pub const REDUCTION_TABLE_LEN: usize = 256;

// Vector selection defaults (AES-128, 96-bit IV)
pub const GCM_TARGET_KEY_BITS: i64 = 128;
pub const GCM_TARGET_IV_BITS: i64 = 96;

// Group header names used by published GCM vector files.
pub const GROUP_KEY_BITS: &str = "Keylen";
pub const GROUP_IV_BITS: &str = "IVlen";

pub type GcmResult<T> = Result<T, GcmError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcmError {
    /// Input slice does not hold exactly one block.
    InvalidLength,
}

impl core::fmt::Display for GcmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GcmError {}
