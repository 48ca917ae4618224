use core::ops::{Add, Mul};

use gcmkit_core::{GcmError, GcmResult, AES_BLOCK_SIZE, GCM_REDUCE_BYTE};
use zeroize::Zeroize;

use crate::tables::{ReductionTable, REDUCTION_TABLE};

/// A GF(2^128) element in GCM bit order: bit 7 of byte 0 is the x^0 coefficient.
///
/// None of these routines are constant-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Zeroize)]
#[repr(transparent)]
pub struct GcmBlock(pub [u8; AES_BLOCK_SIZE]);

impl GcmBlock {
    pub const ZERO: Self = Self([0u8; AES_BLOCK_SIZE]);
    pub const ONE: Self = {
        let mut bytes = [0u8; AES_BLOCK_SIZE];
        bytes[0] = 0x80;
        Self(bytes)
    };

    pub fn from_slice(bytes: &[u8]) -> GcmResult<Self> {
        let bytes: [u8; AES_BLOCK_SIZE] = bytes.try_into().map_err(|_| GcmError::InvalidLength)?;
        Ok(Self(bytes))
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0.iter()) {
            *o ^= *r;
        }
        Self(out)
    }

    /// Multiply by x: shift one bit toward the end, fold the lost bit back in.
    pub fn mul_x(self) -> Self {
        let mut out = [0u8; AES_BLOCK_SIZE];
        let carry = self.0[AES_BLOCK_SIZE - 1] & 1;
        let mut prev_lsb = 0u8;

        for (o, b) in out.iter_mut().zip(self.0.iter()) {
            *o = (*b >> 1) | (prev_lsb << 7);
            prev_lsb = *b & 1;
        }
        // 0x00 or 0xFF
        out[0] ^= GCM_REDUCE_BYTE & carry.wrapping_neg();
        Self(out)
    }

    /// Multiply by x^8 with one lookup in the GCM reduction table.
    #[inline]
    pub fn mul_x8(self) -> Self {
        self.mul_x8_with(&REDUCTION_TABLE)
    }

    /// Same as `mul_x8`, with a caller supplied table in `TableLayout::Generic` form.
    pub fn mul_x8_with(self, table: &ReductionTable) -> Self {
        let reduce = table.get(self.0[AES_BLOCK_SIZE - 1]);
        let mut out = [0u8; AES_BLOCK_SIZE];

        out[1..].copy_from_slice(&self.0[..AES_BLOCK_SIZE - 1]);
        out[0] = (reduce >> 8) as u8;
        out[1] ^= reduce as u8;
        Self(out)
    }

    /// Byte-at-a-time Horner multiplication, reducing through `mul_x8`.
    pub fn mul(self, rhs: Self) -> Self {
        let mut acc = Self::ZERO;

        for byte in self.0.iter().rev() {
            acc = acc.mul_x8();
            let mut v = rhs;
            for bit in 0..8 {
                if *byte & (0x80u8 >> bit) != 0 {
                    acc = acc.add(v);
                }
                v = v.mul_x();
            }
        }
        acc
    }

    /// Bit-serial reference multiplication (one `mul_x` per input bit).
    pub fn mul_bitwise(self, rhs: Self) -> Self {
        let mut z = Self::ZERO;
        let mut v = rhs;

        for i in 0..AES_BLOCK_SIZE * 8 {
            if self.0[i / 8] & (0x80u8 >> (i % 8)) != 0 {
                z = z.add(v);
            }
            v = v.mul_x();
        }
        z
    }
}

impl From<[u8; AES_BLOCK_SIZE]> for GcmBlock {
    fn from(bytes: [u8; AES_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

// Operator Overloads
impl Add for GcmBlock { type Output = Self; fn add(self, rhs: Self) -> Self { self.add(rhs) } }
impl Mul for GcmBlock { type Output = Self; fn mul(self, rhs: Self) -> Self { self.mul(rhs) } }
