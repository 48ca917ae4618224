use gcmkit_core::{GCM_REDUCE_BYTE, REDUCTION_TABLE_LEN};

use crate::format::CInitializer;

/// How the 16-bit entries are laid out for the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Entry high byte lands in block byte 0, low byte in block byte 1.
    #[default]
    Generic,
    /// Byte-swapped entries, for word-wise reduction on little-endian hosts.
    LittleEndian,
}

/// Reduction constants for multiplying a GCM block by x^8.
///
/// Entry `j` is the correction XORed into the two leading bytes of the block
/// when `j` is the byte shifted out of the far end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionTable {
    entries: [u16; REDUCTION_TABLE_LEN],
}

impl ReductionTable {
    /// Builds the table from the 8 single-bit contributions.
    /// Every other entry follows by linearity over GF(2).
    pub const fn generate(reduce_byte: u8) -> Self {
        let mut entries = [0u16; REDUCTION_TABLE_LEN];
        let mut i = 0;

        while i < 8 {
            let contribution = (reduce_byte as u16) << (i + 1);
            let mut j = 0;
            while j < REDUCTION_TABLE_LEN {
                if j & (1 << i) != 0 {
                    entries[j] ^= contribution;
                }
                j += 1;
            }
            i += 1;
        }

        Self { entries }
    }

    #[inline(always)]
    pub const fn get(&self, high_byte: u8) -> u16 {
        self.entries[high_byte as usize]
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.entries
    }

    pub fn iter(&self) -> core::slice::Iter<'_, u16> {
        self.entries.iter()
    }

    /// Returns a copy rearranged for the given consumer layout.
    pub const fn layout(&self, layout: TableLayout) -> Self {
        match layout {
            TableLayout::Generic => *self,
            TableLayout::LittleEndian => {
                let mut entries = self.entries;
                let mut j = 0;
                while j < REDUCTION_TABLE_LEN {
                    entries[j] = entries[j].swap_bytes();
                    j += 1;
                }
                Self { entries }
            }
        }
    }

    /// Text form for pasting into a `uint16_t[256]` initializer.
    pub fn c_initializer(&self) -> CInitializer<'_> {
        CInitializer::new(self)
    }
}

impl<'a> IntoIterator for &'a ReductionTable {
    type Item = &'a u16;
    type IntoIter = core::slice::Iter<'a, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Recomputes one entry by shifting `high_byte` out one bit at a time.
/// Slow; used to cross-check `generate`.
pub const fn reference_entry(reduce_byte: u8, high_byte: u8) -> u16 {
    let mut acc = 0u16;
    let mut pending = high_byte;
    let mut step = 0;

    while step < 8 {
        let carry = pending & 1;
        pending >>= 1;
        acc >>= 1;
        if carry != 0 {
            acc ^= (reduce_byte as u16) << 8;
        }
        step += 1;
    }
    acc
}

/// The GCM table, generated at compile time. Lives in .rodata.
pub static REDUCTION_TABLE: ReductionTable = ReductionTable::generate(GCM_REDUCE_BYTE);
