use core::fmt;

use crate::tables::ReductionTable;

pub const ENTRIES_PER_LINE: usize = 16;

/// `0x%04Xu, ` tokens, 16 per line, newline after every line.
/// No braces; the caller's source file supplies those.
#[derive(Debug, Clone, Copy)]
pub struct CInitializer<'a> {
    table: &'a ReductionTable,
}

impl<'a> CInitializer<'a> {
    pub fn new(table: &'a ReductionTable) -> Self {
        Self { table }
    }
}

impl fmt::Display for CInitializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, entry) in self.table.iter().enumerate() {
            if j != 0 && j % ENTRIES_PER_LINE == 0 {
                writeln!(f)?;
            }
            write!(f, "0x{:04X}u, ", entry)?;
        }
        writeln!(f)
    }
}
