use std::io::{self, Write};

use crate::record::{GcmField, GcmRecord};

pub const NUM_VECTORS_DEFINE: &str = "GCM_NUM_VECTORS";

/// `(const uint8_t []){ 0x00u, 0x11u, }` for present data, `NULL` for absent.
/// Empty data keeps the compound literal with an empty body.
pub fn c_byte_array(bytes: Option<&[u8]>) -> String {
    let Some(bytes) = bytes else {
        return "NULL".to_string();
    };
    let body: String = bytes.iter().map(|b| format!("0x{:02X}u, ", b)).collect();
    format!("(const uint8_t []){{ {}}}", body)
}

/// Writes one `gcm_test_vector_t` initializer. `ordinal` is zero-based.
pub fn write_gcm_record<W: Write>(out: &mut W, ordinal: usize, record: &GcmRecord) -> io::Result<()> {
    writeln!(out, "{{")?;
    writeln!(out, "    // {}", ordinal)?;
    writeln!(out, "    .p_key =   {},", c_byte_array(record.get(GcmField::Key)))?;
    writeln!(out, "    .p_iv =    {},", c_byte_array(record.get(GcmField::Iv)))?;
    writeln!(out, "    .aad_len = {},", record.aad_len())?;
    writeln!(out, "    .p_aad =   {},", c_byte_array(record.get(GcmField::Aad)))?;
    writeln!(out, "    .pt_len =  {},", record.pt_len())?;
    writeln!(out, "    .p_pt =    {},", c_byte_array(record.get(GcmField::Pt)))?;
    writeln!(out, "    .ct_len =  {},", record.ct_len())?;
    writeln!(out, "    .p_ct =    {},", c_byte_array(record.get(GcmField::Ct)))?;
    writeln!(out, "    .tag_len = {},", record.tag_len())?;
    writeln!(out, "    .p_tag =   {},", c_byte_array(record.get(GcmField::Tag)))?;
    writeln!(out, "}},")
}

pub fn write_count_define<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    write!(out, "\n\n#define {} {}\n", NUM_VECTORS_DEFINE, count)
}

/// KAT arrays: `0x%02X` joined by `, `, no suffix.
pub fn kat_byte_list(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("0x{:02X}", b)).collect::<Vec<_>>().join(", ")
}
