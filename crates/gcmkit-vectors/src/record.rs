use std::collections::BTreeMap;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::FieldError;

/// Field values of the record being accumulated, still as raw text.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Debug for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

/// The six fields a GCM vector descriptor references, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcmField {
    Key,
    Iv,
    Aad,
    Pt,
    Ct,
    Tag,
}

impl GcmField {
    pub const ALL: [GcmField; 6] = [
        GcmField::Key,
        GcmField::Iv,
        GcmField::Aad,
        GcmField::Pt,
        GcmField::Ct,
        GcmField::Tag,
    ];

    /// Name as spelled in the vector files.
    pub const fn name(self) -> &'static str {
        match self {
            GcmField::Key => "Key",
            GcmField::Iv => "IV",
            GcmField::Aad => "AAD",
            GcmField::Pt => "PT",
            GcmField::Ct => "CT",
            GcmField::Tag => "Tag",
        }
    }

    /// Only the tag is required: its length goes into `tag_len`.
    /// Any other field left out is emitted as `NULL`.
    pub const fn is_required(self) -> bool {
        matches!(self, GcmField::Tag)
    }
}

/// A decoded GCM vector. `None` means the field never appeared;
/// `Some(vec![])` means it appeared with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GcmRecord {
    pub key: Option<Vec<u8>>,
    pub iv: Option<Vec<u8>>,
    pub aad: Option<Vec<u8>>,
    pub pt: Option<Vec<u8>>,
    pub ct: Option<Vec<u8>>,
    pub tag: Option<Vec<u8>>,
}

impl GcmRecord {
    /// Decodes the named fields in output order; the first failure wins.
    /// Fields other than the six named ones are left alone.
    pub fn decode(raw: &RawRecord) -> Result<Self, FieldError> {
        let mut record = GcmRecord::default();

        for field in GcmField::ALL {
            let decoded = match raw.get(field.name()) {
                Some(text) => Some(
                    hex::decode(text).map_err(|source| FieldError::Hex { field: field.name(), source })?,
                ),
                None if field.is_required() => return Err(FieldError::Missing(field.name())),
                None => None,
            };
            *record.slot(field) = decoded;
        }
        Ok(record)
    }

    fn slot(&mut self, field: GcmField) -> &mut Option<Vec<u8>> {
        match field {
            GcmField::Key => &mut self.key,
            GcmField::Iv => &mut self.iv,
            GcmField::Aad => &mut self.aad,
            GcmField::Pt => &mut self.pt,
            GcmField::Ct => &mut self.ct,
            GcmField::Tag => &mut self.tag,
        }
    }

    pub fn get(&self, field: GcmField) -> Option<&[u8]> {
        let value = match field {
            GcmField::Key => &self.key,
            GcmField::Iv => &self.iv,
            GcmField::Aad => &self.aad,
            GcmField::Pt => &self.pt,
            GcmField::Ct => &self.ct,
            GcmField::Tag => &self.tag,
        };
        value.as_deref()
    }

    /// Byte count of a field; absent counts as zero.
    pub fn len_of(&self, field: GcmField) -> usize {
        self.get(field).map_or(0, <[u8]>::len)
    }

    pub fn aad_len(&self) -> usize { self.len_of(GcmField::Aad) }
    pub fn pt_len(&self) -> usize { self.len_of(GcmField::Pt) }
    pub fn ct_len(&self) -> usize { self.len_of(GcmField::Ct) }
    pub fn tag_len(&self) -> usize { self.len_of(GcmField::Tag) }
}
