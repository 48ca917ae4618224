use gcmkit_core::{GCM_TARGET_IV_BITS, GCM_TARGET_KEY_BITS, GROUP_IV_BITS, GROUP_KEY_BITS};

use crate::params::GroupParams;

/// Decides whether records under the current group are emitted.
pub trait GroupFilter {
    fn accepts(&self, group: &GroupParams) -> bool;
}

impl<F> GroupFilter for F
where
    F: Fn(&GroupParams) -> bool,
{
    fn accepts(&self, group: &GroupParams) -> bool {
        self(group)
    }
}

/// Exact match on the `Keylen` and `IVlen` header values.
/// A group missing either header, or carrying it as text, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLengthFilter {
    pub key_bits: i64,
    pub iv_bits: i64,
}

impl BitLengthFilter {
    pub fn new(key_bits: i64, iv_bits: i64) -> Self {
        Self { key_bits, iv_bits }
    }
}

impl Default for BitLengthFilter {
    fn default() -> Self {
        Self::new(GCM_TARGET_KEY_BITS, GCM_TARGET_IV_BITS)
    }
}

impl GroupFilter for BitLengthFilter {
    fn accepts(&self, group: &GroupParams) -> bool {
        group.get_int(GROUP_KEY_BITS) == Some(self.key_bits)
            && group.get_int(GROUP_IV_BITS) == Some(self.iv_bits)
    }
}
