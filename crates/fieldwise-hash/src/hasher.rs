use std::hash::Hasher;

use fieldwise_types::FieldValue;

/// Domain-separated BLAKE3 [`Hasher`] for field values.
///
/// Integer writes are encoded little-endian and `usize` is widened to `u64`,
/// so a value hashes to the same code on every platform and compiler version,
/// unlike `std`'s `DefaultHasher`.
#[derive(Clone)]
pub struct FieldHasher {
    inner: blake3::Hasher,
}

impl FieldHasher {
    /// Domain tag prepended to every hash computation.
    pub const DOMAIN: &'static str = "fieldwise-field-v1";

    pub fn new() -> Self {
        let mut inner = blake3::Hasher::new();
        inner.update(Self::DOMAIN.as_bytes());
        inner.update(b":");
        Self { inner }
    }

    /// The `i32` hash code of a single erased value.
    pub fn hash_code(value: &dyn FieldValue) -> i32 {
        let mut hasher = Self::new();
        value.hash_field(&mut hasher);
        fold(hasher.finish())
    }
}

impl Default for FieldHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FieldHasher {
    fn finish(&self) -> u64 {
        let digest = self.inner.finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(word)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    fn write_u16(&mut self, i: u16) {
        self.write(&i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    fn write_u128(&mut self, i: u128) {
        self.write(&i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }
}

/// Fold a 64-bit hash into 32 bits, high half XOR low half.
fn fold(h: u64) -> i32 {
    (h ^ (h >> 32)) as i32
}
