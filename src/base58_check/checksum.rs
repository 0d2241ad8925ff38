use blake_hash::Blake256;
use sha2::{Digest, Sha256};
use std::marker::PhantomData;

pub const CHECKSUM_LENGTH: usize = 4;

/// Integrity digest appended to Base58Check payloads.
pub trait Checksum {
    fn checksum(&self, buffer: &[u8]) -> [u8; CHECKSUM_LENGTH];
}

/// Checksum computed as the first four bytes of `D(D(buffer))`.
pub struct DoubleHash<D> {
    digest: PhantomData<fn() -> D>,
}

impl<D> DoubleHash<D> {
    pub const fn new() -> Self {
        Self { digest: PhantomData }
    }
}

impl<D> Default for DoubleHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> Checksum for DoubleHash<D> {
    fn checksum(&self, buffer: &[u8]) -> [u8; CHECKSUM_LENGTH] {
        let hash = D::digest(&D::digest(buffer));
        let mut checksum = [0u8; CHECKSUM_LENGTH];
        checksum.copy_from_slice(&hash[..CHECKSUM_LENGTH]);
        checksum
    }
}

pub type DoubleSha256 = DoubleHash<Sha256>;

pub const DOUBLE_SHA256: DoubleSha256 = DoubleHash::new();

/// Decred's checksum.
pub type DoubleBlake256 = DoubleHash<Blake256>;

pub const DOUBLE_BLAKE256: DoubleBlake256 = DoubleHash::new();

#[cfg(test)]
mod tests {
    use super::{Checksum, DOUBLE_BLAKE256, DOUBLE_SHA256};

    #[test]
    fn double_sha256() {
        assert_eq!(DOUBLE_SHA256.checksum(&[]), [0x5d, 0xf6, 0xe0, 0xe2]);
        assert_eq!(DOUBLE_SHA256.checksum(&[0x14, 0x00]), [0x83, 0x09, 0xfd, 0xee]);
    }

    #[test]
    fn double_blake256() {
        assert_eq!(DOUBLE_BLAKE256.checksum(&[0x14, 0x00]), [0xd9, 0x29, 0xb3, 0x31]);
    }
}
