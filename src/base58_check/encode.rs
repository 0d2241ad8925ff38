use super::{Alphabet, Checksum, DoubleSha256, Version, ALPHABET, CHECKSUM_LENGTH, DOUBLE_SHA256, VERSION_LENGTH};
use crate::base58::{self, encode::Error};

pub struct Encoder<'a, C = DoubleSha256> {
    encoder: base58::Encoder<'a>,
    checksum: C,
}

impl<'a, C: Checksum> Encoder<'a, C> {
    pub const fn new(alphabet: &'a Alphabet<58>, checksum: C) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
            checksum,
        }
    }

    /// Builds `version ++ payload ++ checksum(version ++ payload)`.
    fn extend_input(&self, payload: &[u8], version: Version) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(VERSION_LENGTH + payload.len() + CHECKSUM_LENGTH);
        buffer.extend_from_slice(&version);
        buffer.extend_from_slice(payload);
        let checksum = self.checksum.checksum(&buffer);
        buffer.extend_from_slice(&checksum);
        buffer
    }

    pub fn encode(&self, payload: impl AsRef<[u8]>, version: Version) -> String {
        self.encoder.encode(self.extend_input(payload.as_ref(), version))
    }

    pub fn encode_into(&self, payload: impl AsRef<[u8]>, version: Version, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(self.extend_input(payload.as_ref(), version), output)
    }
}

impl Encoder<'static> {
    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET, DOUBLE_SHA256);

pub fn encode(payload: impl AsRef<[u8]>, version: Version) -> String {
    Encoder::default().encode(payload, version)
}

pub fn encode_into(payload: impl AsRef<[u8]>, version: Version, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(payload, version, output)
}
