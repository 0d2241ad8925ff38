use super::{Alphabet, Checksum, DoubleSha256, Version, ALPHABET, CHECKSUM_LENGTH, DOUBLE_SHA256, VERSION_LENGTH};
use crate::base58;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    /// The decoded bytes cannot hold a version and a checksum.
    #[error("Invalid format: version and/or checksum bytes missing")]
    InvalidFormat,
    #[error("Invalid checksum '{}' ('{}' expected)", HexSlice::new(.checksum), HexSlice::new(.expected_checksum))]
    Checksum {
        checksum: [u8; CHECKSUM_LENGTH],
        expected_checksum: [u8; CHECKSUM_LENGTH],
    },
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::BufferTooSmall => Error::BufferTooSmall,
            base58::decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            base58::decode::Error::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

struct HexSlice<'a> {
    buffer: &'a [u8],
}

impl<'a> HexSlice<'a> {
    fn new(buffer: &'a impl AsRef<[u8]>) -> HexSlice<'a> {
        HexSlice { buffer: buffer.as_ref() }
    }
}

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.buffer {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

pub struct Decoder<'a, C = DoubleSha256> {
    decoder: base58::Decoder<'a>,
    checksum: C,
}

impl<'a, C: Checksum> Decoder<'a, C> {
    pub const fn new(alphabet: &'a Alphabet<58>, checksum: C) -> Self {
        Self {
            decoder: base58::Decoder::new(alphabet),
            checksum,
        }
    }

    /// Checks the trailing checksum of `buffer` and splits off the version, returning the payload in between.
    fn verify<'b>(&self, buffer: &'b [u8]) -> Result<(&'b [u8], Version), Error> {
        if buffer.len() < VERSION_LENGTH + CHECKSUM_LENGTH {
            debug!(len = buffer.len(), "base58check payload too short");
            return Err(Error::InvalidFormat);
        }
        let (body, checksum) = buffer.split_last_chunk::<CHECKSUM_LENGTH>().ok_or(Error::InvalidFormat)?;
        let (version, payload) = body.split_first_chunk::<VERSION_LENGTH>().ok_or(Error::InvalidFormat)?;
        let expected_checksum = self.checksum.checksum(body);
        if *checksum != expected_checksum {
            let error = Error::Checksum {
                checksum: *checksum,
                expected_checksum,
            };
            debug!(%error, "base58check checksum mismatch");
            return Err(error);
        }
        Ok((payload, *version))
    }

    /// Decodes `input` and writes its payload into `output`, returning the payload length and the version.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<(usize, Version), Error> {
        let buffer = self.decoder.decode(input)?;
        let (payload, version) = self.verify(&buffer)?;
        output
            .as_mut()
            .get_mut(..payload.len())
            .ok_or(Error::BufferTooSmall)?
            .copy_from_slice(payload);
        Ok((payload.len(), version))
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<(Vec<u8>, Version), Error> {
        let buffer = self.decoder.decode(input)?;
        let (payload, version) = self.verify(&buffer)?;
        Ok((payload.to_vec(), version))
    }
}

impl Decoder<'static> {
    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET, DOUBLE_SHA256);

pub fn decode(input: impl AsRef<[u8]>) -> Result<(Vec<u8>, Version), Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<(usize, Version), Error> {
    Decoder::default().decode_into(input, output)
}
