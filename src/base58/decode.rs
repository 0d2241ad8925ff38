use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use thiserror::Error;
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

// Limbs are base 2^32. A limb times 58^5 plus the carry still fits in a u64.
const LIMB_BITS: u32 = 32;
const LIMB_MASK: u64 = (1 << LIMB_BITS) - 1;
const GROUP_DIGITS: usize = 5;

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    fn leading_zeros(&self, input: &[u8]) -> usize {
        let zero = self.alphabet.zero();
        input.iter().take_while(|&&value| value == zero).count()
    }

    /// Upper bound of the decoded length of `input`: one byte per leading zero glyph plus
    /// `ceil(rest * log256(58))`, with log256(58) ~= 0.73225.
    pub fn decoded_len_bound(&self, input: impl AsRef<[u8]>) -> usize {
        let input = input.as_ref();
        let zeros = self.leading_zeros(input);
        let len = input.len() - zeros;
        zeros + len / 1000 * 733 + (len % 1000 * 733).div_ceil(1000)
    }

    /// Returns the count of leading zero glyphs and the bytes of the remaining input, least significant byte
    /// first.
    fn bytes(&self, input: &[u8]) -> Result<(usize, Vec<u8>), Error> {
        let zeros = self.leading_zeros(input);

        let mut limbs: Vec<u64> = Vec::with_capacity(input.len() / GROUP_DIGITS + 1);
        for (group_index, group) in input[zeros..].chunks(GROUP_DIGITS).enumerate() {
            let mut carry = 0u64;
            let mut multiplier = 1u64;
            for (offset, &character) in group.iter().enumerate() {
                let index = zeros + group_index * GROUP_DIGITS + offset;
                let value = self.alphabet.value_of(character, index).inspect_err(|error| {
                    trace!(%error, "rejecting base58 input");
                })?;
                carry = carry * 58 + value as u64;
                multiplier *= 58;
            }
            for limb in &mut limbs {
                carry += *limb * multiplier;
                *limb = carry & LIMB_MASK;
                carry >>= LIMB_BITS;
            }
            while carry > 0 {
                limbs.push(carry & LIMB_MASK);
                carry >>= LIMB_BITS;
            }
        }

        let mut bytes = Vec::with_capacity(limbs.len() * 4);
        for limb in limbs {
            bytes.extend_from_slice(&(limb as u32).to_le_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        Ok((zeros, bytes))
    }

    fn write(zeros: usize, bytes: &[u8], output: &mut [u8]) {
        let (prefix, rest) = output.split_at_mut(zeros);
        prefix.fill(0);
        for (value, &byte) in rest.iter_mut().zip(bytes.iter().rev()) {
            *value = byte;
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let (zeros, bytes) = self.bytes(input.as_ref())?;
        let len = zeros + bytes.len();
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        Self::write(zeros, &bytes, output);
        Ok(len)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let (zeros, bytes) = self.bytes(input.as_ref())?;
        let mut output = vec![0u8; zeros + bytes.len()];
        Self::write(zeros, &bytes, &mut output);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
