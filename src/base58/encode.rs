use super::ALPHABET;
use crate::base_common::Alphabet;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoded input.
    #[error("Output buffer too small")]
    BufferTooSmall,
}

// Limbs hold 5 base 58 digits. A limb times 256^4 plus the carry still fits in a u64.
const LIMB_RADIX: u64 = 58 * 58 * 58 * 58 * 58;
const LIMB_DIGITS: usize = 5;
const GROUP_BYTES: usize = 4;

/// Upper bound of the encoded length of `len` bytes: `ceil(len * log58(256))`, with log58(256) ~= 1.36566.
pub const fn encoded_len_bound(len: usize) -> usize {
    len / 1000 * 1366 + (len % 1000 * 1366).div_ceil(1000)
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Returns the count of leading zero bytes and the base 58 digits of the remaining input, least significant
    /// digit first.
    fn digits(&self, input: &[u8]) -> (usize, Vec<u8>) {
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let input = &input[zeros..];

        let mut limbs: Vec<u64> = Vec::with_capacity(encoded_len_bound(input.len()) / LIMB_DIGITS + 1);
        for group in input.chunks(GROUP_BYTES) {
            let mut carry = 0u64;
            let mut multiplier = 1u64;
            for &value in group {
                carry = (carry << 8) | value as u64;
                multiplier <<= 8;
            }
            for limb in &mut limbs {
                carry += *limb * multiplier;
                *limb = carry % LIMB_RADIX;
                carry /= LIMB_RADIX;
            }
            while carry > 0 {
                limbs.push(carry % LIMB_RADIX);
                carry /= LIMB_RADIX;
            }
        }

        let mut digits = Vec::with_capacity(limbs.len() * LIMB_DIGITS);
        for mut limb in limbs {
            for _ in 0..LIMB_DIGITS {
                digits.push((limb % 58) as u8);
                limb /= 58;
            }
        }
        // the most significant limb is padded with zero digits
        while digits.last() == Some(&0) {
            digits.pop();
        }
        (zeros, digits)
    }

    fn write(&self, zeros: usize, digits: &[u8], output: &mut [u8]) {
        let (prefix, rest) = output.split_at_mut(zeros);
        prefix.fill(self.alphabet.zero());
        for (symbol, &digit) in rest.iter_mut().zip(digits.iter().rev()) {
            *symbol = self.alphabet.symbol_at(digit as usize);
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let (zeros, digits) = self.digits(input.as_ref());
        let len = zeros + digits.len();
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        self.write(zeros, &digits, output);
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = self.digits(input.as_ref());
        let mut output = vec![0u8; zeros + digits.len()];
        self.write(zeros, &digits, &mut output);
        // alphabet symbols are ascii
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
