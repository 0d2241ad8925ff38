//! Base58 with the Bitcoin alphabet. Every leading zero byte is encoded as a leading `1`.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, encoded_len_bound, Encoder};

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[cfg(test)]
pub(crate) mod tests {
    /// Deterministic xorshift byte source, so round trip failures are reproducible.
    pub(crate) struct Bytes(u64);

    impl Bytes {
        pub(crate) fn new(seed: u64) -> Self {
            Self(seed)
        }

        pub(crate) fn next(&mut self) -> u8 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 >> 24) as u8
        }

        pub(crate) fn take(&mut self, len: usize) -> Vec<u8> {
            (0..len).map(|_| self.next()).collect()
        }
    }

    #[test]
    fn round_trip() {
        let mut bytes = Bytes::new(0x9e37_79b9_7f4a_7c15);
        for len in 0..96 {
            for zeros in [0, 1, 3] {
                let mut input = vec![0u8; zeros.min(len)];
                input.extend(bytes.take(len - input.len()));
                let encoded = super::encode(&input);
                assert!(encoded.bytes().take(zeros.min(len)).all(|value| value == b'1'));
                assert_eq!(super::decode(&encoded), Ok(input));
            }
        }
    }

    #[test]
    fn alphabet() {
        assert_eq!(super::ALPHABET.len(), 58);
        assert_eq!(super::ALPHABET.zero(), b'1');
        for excluded in [b'0', b'O', b'I', b'l'] {
            assert!(super::ALPHABET.value_of(excluded, 0).is_err());
        }
        for value in 0..58 {
            assert_eq!(super::ALPHABET.value_of(super::ALPHABET.symbol_at(value), 0), Ok(value as u8));
        }
    }
}
