//! Base58Check: base58 over `version ++ payload ++ checksum`, where the checksum is the first four bytes of a
//! double hash of `version ++ payload`.

mod checksum;
pub mod decode;
pub mod encode;

pub use crate::base58::{Alphabet, ALPHABET};
pub use checksum::{Checksum, DoubleBlake256, DoubleHash, DoubleSha256, CHECKSUM_LENGTH, DOUBLE_BLAKE256, DOUBLE_SHA256};
pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub const VERSION_LENGTH: usize = 2;

pub type Version = [u8; VERSION_LENGTH];
