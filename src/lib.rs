//! Base58 and Base58Check codecs.
//!
//! ```
//! assert_eq!(base58check::base58::encode([0x00, 0x00, 0x61]), "112g");
//! assert_eq!(base58check::base58::decode("112g"), Ok(vec![0x00, 0x00, 0x61]));
//!
//! let encoded = base58check::check_encode("abc", [20, 0]);
//! assert_eq!(base58check::check_decode(&encoded), Ok((b"abc".to_vec(), [20, 0])));
//! ```

pub mod base58;
pub mod base58_check;
pub mod base_common;
pub mod versioned;

pub use base58_check::{decode as check_decode, decode_into as check_decode_into, encode as check_encode, encode_into as check_encode_into};
pub use versioned::Versioned;
