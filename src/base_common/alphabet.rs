use thiserror::Error;

/// Error raised while building an alphabet table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
}

/// Error raised while looking up the value of an encoded character.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Bijective table between `N` ascii symbols and the digit values `0..N`.
///
/// The symbol of value 0 is the zero glyph: encoders emit one per leading zero byte and decoders turn each
/// leading zero glyph back into a zero byte.
#[derive(Clone, Debug)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    values: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut symbols = [0u8; N];
        let mut values: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = values[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            symbols[index] = character;
            values[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols, values })
    }

    #[inline(always)]
    pub fn symbol_at(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    #[inline(always)]
    pub fn value_of(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character, index });
        }
        self.values[character as usize].ok_or(DecodeError::InvalidCharacter {
            character: character as char,
            index,
        })
    }

    #[inline(always)]
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn lookup() {
        let alphabet = Alphabet::new(b"xyz").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.zero(), b'x');
        assert_eq!(alphabet.symbol_at(2), b'z');
        assert_eq!(alphabet.value_of(b'y', 0), Ok(1));
        assert_eq!(
            alphabet.value_of(b'a', 4),
            Err(DecodeError::InvalidCharacter { character: 'a', index: 4 })
        );
        assert_eq!(
            alphabet.value_of(0xc3, 7),
            Err(DecodeError::NonAsciiCharacter { character: 0xc3, index: 7 })
        );
    }

    #[test]
    fn new() {
        assert_eq!(
            Alphabet::new(b"abca").unwrap_err(),
            Error::DuplicateCharacter { character: 'a', first: 0, second: 3 }
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xff]).unwrap_err(),
            Error::NonAsciiCharacter { character: 0xff, index: 1 }
        );
    }

    #[test]
    fn display() {
        let error = Error::DuplicateCharacter { character: 'a', first: 0, second: 3 };
        assert_eq!(error.to_string(), "Duplicate character 'a' at indexes 0 and 3");
        let error = DecodeError::NonAsciiCharacter { character: 0xc3, index: 7 };
        assert_eq!(error.to_string(), "Non-ascii character 0xc3 at index 7");
    }
}
