use crate::base58_check::{self, decode::Error, Version};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A payload tagged with a version, written as its Base58Check string.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Versioned {
    version: Version,
    payload: Vec<u8>,
}

impl Versioned {
    pub fn new(version: Version, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            payload: payload.into(),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_parts(self) -> (Vec<u8>, Version) {
        (self.payload, self.version)
    }
}

impl fmt::Display for Versioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base58_check::encode(&self.payload, self.version))
    }
}

impl FromStr for Versioned {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (payload, version) = base58_check::decode(string)?;
        Ok(Self { version, payload })
    }
}

impl TryFrom<String> for Versioned {
    type Error = Error;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        string.parse()
    }
}

impl From<Versioned> for String {
    fn from(versioned: Versioned) -> Self {
        versioned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Versioned;
    use crate::base58_check::decode::Error;

    #[test]
    fn display() {
        assert_eq!(Versioned::new([20, 0], "abc").to_string(), "FmT72s7MpKqS");
        assert_eq!(Versioned::new([0, 0], "").to_string(), "112edB6q");
    }

    #[test]
    fn parse() {
        let versioned: Versioned = "FmT72s7MpKqS".parse().unwrap();
        assert_eq!(versioned.version(), [20, 0]);
        assert_eq!(versioned.payload(), b"abc");
        assert_eq!(versioned.into_parts(), (b"abc".to_vec(), [20, 0]));
        assert_eq!("Axhppa8".parse::<Versioned>(), Err(Error::InvalidFormat));
        assert!(matches!("Axhppa8n".parse::<Versioned>(), Err(Error::Checksum { .. })));
    }

    #[test]
    fn serde() {
        let versioned = Versioned::new([0x07, 0x3f], (0..20).collect::<Vec<u8>>());
        let json = serde_json::to_string(&versioned).unwrap();
        assert_eq!(json, "\"DsQxvhTW4PzcmNzhFTvad81YmcRfKeiJteG\"");
        assert_eq!(serde_json::from_str::<Versioned>(&json).unwrap(), versioned);

        let error = serde_json::from_str::<Versioned>("\"Axhppa8n\"").unwrap_err();
        assert!(error.to_string().starts_with("Invalid checksum '8309fdef' ('8309fdee' expected)"));
        assert!(serde_json::from_str::<Versioned>("42").is_err());
    }
}
