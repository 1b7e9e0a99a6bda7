use crate::certificate::enums::thumbprint_algorithm::ThumbprintAlgorithm;
use sha1::Digest as _;
use std::fmt;
use std::str::FromStr;

impl ThumbprintAlgorithm {
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            ThumbprintAlgorithm::sha1 => sha1::Sha1::digest(data).to_vec(),
            ThumbprintAlgorithm::sha256 => crate::common::common::sha256(data).to_vec(),
        }
    }

    /// Name as sent in the `X-Certificate-Thumbprint-Algorithm` header.
    pub fn header_value(&self) -> &'static str {
        match self {
            ThumbprintAlgorithm::sha1 => "SHA-1",
            ThumbprintAlgorithm::sha256 => "SHA-256",
        }
    }
}

impl fmt::Display for ThumbprintAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbprintAlgorithm::sha1 => write!(f, "sha1"),
            ThumbprintAlgorithm::sha256 => write!(f, "sha256"),
        }
    }
}

impl FromStr for ThumbprintAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(ThumbprintAlgorithm::sha1),
            "sha256" => Ok(ThumbprintAlgorithm::sha256),
            other => Err(format!("unknown thumbprint algorithm '{other}'")),
        }
    }
}
