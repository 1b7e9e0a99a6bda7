use serde::Serialize;
use zeroize::{
    Zeroize,
    ZeroizeOnDrop
};

#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Jwk {
    #[zeroize(skip)]
    pub kty: &'static str,
    #[serde(rename = "use")]
    #[zeroize(skip)]
    pub key_use: &'static str,
    pub e: String,
    pub n: String,
    pub d: String,
    pub p: String,
    pub q: String,
    pub dp: String,
    pub dq: String,
    pub qi: String,
    #[serde(rename = "x5t#S256")]
    pub x5t_s256: String,
}
