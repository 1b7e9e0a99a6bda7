use zeroize::{
    Zeroize,
    ZeroizeOnDrop
};

/// RSA key pair in Chinese-Remainder-Theorem form.
///
/// Every field is an unsigned big-endian integer without leading zero
/// bytes. The buffers are wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RsaKeyMaterial {
    pub n: Vec<u8>,
    pub e: Vec<u8>,
    pub d: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub dp: Vec<u8>,
    pub dq: Vec<u8>,
    pub qi: Vec<u8>,
}
