use crate::certificate::structs::rsa_key_material::RsaKeyMaterial;

impl std::fmt::Debug for RsaKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyMaterial")
            .field("modulus_bits", &self.modulus_bits())
            .field("e", &hex::encode(&self.e))
            .field("private", &"<redacted>")
            .finish()
    }
}

impl RsaKeyMaterial {
    pub fn modulus_bits(&self) -> usize {
        match self.n.first() {
            None => 0,
            Some(first) => (self.n.len() - 1) * 8 + (8 - first.leading_zeros() as usize),
        }
    }
}
