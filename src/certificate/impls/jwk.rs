use crate::certificate::structs::jwk::Jwk;

impl std::fmt::Debug for Jwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("use", &self.key_use)
            .field("e", &self.e)
            .field("n", &self.n)
            .field("x5t#S256", &self.x5t_s256)
            .field("private", &"<redacted>")
            .finish()
    }
}
