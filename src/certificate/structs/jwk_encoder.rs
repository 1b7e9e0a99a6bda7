/// Renders key material as a JSON Web Key.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwkEncoder;
