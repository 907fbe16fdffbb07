use std::fmt;

use secrecy::ExposeSecret;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A cheap-to-clone string wrapper whose contents never appear in `Debug`
/// output, keeping credentials out of logs and panic messages.
#[derive(Clone)]
pub struct SecretString(secrecy::SecretString);

impl SecretString {
    #[must_use]
    pub fn new(inner: String) -> Self {
        Self(secrecy::SecretString::new(inner))
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretString").field(&"<secret>").finish()
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::SecretString;

    #[test]
    fn debug_is_redacted() {
        let token = SecretString::new("interaction-token".to_string());
        assert_eq!(format!("{:?}", token), "SecretString(\"<secret>\")");
    }

    #[test]
    fn expose_returns_inner() {
        let token = SecretString::new("interaction-token".to_string());
        assert_eq!(token.expose_secret(), "interaction-token");
    }
}
