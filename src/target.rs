//! The password under test.

use secrecy::{ExposeSecret, SecretString};

/// Password being audited, kept out of `Debug` output and zeroized on drop.
pub struct Target(SecretString);

impl Target {
    pub fn new(password: impl Into<String>) -> Self {
        Self(SecretString::new(password.into().into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<SecretString> for Target {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Target([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_exposes_password() {
        let target = Target::new("hunter2");
        assert_eq!(target.expose(), "hunter2");
    }

    #[test]
    fn test_target_debug_redacted() {
        let target = Target::from(SecretString::new("hunter2".to_string().into()));
        assert!(!format!("{:?}", target).contains("hunter2"));
    }
}
