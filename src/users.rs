use imt_core::{entities::EmailAddress, gateways::credentials::CredentialStore};

/// Single-account credential store backed by the configuration.
///
/// The password is compared in plain text. This mirrors the demo
/// account setup of the deployed service; substitute a real store
/// through [`CredentialStore`] before opening registration.
#[derive(Debug, Clone)]
pub struct ConfiguredCredentials {
    email: EmailAddress,
    password: String,
}

impl ConfiguredCredentials {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

impl CredentialStore for ConfiguredCredentials {
    fn verify(&self, email: &EmailAddress, password: &str) -> bool {
        *email == self.email && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_the_configured_credentials() {
        let store = ConfiguredCredentials::new(
            "demo@demo.com".parse().unwrap(),
            "1234".to_string(),
        );
        assert!(store.verify(&"demo@demo.com".parse().unwrap(), "1234"));
        assert!(!store.verify(&"demo@demo.com".parse().unwrap(), "123"));
        assert!(!store.verify(&"other@demo.com".parse().unwrap(), "1234"));
    }
}
