use crate::entities::EmailAddress;

/// Verification of login credentials against whatever store backs them.
///
/// The login usecase only depends on this seam, so the demo store can
/// be replaced by a real user database without touching any token
/// handling.
pub trait CredentialStore {
    fn verify(&self, email: &EmailAddress, password: &str) -> bool;
}
