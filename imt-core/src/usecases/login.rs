use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email(store: &dyn CredentialStore, login: &Credentials) -> Result<()> {
    if store.verify(login.email, login.password) {
        Ok(())
    } else {
        Err(Error::Credentials)
    }
}
