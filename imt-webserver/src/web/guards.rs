use core::ops::Deref;

use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt::{self, TokenKind};
use imt_core::gateways::{credentials::CredentialStore, entity::EntityGateway};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    auth_header_val
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The authenticated caller of a protected route.
///
/// Resolving this guard validates an access token from the
/// `Authorization` header before any handler work happens; requests
/// without a valid access token are rejected with 401.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn email(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(jwt_state) = request.guard::<&State<jwt::JwtState>>().await.succeeded() else {
            return Outcome::Error((Status::InternalServerError, ()));
        };
        let account_email = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .find_map(|token| {
                jwt_state
                    .validate_token_and_get_email(token, TokenKind::Access)
                    .ok()
            });
        match account_email {
            Some(email) => Outcome::Success(Account(email)),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Credentials(pub Box<dyn CredentialStore + Send + Sync>);

impl Deref for Credentials {
    type Target = dyn CredentialStore;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Entities(pub Box<dyn EntityGateway + Send + Sync>);

impl Deref for Entities {
    type Target = dyn EntityGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
