use super::*;
use crate::web::jwt::TokenKind;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    credentials: &State<Credentials>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::TokenPair> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    usecases::login_with_email(
        &*credentials.0,
        &usecases::Credentials {
            email: &email,
            password: &login.password,
        },
    )
    .map_err(|err| {
        debug!("Login with email '{}' failed: {}", login.email, err);
        err
    })?;
    Ok(Json(issue_token_pair(jwt_state, email.as_str())?))
}

#[post("/refresh", format = "application/json", data = "<refresh>")]
pub fn post_refresh(
    refresh: JsonResult<json::RefreshRequest>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::TokenPair> {
    let refresh = refresh?.into_inner();
    let email = jwt_state.validate_token_and_get_email(&refresh.refresh_token, TokenKind::Refresh)?;
    Ok(Json(issue_token_pair(jwt_state, &email)?))
}

fn issue_token_pair(jwt_state: &jwt::JwtState, email: &str) -> anyhow::Result<json::TokenPair> {
    let access_token = jwt_state.generate_token(email, TokenKind::Access)?;
    let refresh_token = jwt_state.generate_token(email, TokenKind::Refresh)?;
    Ok(json::TokenPair {
        access_token,
        refresh_token,
        token_type: "bearer".to_string(),
    })
}
