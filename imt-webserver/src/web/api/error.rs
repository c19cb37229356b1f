use super::json_error_response;
use crate::web::jwt::TokenError;
use anyhow::anyhow;
pub use imt_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<imt_entities::email::EmailAddressParseError> for Error {
    fn from(err: imt_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                let status = match &err {
                    ParameterError::Credentials => Status::Unauthorized,
                    ParameterError::UnlinkedPoi => Status::BadRequest,
                    ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
                    ParameterError::Fetch(_) => {
                        error!("Knowledge base fetch failed: {err}");
                        Status::BadGateway
                    }
                    ParameterError::Repo(_) => {
                        error!("Error: {err}");
                        return Err(Status::InternalServerError);
                    }
                };
                json_error_response(req, &err, status)
            }
            Error::Token(err) => json_error_response(req, &err, Status::Unauthorized),
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
