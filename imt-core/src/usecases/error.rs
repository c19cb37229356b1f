use crate::{gateways::entity::FetchError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid credentials")]
    Credentials,
    #[error("The POI is not linked to a knowledge-base entity")]
    UnlinkedPoi,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
