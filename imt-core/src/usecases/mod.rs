mod error;
mod get_poi;
mod login;
mod query_categories;
mod query_pois;

pub use self::{
    error::Error, get_poi::*, login::*, query_categories::*, query_pois::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{credentials::*, entity::*},
        repositories::*,
    };
}
