use std::{fmt::Display, result};

use imt_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, to_json},
    web::{jwt, Cfg},
};
use imt_catalog::Catalog;
use imt_core::{entities::*, usecases};

mod catalog;
mod error;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_refresh,
        // ---   catalog   --- //
        catalog::get_categories,
        catalog::get_category_pois,
        catalog::get_poi,
        // ---   misc   --- //
        util::get_about,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
