//! Conduit roster: every user of the platform with their authoring statistics.

#[macro_use]
extern crate diesel;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate rocket;

pub mod config;
pub mod db;
pub mod roster;
pub mod telemetry;
pub mod types;
pub mod utils;

use rocket::http::Status;
use rocket::serde::json::Value;
use rocket::{Build, Rocket};

use crate::utils::error_body;

#[catch(404)]
fn not_found() -> Value {
    error_body(Status::NotFound)
}

#[catch(500)]
fn internal_error() -> Value {
    error_body(Status::InternalServerError)
}

#[catch(503)]
fn service_unavailable() -> Value {
    error_body(Status::ServiceUnavailable)
}

/// The API server over `pool`, with every route mounted under `/api`.
pub fn rocket(pool: db::Pool) -> Rocket<Build> {
    rocket::build()
        .manage(pool)
        .mount("/api", routes![roster::roster])
        .register("/", catchers![not_found, internal_error, service_unavailable])
}
