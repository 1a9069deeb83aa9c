use chrono::{DateTime, SecondsFormat, Utc};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::{json, Json, Value};
use serde::Serializer;

pub fn try_respond(req: &Request<'_>, json: &Value, status: Status) -> response::Result<'static> {
    let response = Json(json.clone()).respond_to(req)?;
    Response::build_from(response).status(status).ok()
}

/// Conduit error payload: `{"errors": ["<reason>"]}`.
pub fn error_body(status: Status) -> Value {
    let reason = match status.code {
        404 => "entity not found",
        503 => "service unavailable",
        _ => "internal server error",
    };
    json!({ "errors": [reason] })
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_optional_date<S>(
    date: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_date(date)),
        None => serializer.serialize_none(),
    }
}
