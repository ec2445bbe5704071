// rocket imports
use rocket::get;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;

use log::error;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::modules::models::session::Session;
use crate::modules::replay_api;

/// Proxy for the location telemetry script. The session key resolves to
/// the year/event/session triple the script wants, the time window is
/// passed through untouched.
#[get("/locations/<session_key>/<start_time>/<end_time>")]
pub async fn get_chunk(
    session_key: String,
    start_time: String,
    end_time: String,
    config: &State<AppConfig>,
) -> Result<Json<Value>, Custom<Json<Value>>> {
    let schedule = Session::load_schedule(config.inner()).await;

    let session = match Session::find_by_key(&schedule, &session_key) {
        Some(session) => session.clone(),
        None => {
            return Err(Custom(
                Status::NotFound,
                Json(json!({ "error": "No session found for that key." })),
            ));
        }
    };

    match replay_api::get_location_data(
        config.inner(),
        &session.year(),
        &session.meeting_name,
        &session.session_name,
        &start_time,
        &end_time,
    )
    .await
    {
        Ok(data) => Ok(Json(data)),
        Err(error) => {
            error!(target:"routes/api/location:get_chunk", "Error fetching location data: {}", error);
            Err(Custom(
                Status::InternalServerError,
                Json(json!({ "error": error.to_string() })),
            ))
        }
    }
}
