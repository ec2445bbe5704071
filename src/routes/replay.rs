// rocket imports
use rocket::get;
use rocket::response::status::Custom;
use rocket::State;
use rocket_dyn_templates::Template;

use log::error;
use serde::Serialize;
use serde_json::Value;
use tokio::join;

use crate::config::AppConfig;
use crate::modules::models::session::Session;
use crate::modules::models::track::{find_track_image, layout_for, load_layouts};
use crate::modules::replay_api;
use crate::modules::replay_api::RaceTiming;
use crate::{not_found_page, server_error_page};

#[get("/<session_key>")]
pub async fn single(session_key: String, config: &State<AppConfig>) -> Result<Template, Custom<Template>> {
    let (schedule, layouts) = join!(
        Session::load_schedule(config.inner()),
        load_layouts(config.inner()),
    );

    let session = match Session::find_by_key(&schedule, &session_key) {
        Some(session) => session.clone(),
        None => {
            return Err(not_found_page("No session found for that replay."));
        }
    };

    // a session without a stored layout still gets a replay page
    let layout = layout_for(&layouts, &session.circuit_short_name);
    let track_image = find_track_image(config.inner(), &session.circuit_short_name);

    let timing = match replay_api::get_race_times(
        config.inner(),
        &session.year(),
        &session.meeting_name,
        &session.session_name,
    )
    .await
    {
        Ok(timing) => timing,
        Err(error) => {
            error!(target:"routes/replay:single", "Error fetching race times: {}", error);
            return Err(server_error_page(format!("Could not load replay data: {error}")));
        }
    };

    Ok(Template::render(
        "replay",
        ReplayContext {
            session: ReplaySession::new(&session, timing),
            layout,
            track_image,
        },
    ))
}

/// # Session merged with its race timing
/// the replay page script expects one object carrying both the schedule
/// entry and the timing window, so the bridge result is folded in here.
#[derive(Serialize)]
struct ReplaySession {
    #[serde(flatten)]
    session: Session,
    race_start_date: String,
    race_end_date: String,
    all_messages: Vec<Value>,
}

impl ReplaySession {
    fn new(session: &Session, timing: RaceTiming) -> ReplaySession {
        ReplaySession {
            session: session.clone(),
            race_start_date: timing.race_start_date,
            race_end_date: timing.race_end_date,
            all_messages: timing.all_messages,
        }
    }
}

#[derive(Serialize)]
struct ReplayContext {
    session: ReplaySession,
    layout: Option<Value>,
    track_image: Option<String>,
}
