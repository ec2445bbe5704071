// rocket imports
use rocket::get;
use rocket::State;
use rocket_dyn_templates::Template;

use serde::Serialize;

use crate::config::AppConfig;
use crate::modules::models::session::Session;

#[get("/")]
pub async fn list(config: &State<AppConfig>) -> Template {
    let sessions = Session::load_schedule(config.inner()).await;

    Template::render(
        "schedule",
        ScheduleContext { sessions },
    )
}

#[derive(Serialize)]
struct ScheduleContext {
    sessions: Vec<Session>,
}
