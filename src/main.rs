use rocket::{Build, Rocket};
use f1_replay_viewer::build_rocket;
use f1_replay_viewer::config::AppConfig;
use f1_replay_viewer::modules::helpers::logging::setup_logging;

#[macro_use] extern crate rocket;

#[launch]
fn rocket() -> Rocket<Build> {
    dotenvy::dotenv().ok();

    if let Err(error) = setup_logging() {
        eprintln!("Failed to set up logging: {error}");
    }

    let config = AppConfig::from_env();
    let figment = rocket::Config::figment().merge(("port", AppConfig::port()));

    build_rocket(figment, config)
}
