use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Redirect;
use rocket::{catch, catchers, get, routes, uri, Build, Rocket};
use rocket_dyn_templates::Template;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod errors;
pub mod modules;
pub mod routes {
    pub mod schedule;
    pub mod driver;
    pub mod team;
    pub mod glossary;
    pub mod replay;

    pub mod api {
        pub mod location;
    }
}

use crate::config::AppConfig;
use crate::modules::helpers::handelbars::format_circuit::FormatCircuitHelper;
use crate::modules::helpers::handelbars::format_date::FormatDateHelper;
use crate::modules::helpers::handelbars::to_json::ToJson;

/// View model for the error template, shared by the handlers and the
/// catchers.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ErrorContext {
    pub status: u16,
    pub message: String,
}

pub fn not_found_page(message: &str) -> Custom<Template> {
    Custom(
        Status::NotFound,
        Template::render(
            "error",
            ErrorContext {
                status: 404,
                message: message.to_string(),
            },
        ),
    )
}

pub fn server_error_page(message: String) -> Custom<Template> {
    Custom(
        Status::InternalServerError,
        Template::render("error", ErrorContext { status: 500, message }),
    )
}

#[get("/")]
fn index() -> Redirect {
    Redirect::to(uri!("/schedule"))
}

#[catch(404)]
fn not_found_catcher() -> Template {
    Template::render(
        "error",
        ErrorContext {
            status: 404,
            message: "Page not found.".to_string(),
        },
    )
}

#[catch(500)]
fn internal_error_catcher() -> Template {
    Template::render(
        "error",
        ErrorContext {
            status: 500,
            message: "Something went wrong while building this page.".to_string(),
        },
    )
}

pub fn build_rocket(figment: Figment, config: AppConfig) -> Rocket<Build> {
    let public_dir = config.public_dir.clone();

    rocket::custom(figment)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("formatDate", Box::new(FormatDateHelper));
            engines.handlebars.register_helper("formatCircuit", Box::new(FormatCircuitHelper));
            engines.handlebars.register_helper("toJson", Box::new(ToJson));
        }))
        .mount("/schedule", routes![
            routes::schedule::list,
        ])
        .mount("/drivers", routes![
            routes::driver::list_all,
            routes::driver::single,
        ])
        .mount("/teams", routes![
            routes::team::list_all,
            routes::team::single,
        ])
        .mount("/glossary", routes![
            routes::glossary::list,
        ])
        .mount("/replays", routes![
            routes::replay::single,
        ])
        .mount("/api", routes![
            routes::api::location::get_chunk,
        ])
        .mount("/", routes![index])
        .mount("/", FileServer::from(public_dir))
        .register("/", catchers![not_found_catcher, internal_error_catcher])
        .manage(config)
}
