// rocket imports
use rocket::get;
use rocket::State;
use rocket_dyn_templates::Template;

use serde::Serialize;

use crate::config::AppConfig;
use crate::modules::models::glossary::GlossaryTerm;

#[get("/")]
pub async fn list(config: &State<AppConfig>) -> Template {
    let terms = GlossaryTerm::load_all(config.inner()).await;

    Template::render(
        "glossary",
        GlossaryContext { terms },
    )
}

#[derive(Serialize)]
struct GlossaryContext {
    terms: Vec<GlossaryTerm>,
}
