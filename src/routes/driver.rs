// rocket imports
use rocket::get;
use rocket::response::status::Custom;
use rocket::State;
use rocket_dyn_templates::Template;

use serde::Serialize;
use tokio::join;

use crate::config::AppConfig;
use crate::modules::models::driver::{Driver, DriverStats};
use crate::modules::models::team::Team;
use crate::not_found_page;

#[get("/")]
pub async fn list_all(config: &State<AppConfig>) -> Template {
    let (drivers, teams) = join!(
        Driver::load_all(config.inner()),
        Team::load_all(config.inner()),
    );

    let drivers = drivers
        .iter()
        .map(|driver| DriverCard::new(driver, &teams, config.inner()))
        .collect();

    Template::render(
        "drivers",
        DriversContext { drivers },
    )
}

#[get("/<driver_id>")]
pub async fn single(driver_id: String, config: &State<AppConfig>) -> Result<Template, Custom<Template>> {
    let (drivers, teams) = join!(
        Driver::load_all(config.inner()),
        Team::load_all(config.inner()),
    );

    let driver = match Driver::find_by_slug(&drivers, &driver_id) {
        Some(driver) => driver.clone(),
        None => {
            return Err(not_found_page("Driver not found."));
        }
    };

    let slug = driver.url_slug();
    let (stats, descriptions) = join!(
        DriverStats::load(config.inner(), &slug),
        Driver::load_descriptions(config.inner()),
    );

    let description = descriptions.get(&driver.full_name).cloned();
    let team_color = Team::color_for(&teams, &driver.team_name);
    let photo_src = driver.portrait_src(config.inner());

    Ok(Template::render(
        "driver",
        SingleContext {
            slug,
            team_color,
            photo_src,
            description,
            stats,
            driver,
        },
    ))
}

/// # Driver summary for the list pages
/// one card per driver, with the team color joined in from the teams
/// file and the derived slug for linking to the detail page.
#[derive(Serialize, Clone)]
pub struct DriverCard {
    pub slug: String,
    pub full_name: String,
    pub code: String,
    pub number: String,
    pub team_name: String,
    pub nationality: String,
    pub team_color: Option<String>,
    pub photo_src: Option<String>,
}

impl DriverCard {
    pub fn new(driver: &Driver, teams: &[Team], config: &AppConfig) -> DriverCard {
        DriverCard {
            slug: driver.url_slug(),
            full_name: driver.full_name.clone(),
            code: driver.code.clone(),
            number: driver.number.clone(),
            team_name: driver.team_name.clone(),
            nationality: driver.nationality.clone(),
            team_color: Team::color_for(teams, &driver.team_name),
            photo_src: driver.portrait_src(config),
        }
    }
}

#[derive(Serialize)]
struct DriversContext {
    drivers: Vec<DriverCard>,
}

#[derive(Serialize)]
struct SingleContext {
    slug: String,
    team_color: Option<String>,
    photo_src: Option<String>,
    description: Option<String>,
    stats: Option<DriverStats>,
    driver: Driver,
}
