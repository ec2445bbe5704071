// rocket imports
use rocket::get;
use rocket::response::status::Custom;
use rocket::State;
use rocket_dyn_templates::Template;

use serde::Serialize;
use tokio::join;

use crate::config::AppConfig;
use crate::modules::models::driver::Driver;
use crate::modules::models::team::Team;
use crate::routes::driver::DriverCard;
use crate::not_found_page;

#[get("/")]
pub async fn list_all(config: &State<AppConfig>) -> Template {
    let (teams, drivers) = join!(
        Team::load_all(config.inner()),
        Driver::load_all(config.inner()),
    );

    let teams = teams
        .iter()
        .map(|team| TeamCard {
            drivers: Driver::for_team(&drivers, &team.team_name)
                .iter()
                .map(|driver| DriverCard::new(driver, &teams, config.inner()))
                .collect(),
            team: team.clone(),
        })
        .collect();

    Template::render(
        "teams",
        TeamsContext { teams },
    )
}

#[get("/<team_id>")]
pub async fn single(team_id: String, config: &State<AppConfig>) -> Result<Template, Custom<Template>> {
    let (teams, drivers) = join!(
        Team::load_all(config.inner()),
        Driver::load_all(config.inner()),
    );

    let team = match Team::find_by_slug(&teams, &team_id) {
        Some(team) => team.clone(),
        None => {
            return Err(not_found_page("Team not found."));
        }
    };

    let drivers = Driver::for_team(&drivers, &team.team_name)
        .iter()
        .map(|driver| DriverCard::new(driver, &teams, config.inner()))
        .collect();

    Ok(Template::render(
        "team",
        SingleContext { team, drivers },
    ))
}

#[derive(Serialize)]
struct TeamCard {
    team: Team,
    drivers: Vec<DriverCard>,
}

#[derive(Serialize)]
struct TeamsContext {
    teams: Vec<TeamCard>,
}

#[derive(Serialize)]
struct SingleContext {
    team: Team,
    drivers: Vec<DriverCard>,
}
