use actix_web::{get, web::Data, Responder};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    models::Pokemon,
    roster::Roster,
};

#[utoipa::path(
    responses(
        (status = 200, description = "Returns the first 150 pokemons with their stats", body = [Pokemon]),
        (status = 502, description = "Failed to fetch the pokemon listing from the remote api"),
    )
)]
#[get("/pokemon/get_all")]
pub async fn get_all(roster: Data<Roster>) -> impl Responder {
    let res = roster.get_all().await;
    let pokemons = yeet_roster_error!(res);
    resp_200_Ok_json!(pokemons)
}
