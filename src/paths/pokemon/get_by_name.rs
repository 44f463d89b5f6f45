use actix_web::{
    get,
    web::{self, Data},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    models::PokemonDetails,
    roster::Roster,
};

#[utoipa::path(
    params(("name" = String, Path, description = "Pokemon name, case insensitive")),
    responses(
        (status = 200, description = "Returns image, types and stats of a pokemon", body = PokemonDetails),
        (status = 404, description = "Unknown pokemon"),
        (status = 502, description = "Failed to fetch/deserialize data from remote api"),
    )
)]
#[get("/pokemon/get_by_name/{name}")]
pub async fn get_by_name(name: web::Path<String>, roster: Data<Roster>) -> impl Responder {
    let url = roster.endpoints().pokemon_by_name(&name);
    let res = roster.pokemon_details(&url).await;
    let details = yeet_roster_error!(res);
    resp_200_Ok_json!(details)
}
