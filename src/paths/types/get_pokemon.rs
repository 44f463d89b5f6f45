use actix_web::{
    get,
    web::{self, Data},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    models::PokemonSummary,
    roster::Roster,
};

#[utoipa::path(
    params(("type_name" = String, Path, description = "Type key, e.g. fire")),
    responses(
        (status = 200, description = "Returns names and ids of every pokemon with this type, without details", body = [PokemonSummary]),
        (status = 404, description = "Unknown type"),
        (status = 502, description = "Failed to fetch the type from the remote api"),
    )
)]
#[get("/types/{type_name}/pokemon")]
pub async fn get_pokemon(type_name: web::Path<String>, roster: Data<Roster>) -> impl Responder {
    let res = roster.summaries_by_type(&type_name).await;
    let summaries = yeet_roster_error!(res);
    resp_200_Ok_json!(summaries)
}
