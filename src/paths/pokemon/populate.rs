use actix_web::{
    post,
    web::{Data, Json},
    Responder,
};

use crate::{
    macros::resp_200_Ok_json,
    models::{Pokemon, PokemonSummary},
    roster::Roster,
};

#[utoipa::path(
    request_body = [PokemonSummary],
    responses(
        (status = 200, description = "Returns the given pokemons with image, types and stats filled in. Pokemons whose details could not be loaded are left out", body = [Pokemon]),
    )
)]
#[post("/pokemon/populate")]
pub async fn populate(
    summaries: Json<Vec<PokemonSummary>>,
    roster: Data<Roster>,
) -> impl Responder {
    let pokemons = roster.populate_details(&summaries).await;
    resp_200_Ok_json!(pokemons)
}
