use actix_web::{get, Responder};
use utoipa::{Modify, OpenApi};

use crate::{
    macros::resp_200_Ok_json,
    models::{Pokemon, PokemonDetails, PokemonStats, PokemonSummary},
    paths::{pokemon, types},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        pokemon::get_all::get_all,
        pokemon::get_paginated::get_paginated,
        pokemon::get_count::get_count,
        pokemon::get_page::get_page,
        pokemon::get_by_name::get_by_name,
        pokemon::populate::populate,
        types::get_all::get_all,
        types::get_count::get_count,
        types::get_pokemon::get_pokemon,
    ),
    components(schemas(Pokemon, PokemonStats, PokemonSummary, PokemonDetails)),
    modifiers(&RouteGroupTagAddon)
)]
pub struct ApiDoc;

/// Tags every operation with the first segment of its route, so `/types/{type_name}/count`
/// lands under `types`.
pub struct RouteGroupTagAddon;

impl Modify for RouteGroupTagAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for (route, path) in openapi.paths.paths.iter_mut() {
            let group = route
                .split('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or("root")
                .to_string();

            for operation in path.operations.values_mut() {
                operation.tags = Some(vec![group.clone()]);
            }
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    resp_200_Ok_json!(ApiDoc::openapi())
}
