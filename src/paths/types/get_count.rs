use actix_web::{
    get,
    web::{self, Data},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    roster::Roster,
};

#[utoipa::path(
    params(("type_name" = String, Path, description = "Type key, e.g. fire")),
    responses(
        (status = 200, description = "Returns how many pokemons have this type", body = usize),
        (status = 404, description = "Unknown type"),
        (status = 502, description = "Failed to fetch the type from the remote api"),
    )
)]
#[get("/types/{type_name}/count")]
pub async fn get_count(type_name: web::Path<String>, roster: Data<Roster>) -> impl Responder {
    let res = roster.type_count(&type_name).await;
    let count = yeet_roster_error!(res);
    resp_200_Ok_json!(count)
}
