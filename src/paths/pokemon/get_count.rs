use actix_web::{get, web::Data, Responder};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    roster::Roster,
};

#[utoipa::path(
    responses(
        (status = 200, description = "Returns how many pokemons exist", body = u64),
        (status = 502, description = "Failed to fetch the count from the remote api"),
    )
)]
#[get("/pokemon/count")]
pub async fn get_count(roster: Data<Roster>) -> impl Responder {
    let res = roster.total_count().await;
    let count = yeet_roster_error!(res);
    resp_200_Ok_json!(count)
}
