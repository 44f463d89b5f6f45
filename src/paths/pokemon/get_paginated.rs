use actix_web::{
    get,
    web::{Data, Query},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_json, resp_400_BadRequest, yeet_roster_error},
    models::{PageQuery, Pokemon},
    roster::Roster,
};

#[utoipa::path(
    params(PageQuery),
    responses(
        (status = 200, description = "Returns a page of pokemons, optionally of a single type. Pokemons whose details could not be loaded are left out", body = [Pokemon]),
        (status = 400, description = "Limit is zero"),
        (status = 404, description = "Unknown type"),
        (status = 502, description = "Failed to fetch the listing from the remote api"),
    )
)]
#[get("/pokemon/get_paginated")]
pub async fn get_paginated(query: Query<PageQuery>, roster: Data<Roster>) -> impl Responder {
    let page = query.page();
    if page.limit == 0 {
        return resp_400_BadRequest!("limit must be at least 1");
    }

    let res = roster.fetch_roster(page, query.category()).await;
    let pokemons = yeet_roster_error!(res);
    resp_200_Ok_json!(pokemons)
}
