use actix_web::{
    get,
    web::{Data, Query},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_json, resp_400_BadRequest, yeet_roster_error},
    models::{PageQuery, PokemonSummary},
    roster::Roster,
};

#[utoipa::path(
    params(PageQuery),
    responses(
        (status = 200, description = "Returns a page of pokemon names and ids without fetching details. `category` is ignored", body = [PokemonSummary]),
        (status = 400, description = "Limit is zero"),
        (status = 502, description = "Failed to fetch the listing from the remote api"),
    )
)]
#[get("/pokemon/get_page")]
pub async fn get_page(query: Query<PageQuery>, roster: Data<Roster>) -> impl Responder {
    let page = query.page();
    if page.limit == 0 {
        return resp_400_BadRequest!("limit must be at least 1");
    }

    let res = roster.summaries_page(page).await;
    let summaries = yeet_roster_error!(res);
    resp_200_Ok_json!(summaries)
}
