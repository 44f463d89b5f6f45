use actix_web::{get, web::Data, Responder};

use crate::{
    macros::{resp_200_Ok_json, yeet_roster_error},
    roster::Roster,
};

#[utoipa::path(
    responses(
        (status = 200, description = "Returns every type key, sorted", body = [String]),
        (status = 502, description = "Failed to fetch the type catalog from the remote api"),
    )
)]
#[get("/types/get_all")]
pub async fn get_all(roster: Data<Roster>) -> impl Responder {
    let res = roster.all_types().await;
    let types = yeet_roster_error!(res);
    resp_200_Ok_json!(types)
}
