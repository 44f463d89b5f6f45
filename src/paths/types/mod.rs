pub mod get_all;
pub mod get_count;
pub mod get_pokemon;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(get_all::get_all)
        .service(get_count::get_count)
        .service(get_pokemon::get_pokemon);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web::Data, App};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::{
        roster::Roster,
        test_support::{endpoints, type_listing, FakeClient},
    };

    fn app_data(client: FakeClient) -> Data<Roster> {
        Data::new(Roster::new(Arc::new(client), endpoints()))
    }

    #[actix_web::test]
    async fn lists_sorted_types() {
        let roster = app_data(FakeClient::new().json(
            endpoints().type_catalog(100),
            json!({ "results": [{ "name": "water" }, { "name": "fire" }] }),
        ));
        let app = test::init_service(App::new().app_data(roster).configure(super::configure)).await;

        let req = test::TestRequest::get().uri("/types/get_all").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!(["fire", "water"]));
    }

    #[actix_web::test]
    async fn counts_members_of_a_type() {
        let roster = app_data(FakeClient::new().json(
            endpoints().type_detail("ice"),
            type_listing(&[("jynx", 124), ("lapras", 131)]),
        ));
        let app = test::init_service(App::new().app_data(roster).configure(super::configure)).await;

        let req = test::TestRequest::get().uri("/types/ice/count").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!(2));
    }

    #[actix_web::test]
    async fn lists_members_of_a_type() {
        let roster = app_data(FakeClient::new().json(
            endpoints().type_detail("ice"),
            type_listing(&[("jynx", 124), ("lapras", 131)]),
        ));
        let app = test::init_service(App::new().app_data(roster).configure(super::configure)).await;

        let req = test::TestRequest::get().uri("/types/ice/pokemon").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Jynx", "image": "", "types": ["ice"] },
                { "id": 2, "name": "Lapras", "image": "", "types": ["ice"] },
            ])
        );
    }

    #[actix_web::test]
    async fn unknown_type_is_not_found() {
        let roster = app_data(FakeClient::new().status(endpoints().type_detail("cosmic"), 404));
        let app = test::init_service(App::new().app_data(roster).configure(super::configure)).await;

        let req = test::TestRequest::get().uri("/types/cosmic/count").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
