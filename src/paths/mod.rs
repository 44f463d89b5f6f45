pub mod pokemon;
pub mod types;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.configure(pokemon::configure)
        .configure(types::configure)
        .service(crate::docs::openapi_json);
}
