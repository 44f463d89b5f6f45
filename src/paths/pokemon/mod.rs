pub mod get_all;
pub mod get_by_name;
pub mod get_count;
pub mod get_page;
pub mod get_paginated;
pub mod populate;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(get_all::get_all)
        .service(get_paginated::get_paginated)
        .service(get_count::get_count)
        .service(get_page::get_page)
        .service(get_by_name::get_by_name)
        .service(populate::populate);
}
