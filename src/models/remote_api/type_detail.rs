use serde::Deserialize;

use super::ApiNamedResource;

#[derive(Deserialize)]
pub struct ApiTypeDetail {
    pub pokemon: Vec<ApiTypeMember>,
}

#[derive(Deserialize)]
pub struct ApiTypeMember {
    pub pokemon: ApiNamedResource,
}
