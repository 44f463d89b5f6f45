use serde::Deserialize;

use super::{ApiNamedResource, ApiPokemonSprites};

#[derive(Deserialize)]
pub struct ApiPokemon {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub sprites: Option<ApiPokemonSprites>,
    pub types: Vec<ApiPokemonTypeSlot>,
    pub stats: Vec<ApiPokemonStat>,
}

#[derive(Deserialize)]
pub struct ApiPokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: ApiNamedResource,
}

#[derive(Deserialize, Clone, Copy)]
pub struct ApiPokemonStat {
    pub base_stat: u32,
}
