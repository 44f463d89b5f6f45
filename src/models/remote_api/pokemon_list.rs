use serde::Deserialize;

#[derive(Deserialize)]
pub struct ApiPokemonList {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<ApiNamedResource>,
}

/// `{ name, url }` reference used by every PokeAPI collection. The type catalog only
/// cares about names, so `url` may be missing.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiNamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
