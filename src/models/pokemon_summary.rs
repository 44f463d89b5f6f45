use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A pokemon known only from a listing. `image` stays empty until details are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PokemonSummary {
    pub fn new(id: u32, name: &str, types: Vec<String>) -> Self {
        Self {
            id,
            name: super::capitalize(name),
            image: String::new(),
            types,
        }
    }
}
