use serde::Serialize;
use utoipa::ToSchema;

use super::{
    remote_api::{ApiPokemon, ApiPokemonSprites},
    PokemonStats,
};
use crate::error::IncompleteStats;

/// Everything a detail payload contributes to a [`super::Pokemon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PokemonDetails {
    pub image: String,
    pub types: Vec<String>,
    pub stats: PokemonStats,
}

impl TryFrom<&ApiPokemon> for PokemonDetails {
    type Error = IncompleteStats;

    fn try_from(value: &ApiPokemon) -> Result<Self, Self::Error> {
        Ok(Self {
            image: value
                .sprites
                .as_ref()
                .map(ApiPokemonSprites::preferred_image)
                .unwrap_or_default(),
            types: value
                .types
                .iter()
                .map(|slot| slot.kind.name.clone())
                .collect(),
            stats: PokemonStats::try_from(value.stats.as_slice())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn decode(payload: serde_json::Value) -> ApiPokemon {
        serde_json::from_value(payload).unwrap()
    }

    fn stats() -> serde_json::Value {
        json!([45, 49, 49, 65, 65, 45]
            .iter()
            .map(|base_stat| json!({ "base_stat": base_stat }))
            .collect::<Vec<_>>())
    }

    #[test]
    fn null_sprites_leave_the_image_empty() {
        let payload = decode(json!({
            "sprites": null,
            "types": [{ "slot": 1, "type": { "name": "grass", "url": "" } }],
            "stats": stats(),
        }));

        let details = PokemonDetails::try_from(&payload).unwrap();

        assert_eq!(details.image, "");
        assert_eq!(details.types, vec!["grass"]);
        assert_eq!(details.stats.hp, 45);
    }

    #[test]
    fn missing_sprites_leave_the_image_empty() {
        let payload = decode(json!({ "types": [], "stats": stats() }));

        assert_eq!(PokemonDetails::try_from(&payload).unwrap().image, "");
    }
}
