use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::remote_api::ApiPokemonStat;
use crate::error::IncompleteStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
}

impl TryFrom<&[ApiPokemonStat]> for PokemonStats {
    type Error = IncompleteStats;

    /// PokeAPI always lists stats as hp, attack, defense, special-attack,
    /// special-defense, speed. Only the position is trusted, never the stat name.
    fn try_from(stats: &[ApiPokemonStat]) -> Result<Self, Self::Error> {
        let [hp, attack, defense, sp_atk, sp_def, speed, ..] = stats else {
            return Err(IncompleteStats { found: stats.len() });
        };
        Ok(Self {
            hp: hp.base_stat,
            attack: attack.base_stat,
            defense: defense.base_stat,
            sp_atk: sp_atk.base_stat,
            sp_def: sp_def.base_stat,
            speed: speed.base_stat,
        })
    }
}
