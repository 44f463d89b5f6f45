use serde::Serialize;
use utoipa::ToSchema;

use super::{PokemonDetails, PokemonStats, PokemonSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
    pub stats: PokemonStats,
}

impl Pokemon {
    pub fn new(id: u32, name: &str, details: PokemonDetails) -> Self {
        Self {
            id,
            name: capitalize(name),
            image: details.image,
            types: details.types,
            stats: details.stats,
        }
    }

    /// Fills a summary in with its details. The summary keeps its id and name.
    pub fn from_summary(summary: &PokemonSummary, details: PokemonDetails) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            image: details.image,
            types: details.types,
            stats: details.stats,
        }
    }
}

/// Uppercases the first character, leaves the rest alone.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
