pub mod page_query;
pub mod pokemon;
pub mod pokemon_details;
pub mod pokemon_stats;
pub mod pokemon_summary;
pub mod remote_api;

pub use page_query::PageQuery;
pub use pokemon::{capitalize, Pokemon};
pub use pokemon_details::PokemonDetails;
pub use pokemon_stats::PokemonStats;
pub use pokemon_summary::PokemonSummary;
