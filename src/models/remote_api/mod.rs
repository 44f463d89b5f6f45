mod pokemon;
mod pokemon_list;
mod pokemon_sprites;
mod type_detail;

pub use pokemon::{ApiPokemon, ApiPokemonStat};
pub use pokemon_list::{ApiNamedResource, ApiPokemonList};
pub use pokemon_sprites::ApiPokemonSprites;
pub use type_detail::ApiTypeDetail;
