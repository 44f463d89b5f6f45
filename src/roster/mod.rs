//! Roster aggregation: fetch a listing, fan out one detail request per listed pokemon,
//! normalize what came back and drop what didn't.
//!
//! A failing listing fails the whole call. A failing detail only costs that one pokemon,
//! so an empty `Ok` result is a normal outcome when every detail request failed.

mod endpoints;

use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use serde::de::DeserializeOwned;

pub use endpoints::Endpoints;

use crate::{
    error::{FetchError, RosterError},
    http_client::HttpClient,
    models::{
        remote_api::{ApiNamedResource, ApiPokemon, ApiPokemonList, ApiTypeDetail},
        Pokemon, PokemonDetails, PokemonSummary,
    },
};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
/// Close enough to "all" for the first generations.
pub const FULL_ROSTER_LIMIT: u32 = 150;
const TYPE_CATALOG_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    pub fn full_roster() -> Self {
        Self::new(FULL_ROSTER_LIMIT, 0)
    }

    /// Id of the pokemon at `position` in this page, counting from 1 across pages.
    fn positional_id(&self, position: usize) -> u32 {
        let position = u32::try_from(position).unwrap_or(u32::MAX);
        self.offset.saturating_add(position).saturating_add(1)
    }

    fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.offset as usize).min(items.len());
        let end = start.saturating_add(self.limit as usize).min(items.len());
        &items[start..end]
    }
}

pub struct Roster {
    client: Arc<dyn HttpClient>,
    endpoints: Endpoints,
    request_timeout: Option<Duration>,
}

impl Roster {
    pub fn new(client: Arc<dyn HttpClient>, endpoints: Endpoints) -> Self {
        Self {
            client,
            endpoints,
            request_timeout: None,
        }
    }

    /// Bounds every outbound request. A detail request running out of time drops that
    /// pokemon instead of stalling the whole call.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn get_all(&self) -> Result<Vec<Pokemon>, RosterError> {
        self.fetch_roster(Page::full_roster(), None).await
    }

    pub async fn fetch_roster(
        &self,
        page: Page,
        category: Option<&str>,
    ) -> Result<Vec<Pokemon>, RosterError> {
        if page.limit == 0 {
            return Ok(Vec::new());
        }

        let entries = self.listing(page, category).await.inspect_err(|e| {
            tracing::error!("{e}");
        })?;

        let outcomes = join_all(entries.iter().enumerate().map(|(position, entry)| async move {
            let outcome = self
                .fetch_pokemon(entry, page.positional_id(position))
                .await;
            (entry, outcome)
        }))
        .await;

        Ok(settle(outcomes.into_iter().map(|(entry, outcome)| (entry.name.as_str(), outcome))))
    }

    pub async fn total_count(&self) -> Result<u64, RosterError> {
        let url = self.endpoints.pokemon_count();
        let list = self
            .get_json::<ApiPokemonList>(&url)
            .await
            .map_err(RosterError::Count)?;
        list.count.ok_or_else(|| {
            RosterError::Count(FetchError::Malformed {
                url,
                reason: "listing has no count".into(),
            })
        })
    }

    pub async fn type_count(&self, category: &str) -> Result<usize, RosterError> {
        Ok(self.type_members(category).await?.len())
    }

    /// Every type key PokeAPI knows about, sorted.
    pub async fn all_types(&self) -> Result<Vec<String>, RosterError> {
        let catalog = self
            .get_json::<ApiPokemonList>(&self.endpoints.type_catalog(TYPE_CATALOG_LIMIT))
            .await
            .map_err(RosterError::Types)?;
        let mut types: Vec<String> = catalog.results.into_iter().map(|t| t.name).collect();
        types.sort();
        Ok(types)
    }

    /// A page of the listing without any detail requests.
    pub async fn summaries_page(&self, page: Page) -> Result<Vec<PokemonSummary>, RosterError> {
        if page.limit == 0 {
            return Ok(Vec::new());
        }
        let entries = self.listing(page, None).await?;
        Ok(entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                PokemonSummary::new(page.positional_id(position), &entry.name, Vec::new())
            })
            .collect())
    }

    /// All members of a type without any detail requests. Ids count from 1 within the type.
    pub async fn summaries_by_type(
        &self,
        category: &str,
    ) -> Result<Vec<PokemonSummary>, RosterError> {
        let members = self.type_members(category).await?;
        let everything = Page::new(u32::MAX, 0);
        Ok(members
            .iter()
            .enumerate()
            .map(|(position, member)| {
                PokemonSummary::new(
                    everything.positional_id(position),
                    &member.name,
                    vec![category.to_string()],
                )
            })
            .collect())
    }

    pub async fn pokemon_details(&self, url: &str) -> Result<PokemonDetails, RosterError> {
        self.fetch_details(url).await.map_err(RosterError::Details)
    }

    /// Fetches details for pokemons only known by name. Never fails as a whole, pokemons
    /// whose details can't be loaded are left out.
    pub async fn populate_details(&self, summaries: &[PokemonSummary]) -> Vec<Pokemon> {
        let outcomes = join_all(summaries.iter().map(|summary| async move {
            let url = self.endpoints.pokemon_by_name(&summary.name);
            let outcome = self
                .fetch_details(&url)
                .await
                .map(|details| Pokemon::from_summary(summary, details));
            (summary.name.as_str(), outcome)
        }))
        .await;

        settle(outcomes)
    }

    async fn listing(
        &self,
        page: Page,
        category: Option<&str>,
    ) -> Result<Vec<ApiNamedResource>, RosterError> {
        let mut entries = match category {
            None => {
                self.get_json::<ApiPokemonList>(&self.endpoints.pokemon_list(page))
                    .await
                    .map_err(RosterError::Listing)?
                    .results
            }
            Some(category) => page.slice(&self.type_members(category).await?).to_vec(),
        };
        entries.truncate(page.limit as usize);
        Ok(entries)
    }

    async fn type_members(&self, category: &str) -> Result<Vec<ApiNamedResource>, RosterError> {
        let detail = self
            .get_json::<ApiTypeDetail>(&self.endpoints.type_detail(category))
            .await
            .map_err(|source| RosterError::Category {
                category: category.to_string(),
                source,
            })?;
        Ok(detail.pokemon.into_iter().map(|m| m.pokemon).collect())
    }

    async fn fetch_pokemon(
        &self,
        entry: &ApiNamedResource,
        positional_id: u32,
    ) -> Result<Pokemon, FetchError> {
        let api_pokemon = self.get_json::<ApiPokemon>(&entry.url).await?;
        let details = to_details(&entry.url, &api_pokemon)?;
        Ok(Pokemon::new(
            api_pokemon.id.unwrap_or(positional_id),
            &entry.name,
            details,
        ))
    }

    async fn fetch_details(&self, url: &str) -> Result<PokemonDetails, FetchError> {
        let api_pokemon = self.get_json::<ApiPokemon>(url).await?;
        to_details(url, &api_pokemon)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let request = self.client.get(url);
        let response = match self.request_timeout {
            Some(after) => tokio::time::timeout(after, request)
                .await
                .map_err(|_| FetchError::Timeout {
                    url: url.to_string(),
                    after,
                })??,
            None => request.await?,
        };

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn to_details(url: &str, api_pokemon: &ApiPokemon) -> Result<PokemonDetails, FetchError> {
    PokemonDetails::try_from(api_pokemon).map_err(|e| FetchError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Keeps the successes in their original order and logs the rest.
fn settle<'a, T>(outcomes: impl IntoIterator<Item = (&'a str, Result<T, FetchError>)>) -> Vec<T> {
    outcomes
        .into_iter()
        .filter_map(|(name, outcome)| {
            outcome
                .inspect_err(|e| tracing::warn!(pokemon = name, "Skipping pokemon: {e}"))
                .ok()
        })
        .collect()
}
