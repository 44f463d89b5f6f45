use reqwest::Url;

use super::Page;
use crate::error::EndpointError;

/// Builds PokeAPI urls under a configurable base, e.g. `https://pokeapi.co/api/v2`.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, EndpointError> {
        let invalid = |reason: String| EndpointError::InvalidBaseUrl {
            url: base.to_string(),
            reason,
        };
        let url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("url cannot have path segments".into()));
        }
        Ok(Self { base: url })
    }

    fn at(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn pokemon_list(&self, page: Page) -> String {
        let mut url = self.at(&["pokemon"]);
        url.query_pairs_mut()
            .append_pair("limit", &page.limit.to_string())
            .append_pair("offset", &page.offset.to_string());
        url.into()
    }

    pub fn pokemon_count(&self) -> String {
        let mut url = self.at(&["pokemon"]);
        url.query_pairs_mut().append_pair("limit", "1");
        url.into()
    }

    pub fn pokemon_by_name(&self, name: &str) -> String {
        self.at(&["pokemon", &name.to_lowercase()]).into()
    }

    pub fn type_detail(&self, category: &str) -> String {
        self.at(&["type", category]).into()
    }

    pub fn type_catalog(&self, limit: u32) -> String {
        let mut url = self.at(&["type"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::config::POKEAPI_BASE_URL;

    #[rstest]
    #[case(POKEAPI_BASE_URL)]
    #[case("https://pokeapi.co/api/v2/")]
    fn builds_pokeapi_urls(#[case] base: &str) {
        let endpoints = Endpoints::new(base).unwrap();

        assert_eq!(
            endpoints.pokemon_list(Page::new(20, 40)),
            "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
        );
        assert_eq!(
            endpoints.pokemon_count(),
            "https://pokeapi.co/api/v2/pokemon?limit=1"
        );
        assert_eq!(
            endpoints.pokemon_by_name("Bulbasaur"),
            "https://pokeapi.co/api/v2/pokemon/bulbasaur"
        );
        assert_eq!(
            endpoints.type_detail("fire"),
            "https://pokeapi.co/api/v2/type/fire"
        );
        assert_eq!(
            endpoints.type_catalog(100),
            "https://pokeapi.co/api/v2/type?limit=100"
        );
    }

    #[test]
    fn escapes_path_segments() {
        let endpoints = Endpoints::new(POKEAPI_BASE_URL).unwrap();

        assert_eq!(
            endpoints.type_detail("../berry"),
            "https://pokeapi.co/api/v2/type/..%2Fberry"
        );
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:ash@example.com")]
    fn rejects_unusable_base(#[case] base: &str) {
        assert!(matches!(
            Endpoints::new(base),
            Err(EndpointError::InvalidBaseUrl { .. })
        ));
    }
}
