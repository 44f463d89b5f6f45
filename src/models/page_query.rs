use serde::Deserialize;
use utoipa::IntoParams;

use crate::roster::{Page, DEFAULT_PAGE_LIMIT};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page size, defaults to 20.
    pub limit: Option<u32>,
    /// Number of pokemons to skip, defaults to 0.
    pub offset: Option<u32>,
    /// Only list pokemons of this type, e.g. `fire`.
    pub category: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Page {
        Page::new(
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            self.offset.unwrap_or_default(),
        )
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }
}
