use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct ApiPokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<ApiPokemonSpritesOther>,
}

#[derive(Deserialize, Clone)]
pub struct ApiPokemonSpritesOther {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ApiPokemonSpritesOfficialArtwork>,
}

#[derive(Deserialize, Clone)]
pub struct ApiPokemonSpritesOfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl ApiPokemonSprites {
    fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }

    /// Official artwork, then the default sprite, then an empty string. Empty URLs count
    /// as missing.
    pub fn preferred_image(&self) -> String {
        [self.official_artwork(), self.front_default.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}
