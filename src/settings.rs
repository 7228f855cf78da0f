//! Game settings
//!
//! Nothing is persisted: the host builds settings from a JSON blob or from
//! the page's URL query string (`?skin=horn-girl&seed=42`).

use serde::{Deserialize, Serialize};

/// Playable character artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterSkin {
    Boy,
    #[default]
    CatGirl,
    HornGirl,
    PinkGirl,
    PrincessGirl,
}

impl CharacterSkin {
    pub const ALL: [CharacterSkin; 5] = [
        CharacterSkin::Boy,
        CharacterSkin::CatGirl,
        CharacterSkin::HornGirl,
        CharacterSkin::PinkGirl,
        CharacterSkin::PrincessGirl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterSkin::Boy => "boy",
            CharacterSkin::CatGirl => "cat-girl",
            CharacterSkin::HornGirl => "horn-girl",
            CharacterSkin::PinkGirl => "pink-girl",
            CharacterSkin::PrincessGirl => "princess-girl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boy" => Some(CharacterSkin::Boy),
            "cat-girl" => Some(CharacterSkin::CatGirl),
            "horn-girl" => Some(CharacterSkin::HornGirl),
            "pink-girl" => Some(CharacterSkin::PinkGirl),
            "princess-girl" => Some(CharacterSkin::PrincessGirl),
            _ => None,
        }
    }

    /// Image path handed to the resource loader
    pub fn sprite(&self) -> &'static str {
        match self {
            CharacterSkin::Boy => "images/char-boy.png",
            CharacterSkin::CatGirl => "images/char-cat-girl.png",
            CharacterSkin::HornGirl => "images/char-horn-girl.png",
            CharacterSkin::PinkGirl => "images/char-pink-girl.png",
            CharacterSkin::PrincessGirl => "images/char-princess-girl.png",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Character the player walks around as
    pub skin: CharacterSkin,
    /// RNG seed; the host picks one from the clock when unset
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain enum + Option<u64> always serializes
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse `skin` and `seed` from a URL query string.
    ///
    /// A leading `?` is optional. Unknown keys are ignored; bad values are
    /// logged and leave the default in place.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "skin" => match CharacterSkin::from_str(value) {
                    Some(skin) => settings.skin = skin,
                    None => log::warn!("Unknown skin '{}', keeping {}", value, settings.skin.as_str()),
                },
                "seed" => match value.parse::<u64>() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(e) => log::warn!("Ignoring seed '{}': {}", value, e),
                },
                _ => {}
            }
        }

        settings
    }

    /// Seed to use, falling back to `fallback` (usually a timestamp)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
