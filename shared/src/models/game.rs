use serde::{Deserialize, Serialize};
use std::fmt;

/// Titles a team can register for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Game {
    #[serde(rename = "valorant")]
    Valorant,
    #[serde(rename = "counterStrike2")]
    CounterStrike2,
    #[serde(rename = "bgmi")]
    Bgmi,
    #[serde(rename = "freeFire")]
    FreeFire,
}

impl Game {
    pub const ALL: [Game; 4] = [
        Game::Valorant,
        Game::CounterStrike2,
        Game::Bgmi,
        Game::FreeFire,
    ];

    /// Value used on the wire and in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Valorant => "valorant",
            Game::CounterStrike2 => "counterStrike2",
            Game::Bgmi => "bgmi",
            Game::FreeFire => "freeFire",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Game::Valorant => "Valorant",
            Game::CounterStrike2 => "Counter-Strike 2",
            Game::Bgmi => "BGMI",
            Game::FreeFire => "Free Fire",
        }
    }

    /// Maximum roster size, captain included
    pub fn max_roster(&self) -> u32 {
        match self {
            Game::Valorant | Game::CounterStrike2 => 5,
            Game::Bgmi | Game::FreeFire => 4,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
