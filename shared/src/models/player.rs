use serde::{Deserialize, Serialize};

/// A player on an applicant team's roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub trust_score: Option<f64>,
    #[serde(default)]
    pub profile_url: String,
}

impl TeamMember {
    /// Two-letter avatar fallback
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Scores of zero mean "not yet rated"
    pub fn rated_score(&self) -> Option<f64> {
        self.trust_score.filter(|score| *score > 0.0)
    }
}
