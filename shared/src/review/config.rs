/// Organizer-facing defaults for the review workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    /// Subject line of the contact email sent to a team captain
    pub contact_subject: String,
    /// Used in the export filename when the tournament title is unknown
    pub export_fallback_title: String,
    pub export_suffix: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            contact_subject: "Tournament Application Update".to_string(),
            export_fallback_title: "tournament".to_string(),
            export_suffix: "_teams.csv".to_string(),
        }
    }
}

impl ReviewConfig {
    pub fn export_filename(&self, title: Option<&str>) -> String {
        let title = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(self.export_fallback_title.as_str());
        format!("{}{}", title, self.export_suffix)
    }
}
