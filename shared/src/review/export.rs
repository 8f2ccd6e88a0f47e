use log::{debug, error, info, warn};

use crate::error::ExportError;
use crate::models::team::Team;
use crate::review::config::ReviewConfig;
use crate::review::notification::{Notification, ReviewObserver};
use crate::review::session::ReviewSession;
use crate::service::TournamentService;

pub const EXPORT_HEADER: [&str; 7] = [
    "Team Name",
    "Game",
    "Captain",
    "Members",
    "Avg Trust Score",
    "Status",
    "Applied At",
];

pub const CSV_MIME: &str = "text/csv";

/// Where an export's bytes came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSource {
    Server,
    /// Built in the browser from the visible rows after the server export failed
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: Vec<u8>,
    pub source: ExportSource,
}

impl ExportFile {
    pub fn success_message(&self) -> &'static str {
        match self.source {
            ExportSource::Server => "Teams list exported successfully.",
            ExportSource::Local => "Teams list exported successfully (offline mode).",
        }
    }
}

/// Line breaks inside a field become spaces so each team stays on one line
fn single_line(field: &str) -> String {
    field.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Serializes `teams` as CSV with the fixed header row, one line per team.
/// Dates are written as `YYYY-MM-DD` in UTC.
pub fn render_csv(teams: &[&Team]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for team in teams {
        let members = team.player_count.to_string();
        let trust_score = team.display_trust_score();
        let applied_at = team.joined_at.format("%Y-%m-%d").to_string();
        writer.write_record([
            single_line(&team.team_name).as_str(),
            team.game.as_str(),
            single_line(&team.captain).as_str(),
            members.as_str(),
            trust_score.as_str(),
            team.status.as_str(),
            applied_at.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Server export with local fallback. Never fails.
pub async fn export_applicants<S>(
    service: &S,
    config: &ReviewConfig,
    tournament_id: &str,
    title: Option<&str>,
    visible: &[&Team],
) -> ExportFile
where
    S: TournamentService + ?Sized,
{
    let filename = config.export_filename(title);

    match service.export_applicants(tournament_id).await {
        Ok(content) => {
            debug!("Server export for {} returned {} bytes", tournament_id, content.len());
            ExportFile {
                filename,
                mime_type: CSV_MIME,
                content,
                source: ExportSource::Server,
            }
        }
        Err(e) => {
            warn!("Error exporting teams list, building it locally: {}", e);
            let content = render_csv(visible).unwrap_or_else(|e| {
                error!("Local export failed: {}", e);
                EXPORT_HEADER.join(",")
            });
            ExportFile {
                filename,
                mime_type: CSV_MIME,
                content: content.into_bytes(),
                source: ExportSource::Local,
            }
        }
    }
}

impl<S, O> ReviewSession<S, O>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    /// Exports what the organizer currently sees. Returns `None` only when
    /// the view is gone.
    pub async fn export_list(&self) -> Option<ExportFile> {
        let (tournament_id, title, visible): (String, Option<String>, Vec<Team>) = {
            let state = self.state()?;
            let state = state.borrow();
            (
                state.tournament_id().to_string(),
                state.tournament().map(|t| t.title.clone()),
                state.visible_teams().into_iter().cloned().collect(),
            )
        };

        let rows: Vec<&Team> = visible.iter().collect();
        let file = export_applicants(
            self.service.as_ref(),
            &self.config,
            &tournament_id,
            title.as_deref(),
            &rows,
        )
        .await;

        if !self.is_attached() {
            return None;
        }
        info!("Exported {} as {:?}", file.filename, file.source);
        self.observer.notify(Notification::success(file.success_message()));
        Some(file)
    }
}
