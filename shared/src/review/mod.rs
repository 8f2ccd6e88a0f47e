//! Applicant review workflow: load a tournament's applicants, filter them,
//! approve/reject/flag individual teams and export the list.

pub mod config;
pub mod controller;
pub mod export;
pub mod filter;
pub mod loader;
pub mod notification;
pub mod session;
pub mod state;
pub mod team_detail;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ReviewConfig;
pub use controller::TransitionOutcome;
pub use export::{render_csv, ExportFile, ExportSource};
pub use filter::{available_statuses, filter_teams, ApplicantFilter};
pub use loader::{fetch_applicants, LoadOutcome, LoadedApplicants};
pub use notification::{Notification, NotificationKind, NotificationLog, ReviewObserver};
pub use session::ReviewSession;
pub use state::{ApplicantReview, RowActions};
pub use team_detail::{TeamDetailSession, TeamDetailState};
