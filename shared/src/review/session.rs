use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::review::config::ReviewConfig;
use crate::review::notification::ReviewObserver;
use crate::review::state::ApplicantReview;
use crate::service::TournamentService;

/// Binds an applicants view to the service.
///
/// Loading, status transitions and exports are implemented on this type in
/// their own modules. The view state is only reachable through a `Weak`
/// handle, so every completion first checks the view is still alive.
pub struct ReviewSession<S: ?Sized, O: ?Sized> {
    pub(crate) service: Rc<S>,
    pub(crate) observer: Rc<O>,
    pub(crate) state: Weak<RefCell<ApplicantReview>>,
    pub(crate) config: ReviewConfig,
}

impl<S, O> ReviewSession<S, O>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    pub fn new(service: Rc<S>, observer: Rc<O>, state: &Rc<RefCell<ApplicantReview>>) -> Self {
        Self {
            service,
            observer,
            state: Rc::downgrade(state),
            config: ReviewConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReviewConfig) -> Self {
        self.config = config;
        self
    }

    /// The view state, if the view is still mounted
    pub fn state(&self) -> Option<Rc<RefCell<ApplicantReview>>> {
        self.state.upgrade()
    }

    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }
}

impl<S: ?Sized, O: ?Sized> Clone for ReviewSession<S, O> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            observer: Rc::clone(&self.observer),
            state: Weak::clone(&self.state),
            config: self.config.clone(),
        }
    }
}
