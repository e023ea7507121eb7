//! View Lifetime & Request Generations
//!
//! Results of a request can arrive after the view that issued it is gone,
//! or after a newer request for the same view was issued. These types let
//! the fetch helpers drop such results instead of writing stale state.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Liveness flag of a mounted view; ended from `on_cleanup`
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the view as torn down. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter handing out one ticket per issued request
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Issue a ticket; it supersedes every ticket issued before it
    pub fn issue(&self) -> Ticket {
        let issued = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            generation: self.clone(),
            issued,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ticket {
    generation: RequestGeneration,
    issued: u64,
}

impl Ticket {
    pub fn is_latest(&self) -> bool {
        self.generation.latest.load(Ordering::Acquire) == self.issued
    }
}

/// What to do with a response whose request has been superseded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleResponses {
    /// Apply it anyway: whichever response resolves last wins
    #[default]
    Apply,
    /// Drop it: only the latest-issued request may update state
    Discard,
}

impl FromStr for StaleResponses {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apply" => Ok(StaleResponses::Apply),
            "discard" => Ok(StaleResponses::Discard),
            other => Err(format!("unknown stale response policy: {}", other)),
        }
    }
}

/// Wraps a state updater and decides whether updates still reach it.
///
/// Updates are dropped once the view lifetime has ended, and, under
/// [`StaleResponses::Discard`], once the request's ticket is superseded.
#[derive(Clone, Debug)]
pub struct Gated<U> {
    inner: U,
    lifetime: ViewLifetime,
    ticket: Option<(Ticket, StaleResponses)>,
}

impl<U> Gated<U> {
    pub fn new(inner: U, lifetime: ViewLifetime) -> Self {
        Self {
            inner,
            lifetime,
            ticket: None,
        }
    }

    pub fn with_ticket(mut self, ticket: Ticket, policy: StaleResponses) -> Self {
        self.ticket = Some((ticket, policy));
        self
    }

    pub fn inner(&self) -> &U {
        &self.inner
    }

    /// Whether updates are still allowed through
    pub fn is_open(&self) -> bool {
        if !self.lifetime.is_alive() {
            return false;
        }
        match &self.ticket {
            Some((ticket, StaleResponses::Discard)) => ticket.is_latest(),
            _ => true,
        }
    }
}
