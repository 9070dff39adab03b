//! Waitlist signup flow.
//!
//! The controller is a plain state machine: `submit` and `handle` return the
//! asynchronous work to run, and whoever drives it (the `WaitlistForm`
//! component, or a test) feeds the resulting `FlowEvent` back into `handle`.
//! Every event carries the `Ticket` of the submission it belongs to, and
//! events for anything but the current ticket are dropped. That is how a reset
//! cancels a generation request that is still in flight.

pub mod services;

use std::rc::Rc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::consent::ConsentState;
use crate::i18n::{Catalog, Language};
use crate::variant::Variant;
use services::{GenerationError, IntakeClient, IntakeError, WelcomeGenerator, WelcomeRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Body posted to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub language: Language,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("cookie consent has not been accepted")]
    ConsentRequired,
    #[error("a submission is already in flight")]
    Busy,
    #[error("the form was already submitted, reset it first")]
    AlreadySubmitted,
    #[error("name and email are required")]
    MissingFields,
}

#[derive(Debug)]
pub enum FlowEvent {
    IntakeFinished {
        ticket: Ticket,
        result: Result<(), IntakeError>,
    },
    WelcomeFinished {
        ticket: Ticket,
        result: Result<String, GenerationError>,
    },
    ErrorExpired {
        ticket: Ticket,
    },
}

impl FlowEvent {
    fn ticket(&self) -> Ticket {
        match self {
            FlowEvent::IntakeFinished { ticket, .. }
            | FlowEvent::WelcomeFinished { ticket, .. }
            | FlowEvent::ErrorExpired { ticket } => *ticket,
        }
    }
}

pub type FlowFuture = LocalBoxFuture<'static, FlowEvent>;

/// Follow-up work requested by the controller.
pub enum Effect {
    /// Run the future and hand its event back.
    Spawn(FlowFuture),
    /// Hand the event back once the delay has passed.
    After(Duration, FlowEvent),
}

pub struct WaitlistController {
    catalog: Catalog,
    variant: Variant,
    intake: Rc<dyn IntakeClient>,
    generator: Rc<dyn WelcomeGenerator>,
    status: SubmissionStatus,
    message: Option<String>,
    ticket: Ticket,
    current: Option<Submission>,
}

impl WaitlistController {
    pub fn new(
        catalog: Catalog,
        variant: Variant,
        intake: Rc<dyn IntakeClient>,
        generator: Rc<dyn WelcomeGenerator>,
    ) -> Self {
        Self {
            catalog,
            variant,
            intake,
            generator,
            status: SubmissionStatus::Idle,
            message: None,
            ticket: Ticket(0),
            current: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Welcome line to display, only set while in `Success`.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Takes effect from the next default welcome onwards.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Starts a submission. On success the returned future performs the single
    /// intake request; nothing goes over the network when it is rejected.
    pub fn submit(
        &mut self,
        name: &str,
        email: &str,
        language: Language,
        consent: ConsentState,
    ) -> Result<FlowFuture, SubmitRejected> {
        if consent != ConsentState::Accepted {
            return Err(SubmitRejected::ConsentRequired);
        }
        match self.status {
            SubmissionStatus::Loading => return Err(SubmitRejected::Busy),
            SubmissionStatus::Success => return Err(SubmitRejected::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() {
            return Err(SubmitRejected::MissingFields);
        }

        let submission = Submission {
            name: name.to_string(),
            email: email.to_string(),
            language,
            source: config::SOURCE_TAG.to_string(),
            offer: self.variant.offer().map(str::to_string),
        };

        let ticket = self.next_ticket();
        self.status = SubmissionStatus::Loading;
        self.message = None;
        self.current = Some(submission.clone());
        log::info!("Submitting waitlist signup ({})", language.code());

        let intake = Rc::clone(&self.intake);
        Ok(async move {
            let result = intake.submit(&submission).await;
            FlowEvent::IntakeFinished { ticket, result }
        }
        .boxed_local())
    }

    pub fn handle(&mut self, event: FlowEvent) -> Option<Effect> {
        if event.ticket() != self.ticket {
            log::debug!("Dropping stale waitlist event {:?}", event);
            return None;
        }

        match event {
            FlowEvent::IntakeFinished { ticket, result: Err(e) } => {
                log::error!("Waitlist submission failed: {}", e);
                self.status = SubmissionStatus::Error;
                Some(Effect::After(
                    config::ERROR_RESET_DELAY,
                    FlowEvent::ErrorExpired { ticket },
                ))
            }
            FlowEvent::IntakeFinished { ticket, result: Ok(()) } => {
                let submission = self.current.as_ref()?;
                let language = submission.language;
                self.status = SubmissionStatus::Success;
                self.message = Some(self.catalog.get(language).default_welcome.to_string());

                let request = WelcomeRequest {
                    name: submission.name.clone(),
                    language,
                };
                let generator = Rc::clone(&self.generator);
                Some(Effect::Spawn(
                    async move {
                        let result = generator.generate(&request).await;
                        FlowEvent::WelcomeFinished { ticket, result }
                    }
                    .boxed_local(),
                ))
            }
            FlowEvent::WelcomeFinished { result, .. } => {
                match result {
                    Ok(text) if self.status == SubmissionStatus::Success => {
                        let text = text.trim();
                        if !text.is_empty() {
                            self.message = Some(text.to_string());
                        }
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("Keeping default welcome message: {}", e),
                }
                None
            }
            FlowEvent::ErrorExpired { .. } => {
                if self.status == SubmissionStatus::Error {
                    self.status = SubmissionStatus::Idle;
                }
                None
            }
        }
    }

    /// Back to an empty form. Anything still in flight becomes stale.
    pub fn reset(&mut self) {
        self.next_ticket();
        self.status = SubmissionStatus::Idle;
        self.message = None;
        self.current = None;
    }

    fn next_ticket(&mut self) -> Ticket {
        self.ticket = Ticket(self.ticket.0 + 1);
        self.ticket
    }
}
