// src/poll/mod.rs

//! The polling control loop.
//!
//! Owns the time watermark and the one-shot alert state, drives
//! fetch → interpret → deliver each cycle, and classifies failures so the
//! process never crashes and never spams the chat.

pub mod interpret;

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::services::{Notifier, ReviewClient};
use crate::utils::now_ts;

/// One-shot escalation state.
///
/// Only the first escalating failure per process lifetime produces a
/// user-visible alert; the state never resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    NotYetAlerted,
    Alerted,
}

impl AlertState {
    /// Transition to `Alerted`. Returns true when this call made the
    /// transition, false when it already happened.
    fn raise(&mut self) -> bool {
        match self {
            Self::NotYetAlerted => {
                *self = Self::Alerted;
                true
            }
            Self::Alerted => false,
        }
    }
}

/// Result of a completed poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was observed and a notification was rendered.
    Notified(String),
    /// Nothing changed inside the polled window.
    NoUpdate,
}

/// The polling state machine.
pub struct PollLoop {
    review: ReviewClient,
    notifier: Notifier,
    interval: Duration,
    /// Lower bound of the next poll window. After every notified or
    /// failed cycle this rewinds to `now - interval` rather than
    /// advancing to `now`, deliberately re-checking one full window.
    watermark: i64,
    alert: AlertState,
}

impl PollLoop {
    /// Create a poll loop starting its window at the current time.
    pub fn new(review: ReviewClient, notifier: Notifier, interval: Duration) -> Self {
        Self {
            review,
            notifier,
            interval,
            watermark: now_ts(),
            alert: AlertState::NotYetAlerted,
        }
    }

    /// Current watermark timestamp.
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    /// Current escalation state.
    pub fn alert_state(&self) -> AlertState {
        self.alert
    }

    /// Run the loop until an interrupt signal arrives.
    ///
    /// The inter-cycle sleep races against ctrl-c so shutdown never waits
    /// out a full interval.
    pub async fn run(&mut self) -> Result<()> {
        log::info!(
            "Poll loop started (interval {}s, watermark {})",
            self.interval.as_secs(),
            self.watermark
        );

        loop {
            let outcome = self.cycle().await;
            self.settle(outcome).await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Interrupt received, shutting down");
                    return Ok(());
                }
            }
        }
    }

    /// Execute one poll cycle: fetch, interpret, deliver.
    ///
    /// Delivery failures are absorbed here; everything else propagates to
    /// [`settle`](Self::settle) for classification.
    pub async fn cycle(&mut self) -> Result<CycleOutcome> {
        let response = self.review.fetch(self.watermark).await?;

        let record = match interpret::extract(&response) {
            Some(record) => record,
            None => {
                log::debug!("No homework updates since {}", self.watermark);
                return Ok(CycleOutcome::NoUpdate);
            }
        };

        let verdict = interpret::validate(record)?;
        let message = interpret::render(record, verdict);

        if let Err(error) = self.notifier.deliver(&message).await {
            log::warn!("Notification not delivered: {error}");
        }

        Ok(CycleOutcome::Notified(message))
    }

    /// Classify a finished cycle and update watermark and alert state.
    pub async fn settle(&mut self, outcome: Result<CycleOutcome>) {
        match outcome {
            Ok(CycleOutcome::Notified(message)) => {
                log::info!("Cycle complete, notified: {message}");
                self.rewind_watermark();
            }
            Ok(CycleOutcome::NoUpdate) => {
                // Nothing happened; the next fetch re-queries the same window.
            }
            Err(error @ AppError::MalformedPayload(_)) => {
                // No usable data this cycle; same handling as an empty window.
                log::warn!("{error}");
            }
            Err(error) if !error.escalates() => {
                log::warn!("Cycle aborted: {error}");
                self.rewind_watermark();
            }
            Err(error) => {
                log::error!("Cycle failed: {error}");

                if self.alert.raise() {
                    let message = format!("Сбой в работе телеграмм-бота: {error}");
                    if let Err(delivery_error) = self.notifier.deliver(&message).await {
                        log::warn!("Failure alert not delivered: {delivery_error}");
                    }
                } else {
                    log::debug!("Failure alert already sent, not repeating");
                }

                self.rewind_watermark();
            }
        }
    }

    fn rewind_watermark(&mut self) {
        self.watermark = now_ts() - self.interval.as_secs() as i64;
    }
}
