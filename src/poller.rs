use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::BotError;
use crate::practicum::HomeworkSource;
use crate::status::parse_status;
use crate::telegram::Notifier;
use crate::validator::{check_response, current_date};

/// What happened to the message produced by one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Same text was already sent earlier; nothing went out.
    Duplicate,
    /// The notifier failed; the text still counts as sent.
    Failed,
}

/// Polls the homework API and forwards status changes to the notifier.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
    /// Window used when the server does not hand back a `current_date`.
    fallback_from_date: i64,
    from_date: i64,
    sent: Vec<String>,
}

impl<S: HomeworkSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, interval: Duration, from_date: i64) -> Self {
        Self {
            source,
            notifier,
            interval,
            fallback_from_date: from_date,
            from_date,
            sent: Vec::new(),
        }
    }

    /// Current lower bound of the polling window.
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Fetch, validate and translate the most recent submission.
    ///
    /// The API is trusted to list the newest submission first.
    pub async fn check_homework(&mut self) -> Result<String, BotError> {
        let response = self.source.fetch(self.from_date).await?;
        let homeworks = check_response(&response)?;
        let latest = homeworks.first().ok_or(BotError::NoSubmissions)?;
        let message = parse_status(latest)?;
        self.from_date = current_date(&response).unwrap_or(self.fallback_from_date);
        Ok(message)
    }

    /// Message for this iteration: the status text, or a failure sentence.
    pub async fn compose_message(&mut self) -> String {
        match self.check_homework().await {
            Ok(message) => message,
            Err(err) => {
                let message = format!("Сбой в работе программы: {err}");
                error!("{message}");
                message
            }
        }
    }

    /// One full iteration without the trailing sleep.
    pub async fn tick(&mut self) -> Delivery {
        let message = self.compose_message().await;
        if self.sent.contains(&message) {
            debug!("no new statuses");
            return Delivery::Duplicate;
        }
        self.sent.push(message.clone());
        match self.notifier.notify(&message).await {
            Ok(()) => Delivery::Sent,
            Err(err) => {
                error!(error = %err, "failed to deliver message");
                Delivery::Failed
            }
        }
    }

    /// Poll forever, sleeping `interval` after every iteration.
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), from_date = self.from_date, "polling started");
        loop {
            let delivery = self.tick().await;
            debug!(?delivery, next_from_date = self.from_date, "iteration finished");
            sleep(self.interval).await;
        }
    }
}
