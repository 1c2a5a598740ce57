use std::time::Duration;

use chrono_tz::Tz;

use crate::{
    aggregator::Aggregator,
    client::Transport,
    detector::{detect, Detection, LastNotified},
    dispatcher::Dispatcher,
    dota2::Side,
    notification,
    opendota::FetchError,
    time::format_timestamp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleResult {
    /// recent matches could not be fetched, state untouched
    FetchFailed,
    /// first successful poll, state seeded with this match
    Baseline(u64),
    Unchanged,
    /// new match whose enrichment failed, it won't be retried
    Abandoned(u64),
    /// new match whose webhook could not be delivered
    Undelivered(u64),
    Notified(u64),
}

pub struct Poller<'t, T> {
    aggregator: Aggregator<'t, T>,
    dispatcher: Dispatcher<'t, T>,
    state: LastNotified,
    interval: Duration,
    username: String,
    zone: Tz,
}

impl<'t, T: Transport> Poller<'t, T> {
    pub fn new(
        aggregator: Aggregator<'t, T>,
        dispatcher: Dispatcher<'t, T>,
        interval: Duration,
        username: &str,
        zone: Tz,
    ) -> Self {
        Self {
            aggregator,
            dispatcher,
            state: LastNotified::default(),
            interval,
            username: username.to_string(),
            zone,
        }
    }

    #[cfg(test)]
    pub fn with_state(mut self, state: LastNotified) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> LastNotified {
        self.state
    }

    /// One full cycle: detect, enrich, build, deliver. Every failure is
    /// logged and ends the cycle, nothing escapes to the caller.
    pub async fn poll(&mut self) -> CycleResult {
        let matches = match self.aggregator.recent_matches().await {
            Ok(matches) => matches,
            Err(err) => {
                log_fetch_error("recent matches", &err);
                return CycleResult::FetchFailed;
            }
        };

        let (state, detection) = detect(self.state, &matches);
        // committed before enrichment, a failure below forfeits this match
        self.state = state;

        let mat = match detection {
            None => return CycleResult::FetchFailed,
            Some(Detection::Unchanged) => {
                log::debug!("Not a new match... skipping");
                return CycleResult::Unchanged;
            }
            Some(Detection::Baseline(mat)) => {
                log::info!(
                    "Tracking from match #{} - {}",
                    mat.match_id,
                    format_timestamp(mat.start_time, self.zone)
                );
                return CycleResult::Baseline(mat.match_id);
            }
            Some(Detection::NewMatch(mat)) => mat,
        };
        log::info!("New match #{} ({})", mat.match_id, Side::from(mat.player_slot));

        let data = match self.aggregator.enrich(mat).await {
            Ok(data) => data,
            Err(err) => {
                log_fetch_error(&format!("match #{}", mat.match_id), &err);
                return CycleResult::Abandoned(mat.match_id);
            }
        };

        let webhook = notification::build(&self.username, mat, &data, self.zone);
        match self.dispatcher.send(&webhook).await {
            Ok(()) => {
                log::info!("Webhook successfully sent for match #{}", mat.match_id);
                CycleResult::Notified(mat.match_id)
            }
            Err(err) => {
                log::error!("Unable to send webhook for match #{}: {}", mat.match_id, err);
                CycleResult::Undelivered(mat.match_id)
            }
        }
    }

    /// Seeds the state, then polls every `interval` until the process is killed.
    pub async fn run(&mut self) {
        self.poll().await;
        if self.state().0.is_none() {
            log::warn!("No baseline match yet, the next successful poll sets it");
        }
        log::info!("Starting event loop - {} seconds", self.interval.as_secs());
        loop {
            tokio::time::sleep(self.interval).await;
            self.poll().await;
        }
    }
}

fn log_fetch_error(what: &str, err: &FetchError) {
    log::warn!("Unable to fetch {}, skipping: {}", what, err);
    if let FetchError::DecodeError(_, _, content) = err {
        // opendota may have changed its response format
        log::debug!("undecodable response: {}", content);
    }
}
