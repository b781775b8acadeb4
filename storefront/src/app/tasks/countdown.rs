//! # Countdown Task
//!
//! Repeating 1 second tick that recomputes the remaining-time label for
//! every listed auction. It only reads timestamps already in state and
//! never touches the network; re-renders between ticks are free to add or
//! drop listings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::app::state::AppState;
use crate::core::clock::Clock;
use crate::view::countdown::{parse_end_time, time_remaining_label, ENDED_LABEL};

/// Tick period.
const TICK_MILLIS: u64 = 1000;

/// Recompute labels for the given `(id, end_time)` pairs. Unparseable
/// timestamps label as ended instead of panicking the tick.
pub fn tick(now: DateTime<Utc>, timers: &[(i64, String)]) -> HashMap<i64, String> {
    timers
        .iter()
        .map(|(id, raw_end)| {
            let label = match parse_end_time(raw_end) {
                Some(end) => time_remaining_label(now, end),
                None => ENDED_LABEL.to_string(),
            };
            (*id, label)
        })
        .collect()
}

/// Drive the countdown until no auctions carry timers. Each tick re-reads
/// the current listing set, so listings appearing or disappearing between
/// ticks are picked up without restarting the task.
pub async fn run(state: Arc<RwLock<AppState>>, clock: Arc<dyn Clock>) {
    let mut ticker = interval(Duration::from_millis(TICK_MILLIS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let timers: Vec<(i64, String)> = {
            let state = state.read();
            state
                .catalog
                .auctions
                .iter()
                .map(|auction| (auction.id, auction.end_time.clone()))
                .collect()
        };
        if timers.is_empty() {
            tracing::debug!("No countdown timers present, stopping");
            break;
        }

        let labels = tick(clock.now(), &timers);
        state.write().catalog.time_labels = labels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-10-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_tick_labels_each_timer() {
        let timers = vec![
            (1, "2025-10-01T12:01:30Z".to_string()),
            (2, "2025-10-01T11:00:00Z".to_string()),
            (3, "garbage".to_string()),
        ];

        let labels = tick(now(), &timers);
        assert_eq!(labels[&1], "1m 30s");
        assert_eq!(labels[&2], ENDED_LABEL);
        assert_eq!(labels[&3], ENDED_LABEL);
    }

    #[test]
    fn test_tick_with_no_timers() {
        assert!(tick(now(), &[]).is_empty());
    }
}
