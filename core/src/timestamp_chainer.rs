//! Turns sampled durations into the six dependent call timestamps.
//!
//! Chain order (each arrow adds one duration):
//!
//!   event ─queue→ queued ─dispatch→ dispatched ─ack→ acknowledged ─enroute→ enroute
//!   event ─phone→ disconnected
//!   event ─total→ closed

use crate::{duration_sampler::DurationColumns, types::Seconds};
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimeline {
    pub queued: NaiveDateTime,
    pub dispatched: NaiveDateTime,
    pub acknowledged: NaiveDateTime,
    pub disconnected: NaiveDateTime,
    pub unit_enroute: NaiveDateTime,
    pub closed: NaiveDateTime,
}

/// Durations for a single call, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallDurations {
    pub queue: Seconds,
    pub dispatch: Seconds,
    pub phone: Seconds,
    pub ack: Seconds,
    pub enroute: Seconds,
    pub total: Seconds,
}

impl CallDurations {
    pub fn at(columns: &DurationColumns, i: usize) -> Self {
        Self {
            queue: columns.queue[i],
            dispatch: columns.dispatch[i],
            phone: columns.phone[i],
            ack: columns.ack[i],
            enroute: columns.enroute[i],
            total: columns.total_time(i),
        }
    }
}

impl CallTimeline {
    pub fn chain(event_time: NaiveDateTime, d: CallDurations) -> Self {
        let queued = event_time + Duration::seconds(d.queue);
        let dispatched = queued + Duration::seconds(d.dispatch);
        let acknowledged = dispatched + Duration::seconds(d.ack);
        Self {
            queued,
            dispatched,
            acknowledged,
            disconnected: event_time + Duration::seconds(d.phone),
            unit_enroute: acknowledged + Duration::seconds(d.enroute),
            closed: event_time + Duration::seconds(d.total),
        }
    }
}

/// Whole-batch form. `event_times` and `durations` must be the same length.
pub fn chain_column(event_times: &[NaiveDateTime], durations: &DurationColumns) -> Vec<CallTimeline> {
    debug_assert_eq!(event_times.len(), durations.len());
    event_times
        .iter()
        .enumerate()
        .map(|(i, &t)| CallTimeline::chain(t, CallDurations::at(durations, i)))
        .collect()
}
