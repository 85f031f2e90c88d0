use crate::{
    timestamp,
    types::{Agency, CallReception, DayNight, Dow, Seconds, Shift, ShiftPart},
};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Column names, in output order. Downstream checks match on these exactly.
pub const CALL_RECORD_COLUMNS: [&str; 30] = [
    "call_id",
    "agency",
    "event_time",
    "day_of_year",
    "week_no",
    "hour",
    "day_night",
    "dow",
    "shift",
    "shift_part",
    "problem",
    "address",
    "priority_number",
    "call_taker",
    "call_reception",
    "dispatcher",
    "queue_time",
    "dispatch_time",
    "phone_time",
    "ack_time",
    "enroute_time",
    "on_scene_time",
    "process_time",
    "total_time",
    "time_call_queued",
    "time_call_dispatched",
    "time_call_acknowledged",
    "time_call_disconnected",
    "time_unit_enroute",
    "time_call_closed",
];

/// One row of the dispatch table. Field order is the column order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CallRecord {
    pub call_id:        String,
    pub agency:         Agency,
    #[serde(serialize_with = "timestamp::serialize")]
    pub event_time:     NaiveDateTime,
    pub day_of_year:    u32,
    pub week_no:        u32,
    pub hour:           u32,
    pub day_night:      DayNight,
    pub dow:            Dow,
    pub shift:          Shift,
    pub shift_part:     ShiftPart,
    pub problem:        String,
    pub address:        String,
    pub priority_number: u8,
    pub call_taker:     String,
    pub call_reception: CallReception,
    pub dispatcher:     String,

    pub queue_time:     Seconds,
    pub dispatch_time:  Seconds,
    pub phone_time:     Seconds,
    pub ack_time:       Seconds,
    pub enroute_time:   Seconds,
    pub on_scene_time:  Seconds,
    pub process_time:   Seconds,
    pub total_time:     Seconds,

    #[serde(serialize_with = "timestamp::serialize")]
    pub time_call_queued:       NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time_call_dispatched:   NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time_call_acknowledged: NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time_call_disconnected: NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time_unit_enroute:      NaiveDateTime,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time_call_closed:       NaiveDateTime,
}
