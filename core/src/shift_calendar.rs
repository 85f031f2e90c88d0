//! Shift calendar: maps a point in time to the crew on duty.
//!
//! Four crews (A–D) work 12-hour day or night shifts on a two-week
//! rotation. Within each ISO week the days split into two groups:
//!
//!   group 1: MON TUE FRI SAT
//!   group 2: WED THU SUN
//!
//! Even weeks put A/C on group 1 and B/D on group 2; odd weeks swap.
//! The table below is closed: every input has exactly one crew.

use crate::types::{DayNight, Dow, Shift, ShiftPart};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Calendar fields derived from a single event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSlot {
    pub day_of_year: u32,
    pub week_no: u32,
    pub hour: u32,
    pub day_night: DayNight,
    pub dow: Dow,
    pub shift: Shift,
    pub shift_part: ShiftPart,
}

impl CalendarSlot {
    pub fn of(event_time: NaiveDateTime) -> Self {
        let week_no = event_time.iso_week().week();
        let hour = event_time.hour();
        let day_night = DayNight::from_hour(hour);
        let dow = Dow::from(event_time.weekday());
        Self {
            day_of_year: event_time.ordinal(),
            week_no,
            hour,
            day_night,
            dow,
            shift: shift_of(week_no, day_night.is_day(), dow),
            shift_part: shift_part_of(hour),
        }
    }
}

fn in_first_group(dow: Dow) -> bool {
    matches!(dow, Dow::Mon | Dow::Tue | Dow::Fri | Dow::Sat)
}

/// Crew on duty for an ISO week number, day/night flag and weekday.
pub fn shift_of(week_no: u32, is_day: bool, dow: Dow) -> Shift {
    let even_week = week_no % 2 == 0;
    // (even week, first group) picks the A/C pairing; any mismatch swaps to B/D.
    let primary = even_week == in_first_group(dow);
    match (primary, is_day) {
        (true, true)   => Shift::A,
        (true, false)  => Shift::C,
        (false, true)  => Shift::B,
        (false, false) => Shift::D,
    }
}

/// EARLY, MIDS and LATE are consecutive 4-hour blocks of each 12-hour shift.
pub fn shift_part_of(hour: u32) -> ShiftPart {
    match hour % 12 {
        6..=9 => ShiftPart::Early,
        10 | 11 | 0 | 1 => ShiftPart::Mids,
        _ => ShiftPart::Late,
    }
}

/// Whole-batch form: one calendar slot per event time, in order.
pub fn calendar_column(event_times: &[NaiveDateTime]) -> Vec<CalendarSlot> {
    event_times.iter().copied().map(CalendarSlot::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn rule_table_is_exhaustive() {
        // (even week, day, dow) -> expected crew, straight from the rota sheet.
        for week in [2u32, 3] {
            for is_day in [true, false] {
                for dow in Dow::ALL {
                    let group1 = matches!(dow, Dow::Mon | Dow::Tue | Dow::Fri | Dow::Sat);
                    let expected = match (week % 2 == 0, is_day, group1) {
                        (true, true, true)    => Shift::A,
                        (true, true, false)   => Shift::B,
                        (true, false, true)   => Shift::C,
                        (true, false, false)  => Shift::D,
                        (false, true, true)   => Shift::B,
                        (false, true, false)  => Shift::A,
                        (false, false, true)  => Shift::D,
                        (false, false, false) => Shift::C,
                    };
                    assert_eq!(
                        shift_of(week, is_day, dow),
                        expected,
                        "week={week} day={is_day} dow={dow:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn shift_part_covers_every_hour() {
        let early = [6, 7, 8, 9, 18, 19, 20, 21];
        let mids = [10, 11, 12, 13, 22, 23, 0, 1];
        for hour in 0..24 {
            let expected = if early.contains(&hour) {
                ShiftPart::Early
            } else if mids.contains(&hour) {
                ShiftPart::Mids
            } else {
                ShiftPart::Late
            };
            assert_eq!(shift_part_of(hour), expected, "hour={hour}");
        }
    }

    #[test]
    fn shift_of_is_pure() {
        for week in 1..=53 {
            for dow in Dow::ALL {
                assert_eq!(shift_of(week, true, dow), shift_of(week, true, dow));
                assert_eq!(shift_of(week, false, dow), shift_of(week, false, dow));
            }
        }
    }

    #[test]
    fn even_week_monday_morning_is_a_mids() {
        // 2024-01-08 is a Monday in ISO week 2.
        let slot = CalendarSlot::of(at(2024, 1, 8, 10));
        assert_eq!(slot.week_no, 2);
        assert_eq!(slot.dow, Dow::Mon);
        assert_eq!(slot.day_night, DayNight::Day);
        assert_eq!(slot.shift, Shift::A);
        assert_eq!(slot.shift_part, ShiftPart::Mids);
    }

    #[test]
    fn iso_week_used_across_year_boundary() {
        // 2021-01-01 is a Friday in ISO week 53 of 2020 (odd): group 1 night -> D.
        let slot = CalendarSlot::of(at(2021, 1, 1, 23));
        assert_eq!(slot.week_no, 53);
        assert_eq!(slot.day_of_year, 1);
        assert_eq!(slot.day_night, DayNight::Night);
        assert_eq!(slot.shift, Shift::D);
        assert_eq!(slot.shift_part, ShiftPart::Mids);
    }

    #[test]
    fn day_night_boundaries() {
        assert_eq!(CalendarSlot::of(at(2024, 3, 5, 5)).day_night, DayNight::Night);
        assert_eq!(CalendarSlot::of(at(2024, 3, 5, 6)).day_night, DayNight::Day);
        assert_eq!(CalendarSlot::of(at(2024, 3, 5, 17)).day_night, DayNight::Day);
        assert_eq!(CalendarSlot::of(at(2024, 3, 5, 18)).day_night, DayNight::Night);
    }
}
