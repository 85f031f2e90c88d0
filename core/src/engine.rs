//! The batch engine: assembles a full table of synthetic calls.
//!
//! ASSEMBLY ORDER (fixed, documented, never reordered):
//!   1. Staff rosters     (call-taker pool, then dispatcher pool)
//!   2. Agency column
//!   3. Event-time column (uniform over the window, sorted ascending)
//!   4. Calendar columns  (day/week/hour, shift, shift part)
//!   5. Call ids, problem, address, priority, reception
//!   6. Call-taker and dispatcher, drawn from the roster of each row's shift
//!   7. Service-time columns
//!   8. Timestamp chain
//!
//! RULES:
//!   - Each step fills a whole column before the next step starts.
//!   - Every column draws from its own RngBank slot.
//!   - Request and config are validated before any sampling.
//!   - A batch either returns every row or fails as a whole.

use crate::{
    config::GeneratorConfig,
    corpus::Corpus,
    duration_sampler::sample_durations,
    error::{GenError, GenResult},
    record::CallRecord,
    rng::{ColumnRng, ColumnSlot, RngBank},
    shift_calendar::{calendar_column, CalendarSlot},
    staff::NamePool,
    timestamp_chainer::chain_column,
    types::{Agency, Shift},
};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub const DEFAULT_NAMES_PER_SHIFT: usize = 8;
pub const DEFAULT_SEED: u64 = 42;

/// Call numbers are drawn from [0, CALL_NUMBER_SPACE) and zero-padded to six digits.
/// Collisions inside a batch are possible and are not retried.
pub const CALL_NUMBER_SPACE: u64 = 1_000_000;

/// Parameters of one `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub count:           usize,
    pub start_date:      NaiveDate,
    /// Exclusive: event times fall in [start 00:00, end 00:00).
    pub end_date:        NaiveDate,
    pub names_per_shift: usize,
    pub seed:            u64,
}

impl BatchRequest {
    pub fn new(count: usize, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            count,
            start_date,
            end_date,
            names_per_shift: DEFAULT_NAMES_PER_SHIFT,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_names_per_shift(mut self, names_per_shift: usize) -> Self {
        self.names_per_shift = names_per_shift;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.count == 0 {
            return Err(GenError::InvalidCount);
        }
        if self.end_date <= self.start_date {
            return Err(GenError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.names_per_shift == 0 {
            return Err(GenError::InvalidNamesPerShift);
        }
        Ok(())
    }

    fn window_start(&self) -> NaiveDateTime {
        self.start_date.and_time(chrono::NaiveTime::MIN)
    }

    fn window_seconds(&self) -> i64 {
        (self.end_date - self.start_date).num_seconds()
    }
}

/// Result of one batch: the table plus both staff rosters.
#[derive(Debug, Clone)]
pub struct Batch {
    pub records:     Vec<CallRecord>,
    pub call_takers: NamePool,
    pub dispatchers: NamePool,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Owns a corpus and config so repeated batches can share them.
pub struct Generator {
    pub config: GeneratorConfig,
    corpus:     Corpus,
}

impl Generator {
    pub fn new(config: GeneratorConfig, corpus: Corpus) -> Self {
        Self { config, corpus }
    }

    /// Validate the config and build its address corpus from `corpus_seed`.
    pub fn build(config: GeneratorConfig, corpus_seed: u64) -> GenResult<Self> {
        config.validate()?;
        let corpus = Corpus::build(corpus_seed, config.address_pool_size)?;
        Ok(Self::new(config, corpus))
    }

    /// Small-corpus generator for tests.
    pub fn build_test() -> GenResult<Self> {
        Self::build(GeneratorConfig::default_test(), DEFAULT_SEED)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// A request sized by this generator's config (`names_per_shift`).
    pub fn request(&self, count: usize, start_date: NaiveDate, end_date: NaiveDate) -> BatchRequest {
        BatchRequest::new(count, start_date, end_date)
            .with_names_per_shift(self.config.names_per_shift)
    }

    pub fn generate(&self, request: &BatchRequest) -> GenResult<Batch> {
        generate(&self.corpus, &self.config, request)
    }
}

/// Produce one complete batch. No I/O; nothing is kept between calls.
pub fn generate(corpus: &Corpus, config: &GeneratorConfig, request: &BatchRequest) -> GenResult<Batch> {
    request.validate()?;
    config.validate()?;

    let n = request.count;
    log::info!(
        "batch: generating {n} calls over {}..{} (seed={})",
        request.start_date,
        request.end_date,
        request.seed
    );
    let bank = RngBank::new(request.seed);

    // 1. Rosters share one stream: call takers first, then dispatchers.
    let mut roster_rng = bank.for_column(ColumnSlot::StaffRoster);
    let call_takers = NamePool::generate(&mut roster_rng, request.names_per_shift);
    let dispatchers = NamePool::generate(&mut roster_rng, request.names_per_shift);
    log::debug!("batch: rosters ready ({} names per shift)", request.names_per_shift);

    // 2. Agency
    let mut rng = bank.for_column(ColumnSlot::Agency);
    let agencies: Vec<Agency> = (0..n).map(|_| rng.weighted(&config.agency_weights)).collect();

    // 3. Event time
    let event_times = event_time_column(&mut bank.for_column(ColumnSlot::EventTime), request, n);

    // 4. Calendar
    let calendar = calendar_column(&event_times);
    log::debug!("batch: calendar columns derived");

    // 5. Per-row categorical draws
    let mut rng = bank.for_column(ColumnSlot::CallNumber);
    let call_ids: Vec<String> = agencies
        .iter()
        .zip(&event_times)
        .map(|(agency, t)| call_id(*agency, t.year(), rng.next_u64_below(CALL_NUMBER_SPACE)))
        .collect();

    let mut rng = bank.for_column(ColumnSlot::Problem);
    let problems: Vec<&'static str> = agencies
        .iter()
        .map(|agency| *rng.pick(corpus.problems(*agency)))
        .collect();

    let mut rng = bank.for_column(ColumnSlot::Address);
    let addresses: Vec<&String> = (0..n).map(|_| rng.pick(corpus.addresses())).collect();

    let (lo, hi) = config.priority_range;
    let mut rng = bank.for_column(ColumnSlot::Priority);
    let priorities: Vec<u8> = (0..n)
        .map(|_| lo + rng.next_u64_below(u64::from(hi - lo) + 1) as u8)
        .collect();

    let mut rng = bank.for_column(ColumnSlot::Reception);
    let receptions: Vec<_> = (0..n).map(|_| rng.weighted(&config.reception_weights)).collect();

    // 6. Staff by shift
    let call_taker_col = staff_column(&call_takers, &calendar, &mut bank.for_column(ColumnSlot::CallTaker))?;
    let dispatcher_col = staff_column(&dispatchers, &calendar, &mut bank.for_column(ColumnSlot::Dispatcher))?;

    // 7. Durations
    let durations = sample_durations(&bank, &config.service_times, n)?;

    // 8. Chain
    let timelines = chain_column(&event_times, &durations);
    log::debug!("batch: timestamps chained");

    let mut records = Vec::with_capacity(n);
    for i in 0..n {
        let slot = &calendar[i];
        let line = &timelines[i];
        records.push(CallRecord {
            call_id:         call_ids[i].clone(),
            agency:          agencies[i],
            event_time:      event_times[i],
            day_of_year:     slot.day_of_year,
            week_no:         slot.week_no,
            hour:            slot.hour,
            day_night:       slot.day_night,
            dow:             slot.dow,
            shift:           slot.shift,
            shift_part:      slot.shift_part,
            problem:         problems[i].to_string(),
            address:         addresses[i].clone(),
            priority_number: priorities[i],
            call_taker:      call_taker_col[i].clone(),
            call_reception:  receptions[i],
            dispatcher:      dispatcher_col[i].clone(),
            queue_time:      durations.queue[i],
            dispatch_time:   durations.dispatch[i],
            phone_time:      durations.phone[i],
            ack_time:        durations.ack[i],
            enroute_time:    durations.enroute[i],
            on_scene_time:   durations.on_scene[i],
            process_time:    durations.process_time(i),
            total_time:      durations.total_time(i),
            time_call_queued:       line.queued,
            time_call_dispatched:   line.dispatched,
            time_call_acknowledged: line.acknowledged,
            time_call_disconnected: line.disconnected,
            time_unit_enroute:      line.unit_enroute,
            time_call_closed:       line.closed,
        });
    }

    log::info!("batch: assembled {} records", records.len());
    Ok(Batch { records, call_takers, dispatchers })
}

/// `"{yy}-{prefix}{nnnnnn}"`, e.g. `24-L004512`.
pub fn call_id(agency: Agency, year: i32, number: u64) -> String {
    format!("{:02}-{}{:06}", year.rem_euclid(100), agency.prefix(), number)
}

fn event_time_column(rng: &mut ColumnRng, request: &BatchRequest, n: usize) -> Vec<NaiveDateTime> {
    let start = request.window_start();
    let span = request.window_seconds() as u64;
    let mut offsets: Vec<i64> = (0..n).map(|_| rng.next_u64_below(span) as i64).collect();
    offsets.sort_unstable();
    offsets
        .into_iter()
        .map(|secs| start + Duration::seconds(secs))
        .collect()
}

fn staff_column(pool: &NamePool, calendar: &[CalendarSlot], rng: &mut ColumnRng) -> GenResult<Vec<String>> {
    calendar
        .iter()
        .map(|slot| draw_staff(pool, slot.shift, rng))
        .collect()
}

fn draw_staff(pool: &NamePool, shift: Shift, rng: &mut ColumnRng) -> GenResult<String> {
    pool.draw(shift, rng)
        .map(str::to_string)
        .ok_or(GenError::InvalidNamesPerShift)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn call_id_layout() {
        assert_eq!(call_id(Agency::Law, 2024, 4512), "24-L004512");
        assert_eq!(call_id(Agency::Ems, 2025, 0), "25-M000000");
        assert_eq!(call_id(Agency::Fire, 2009, 999_999), "09-F999999");
    }

    #[test]
    fn event_times_stay_inside_window_and_sorted() {
        let request = BatchRequest::new(2_000, date(2024, 3, 1), date(2024, 3, 3));
        let mut rng = RngBank::new(3).for_column(ColumnSlot::EventTime);
        let times = event_time_column(&mut rng, &request, request.count);
        let start = date(2024, 3, 1).and_hms_opt(0, 0, 0).unwrap();
        let end = date(2024, 3, 3).and_hms_opt(0, 0, 0).unwrap();
        assert!(times.iter().all(|t| *t >= start && *t < end));
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn request_validation_runs_before_sampling() {
        let start = date(2024, 1, 1);
        assert!(matches!(
            BatchRequest::new(0, start, date(2024, 2, 1)).validate(),
            Err(GenError::InvalidCount)
        ));
        assert!(matches!(
            BatchRequest::new(10, start, start).validate(),
            Err(GenError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            BatchRequest::new(10, start, date(2024, 2, 1))
                .with_names_per_shift(0)
                .validate(),
            Err(GenError::InvalidNamesPerShift)
        ));
    }

    #[test]
    fn one_day_window_single_record() {
        let generator = Generator::build_test().unwrap();
        let request = BatchRequest::new(1, date(2024, 7, 4), date(2024, 7, 5));
        let batch = generator.generate(&request).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records[0].event_time.date(), date(2024, 7, 4));
        assert!(batch.records[0].call_id.starts_with("24-"));
    }

    #[test]
    fn configured_roster_size_reaches_the_batch() {
        let config = GeneratorConfig {
            names_per_shift: 3,
            ..GeneratorConfig::default_test()
        };
        let generator = Generator::build(config, 1).unwrap();
        let request = generator.request(50, date(2024, 1, 1), date(2024, 2, 1));
        assert_eq!(request.names_per_shift, 3);

        let batch = generator.generate(&request).unwrap();
        for shift in Shift::ALL {
            assert_eq!(batch.call_takers.names(shift).len(), 3, "shift {shift}");
            assert_eq!(batch.dispatchers.names(shift).len(), 3, "shift {shift}");
        }
    }
}
