//! Synthetic emergency-dispatch call generator.
//!
//! Build a `Corpus` once, then call `engine::generate` (or
//! `Generator::generate`) for as many batches as needed.

pub mod config;
pub mod corpus;
pub mod duration_sampler;
pub mod engine;
pub mod error;
pub mod export;
pub mod name_generator;
pub mod record;
pub mod rng;
pub mod shift_calendar;
pub mod staff;
pub mod summary;
pub mod timestamp;
pub mod timestamp_chainer;
pub mod types;

pub use engine::{generate, Batch, BatchRequest, Generator};
pub use error::{GenError, GenResult};
