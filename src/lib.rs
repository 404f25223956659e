//! Fixed-length and growable sequences, compared side by side.
//!
//! [`FixedSequence`] holds exactly `N` elements inline and supports only
//! indexed reads and writes. [`GrowableSequence`] boxes each element and
//! reallocates its slots as it grows, following a [`Grow`] policy.
//! [`BenchmarkRunner`] prints both after a few mutations and times a run of
//! writes into each.

pub(crate) mod error;

pub mod config;

pub mod fixed;

pub mod grow;

pub mod growable;

pub mod runner;

pub(crate) mod utils;

pub use self::{
    config::RunConfig,
    error::{InsertionError, RunError, StorageError},
    fixed::FixedSequence,
    grow::{Grow, GrowByHalf, GrowDoubling, GrowExact},
    growable::GrowableSequence,
    runner::{BenchmarkRunner, Report},
};
