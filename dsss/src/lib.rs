//! Distributed suffix array construction.
//!
//! Given a text `T` distributed as contiguous slices across `P` processing
//! elements, this crate builds the suffix array of `T`, also distributed,
//! via two interchangeable engines:
//!
//! - [pdd]: prefix doubling with discarding.
//! - [induce] (together with [classify] and [string_sort]): induced sorting
//!   over B*-substrings.
//!
//! Both engines are built from the same supporting machinery: a pluggable
//! [collective] layer, [containers] for distributed text/string storage and
//! remote reads, and two distributed sample sorts ([sample_sort],
//! [string_sort]). [check] verifies a candidate suffix array end to end.
//!
//! All distributed state uses the [index::Index] type, a 40-bit position
//! wide enough for any text this crate is built to handle.

use tatl::HeyListen;

pub mod check;
pub mod classify;
pub mod cli;
pub mod collective;
pub mod containers;
pub mod error;
pub mod index;
pub mod induce;
pub mod pdd;
pub mod sample_sort;
pub mod string_sort;
pub mod textgen;

pub use error::Error;

/// Registers every module's [biometrics::Counter] statics with one
/// [biometrics::Collector], the same aggregation pattern `busyrpc::register_biometrics`
/// uses for its own submodules. `cli::main` drives the returned registrations
/// through a background [biometrics::PlainTextEmitter] loop.
pub fn register_biometrics(collector: &biometrics::Collector) {
    collective::register_biometrics(collector);
    classify::register_biometrics(collector);
    containers::register_biometrics(collector);
    pdd::register_biometrics(collector);
    induce::register_biometrics(collector);
}

/// Registers every module's [tatl::Stationary] monitors with one
/// [HeyListen], the same aggregation pattern `sst::register_monitors` uses
/// for its own submodules.
pub fn register_monitors(hey_listen: &mut HeyListen) {
    collective::register_monitors(hey_listen);
    classify::register_monitors(hey_listen);
    containers::register_monitors(hey_listen);
    pdd::register_monitors(hey_listen);
    induce::register_monitors(hey_listen);
}
