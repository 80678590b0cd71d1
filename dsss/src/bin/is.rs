//! Builds the suffix array of a distributed text, via induced sorting
//! (§4.7) by default or prefix doubling with discarding (§4.6) if
//! `--discarding` is given.

const USAGE: &str = "Usage: is [options] <input|random>";

fn main() {
    std::process::exit(dsss::cli::main(USAGE, false));
}
