//! Standalone entry point for prefix doubling with discarding (§2, §4.6).
//! Same CLI surface as `is`, but defaults to PDD rather than IS.

const USAGE: &str = "Usage: pdd [options] <input|random>";

fn main() {
    std::process::exit(dsss::cli::main(USAGE, true));
}
