//! The `is`/`pdd` binaries (§6). Both binaries share this one driver: the
//! only difference between them is which engine `--discarding` defaults to,
//! matching §2's description of PDD as "a standalone entry point" reached by
//! the same CLI surface as the combined IS/PDD tool.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::time::Instant;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use biometrics::{Collector, PlainTextEmitter};

use guacamole::Guacamole;
use zerror::Z;

use crate::check;
use crate::collective::{print_result_line, Collective, MpiWorld};
use crate::containers::{even_slice, DistributedString};
use crate::error::Error;
use crate::index::Index;
use crate::textgen;
use crate::{induce, pdd};

const RANDOM_INPUT: &str = "random";

#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Parameters {
    #[arrrg(optional, "Cap on the text length read (0 = whole file); required with `random`.", "BYTES")]
    size: Option<u64>,
    #[arrrg(optional, "Write the SA as packed little-endian records to this path.", "PATH")]
    output: Option<String>,
    #[arrrg(flag, "Re-read the input (and SA, if written) and verify the result.")]
    check: bool,
    #[arrrg(flag, "Use PDD instead of IS.")]
    discarding: bool,
}

/// Runs the shared `is`/`pdd` driver to completion and returns the process
/// exit code. `default_discarding` is the engine the binary picks when
/// `--discarding` is not given on the command line: `false` for `is`, `true`
/// for `pdd`.
pub fn main(usage: &str, default_discarding: bool) -> i32 {
    let (mut params, free) = Parameters::from_command_line_relaxed(usage);
    params.discarding |= default_discarding;
    let input = match free.first() {
        Some(input) => input.clone(),
        None => {
            eprintln!("missing required positional argument: input");
            eprintln!("{usage}");
            return 1;
        }
    };

    let comm = MpiWorld::new();
    if comm.rank() == 0 {
        std::thread::spawn(|| {
            let collector = Collector::new();
            crate::register_biometrics(&collector);
            let Ok(ferr) = File::create("/dev/stderr") else {
                return;
            };
            let mut emit = PlainTextEmitter::new(ferr);
            loop {
                if let Err(e) = collector.emit(&mut emit) {
                    eprintln!("collector error: {}", e);
                }
                std::thread::sleep(std::time::Duration::from_millis(249));
            }
        });
    }
    match run(&comm, &params, &input) {
        Ok(()) => 0,
        Err(err) => {
            if comm.rank() == 0 {
                eprintln!("{}", err.long_form());
            }
            1
        }
    }
}

fn run<C: Collective>(comm: &C, params: &Parameters, input: &str) -> Result<(), Error> {
    let algo = if params.discarding { "pdd" } else { "is" };
    let start = Instant::now();

    let text = read_text(comm, params, input)?;
    let total_len = text.total_len().as_u64();

    let sa = if params.discarding {
        pdd::build_sa(comm, &text)
    } else {
        induce::build_sa(comm, &text)
    };

    if let Some(path) = params.output.as_ref() {
        write_sa(comm, path, &sa)?;
    }

    if params.check {
        let reread = read_text(comm, params, input)?;
        let sa_to_check = if let Some(path) = params.output.as_ref() {
            read_sa(comm, path, sa.len() as u64)?
        } else {
            sa
        };
        check::verify_sa(comm, &reread, &sa_to_check)?;
    }

    let time_ms = start.elapsed().as_millis();
    let local_rss = peak_rss_bytes();
    let memory_max = comm.allreduce_max(local_rss);
    let memory_total = comm.allreduce_sum(local_rss);
    print_result_line(comm, algo, time_ms, input, total_len, memory_max, memory_total);
    Ok(())
}

/// Reads (or generates) this PE's evenly-sliced portion of the input text.
fn read_text<C: Collective>(comm: &C, params: &Parameters, input: &str) -> Result<DistributedString, Error> {
    let p = comm.size();
    let rank = comm.rank();

    if input == RANDOM_INPUT {
        let total = params
            .size
            .ok_or_else(|| Error::argument("--size is required when input is `random`"))?;
        let (offset, len) = even_slice(total, p, rank, false);
        let mut guac = Guacamole::new(0x5eed_0000_0000_0000 ^ rank as u64);
        let bytes = textgen::generate(&mut guac, len as usize, textgen::DEFAULT_ALPHABET_SIZE);
        return Ok(DistributedString::new(Index::new(offset), bytes, Index::new(total)));
    }

    let mut file = File::open(input).map_err(|err| Error::io(format!("{input}: {err}")))?;
    let file_len = file.metadata().map_err(|err| Error::io(format!("{input}: {err}")))?.len();
    let cap = params.size.unwrap_or(0);
    let total = if cap == 0 { file_len } else { cap.min(file_len) };

    let (offset, len) = even_slice(total, p, rank, false);
    let mut bytes = vec![0u8; len as usize];
    if len > 0 {
        file.seek(SeekFrom::Start(offset))
            .map_err(|err| Error::io(format!("{input}: {err}")))?;
        file.read_exact(&mut bytes)
            .map_err(|err| Error::io(format!("{input}: {err}")))?;
    }
    // Every rank must reach the same verdict here: a validation error found
    // by only one rank would otherwise send that rank home early while its
    // peers went on to call the collective operations build_sa needs.
    let local_bad = bytes.iter().position(|&b| b == 0).map(|i| offset + i as u64);
    let global_bad = comm.allreduce_min(local_bad.unwrap_or(u64::MAX));
    if global_bad != u64::MAX {
        return Err(Error::invalid_text(global_bad));
    }
    Ok(DistributedString::new(Index::new(offset), bytes, Index::new(total)))
}

/// Writes the SA as packed little-endian records (§6), each PE seeking to
/// its own `offset_r · sizeof(I)` byte offset so the write can run in
/// parallel across PEs without any PE waiting on another's I/O.
fn write_sa<C: Collective>(comm: &C, path: &str, local_sa: &[Index]) -> Result<(), Error> {
    const RECORD_WIDTH: u64 = 5;
    let my_count = local_sa.len() as u64;
    let total = comm.allreduce_sum(my_count);
    let offset = comm.ex_prefix_sum(my_count);

    if comm.rank() == 0 {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|err| Error::io(format!("{path}: {err}")))?;
        file.set_len(total * RECORD_WIDTH)
            .map_err(|err| Error::io(format!("{path}: {err}")))?;
    }
    comm.barrier();

    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|err| Error::io(format!("{path}: {err}")))?;
    file.seek(SeekFrom::Start(offset * RECORD_WIDTH))
        .map_err(|err| Error::io(format!("{path}: {err}")))?;
    let mut buf = Vec::with_capacity(local_sa.len() * RECORD_WIDTH as usize);
    for idx in local_sa {
        buf.extend_from_slice(&idx.to_le_bytes5());
    }
    file.write_all(&buf).map_err(|err| Error::io(format!("{path}: {err}")))?;
    comm.barrier();
    Ok(())
}

/// Reads back the SA an earlier [write_sa] call wrote. `my_count` is this
/// PE's own record count from that write (not re-derived from an even
/// slice, since PDD's final distribution need not land on even-slice
/// boundaries -- only the write/read pair's own offsets have to agree).
fn read_sa<C: Collective>(comm: &C, path: &str, my_count: u64) -> Result<Vec<Index>, Error> {
    const RECORD_WIDTH: u64 = 5;
    let offset = comm.ex_prefix_sum(my_count);
    let mut file = File::open(path).map_err(|err| Error::io(format!("{path}: {err}")))?;
    file.seek(SeekFrom::Start(offset * RECORD_WIDTH))
        .map_err(|err| Error::io(format!("{path}: {err}")))?;
    let mut buf = vec![0u8; (my_count * RECORD_WIDTH) as usize];
    if my_count > 0 {
        file.read_exact(&mut buf).map_err(|err| Error::io(format!("{path}: {err}")))?;
    }
    Ok(buf
        .chunks_exact(RECORD_WIDTH as usize)
        .map(|c| Index::from_le_bytes5(c.try_into().unwrap()))
        .collect())
}

/// Peak resident set size of this process in bytes, read from
/// `/proc/self/status`'s `VmHWM` line. Returns 0 where that file doesn't
/// exist (non-Linux), matching the "best effort" framing of the §6
/// `memory_max`/`memory_total` fields.
fn peak_rss_bytes() -> u64 {
    let status = match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => status,
        Err(_) => return 0,
    };
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            let kib: u64 = rest.trim().trim_end_matches(" kB").trim().parse().unwrap_or(0);
            return kib * 1024;
        }
    }
    0
}
