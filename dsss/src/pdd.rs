//! Prefix doubling with discarding (C6, §4.6): iteratively refines rank
//! tuples until every suffix has a globally unique rank, discarding
//! suffixes whose rank is already unique so later rounds do less work.
//!
//! Two copies of this algorithm exist in the source this was distilled
//! from, differing in how a discarded record is treated once a later round
//! reconsiders its neighbours; the rule used here is the one stated
//! explicitly in the spec text: once discarded, a record never re-enters
//! the live set (recorded in DESIGN.md).
//!
//! Every record also carries an opaque `aux` passenger word that rides
//! along through every sort and shift untouched. [build_ranks] doesn't need
//! it (it's always 0), but induction (C7) reuses this same round loop to
//! refine B\*-substring names (§4.7) over a *virtual* text of B\*-position
//! ranks, where `aux` is how the original text position survives the trip.

use std::collections::HashMap;

use biometrics::Counter;

use crate::collective::Collective;
use crate::containers::{DistributedString, RequestableArray};
use crate::index::{fold_alphabet, pack_width, Index};
use crate::sample_sort::sample_sort;

static RECORDS_DISCARDED: Counter = Counter::new("dsss.pdd.records_discarded");
static ROUNDS_RUN: Counter = Counter::new("dsss.pdd.rounds_run");

/// Registers this module's counters with `collector`.
pub fn register_biometrics(collector: &biometrics::Collector) {
    collector.register_counter(&RECORDS_DISCARDED);
    collector.register_counter(&ROUNDS_RUN);
}

/// As in [crate::classify::register_monitors], these counters track normal
/// progress (discard volume, round count) rather than an error condition.
pub fn register_monitors(hey_listen: &mut tatl::HeyListen) {
    let _ = hey_listen;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    None,
    Unique,
}

#[derive(Copy, Clone, Debug)]
struct Rec {
    index: u64,
    rank: u64,
    aux: u64,
    state: State,
}

const REC_WIDTH: usize = 25; // index:8, rank:8, aux:8, state:1

fn encode(r: &Rec) -> [u8; REC_WIDTH] {
    let mut buf = [0u8; REC_WIDTH];
    buf[0..8].copy_from_slice(&r.index.to_le_bytes());
    buf[8..16].copy_from_slice(&r.rank.to_le_bytes());
    buf[16..24].copy_from_slice(&r.aux.to_le_bytes());
    buf[24] = matches!(r.state, State::Unique) as u8;
    buf
}

fn decode(bytes: &[u8]) -> Rec {
    Rec {
        index: u64::from_le_bytes(bytes[0..8].try_into().unwrap()),
        rank: u64::from_le_bytes(bytes[8..16].try_into().unwrap()),
        aux: u64::from_le_bytes(bytes[16..24].try_into().unwrap()),
        state: if bytes[24] != 0 { State::Unique } else { State::None },
    }
}

fn encode_all(recs: &[Rec]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(recs.len() * REC_WIDTH);
    for r in recs {
        buf.extend_from_slice(&encode(r));
    }
    buf
}

fn decode_all(bytes: &[u8]) -> Vec<Rec> {
    bytes.chunks_exact(REC_WIDTH).map(decode).collect()
}

fn encode_opt_triple(v: Option<(u64, u64, u64)>) -> [u8; 25] {
    let mut buf = [0u8; 25];
    if let Some((a, b, c)) = v {
        buf[0] = 1;
        buf[1..9].copy_from_slice(&a.to_le_bytes());
        buf[9..17].copy_from_slice(&b.to_le_bytes());
        buf[17..25].copy_from_slice(&c.to_le_bytes());
    }
    buf
}

fn decode_opt_triple(bytes: &[u8]) -> Option<(u64, u64, u64)> {
    if bytes.is_empty() || bytes[0] == 0 {
        None
    } else {
        Some((
            u64::from_le_bytes(bytes[1..9].try_into().unwrap()),
            u64::from_le_bytes(bytes[9..17].try_into().unwrap()),
            u64::from_le_bytes(bytes[17..25].try_into().unwrap()),
        ))
    }
}

fn encode_opt_pair(v: Option<(u64, u64)>) -> [u8; 17] {
    let mut buf = [0u8; 17];
    if let Some((a, b)) = v {
        buf[0] = 1;
        buf[1..9].copy_from_slice(&a.to_le_bytes());
        buf[9..17].copy_from_slice(&b.to_le_bytes());
    }
    buf
}

fn decode_opt_pair(bytes: &[u8]) -> Option<(u64, u64)> {
    if bytes.is_empty() || bytes[0] == 0 {
        None
    } else {
        Some((
            u64::from_le_bytes(bytes[1..9].try_into().unwrap()),
            u64::from_le_bytes(bytes[9..17].try_into().unwrap()),
        ))
    }
}

fn encode_opt_bool(v: Option<bool>) -> [u8; 2] {
    match v {
        None => [0, 0],
        Some(b) => [1, b as u8],
    }
}

fn decode_opt_bool(bytes: &[u8]) -> Option<bool> {
    if bytes.is_empty() || bytes[0] == 0 {
        None
    } else {
        Some(bytes[1] != 0)
    }
}

fn encode_rank_opt(v: Option<u64>) -> [u8; 9] {
    let mut buf = [0u8; 9];
    if let Some(r) = v {
        buf[0] = 1;
        buf[1..9].copy_from_slice(&r.to_le_bytes());
    }
    buf
}

fn decode_rank_opt(bytes: &[u8]) -> Option<u64> {
    if bytes[0] == 0 {
        None
    } else {
        Some(u64::from_le_bytes(bytes[1..9].try_into().unwrap()))
    }
}

/// Builds the window-packed initial keying of §4.6 "Initial packing": a
/// reduced alphabet over the global histogram, `k` reduced characters per
/// half of an `IRR`, and the two packed windows `(T[i..i+k), T[i+k..i+2k))`
/// for every local position. Returns the initial `(index, rank1, rank2,
/// aux)` quadruples (`aux` unused here, always 0) and the iteration to
/// start doubling from (`floor(log2 k) + 1`).
fn initial_keys<C: Collective>(comm: &C, text: &DistributedString) -> (Vec<(u64, u64, u64, u64)>, u32) {
    let local = text.bytes();
    let n = local.len();
    let offset = text.offset().as_u64();
    let global_len = text.total_len().as_u64();
    let local_end = offset + n as u64;

    let mut hist_local = [0u64; 256];
    for &b in local {
        hist_local[b as usize] += 1;
    }
    let hist_global = comm.allreduce_sum_vec(&hist_local);
    let mut hist = [0u64; 256];
    hist.copy_from_slice(&hist_global);
    let (table, sigma) = fold_alphabet(&hist);
    let k = pack_width(sigma.max(1));
    let modulus = sigma as u128 + 1;

    // Every window needing bytes past this PE's own slice is collected into
    // one batched remote read so this call stays collective regardless of
    // how many local positions happen to sit near the boundary.
    let array = RequestableArray::new(comm, local.to_vec(), global_len);
    let mut remote_positions = Vec::new();
    for i in 0..n {
        let gi = offset + i as u64;
        for j in 0..(2 * k as u64) {
            let pos = gi + j;
            if pos >= local_end && pos < global_len {
                remote_positions.push(pos);
            }
        }
    }
    remote_positions.sort_unstable();
    remote_positions.dedup();
    let remote_values = array.gather_remote(&remote_positions);
    let remote_map: HashMap<u64, u8> = remote_positions.into_iter().zip(remote_values).collect();

    let byte_at = |pos: u64| -> u8 {
        if pos >= global_len {
            0
        } else if pos >= offset && pos < local_end {
            local[(pos - offset) as usize]
        } else {
            *remote_map.get(&pos).unwrap_or(&0)
        }
    };
    let pack = |start: u64| -> u64 {
        let mut acc: u128 = 0;
        for j in 0..k as u64 {
            let symbol = table[byte_at(start + j) as usize];
            acc = acc * modulus + symbol as u128;
        }
        acc as u64
    };

    let initial: Vec<(u64, u64, u64, u64)> = (0..n)
        .map(|i| {
            let gi = offset + i as u64;
            (gi, pack(gi), pack(gi + k as u64), 0)
        })
        .collect();

    let start_h = (u32::BITS - (k as u32).leading_zeros()).max(1);
    (initial, start_h)
}

/// §4.6 step 5/6: sorts `records` by `(key1, key2)`, assigns every distinct
/// pair a dense, strictly increasing rank (ties across a PE boundary
/// resolved by exchanging each PE's first/last pair), then demotes to
/// [State::None] any record whose rank still matches a neighbour's.
fn rank_and_rename<C: Collective>(comm: &C, records: Vec<(u64, u64, u64, u64)>) -> Vec<Rec> {
    const W: usize = 32;
    let mut buf = Vec::with_capacity(records.len() * W);
    for &(idx, k1, k2, aux) in &records {
        buf.extend_from_slice(&idx.to_le_bytes());
        buf.extend_from_slice(&k1.to_le_bytes());
        buf.extend_from_slice(&k2.to_le_bytes());
        buf.extend_from_slice(&aux.to_le_bytes());
    }
    let sorted = sample_sort(comm, buf, W, |r: &[u8]| {
        (
            u64::from_le_bytes(r[8..16].try_into().unwrap()),
            u64::from_le_bytes(r[16..24].try_into().unwrap()),
        )
    });
    let recs: Vec<(u64, u64, u64, u64)> = sorted
        .chunks_exact(W)
        .map(|r| {
            (
                u64::from_le_bytes(r[0..8].try_into().unwrap()),
                u64::from_le_bytes(r[8..16].try_into().unwrap()),
                u64::from_le_bytes(r[16..24].try_into().unwrap()),
                u64::from_le_bytes(r[24..32].try_into().unwrap()),
            )
        })
        .collect();

    let my_first_pair = recs.first().map(|r| (r.1, r.2));
    let my_last_pair = recs.last().map(|r| (r.1, r.2));
    let lasts_flat = comm.allgatherv(&encode_opt_pair(my_last_pair));
    let rank = comm.rank();
    let last_of = |r: usize| decode_opt_pair(&lasts_flat[r * 17..r * 17 + 17]);

    let left_pair = (0..rank).rev().find_map(last_of);

    let n = recs.len();
    let mut group_local = vec![0u64; n];
    let mut running = 0u64;
    for i in 0..n {
        let starts_new = if i == 0 {
            Some((recs[i].1, recs[i].2)) != left_pair
        } else {
            (recs[i].1, recs[i].2) != (recs[i - 1].1, recs[i - 1].2)
        };
        if starts_new {
            running += 1;
        }
        group_local[i] = running;
    }
    let continues_left = left_pair.is_some() && my_first_pair == left_pair;
    let groups_on_this_pe = group_local.last().copied().unwrap_or(0);
    let groups_started_here = if continues_left {
        groups_on_this_pe.saturating_sub(1)
    } else {
        groups_on_this_pe
    };
    let groups_before = comm.ex_prefix_sum(groups_started_here);

    let mut out = Vec::with_capacity(n);
    for (i, rec) in recs.iter().enumerate() {
        let local_group = if continues_left {
            group_local[i].saturating_sub(1)
        } else {
            group_local[i]
        };
        out.push(Rec {
            index: rec.0,
            rank: groups_before + local_group,
            aux: rec.3,
            state: State::Unique,
        });
    }
    demote_shared_ranks(comm, out)
}

/// §4.6 step 6: a record whose immediate neighbour (possibly across a PE
/// boundary) carries the same rank is not yet unique.
fn demote_shared_ranks<C: Collective>(comm: &C, mut recs: Vec<Rec>) -> Vec<Rec> {
    let my_first = recs.first().map(|r| r.rank);
    let my_last = recs.last().map(|r| r.rank);
    let first_ranks = comm.allgatherv(&encode_rank_opt(my_first));
    let last_ranks = comm.allgatherv(&encode_rank_opt(my_last));
    let rank = comm.rank();
    let size = comm.size();

    let left_neighbor = (0..rank).rev().find_map(|r| decode_rank_opt(&last_ranks[r * 9..r * 9 + 9]));
    let right_neighbor =
        (rank + 1..size).find_map(|r| decode_rank_opt(&first_ranks[r * 9..r * 9 + 9]));

    let n = recs.len();
    for i in 0..n {
        let shares_left = if i == 0 {
            left_neighbor == Some(recs[i].rank)
        } else {
            recs[i - 1].rank == recs[i].rank
        };
        let shares_right = if i + 1 == n {
            right_neighbor == Some(recs[i].rank)
        } else {
            recs[i + 1].rank == recs[i].rank
        };
        if shares_left || shares_right {
            recs[i].state = State::None;
        }
    }
    recs
}

/// §4.6 steps 1-3 at iteration `h`: mod/div sort by `(i mod 2^h, i div 2^h)`,
/// pair each surviving record with its `i + 2^h` successor's rank (0 if
/// absent), and move doubly-UNIQUE-flanked records to the discarded pool --
/// unless `discarding` is `false`, in which case those records stay live as
/// degenerate `(rank, 0)` pairs instead, per §8's "PDD with `discarding =
/// false` must produce the same SA as with `discarding = true`" property:
/// the discard step is a pure optimisation, never a semantic difference.
/// Returns the `(index, rank1, rank2, aux)` quadruples still live plus the
/// newly discarded records.
fn pair_round<C: Collective>(
    comm: &C,
    h: u32,
    live: Vec<Rec>,
    discarding: bool,
) -> (Vec<(u64, u64, u64, u64)>, Vec<Rec>) {
    let shift = 1u64 << h;

    let buf = encode_all(&live);
    let sorted = sample_sort(comm, buf, REC_WIDTH, |r: &[u8]| {
        let idx = u64::from_le_bytes(r[0..8].try_into().unwrap());
        (idx % shift, idx / shift)
    });
    let recs = decode_all(&sorted);
    let n = recs.len();

    let my_first = recs.first().map(|r| (r.index, r.rank));
    let right_first = decode_opt_pair(&comm.shift_left(&encode_opt_pair(my_first)));

    let mut rank2 = vec![0u64; n];
    for i in 0..n {
        let successor = if i + 1 < n {
            Some((recs[i + 1].index, recs[i + 1].rank))
        } else {
            right_first
        };
        if let Some((succ_idx, succ_rank)) = successor {
            if succ_idx == recs[i].index + shift {
                rank2[i] = succ_rank;
            }
        }
    }

    let my_state_first = recs.first().map(|r| r.state == State::Unique);
    let my_state_last = recs.last().map(|r| r.state == State::Unique);
    let left_unique = decode_opt_bool(&comm.shift_right(&encode_opt_bool(my_state_last)));
    let right_unique = decode_opt_bool(&comm.shift_left(&encode_opt_bool(my_state_first)));

    let mut pairs = Vec::with_capacity(n);
    let mut newly_discarded = Vec::new();
    for i in 0..n {
        if recs[i].state != State::Unique {
            pairs.push((recs[i].index, recs[i].rank, rank2[i], recs[i].aux));
            continue;
        }
        let left_is_unique = if i == 0 {
            left_unique.unwrap_or(false)
        } else {
            recs[i - 1].state == State::Unique
        };
        let right_is_unique = if i + 1 == n {
            right_unique.unwrap_or(false)
        } else {
            recs[i + 1].state == State::Unique
        };
        if discarding && left_is_unique && right_is_unique {
            newly_discarded.push(recs[i]);
        } else {
            pairs.push((recs[i].index, recs[i].rank, 0, recs[i].aux));
        }
    }
    (pairs, newly_discarded)
}

/// Runs the §4.6 round loop to convergence starting from an already-keyed
/// `(index, key1, key2, aux)` sequence, returning `(position, rank, aux)`
/// triples globally sorted by rank. Exposed separately from [build_ranks] so
/// induction (C7) can reuse it to refine B\*-substring names (§4.7) from
/// whatever initial ordering classification and string-sorting already
/// established, rather than re-deriving a byte-window packing.
///
/// `discarding` toggles the early-discard optimisation in [pair_round]; it
/// must not change the result (§8's discarding on/off equivalence property),
/// only the amount of work later rounds do.
pub fn refine_ranks<C: Collective>(
    comm: &C,
    initial: Vec<(u64, u64, u64, u64)>,
    start_h: u32,
    discarding: bool,
) -> Vec<(Index, Index, u64)> {
    let mut live = rank_and_rename(comm, initial);
    let mut discarded: Vec<Rec> = Vec::new();
    let mut h = start_h;

    loop {
        let all_unique_local = live.iter().all(|r| r.state == State::Unique);
        let all_unique = comm.allreduce_and(all_unique_local);
        if all_unique {
            break;
        }
        let (pairs, newly_discarded) = pair_round(comm, h, live, discarding);
        RECORDS_DISCARDED.count(newly_discarded.len() as u64);
        discarded.extend(newly_discarded);
        live = rank_and_rename(comm, pairs);
        ROUNDS_RUN.click();
        h += 1;
    }

    let mut all_recs = discarded;
    all_recs.extend(live);
    let buf = encode_all(&all_recs);
    let sorted = sample_sort(comm, buf, REC_WIDTH, |r: &[u8]| {
        u64::from_le_bytes(r[8..16].try_into().unwrap())
    });
    decode_all(&sorted)
        .into_iter()
        .map(|r| (Index::new(r.index), Index::new(r.rank), r.aux))
        .collect()
}

/// Builds the globally unique rank of every suffix of `text` via prefix
/// doubling with discarding (§4.6), from initial packing through
/// finalisation.
pub fn build_ranks<C: Collective>(comm: &C, text: &DistributedString) -> Vec<(Index, Index)> {
    build_ranks_with_discarding(comm, text, true)
}

/// Same as [build_ranks], but with the early-discard optimisation of
/// [pair_round] toggleable -- used to test §8's "discarding on/off must
/// produce the same SA" property without duplicating the round loop.
pub fn build_ranks_with_discarding<C: Collective>(
    comm: &C,
    text: &DistributedString,
    discarding: bool,
) -> Vec<(Index, Index)> {
    let (initial, start_h) = initial_keys(comm, text);
    refine_ranks(comm, initial, start_h, discarding)
        .into_iter()
        .map(|(pos, rank, _aux)| (pos, rank))
        .collect()
}

/// The standalone PDD entry point (§6 `-d` flag): the suffix array is just
/// the positions in rank order, since after convergence rank is a dense
/// permutation of `0..N`.
pub fn build_sa<C: Collective>(comm: &C, text: &DistributedString) -> Vec<Index> {
    build_sa_with_discarding(comm, text, true)
}

/// Same as [build_sa], but with the early-discard optimisation toggleable;
/// see [build_ranks_with_discarding].
pub fn build_sa_with_discarding<C: Collective>(
    comm: &C,
    text: &DistributedString,
    discarding: bool,
) -> Vec<Index> {
    build_ranks_with_discarding(comm, text, discarding)
        .into_iter()
        .map(|(pos, _rank)| pos)
        .collect()
}
