//! B*-classification (C5, §4.5): one right-to-left pass that labels every
//! suffix A, A*, B, or B*, emits the ordered B*-substring set, and produces
//! the all-reduced border array.
//!
//! Resolving the L/S type of a suffix whose value ties with its successor
//! requires looking past the tie to the first position where the text
//! differs (the standard SA-IS rule: a run of equal bytes takes the type of
//! whatever follows it). When that run crosses a PE boundary, §4.5
//! describes a bounded `shift_left` exchange of "first B* plus two lookahead
//! bytes". We instead resolve boundary ties with [crate::containers::RequestableArray]
//! batched remote reads in doubling rounds until every PE's boundary run is
//! decided (§9's Open Questions invites this kind of unambiguous rule where
//! the source was inconsistent; recorded in DESIGN.md).

use biometrics::Counter;

use crate::collective::Collective;
use crate::containers::{even_slice, DistributedString, IndexedStringSet, RequestableArray};
use crate::index::Index;

static B_STAR_SUBSTRINGS_EMITTED: Counter = Counter::new("dsss.classify.b_star_substrings_emitted");

/// Registers this module's counters with `collector`.
pub fn register_biometrics(collector: &biometrics::Collector) {
    collector.register_counter(&B_STAR_SUBSTRINGS_EMITTED);
}

/// No [tatl::Stationary] monitors apply to this module: every counter here
/// (currently just [B_STAR_SUBSTRINGS_EMITTED]) tracks expected volume, not
/// an error condition, so there is nothing to watch for "should never fire".
pub fn register_monitors(hey_listen: &mut tatl::HeyListen) {
    let _ = hey_listen;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LSType {
    L,
    S,
}

/// The 256x256 counters for each of {A, A*, B, B*}, flattened
/// `c0 * 256 + c1` (§3 "Border array BA").
#[derive(Clone)]
pub struct BorderArray {
    pub a: Vec<u64>,
    pub a_star: Vec<u64>,
    pub b: Vec<u64>,
    pub b_star: Vec<u64>,
}

impl BorderArray {
    fn new() -> Self {
        BorderArray {
            a: vec![0; 256 * 256],
            a_star: vec![0; 256 * 256],
            b: vec![0; 256 * 256],
            b_star: vec![0; 256 * 256],
        }
    }

    fn idx(c0: u8, c1: u8) -> usize {
        c0 as usize * 256 + c1 as usize
    }

    fn bump_a(&mut self, c0: u8, c1: u8) {
        self.a[Self::idx(c0, c1)] += 1;
    }

    fn bump_a_star(&mut self, c0: u8, c1: u8) {
        self.a_star[Self::idx(c0, c1)] += 1;
    }

    fn bump_b(&mut self, c0: u8, c1: u8) {
        self.b[Self::idx(c0, c1)] += 1;
    }

    fn bump_b_star(&mut self, c0: u8, c1: u8) {
        self.b_star[Self::idx(c0, c1)] += 1;
    }

    pub fn get_a(&self, c0: u8, c1: u8) -> u64 {
        self.a[Self::idx(c0, c1)]
    }

    pub fn get_a_star(&self, c0: u8, c1: u8) -> u64 {
        self.a_star[Self::idx(c0, c1)]
    }

    pub fn get_b(&self, c0: u8, c1: u8) -> u64 {
        self.b[Self::idx(c0, c1)]
    }

    pub fn get_b_star(&self, c0: u8, c1: u8) -> u64 {
        self.b_star[Self::idx(c0, c1)]
    }

    /// Total suffixes whose first byte is `c0` (L-type plus S-type; A* and
    /// B* are subsets already folded into `a`/`b`), summed over every
    /// second byte. This is the width of `c0`'s bucket in the final SA
    /// (§4.7's per-character bucket layout).
    pub fn total_for_c0(&self, c0: u8) -> u64 {
        let row = c0 as usize * 256;
        self.a[row..row + 256].iter().sum::<u64>() + self.b[row..row + 256].iter().sum::<u64>()
    }

    /// Number of B*-suffixes whose first byte is `c0`, summed over the
    /// second byte -- the width of the B*-reserved region at the tail of
    /// `c0`'s bucket.
    pub fn b_star_for_c0(&self, c0: u8) -> u64 {
        let row = c0 as usize * 256;
        self.b_star[row..row + 256].iter().sum::<u64>()
    }

    /// Sum of every suffix's bucket count; §8 invariant 5 requires this
    /// equal N after the all-reduce. A*/B* are leftmost-position subsets
    /// already folded into `a`/`b` (see [Self::total_for_c0]'s comment), so
    /// only `a` and `b` are summed here -- adding `a_star`/`b_star` in would
    /// double-count every starred position.
    pub fn total(&self) -> u64 {
        self.a.iter().sum::<u64>() + self.b.iter().sum::<u64>()
    }

    fn all_reduce<C: Collective>(self, comm: &C) -> Self {
        BorderArray {
            a: comm.allreduce_sum_vec(&self.a),
            a_star: comm.allreduce_sum_vec(&self.a_star),
            b: comm.allreduce_sum_vec(&self.b),
            b_star: comm.allreduce_sum_vec(&self.b_star),
        }
    }
}

/// Finds, for every PE whose local slice ends in a tie with the text that
/// follows it, the first position at or after `local_len` (global) where the
/// byte differs from `tie_byte`, in bounded doubling rounds. PEs that have no
/// tie to resolve (empty slice, or a slice not ending at all) still
/// participate in every round with an inert position so the collective call
/// stays in lockstep.
fn resolve_boundary_bytes<C: Collective>(
    comm: &C,
    array: &RequestableArray<C>,
    global_len: u64,
    needs: &[(u64, u8)], // (first position to probe, byte to compare against)
) -> Vec<u8> {
    let mut resolved: Vec<Option<u8>> = vec![None; needs.len()];
    let mut window: u64 = 64;
    loop {
        let all_done = resolved.iter().all(|r| r.is_some());
        let globally_done = comm.allreduce_and(all_done);
        if globally_done {
            break;
        }
        // Build the batch of positions this round needs: for each
        // unresolved entry, the next `window` positions starting from where
        // the previous round left off (tracked implicitly: we always probe
        // from the original start through `window`, doubling until
        // resolved -- later rounds simply re-probe with a longer window,
        // trading some duplicate remote reads for a much simpler protocol).
        let mut positions = Vec::new();
        let mut spans = Vec::new();
        for (i, &(start, _)) in needs.iter().enumerate() {
            if resolved[i].is_some() {
                spans.push((0, 0));
                continue;
            }
            let span_start = positions.len();
            let end = (start + window).min(global_len);
            for pos in start..end {
                positions.push(pos);
            }
            spans.push((span_start, positions.len()));
        }
        let values = array.gather_remote(&positions);
        for (i, &(_, tie_byte)) in needs.iter().enumerate() {
            if resolved[i].is_some() {
                continue;
            }
            let (s, e) = spans[i];
            let (start, _) = needs[i];
            let mut found = None;
            for (off, &v) in values[s..e].iter().enumerate() {
                if v != tie_byte {
                    found = Some(v);
                    break;
                }
                let _ = off;
            }
            if found.is_none() && start + window >= global_len {
                found = Some(0); // ran off the end of the text: virtual sentinel
            }
            resolved[i] = found;
        }
        window = window.saturating_mul(2);
    }
    resolved.into_iter().map(|r| r.unwrap_or(0)).collect()
}

/// Output of classification: the B*-substring set, the all-reduced border
/// array, and the local L/S type bit for every position of this PE's slice
/// (`true` = L), reused by induction (C7) to test a predecessor's type
/// without redoing the boundary-tie scan.
pub struct Classification {
    pub b_star_substrings: IndexedStringSet,
    pub border: BorderArray,
    pub types: Vec<bool>,
}

/// Runs the B*-classification pass (§4.5) over this PE's slice of the text.
pub fn classify<C: Collective>(comm: &C, text: &DistributedString) -> Classification {
    let local = text.bytes();
    let n = local.len();
    let offset = text.offset().as_u64();
    let global_len = text.total_len().as_u64();

    // Resolve, for every PE whose local slice ends in a tie with whatever
    // follows it, the first decisive byte beyond the local boundary.
    let array = RequestableArray::new(comm, local.to_vec(), global_len);
    let needs: Vec<(u64, u8)> = if n > 0 {
        vec![(offset + n as u64, local[n - 1])]
    } else {
        vec![(global_len, 0)]
    };
    let decisive = resolve_boundary_bytes(comm, &array, global_len, &needs);
    let boundary_next = decisive[0];

    // Right-to-left LS-type scan, seeded from the resolved boundary.
    let mut types = vec![LSType::S; n];
    let mut border = BorderArray::new();
    let mut b_star_positions = Vec::new();

    if n > 0 {
        let is_global_last = offset + n as u64 == global_len;
        let mut prev_type = if local[n - 1] > boundary_next {
            LSType::L
        } else {
            LSType::S
        };
        // Position N-1 of the whole text is A* by convention (§3).
        if is_global_last {
            prev_type = LSType::L;
        }
        types[n - 1] = prev_type;
        for i in (0..n - 1).rev() {
            types[i] = if local[i] > local[i + 1] {
                LSType::L
            } else if local[i] < local[i + 1] {
                LSType::S
            } else {
                types[i + 1]
            };
        }

        // Left-to-right, by walking the type array right-to-left: the
        // leftmost position of a maximal A-run (preceded by S, or the
        // text's final position by convention) is A*; the leftmost position
        // of a maximal B-run (preceded by L) is B* (§3).
        let next_byte = |i: usize| -> u8 {
            if i + 1 < n {
                local[i + 1]
            } else {
                boundary_next
            }
        };
        let mut idx = n;
        while idx > 0 {
            idx -= 1;
            let c0 = local[idx];
            let c1 = next_byte(idx);
            match types[idx] {
                LSType::L => {
                    border.bump_a(c0, c1);
                    let is_a_star = (idx == n - 1 && is_global_last)
                        || (idx > 0 && types[idx - 1] == LSType::S);
                    if is_a_star {
                        border.bump_a_star(c0, c1);
                    }
                }
                LSType::S => {
                    border.bump_b(c0, c1);
                    let is_b_star = idx > 0 && types[idx - 1] == LSType::L;
                    if is_b_star {
                        border.bump_b_star(c0, c1);
                        b_star_positions.push(idx);
                    }
                }
            }
        }
    }

    b_star_positions.sort_unstable();

    // Every B*-substring runs to the *next* B* position (plus two lookahead
    // bytes); the last local one may need the first B* position owned by a
    // later, possibly empty, PE.
    let my_first_global_b_star = b_star_positions
        .first()
        .map(|&p| offset + p as u64)
        .unwrap_or(u64::MAX);
    let firsts = comm.allgather(my_first_global_b_star);
    let next_after_mine = firsts[comm.rank() + 1..]
        .iter()
        .copied()
        .find(|&v| v != u64::MAX);

    let mut buffer = Vec::new();
    let mut indices = Vec::new();
    for (k, &p) in b_star_positions.iter().enumerate() {
        let next_global = if k + 1 < b_star_positions.len() {
            offset + b_star_positions[k + 1] as u64
        } else {
            next_after_mine.unwrap_or(global_len)
        };
        let end = (next_global + 2).min(global_len);
        let local_end = n.min((end - offset) as usize);
        let mut bytes: Vec<u8> = local[p..local_end].to_vec();
        if offset + local_end as u64 < end {
            let missing: Vec<u64> = ((offset + local_end as u64)..end).collect();
            bytes.extend(array.gather_remote(&missing));
        }
        buffer.extend_from_slice(&bytes);
        buffer.push(0);
        indices.push(Index::new(offset + p as u64));
    }

    B_STAR_SUBSTRINGS_EMITTED.count(indices.len() as u64);
    let border = border.all_reduce(comm);
    let type_bits: Vec<bool> = types.iter().map(|t| *t == LSType::L).collect();
    Classification {
        b_star_substrings: IndexedStringSet::new(buffer, indices),
        border,
        types: type_bits,
    }
}

/// Even-sliced distribution of a text of `total_len` bytes across `size`
/// ranks, matching [RequestableArray]'s floor-division ownership rule
/// (§3: the generic distributed-array slicing, reused for T itself).
pub fn text_slice(total_len: u64, size: usize, rank: usize) -> (u64, u64) {
    even_slice(total_len, size, rank, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collective::LocalComm;

    fn classify_one(text: &[u8]) -> Classification {
        let comm = LocalComm;
        let total = text.len() as u64;
        let ds = DistributedString::new(Index::ZERO, text.to_vec(), Index::new(total));
        classify(&comm, &ds)
    }

    #[test]
    fn border_array_sums_to_n() {
        // "banana\0" -- terminator at the end is not part of T; T is the
        // raw bytes, with byte 0 only appearing as the virtual sentinel.
        let c = classify_one(b"banana");
        assert_eq!(c.border.total(), 6);
    }

    #[test]
    fn repeated_character_cascades_to_all_l_type() {
        // "aaaa": the boundary sentinel (0) is smaller than every real byte,
        // so position n-1 is L relative to it, and every other position ties
        // with its successor -- the tie-break rule propagates that L all the
        // way back to position 0, so every suffix is A-type, not B-type.
        let c = classify_one(b"aaaa");
        assert_eq!(c.types, vec![true, true, true, true]);
        assert_eq!(c.border.total(), 4);
        assert_eq!(c.border.get_a_star(b'a', 0), 1);
    }

    #[test]
    fn b_star_substrings_are_sorted_by_position() {
        let c = classify_one(b"mississippi");
        let positions: Vec<u64> = c.b_star_substrings.indices().iter().map(|i| i.as_u64()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
