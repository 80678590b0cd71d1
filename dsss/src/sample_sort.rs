//! Generic distributed sample-sort over fixed-size records (C3, §4.3).
//!
//! Records are represented as a fixed byte width plus a key extraction
//! function, rather than as a type parameter with `Ord`, so the same code
//! serves the `IR`/`IRR`/`IRS` record layouts of §3 without duplicating the
//! sort for each.

use crate::collective::Collective;

/// Rebalances `local` (a flat buffer of fixed-width records) to an even
/// slicing across all ranks, targeting `ceil(total / P)` per rank with the
/// last rank absorbing the remainder (§4.3 step 1, "distribute_data").
pub fn distribute_data<C: Collective>(comm: &C, local: &[u8], record_width: usize) -> Vec<u8> {
    assert_eq!(local.len() % record_width, 0);
    let my_count = (local.len() / record_width) as u64;
    let total: u64 = comm.allreduce_sum(my_count);
    let p = comm.size() as u64;
    if p == 0 || total == 0 {
        return Vec::new();
    }
    let target = total.div_ceil(p);
    let my_start = comm.ex_prefix_sum(my_count);

    let mut parts = vec![Vec::new(); comm.size()];
    for i in 0..my_count {
        let global_idx = my_start + i;
        let dest = ((global_idx / target.max(1)) as usize).min(comm.size() - 1);
        let rec = &local[(i as usize) * record_width..(i as usize + 1) * record_width];
        parts[dest].extend_from_slice(rec);
    }
    comm.alltoallv(&parts).concat()
}

/// Sorts `local` (flat fixed-width records) by `key`, returning the globally
/// sorted sequence redistributed to an even slicing (§4.3 steps 2-7).
///
/// `key` must define a strict weak order once records are compared
/// byte-for-byte through it; callers supply pluggable local-sort leaves by
/// simply calling this with their own key extractor, matching the spec's
/// requirement that local sort be pluggable (we use the standard library's
/// pattern-defeating quicksort, `sort_unstable_by`, as the one leaf this
/// crate ships, satisfying "we require only their observable contract").
pub fn sample_sort<C, K, O>(comm: &C, local: Vec<u8>, record_width: usize, key: K) -> Vec<u8>
where
    C: Collective,
    K: Fn(&[u8]) -> O + Sync,
    O: Ord,
{
    let local = distribute_data(comm, &local, record_width);
    let mut records: Vec<&[u8]> = local.chunks(record_width).collect();
    records.sort_unstable_by(|a, b| key(a).cmp(&key(b)));

    let p = comm.size();
    if p <= 1 {
        return records.concat();
    }

    // Local samples: s = min(20P - 1, n) evenly spaced records.
    let n = records.len();
    let s = (20 * p - 1).min(n);
    let local_samples: Vec<u8> = if s == 0 {
        Vec::new()
    } else {
        (0..s)
            .map(|i| (i * n) / s)
            .flat_map(|idx| records[idx].to_vec())
            .collect()
    };

    // Global splitters: sort the pooled local splitters, then every rank
    // takes its own last local splitter out of the pool and all-gathers.
    let pooled = sample_sort_leaf_only(comm, local_samples, record_width, &key);
    let my_count = (pooled.len() / record_width) as u64;
    let total_splitters = comm.allreduce_sum(my_count);
    let my_start = comm.ex_prefix_sum(my_count);
    let target_per_rank = total_splitters.div_ceil(p as u64).max(1);
    // Each rank's contribution to the P-1 global splitter set is the record
    // at the end of its (target_per_rank)-th chunk of the pooled splitters.
    let mut my_global_splitter = Vec::new();
    if my_count > 0 {
        let last_idx = (my_count - 1) as usize;
        let is_boundary = (my_start + my_count) % target_per_rank == 0
            || my_start + my_count == total_splitters;
        if is_boundary {
            my_global_splitter = pooled[last_idx * record_width..(last_idx + 1) * record_width].to_vec();
        }
    }
    let gathered = comm.allgatherv(&my_global_splitter);
    let mut splitters: Vec<&[u8]> = gathered.chunks(record_width).collect();
    splitters.sort_unstable_by(|a, b| key(a).cmp(&key(b)));
    splitters.truncate(p.saturating_sub(1));

    // Partition the locally sorted records into P intervals by the
    // splitters, then all-to-all-v.
    let mut parts = vec![Vec::new(); p];
    let mut start = 0usize;
    for (bucket, splitter) in splitters.iter().enumerate() {
        let end = records[start..].partition_point(|r| key(r) <= key(splitter)) + start;
        for rec in &records[start..end] {
            parts[bucket].extend_from_slice(rec);
        }
        start = end;
    }
    for rec in &records[start..] {
        parts[p - 1].extend_from_slice(rec);
    }

    let incoming = comm.alltoallv(&parts);
    merge_sorted_runs(incoming, record_width, key)
}

/// Sample sort used only to sort the (tiny) splitter pool itself: same
/// shape as [sample_sort] but skips the recursive splitter step since the
/// pool is assumed small enough to sort after a single rebalance + merge.
fn sample_sort_leaf_only<C, K, O>(comm: &C, local: Vec<u8>, record_width: usize, key: &K) -> Vec<u8>
where
    C: Collective,
    K: Fn(&[u8]) -> O,
    O: Ord,
{
    let local = distribute_data(comm, &local, record_width);
    let all = comm.allgatherv(&local);
    let mut records: Vec<&[u8]> = all.chunks(record_width).collect();
    records.sort_unstable_by(|a, b| key(a).cmp(&key(b)));
    // Every rank now holds every splitter candidate sorted identically;
    // slice out this rank's even-sliced share so later steps still work on
    // a distributed (not replicated) sequence.
    let n = records.len() as u64;
    let p = comm.size() as u64;
    let (start, len) = crate::containers::even_slice(n, p as usize, comm.rank(), false);
    records[start as usize..(start + len) as usize]
        .iter()
        .flat_map(|r| r.to_vec())
        .collect()
}

/// P-way merge of already-sorted runs (§4.3 step 7's loser-tree in spirit;
/// a binary-heap merge is equivalent work and much simpler to get right).
fn merge_sorted_runs<K, O>(runs: Vec<Vec<u8>>, record_width: usize, key: K) -> Vec<u8>
where
    K: Fn(&[u8]) -> O,
    O: Ord,
{
    let total_recs: usize = runs.iter().map(|r| r.len() / record_width).sum();
    let mut out = Vec::with_capacity(total_recs * record_width);

    // A loser-tree picks the next record in O(log(#runs)) per step; the
    // linear scan below does the same selection in O(#runs) per step, which
    // is simpler to get right and fine for the rank counts this crate
    // targets (the number of runs is P, not the record count).
    let mut heads: Vec<Option<usize>> = runs
        .iter()
        .map(|r| if r.is_empty() { None } else { Some(0) })
        .collect();

    loop {
        let mut best: Option<usize> = None;
        for (run_idx, head) in heads.iter().enumerate() {
            if let Some(pos) = head {
                let rec = &runs[run_idx][*pos..*pos + record_width];
                best = match best {
                    None => Some(run_idx),
                    Some(b) => {
                        let brec = &runs[b][heads[b].unwrap()..heads[b].unwrap() + record_width];
                        if key(rec) < key(brec) {
                            Some(run_idx)
                        } else {
                            Some(b)
                        }
                    }
                };
            }
        }
        match best {
            None => break,
            Some(run_idx) => {
                let pos = heads[run_idx].unwrap();
                out.extend_from_slice(&runs[run_idx][pos..pos + record_width]);
                let next = pos + record_width;
                heads[run_idx] = if next < runs[run_idx].len() { Some(next) } else { None };
            }
        }
    }
    out
}
