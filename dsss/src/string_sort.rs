//! Distributed string sample-sort (C4, §4.4): same skeleton as C3 but over
//! [IndexedStringSet], used to bucket the B*-substrings emitted by
//! classification (C5) before they are handed to PDD (C6).

use crate::collective::Collective;
use crate::containers::{zip_strings_and_indices, IndexedStringSet};
use crate::index::Index;

/// MSD radix sort over byte strings, used as the local-sort leaf (§4.4:
/// "Local sort uses a radix sort"). `strings` pairs each string's bytes with
/// its original index into the caller's arrays so the permutation can be
/// replayed afterwards.
fn radix_sort_indices(strings: &[&[u8]]) -> Vec<usize> {
    fn recurse(idxs: &mut [usize], strings: &[&[u8]], depth: usize) {
        if idxs.len() <= 1 {
            return;
        }
        // 257 buckets: byte values 0..255 plus "string ended" (-1, bucket 256).
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); 257];
        for &i in idxs.iter() {
            let s = strings[i];
            let bucket = if depth < s.len() { s[depth] as usize } else { 256 };
            buckets[bucket].push(i);
        }
        let mut cursor = 0;
        for (b, bucket) in buckets.into_iter().enumerate() {
            let len = bucket.len();
            idxs[cursor..cursor + len].copy_from_slice(&bucket);
            if b != 256 && len > 1 {
                recurse(&mut idxs[cursor..cursor + len], strings, depth + 1);
            }
            cursor += len;
        }
    }

    let mut idxs: Vec<usize> = (0..strings.len()).collect();
    recurse(&mut idxs, strings, 0);
    idxs
}

/// Sorts a distributed [IndexedStringSet] lexicographically, returning it
/// redistributed to an even slicing of strings across all ranks (§4.4).
pub fn string_sample_sort<C: Collective>(comm: &C, set: IndexedStringSet) -> IndexedStringSet {
    let (strings, indices) = set.into_parts();
    let owned: Vec<Vec<u8>> = strings.iter().map(|s| s.to_vec()).collect();

    // Step 1: rebalance by string count so every rank holds ~n/P strings.
    let (owned, indices) = rebalance_strings(comm, owned, indices);

    // Step 2: local radix sort.
    let refs: Vec<&[u8]> = owned.iter().map(|v| v.as_slice()).collect();
    let order = radix_sort_indices(&refs);
    let sorted_strings: Vec<Vec<u8>> = order.iter().map(|&i| owned[i].clone()).collect();
    let sorted_indices: Vec<Index> = order.iter().map(|&i| indices[i]).collect();

    let p = comm.size();
    if p <= 1 {
        return build_set(sorted_strings, sorted_indices);
    }

    // Step 3/4: local samples -> pooled, sorted global splitters.
    let n = sorted_strings.len();
    let s = (20 * p - 1).min(n);
    let local_samples: Vec<Vec<u8>> = if s == 0 {
        Vec::new()
    } else {
        (0..s).map(|i| sorted_strings[(i * n) / s].clone()).collect()
    };
    let pooled = gather_and_sort_splitters(comm, local_samples);
    let mut splitters = pooled;
    splitters.sort();
    splitters.dedup();
    let step = (splitters.len() / p).max(1);
    let chosen: Vec<Vec<u8>> = (1..p)
        .filter_map(|i| splitters.get(i * step).cloned())
        .collect();

    // Step 5: partition by lexicographic comparison against each splitter.
    let mut string_parts: Vec<Vec<u8>> = vec![Vec::new(); p]; // flattened, null-terminated
    let mut index_parts: Vec<Vec<u8>> = vec![Vec::new(); p]; // little-endian u64 per index
    let mut start = 0usize;
    for (bucket, splitter) in chosen.iter().enumerate() {
        let end = sorted_strings[start..].partition_point(|s| s.as_slice() <= splitter.as_slice()) + start;
        for i in start..end {
            string_parts[bucket].extend_from_slice(&sorted_strings[i]);
            string_parts[bucket].push(0);
            index_parts[bucket].extend_from_slice(&sorted_indices[i].as_u64().to_le_bytes());
        }
        start = end;
    }
    for i in start..sorted_strings.len() {
        string_parts[p - 1].extend_from_slice(&sorted_strings[i]);
        string_parts[p - 1].push(0);
        index_parts[p - 1].extend_from_slice(&sorted_indices[i].as_u64().to_le_bytes());
    }

    // Step 6: all-to-all-v in two passes (bytes, indices) with congruent
    // counts so they re-pair on arrival (§4.4).
    let incoming_strings = comm.alltoallv(&string_parts);
    let incoming_indices = comm.alltoallv(&index_parts);

    // Step 7: P-way merge of the incoming runs.
    merge_incoming(incoming_strings, incoming_indices)
}

fn rebalance_strings<C: Collective>(
    comm: &C,
    owned: Vec<Vec<u8>>,
    indices: Vec<Index>,
) -> (Vec<Vec<u8>>, Vec<Index>) {
    let my_count = owned.len() as u64;
    let total = comm.allreduce_sum(my_count);
    let p = comm.size() as u64;
    if p == 0 || total == 0 {
        return (owned, indices);
    }
    let target = total.div_ceil(p);
    let my_start = comm.ex_prefix_sum(my_count);

    let mut string_parts = vec![Vec::new(); comm.size()];
    let mut index_parts = vec![Vec::new(); comm.size()];
    for (i, (s, idx)) in owned.iter().zip(indices.iter()).enumerate() {
        let global_idx = my_start + i as u64;
        let dest = ((global_idx / target.max(1)) as usize).min(comm.size() - 1);
        string_parts[dest].extend_from_slice(s);
        string_parts[dest].push(0);
        index_parts[dest].extend_from_slice(&idx.as_u64().to_le_bytes());
    }
    let incoming_strings = comm.alltoallv(&string_parts);
    let incoming_indices = comm.alltoallv(&index_parts);
    let (strings, idxs) = unzip_incoming(incoming_strings, incoming_indices);
    (strings, idxs)
}

fn gather_and_sort_splitters<C: Collective>(comm: &C, local_samples: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut buf = Vec::new();
    for s in &local_samples {
        buf.extend_from_slice(s);
        buf.push(0);
    }
    let all = comm.allgatherv(&buf);
    let set = crate::containers::StringSet::from_buffer(all);
    let mut out: Vec<Vec<u8>> = set.iter().map(|s| s.to_vec()).collect();
    out.sort();
    out
}

fn unzip_incoming(strings_bufs: Vec<Vec<u8>>, index_bufs: Vec<Vec<u8>>) -> (Vec<Vec<u8>>, Vec<Index>) {
    let mut strings = Vec::new();
    let mut indices = Vec::new();
    for (sbuf, ibuf) in strings_bufs.into_iter().zip(index_bufs.into_iter()) {
        let set = zip_strings_and_indices(sbuf, &ibuf);
        for i in 0..set.len() {
            strings.push(set.get(i).0.to_vec());
        }
        indices.extend_from_slice(set.indices());
    }
    (strings, indices)
}

fn merge_incoming(strings_bufs: Vec<Vec<u8>>, index_bufs: Vec<Vec<u8>>) -> IndexedStringSet {
    let runs: Vec<(Vec<Vec<u8>>, Vec<Index>)> = strings_bufs
        .into_iter()
        .zip(index_bufs)
        .map(|(sbuf, ibuf)| {
            let set = zip_strings_and_indices(sbuf, &ibuf);
            let strs: Vec<Vec<u8>> = (0..set.len()).map(|i| set.get(i).0.to_vec()).collect();
            let idxs = set.indices().to_vec();
            (strs, idxs)
        })
        .collect();

    let mut heads: Vec<usize> = vec![0; runs.len()];
    let mut out_strings = Vec::new();
    let mut out_indices = Vec::new();
    loop {
        let mut best: Option<usize> = None;
        for (run_idx, (strs, _)) in runs.iter().enumerate() {
            if heads[run_idx] < strs.len() {
                best = match best {
                    None => Some(run_idx),
                    Some(b) => {
                        if strs[heads[run_idx]] < runs[b].0[heads[b]] {
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
                let pos = heads[run_idx];
                out_strings.push(runs[run_idx].0[pos].clone());
                out_indices.push(runs[run_idx].1[pos]);
                heads[run_idx] += 1;
            }
        }
    }
    build_set(out_strings, out_indices)
}

fn build_set(strings: Vec<Vec<u8>>, indices: Vec<Index>) -> IndexedStringSet {
    let mut buffer = Vec::new();
    for s in &strings {
        buffer.extend_from_slice(s);
        buffer.push(0);
    }
    let indices_buf: Vec<u8> = indices.iter().flat_map(|i| i.as_u64().to_le_bytes()).collect();
    zip_strings_and_indices(buffer, &indices_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collective::LocalComm;

    #[test]
    fn radix_sort_orders_lexicographically() {
        let strings: Vec<&[u8]> = vec![b"banana", b"apple", b"ban", b""];
        let order = radix_sort_indices(&strings);
        let sorted: Vec<&[u8]> = order.iter().map(|&i| strings[i]).collect();
        assert_eq!(sorted, vec![&b""[..], &b"apple"[..], &b"ban"[..], &b"banana"[..]]);
    }

    #[test]
    fn string_sample_sort_single_pe_sorts_lexicographically() {
        let comm = LocalComm;
        let buf = b"banana\0apple\0ban\0".to_vec();
        let set = IndexedStringSet::new(buf, vec![Index::new(2), Index::new(0), Index::new(1)]);
        let sorted = string_sample_sort(&comm, set);
        let got: Vec<Vec<u8>> = sorted.iter().map(|(s, _)| s.to_vec()).collect();
        assert_eq!(got, vec![b"apple".to_vec(), b"ban".to_vec(), b"banana".to_vec()]);
        let idxs: Vec<u64> = sorted.iter().map(|(_, i)| i.as_u64()).collect();
        assert_eq!(idxs, vec![0, 1, 2]);
    }
}
