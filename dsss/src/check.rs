//! Distributed suffix array verification (C8, §4.8).
//!
//! A candidate array is a valid suffix array of `T` iff (a) it is a
//! permutation of `0..N`, and (b) the key `(T[SA[i]], rank(SA[i]+1))` is
//! non-decreasing over `i`, where `rank(p)` is the position of `p` in `SA`
//! and `rank(N)` is defined to sort before every real rank (running off the
//! end of the text always compares smaller, the same convention
//! [crate::classify] and [crate::pdd] use for their own virtual sentinels).
//! Both checks are phrased as a distributed sort plus a neighbour-shift scan
//! rather than a gather-everything-to-rank-0 comparison (§4.8).

use crate::collective::Collective;
use crate::containers::{even_slice, owner_of_position, DistributedString, RequestableArray};
use crate::error::Error;
use crate::index::Index;
use crate::sample_sort::sample_sort;

/// Checks that the concatenation (in rank order) of `local_sa` -- this PE's
/// contiguous slice of the candidate array, in SA order -- is a permutation
/// of `0..N` and correctly orders every suffix of `text`.
pub fn verify_sa<C: Collective>(comm: &C, text: &DistributedString, local_sa: &[Index]) -> Result<(), Error> {
    let n = text.total_len().as_u64();
    if n == 0 {
        return if local_sa.is_empty() {
            Ok(())
        } else {
            Err(Error::check_failed("non-empty suffix array for an empty text"))
        };
    }

    check_permutation(comm, local_sa, n)?;

    let p = comm.size();
    let rank_array = build_rank_array(comm, local_sa, n);
    let (rank_start, rank_len) = even_slice(n, p, comm.rank(), false);
    let rank_lookup = RequestableArray::new(comm, rank_array, n);
    let text_lookup = RequestableArray::new(comm, text.bytes().to_vec(), n);
    let _ = (rank_start, rank_len);

    let my_count = local_sa.len() as u64;
    let base_i = comm.ex_prefix_sum(my_count);

    let successor_positions: Vec<u64> = local_sa
        .iter()
        .map(|&pos| pos.as_u64() + 1)
        .filter(|&succ| succ < n)
        .collect();
    let byte_positions: Vec<u64> = local_sa.iter().map(|&pos| pos.as_u64()).collect();

    let succ_ranks = rank_lookup.gather_remote(&successor_positions);
    let bytes = text_lookup.gather_remote(&byte_positions);

    let mut succ_iter = succ_ranks.chunks_exact(8);
    let mut keys: Vec<(u8, u64)> = Vec::with_capacity(local_sa.len());
    for (k, &pos) in local_sa.iter().enumerate() {
        let succ = pos.as_u64() + 1;
        let encoded_rank = if succ < n {
            let chunk = succ_iter.next().expect("one rank reply per in-range successor");
            u64::from_le_bytes(chunk.try_into().unwrap()) + 1
        } else {
            0
        };
        keys.push((bytes[k], encoded_rank));
    }

    let mut ok = keys.windows(2).all(|w| w[0] <= w[1]);

    let my_first = keys.first().copied();
    let my_last = keys.last().copied();
    let encode = |k: Option<(u8, u64)>| -> [u8; 10] {
        let mut buf = [0u8; 10];
        if let Some((b, r)) = k {
            buf[0] = 1;
            buf[1] = b;
            buf[2..10].copy_from_slice(&r.to_le_bytes());
        }
        buf
    };
    let decode = |bytes: &[u8]| -> Option<(u8, u64)> {
        if bytes[0] == 0 {
            None
        } else {
            Some((bytes[1], u64::from_le_bytes(bytes[2..10].try_into().unwrap())))
        }
    };
    let left = decode(&comm.shift_right(&encode(my_last)));
    if let (Some(left_key), Some(first_key)) = (left, my_first) {
        ok = ok && left_key <= first_key;
    }
    let _ = base_i;

    let ok = comm.allreduce_and(ok);
    if ok {
        Ok(())
    } else {
        Err(Error::check_failed("suffix array ordering invariant violated"))
    }
}

fn check_permutation<C: Collective>(comm: &C, local_sa: &[Index], n: u64) -> Result<(), Error> {
    let buf: Vec<u8> = local_sa.iter().flat_map(|p| p.as_u64().to_le_bytes()).collect();
    let sorted = sample_sort(comm, buf, 8, |r: &[u8]| u64::from_le_bytes(r.try_into().unwrap()));
    let vals: Vec<u64> = sorted.chunks_exact(8).map(|c| u64::from_le_bytes(c.try_into().unwrap())).collect();

    let my_count = vals.len() as u64;
    let total = comm.allreduce_sum(my_count);
    let start = comm.ex_prefix_sum(my_count);
    let dense = vals.iter().enumerate().all(|(i, &v)| v == start + i as u64);

    let ok = comm.allreduce_and(dense && total == n);
    if ok {
        Ok(())
    } else {
        Err(Error::check_failed("suffix array is not a permutation of the text's positions"))
    }
}

/// Builds this PE's even-sliced chunk of the inverse permutation (`rank[p]`
/// = the SA index holding position `p`), by sorting `(position, rank)` pairs
/// by position and re-bucketing them onto [even_slice] ownership so the
/// result can seed a [RequestableArray] (§4.8 "two distributed sorts").
fn build_rank_array<C: Collective>(comm: &C, local_sa: &[Index], n: u64) -> Vec<u8> {
    let my_count = local_sa.len() as u64;
    let base_i = comm.ex_prefix_sum(my_count);
    let buf: Vec<u8> = local_sa
        .iter()
        .enumerate()
        .flat_map(|(k, pos)| {
            let mut b = pos.as_u64().to_le_bytes().to_vec();
            b.extend_from_slice(&(base_i + k as u64).to_le_bytes());
            b
        })
        .collect();
    let sorted = sample_sort(comm, buf, 16, |r: &[u8]| u64::from_le_bytes(r[0..8].try_into().unwrap()));
    let pairs: Vec<(u64, u64)> = sorted
        .chunks_exact(16)
        .map(|r| {
            (
                u64::from_le_bytes(r[0..8].try_into().unwrap()),
                u64::from_le_bytes(r[8..16].try_into().unwrap()),
            )
        })
        .collect();

    let p = comm.size();
    let mut parts = vec![Vec::new(); p];
    for &(pos, rank) in &pairs {
        let owner = owner_of_position(n, p, pos);
        parts[owner].extend_from_slice(&pos.to_le_bytes());
        parts[owner].extend_from_slice(&rank.to_le_bytes());
    }
    let incoming = comm.alltoallv(&parts);

    let (start, len) = even_slice(n, p, comm.rank(), false);
    let mut local_ranks = vec![0u64; len as usize];
    for buf in incoming {
        for rec in buf.chunks_exact(16) {
            let pos = u64::from_le_bytes(rec[0..8].try_into().unwrap());
            let rank = u64::from_le_bytes(rec[8..16].try_into().unwrap());
            local_ranks[(pos - start) as usize] = rank;
        }
    }
    local_ranks.into_iter().flat_map(|r| r.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collective::LocalComm;

    fn check(text: &[u8], sa: &[u64]) -> Result<(), Error> {
        let comm = LocalComm;
        let total = text.len() as u64;
        let ds = DistributedString::new(Index::ZERO, text.to_vec(), Index::new(total));
        let local_sa: Vec<Index> = sa.iter().map(|&v| Index::new(v)).collect();
        verify_sa(&comm, &ds, &local_sa)
    }

    #[test]
    fn banana_known_suffix_array_passes() {
        assert!(check(b"banana", &[5, 3, 1, 0, 4, 2]).is_ok());
    }

    #[test]
    fn mississippi_known_suffix_array_passes() {
        assert!(check(b"mississippi", &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]).is_ok());
    }

    #[test]
    fn swapped_entries_fail() {
        assert!(check(b"banana", &[3, 5, 1, 0, 4, 2]).is_err());
    }

    #[test]
    fn duplicate_entries_fail_permutation_check() {
        assert!(check(b"banana", &[5, 5, 1, 0, 4, 2]).is_err());
    }

    #[test]
    fn empty_text_requires_empty_array() {
        assert!(check(b"", &[]).is_ok());
        assert!(check(b"", &[0]).is_err());
    }
}
