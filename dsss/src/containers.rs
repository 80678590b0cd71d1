//! Distributed containers (C2, §4.2).
//!
//! §9 "Pointer-into-buffer string sets" calls out the source's raw-pointer
//! rebasing hazard and recommends `(start, end)` offsets instead; that's
//! what [StringSet] and [IndexedStringSet] do here.

use biometrics::Counter;

use tatl::Stationary;

use crate::collective::Collective;
use crate::index::Index;

static MISSING_LOCAL_RECORD: Counter = Counter::new("dsss.containers.missing_local_record");
static MISSING_LOCAL_RECORD_MONITOR: Stationary =
    Stationary::new("dsss.containers.missing_local_record", &MISSING_LOCAL_RECORD);

/// Registers this module's counters with `collector`.
pub fn register_biometrics(collector: &biometrics::Collector) {
    collector.register_counter(&MISSING_LOCAL_RECORD);
}

/// [MISSING_LOCAL_RECORD] should never fire: it only clicks when
/// [RequestableArray::gather_remote] services a request whose offset lands
/// outside the owner's local slice, which means the requester computed the
/// wrong owner for a position.
pub fn register_monitors(hey_listen: &mut tatl::HeyListen) {
    hey_listen.register_stationary(&MISSING_LOCAL_RECORD_MONITOR);
}

/////////////////////////////////////////////// StringSet //////////////////////////////////////////

/// A flat byte buffer holding null-terminated strings back to back, plus the
/// `(start, end)` offset of each string (the terminator itself is excluded
/// from the slice). Building this way means moving the buffer never
/// invalidates anything -- offsets are just integers.
#[derive(Clone, Debug, Default)]
pub struct StringSet {
    buffer: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl StringSet {
    /// Scan `buffer` for `0` terminators and record the `(start, end)` span
    /// of each string found.
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        let mut offsets = Vec::new();
        let mut start = 0;
        for (i, &b) in buffer.iter().enumerate() {
            if b == 0 {
                offsets.push((start, i));
                start = i + 1;
            }
        }
        StringSet { buffer, offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The bytes of the `i`th string, not including its terminator.
    pub fn get(&self, i: usize) -> &[u8] {
        let (start, end) = self.offsets[i];
        &self.buffer[start..end]
    }

    /// Replace the offset table without touching the buffer -- used when a
    /// sort reorders strings but the underlying bytes stay put (e.g. a
    /// pointer-into-buffer merge that only permutes views).
    pub fn set_offsets(&mut self, offsets: Vec<(usize, usize)>) {
        self.offsets = offsets;
    }

    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/////////////////////////////////////////// IndexedStringSet ////////////////////////////////////////

/// A [StringSet] with a parallel global [Index] per string (§4.2), used for
/// the B*-substring set (§3, §4.5) where every substring also carries the
/// global text position it starts at.
#[derive(Clone, Debug, Default)]
pub struct IndexedStringSet {
    strings: StringSet,
    indices: Vec<Index>,
}

impl IndexedStringSet {
    pub fn new(buffer: Vec<u8>, indices: Vec<Index>) -> Self {
        let strings = StringSet::from_buffer(buffer);
        assert_eq!(strings.len(), indices.len());
        IndexedStringSet { strings, indices }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get(&self, i: usize) -> (&[u8], Index) {
        (self.strings.get(i), self.indices[i])
    }

    pub fn strings(&self) -> &StringSet {
        &self.strings
    }

    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    pub fn into_parts(self) -> (StringSet, Vec<Index>) {
        (self.strings, self.indices)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], Index)> {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/////////////////////////////////////////// DistributedString ///////////////////////////////////////

/// The local view of a slice of the global text T: the global starting
/// offset and the bytes this PE owns (§3 "Text T").
#[derive(Clone, Debug)]
pub struct DistributedString {
    offset: Index,
    bytes: Vec<u8>,
    total_len: Index,
}

impl DistributedString {
    pub fn new(offset: Index, bytes: Vec<u8>, total_len: Index) -> Self {
        DistributedString {
            offset,
            bytes,
            total_len,
        }
    }

    pub fn offset(&self) -> Index {
        self.offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn total_len(&self) -> Index {
        self.total_len
    }

    pub fn local_len(&self) -> usize {
        self.bytes.len()
    }

    /// Splits `n` bytes off the distributed string's own local slice,
    /// returning them and shrinking `self` in place. Used by classification
    /// (§4.5) to trim a prefix it has handed to its left neighbour.
    pub fn split_off_front(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.bytes.len());
        let rest = self.bytes.split_off(n);
        let taken = std::mem::replace(&mut self.bytes, rest);
        self.offset = self.offset + n as u64;
        taken
    }

    /// Prepends bytes received from the left neighbour (§4.5).
    pub fn prepend(&mut self, mut prefix: Vec<u8>, new_offset: Index) {
        prefix.extend_from_slice(&self.bytes);
        self.bytes = prefix;
        self.offset = new_offset;
    }
}

/// Pairs a flat null-terminated string buffer with a parallel flat
/// little-endian [Index] buffer into an [IndexedStringSet]. This is the same
/// "reunite two independently-exchanged parallel vectors" role the source's
/// `dsss::mpi::zip.hpp` plays for C4's two-pass all-to-all (§9, §4.4).
pub fn zip_strings_and_indices(strings_buf: Vec<u8>, indices_buf: &[u8]) -> IndexedStringSet {
    let indices: Vec<Index> = indices_buf
        .chunks_exact(8)
        .map(|c| Index::new(u64::from_le_bytes(c.try_into().unwrap())))
        .collect();
    IndexedStringSet::new(strings_buf, indices)
}

/// Inverse of [zip_strings_and_indices]: splits an [IndexedStringSet] back
/// into an independently-sendable null-terminated string buffer and a
/// little-endian index buffer, preserving string order.
pub fn unzip_strings_and_indices(set: &IndexedStringSet) -> (Vec<u8>, Vec<u8>) {
    let mut strings_buf = Vec::new();
    for s in set.strings().iter() {
        strings_buf.extend_from_slice(s);
        strings_buf.push(0);
    }
    let mut indices_buf = Vec::with_capacity(set.len() * 8);
    for idx in set.indices() {
        indices_buf.extend_from_slice(&idx.as_u64().to_le_bytes());
    }
    (strings_buf, indices_buf)
}

/// Evenly slices `total` elements across `size` ranks, the first
/// `total % size` ranks absorbing one extra element each time `left_heavy`
/// is set, the last rank absorbing the remainder otherwise (§3 "Distributed
/// array abstraction").
pub fn even_slice(total: u64, size: usize, rank: usize, left_heavy: bool) -> (u64, u64) {
    if left_heavy {
        let base = total / size as u64;
        let rem = total % size as u64;
        let start = rank as u64 * base + (rank as u64).min(rem);
        let len = base + if (rank as u64) < rem { 1 } else { 0 };
        (start, len)
    } else {
        let base = total / size as u64;
        let start = rank as u64 * base;
        let len = if rank + 1 == size { total - start } else { base };
        (start, len)
    }
}

/////////////////////////////////////////// RequestableArray /////////////////////////////////////////

/// A read-only, slice-distributed array supporting bulk remote reads by
/// global index (§3, §4.2). Elements are `record_width`-byte fixed-size
/// values moved across the wire as raw bytes; `record_width == 1` is the
/// plain byte array classification (C5) reads T through.
pub struct RequestableArray<'a, C: Collective> {
    comm: &'a C,
    local: Vec<u8>,
    total_len: u64,
    base: u64,
    record_width: usize,
}

impl<'a, C: Collective> RequestableArray<'a, C> {
    /// `local` is this PE's slice of the globally even-sliced array (bytes,
    /// one element per byte); `total_len` is the number of elements in the
    /// whole array.
    pub fn new(comm: &'a C, local: Vec<u8>, total_len: u64) -> Self {
        Self::new_typed(comm, local, total_len, 1)
    }

    /// Same contract as [Self::new], but each element is `record_width`
    /// bytes wide (e.g. 8 for a `requestable_array<u64>`).
    pub fn new_typed(comm: &'a C, local: Vec<u8>, total_len: u64, record_width: usize) -> Self {
        assert_eq!(local.len() as u64, total_local_elems(comm, total_len) * record_width as u64);
        let base = total_len / comm.size().max(1) as u64;
        RequestableArray {
            comm,
            local,
            total_len,
            base: base.max(1),
            record_width,
        }
    }

    fn owner_of(&self, pos: u64) -> usize {
        owner_of_position(self.total_len, self.comm.size(), pos)
    }

    fn local_offset(&self, pos: u64, owner: usize) -> usize {
        (pos - owner as u64 * self.base) as usize
    }

    /// `gather_remote` per the contract in §4.2:
    /// 1. classify each request by target rank,
    /// 2. all-to-all the counts and normalised positions,
    /// 3. service locally and mirror the results back,
    /// 4. reassemble in the caller's original order.
    pub fn gather_remote(&self, positions: &[u64]) -> Vec<u8> {
        let w = self.record_width;
        let p = self.comm.size();
        let mut by_owner: Vec<Vec<(usize, u64)>> = vec![Vec::new(); p];
        for (i, &pos) in positions.iter().enumerate() {
            assert!(pos < self.total_len, "position {pos} out of range");
            let owner = self.owner_of(pos);
            by_owner[owner].push((i, pos));
        }

        // Offsets are encoded at the same 40-bit width as [Index] rather than
        // truncated to a u32: a single PE's local share of a near-maximum-size
        // text can exceed u32::MAX even though P is small.
        const OFFSET_WIDTH: usize = 5;
        let mut request_bytes = vec![Vec::new(); p];
        for (owner, reqs) in by_owner.iter().enumerate() {
            let mut buf = Vec::with_capacity(reqs.len() * OFFSET_WIDTH);
            for &(_, pos) in reqs {
                let off = self.local_offset(pos, owner) as u64;
                buf.extend_from_slice(&off.to_le_bytes()[..OFFSET_WIDTH]);
            }
            request_bytes[owner] = buf;
        }
        let incoming = self.comm.alltoallv(&request_bytes);

        let mut reply_bytes = vec![Vec::new(); p];
        for (src, req) in incoming.iter().enumerate() {
            let mut out = Vec::with_capacity((req.len() / OFFSET_WIDTH) * w);
            for chunk in req.chunks_exact(OFFSET_WIDTH) {
                let mut widened = [0u8; 8];
                widened[..OFFSET_WIDTH].copy_from_slice(chunk);
                let off = u64::from_le_bytes(widened) as usize * w;
                match self.local.get(off..off + w) {
                    Some(rec) => out.extend_from_slice(rec),
                    None => {
                        MISSING_LOCAL_RECORD.click();
                        out.extend(std::iter::repeat(0u8).take(w));
                    }
                }
            }
            reply_bytes[src] = out;
        }
        let replies = self.comm.alltoallv(&reply_bytes);

        let mut result = vec![0u8; positions.len() * w];
        let mut cursor = vec![0usize; p];
        for (i, &pos) in positions.iter().enumerate() {
            let owner = self.owner_of(pos);
            let c = cursor[owner];
            result[i * w..(i + 1) * w].copy_from_slice(&replies[owner][c..c + w]);
            cursor[owner] += w;
        }
        result
    }
}

/// The rank that owns global position `pos` under the same floor-division
/// slicing [even_slice] uses with `left_heavy = false` (§3's distributed
/// array abstraction). Shared by [RequestableArray] and induction (C7),
/// which scatters directly to this same ownership rule rather than
/// re-deriving it.
pub fn owner_of_position(total_len: u64, size: usize, pos: u64) -> usize {
    let base = (total_len / size.max(1) as u64).max(1);
    ((pos / base) as usize).min(size.saturating_sub(1))
}

fn total_local_elems<C: Collective>(comm: &C, total_len: u64) -> u64 {
    let (_, len) = even_slice(total_len, comm.size().max(1), comm.rank(), false);
    len
}
