//! The collective layer (C1, §4.1). Every distributed primitive dsss needs
//! funnels through the [Collective] trait so that the big-type chunking
//! decision (§9 "Collective dispatch by size") lives in exactly one place
//! per primitive and downstream code never branches on message size. Each of
//! [Collective::alltoallv]/[Collective::allgatherv]/[Collective::scatterv]/
//! [Collective::gatherv] decides once, in the trait method itself, whether
//! to run the native 32-bit-count MPI collective (`small_*`) or chunk the
//! transfer as point-to-point big-type messages (`big_type_*`); nothing past
//! that one call re-derives or re-checks the size.
//!
//! [MpiWorld] is the production implementation, a thin wrapper over
//! [mpi::topology::SimpleCommunicator] (the `rsmpi` bindings). [LocalComm] is
//! a P=1 in-process test double: every collective on it is the identity,
//! which is exactly the §8 boundary behaviour required of P=1, and lets the
//! rest of the crate be exercised by `cargo test` without an MPI launcher.

use std::io::Write;

use biometrics::Counter;

/// Bytes above which an all-to-all/allgather/scatter/gather payload is
/// shipped as a derived "big type" (one contiguous blob per message)
/// instead of the native 32-bit-count collective (§4.1, §9).
pub const BIG_TYPE_THRESHOLD: usize = 1usize << 31;

static BIG_TYPE_DISPATCHES: Counter = Counter::new("dsss.collective.big_type_dispatches");

/// Registers this module's counters with `collector`.
pub fn register_biometrics(collector: &biometrics::Collector) {
    collector.register_counter(&BIG_TYPE_DISPATCHES);
}

/// [BIG_TYPE_DISPATCHES] tracks expected volume (how often a payload crossed
/// [BIG_TYPE_THRESHOLD]), not an error condition, so there is no Stationary
/// to watch here.
pub fn register_monitors(hey_listen: &mut tatl::HeyListen) {
    let _ = hey_listen;
}

/// A communicator context: rank, size, and the collective primitives §4.1
/// requires. Every method here is collective -- all participating ranks
/// must call it, in the same order, with argument shapes that agree across
/// ranks (§5 "Suspension points").
pub trait Collective {
    fn rank(&self) -> usize;
    fn size(&self) -> usize;

    fn barrier(&self);

    /// Exclusive prefix sum: 0 on rank 0, `sum(x[0..rank))` elsewhere.
    fn ex_prefix_sum(&self, x: u64) -> u64;
    /// Inclusive prefix sum: `sum(x[0..=rank))`.
    fn prefix_sum(&self, x: u64) -> u64 {
        self.ex_prefix_sum(x) + x
    }

    fn allreduce_sum(&self, x: u64) -> u64;
    fn allreduce_max(&self, x: u64) -> u64;
    fn allreduce_min(&self, x: u64) -> u64;
    fn allreduce_and(&self, x: bool) -> bool;

    /// Fixed-length array all-reduce-sum, used to all-reduce the 256x256
    /// border-array matrices of §4.5.
    fn allreduce_sum_vec(&self, x: &[u64]) -> Vec<u64>;

    /// One scalar per rank, gathered to every rank.
    fn allgather(&self, x: u64) -> Vec<u64>;

    /// Variable-length byte buffers, gathered to every rank. Falls back to
    /// the big-type chunked path when the aggregate size exceeds
    /// [BIG_TYPE_THRESHOLD] (§4.1).
    fn allgatherv(&self, x: &[u8]) -> Vec<u8>;

    /// `parts[r]` is sent to rank `r`; returns the bytes received from every
    /// rank, in rank order. This is the primitive the large-message path
    /// posts as P non-blocking sends and P non-blocking receives over (§4.1).
    fn alltoallv(&self, parts: &[Vec<u8>]) -> Vec<Vec<u8>>;

    /// Ring neighbour exchange: send to `rank - 1`, receive from `rank + 1`
    /// (rank 0 pairs with the last rank).
    fn shift_left(&self, x: &[u8]) -> Vec<u8>;
    /// Ring neighbour exchange: send to `rank + 1`, receive from `rank - 1`.
    fn shift_right(&self, x: &[u8]) -> Vec<u8>;

    /// Root-driven scatter of variable-length per-rank byte slices. `parts`
    /// is only meaningful (and must be `Some`) on `root`.
    fn scatterv(&self, root: usize, parts: Option<&[Vec<u8>]>) -> Vec<u8>;

    /// Root-driven gather of variable-length per-rank byte buffers. Returns
    /// `Some(all_parts)` on `root`, `None` elsewhere.
    fn gatherv(&self, root: usize, x: &[u8]) -> Option<Vec<Vec<u8>>>;

    /// True when the aggregate byte count crosses [BIG_TYPE_THRESHOLD] and
    /// the call should dispatch through the big-type path. Centralising this
    /// check here is what §9 means by "centralise it in one collective-layer
    /// entry per primitive".
    fn needs_big_type(&self, total_bytes: u64) -> bool {
        if total_bytes as usize >= BIG_TYPE_THRESHOLD {
            BIG_TYPE_DISPATCHES.click();
            true
        } else {
            false
        }
    }
}

/////////////////////////////////////////////// MpiWorld ///////////////////////////////////////////

/// Production [Collective] backed by `rsmpi`'s [mpi::topology::SimpleCommunicator].
pub struct MpiWorld {
    world: mpi::topology::SimpleCommunicator,
}

impl MpiWorld {
    /// Initialize MPI and return the world communicator. Per §7, a failure
    /// here is fatal: there is no PE-local fallback.
    pub fn new() -> Self {
        let _universe = mpi::initialize().expect("MPI_Init failed; this process must run under an MPI launcher");
        // `_universe` is intentionally leaked: its Drop calls MPI_Finalize, and we want MPI
        // to stay initialized for the lifetime of the process, matching the `is`/`pdd`
        // binaries' single call to MpiWorld::new() at startup.
        std::mem::forget(_universe);
        let world = mpi::topology::SimpleCommunicator::world();
        MpiWorld { world }
    }
}

impl Default for MpiWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Collective for MpiWorld {
    fn rank(&self) -> usize {
        use mpi::traits::Communicator;
        self.world.rank() as usize
    }

    fn size(&self) -> usize {
        use mpi::traits::Communicator;
        self.world.size() as usize
    }

    fn barrier(&self) {
        use mpi::traits::Communicator;
        self.world.barrier();
    }

    fn ex_prefix_sum(&self, x: u64) -> u64 {
        use mpi::collective::SystemOperation;
        use mpi::traits::Communicator;
        let mut result = 0u64;
        self.world.exclusive_scan_into(&x, &mut result, SystemOperation::sum());
        if self.rank() == 0 {
            0
        } else {
            result
        }
    }

    fn allreduce_sum(&self, x: u64) -> u64 {
        use mpi::collective::SystemOperation;
        use mpi::traits::Communicator;
        let mut result = 0u64;
        self.world.all_reduce_into(&x, &mut result, SystemOperation::sum());
        result
    }

    fn allreduce_max(&self, x: u64) -> u64 {
        use mpi::collective::SystemOperation;
        use mpi::traits::Communicator;
        let mut result = 0u64;
        self.world.all_reduce_into(&x, &mut result, SystemOperation::max());
        result
    }

    fn allreduce_min(&self, x: u64) -> u64 {
        use mpi::collective::SystemOperation;
        use mpi::traits::Communicator;
        let mut result = 0u64;
        self.world.all_reduce_into(&x, &mut result, SystemOperation::min());
        result
    }

    fn allreduce_and(&self, x: bool) -> bool {
        let x = if x { 1u64 } else { 0u64 };
        self.allreduce_min(x) != 0
    }

    fn allreduce_sum_vec(&self, x: &[u64]) -> Vec<u64> {
        use mpi::collective::SystemOperation;
        use mpi::traits::Communicator;
        let mut result = vec![0u64; x.len()];
        self.world.all_reduce_into(x, &mut result[..], SystemOperation::sum());
        result
    }

    fn allgather(&self, x: u64) -> Vec<u64> {
        use mpi::traits::Communicator;
        let mut result = vec![0u64; self.size()];
        self.world.all_gather_into(&x, &mut result[..]);
        result
    }

    fn allgatherv(&self, x: &[u8]) -> Vec<u8> {
        let lens = self.allgather(x.len() as u64);
        let total: u64 = lens.iter().sum();
        if self.needs_big_type(total) {
            big_type_allgatherv(self, x, &lens)
        } else {
            small_allgatherv(self, x, &lens)
        }
    }

    fn alltoallv(&self, parts: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let local_total: u64 = parts.iter().map(|v| v.len() as u64).sum();
        let global_total = self.allreduce_sum(local_total);
        if self.needs_big_type(global_total) {
            big_type_alltoallv(self, parts)
        } else {
            small_alltoallv(self, parts)
        }
    }

    fn shift_left(&self, x: &[u8]) -> Vec<u8> {
        ring_shift(self, x, -1)
    }

    fn shift_right(&self, x: &[u8]) -> Vec<u8> {
        ring_shift(self, x, 1)
    }

    fn scatterv(&self, root: usize, parts: Option<&[Vec<u8>]>) -> Vec<u8> {
        let local_total: u64 = parts.map(|parts| parts.iter().map(|v| v.len() as u64).sum()).unwrap_or(0);
        let global_total = self.allreduce_sum(local_total);
        if self.needs_big_type(global_total) {
            big_type_scatterv(self, root, parts)
        } else {
            small_scatterv(self, root, parts)
        }
    }

    fn gatherv(&self, root: usize, x: &[u8]) -> Option<Vec<Vec<u8>>> {
        let global_total = self.allreduce_sum(x.len() as u64);
        if self.needs_big_type(global_total) {
            big_type_gatherv(self, root, x)
        } else {
            small_gatherv(self, root, x)
        }
    }
}

/// Builds and sends a "big type" message: a contiguous run of `count` bytes
/// shipped as one element, so a single send/receive can move payloads larger
/// than a 32-bit count would allow (§4.1 "Big-type construction").
fn send_big(world: &MpiWorld, dest: usize, bytes: &[u8]) {
    use mpi::point_to_point::Destination;
    use mpi::traits::Communicator;
    let len = bytes.len() as u64;
    world.world.process_at_rank(dest as i32).send(&len);
    if !bytes.is_empty() {
        world.world.process_at_rank(dest as i32).send(bytes);
    }
}

fn recv_big(world: &MpiWorld, source: usize) -> Vec<u8> {
    use mpi::point_to_point::Source;
    use mpi::traits::Communicator;
    let (len, _status): (u64, _) = world.world.process_at_rank(source as i32).receive();
    if len == 0 {
        Vec::new()
    } else {
        let (buf, _status) = world.world.process_at_rank(source as i32).receive_vec::<u8>();
        buf
    }
}

/// The all-to-all-v large-message path: posts P sends and P receives as
/// big-type point-to-point transfers (§4.1). [Collective::alltoallv] is the
/// single place that decides whether to call this or [small_alltoallv]; this
/// function never re-derives that decision.
fn big_type_alltoallv(world: &MpiWorld, parts: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let p = world.size();
    assert_eq!(parts.len(), p);
    for dest in 0..p {
        if dest != world.rank() {
            send_big(world, dest, &parts[dest]);
        }
    }
    let mut result = Vec::with_capacity(p);
    for src in 0..p {
        if src == world.rank() {
            result.push(parts[src].clone());
        } else {
            result.push(recv_big(world, src));
        }
    }
    result
}

/// The all-gather-v large-message path (§4.1). `lens` is each rank's
/// contribution length, already exchanged by the caller.
fn big_type_allgatherv(world: &MpiWorld, x: &[u8], lens: &[u64]) -> Vec<u8> {
    let received = big_type_broadcast_each(world, x, lens);
    received.concat()
}

/// Each rank broadcasts its own contribution to every other rank; used to
/// build allgatherv out of point-to-point big-type sends.
fn big_type_broadcast_each(world: &MpiWorld, mine: &[u8], lens: &[u64]) -> Vec<Vec<u8>> {
    let p = world.size();
    let mut out = vec![Vec::new(); p];
    for root in 0..p {
        if root == world.rank() {
            out[root] = mine.to_vec();
            for dest in 0..p {
                if dest != root {
                    send_big(world, dest, mine);
                }
            }
        } else {
            out[root] = if lens[root] == 0 { Vec::new() } else { recv_big(world, root) };
        }
    }
    out
}

fn big_type_scatterv(world: &MpiWorld, root: usize, parts: Option<&[Vec<u8>]>) -> Vec<u8> {
    if world.rank() == root {
        let parts = parts.expect("scatterv root must supply parts");
        assert_eq!(parts.len(), world.size());
        for dest in 0..world.size() {
            if dest != root {
                send_big(world, dest, &parts[dest]);
            }
        }
        parts[root].clone()
    } else {
        recv_big(world, root)
    }
}

fn big_type_gatherv(world: &MpiWorld, root: usize, x: &[u8]) -> Option<Vec<Vec<u8>>> {
    if world.rank() == root {
        let mut parts = vec![Vec::new(); world.size()];
        parts[root] = x.to_vec();
        for src in 0..world.size() {
            if src != root {
                parts[src] = recv_big(world, src);
            }
        }
        Some(parts)
    } else {
        send_big(world, root, x);
        None
    }
}

fn ring_shift(world: &MpiWorld, x: &[u8], delta: i32) -> Vec<u8> {
    use mpi::point_to_point::{Destination, Source};
    use mpi::traits::Communicator;
    let p = world.size() as i32;
    let r = world.rank() as i32;
    let dest = ((r + delta) % p + p) % p;
    let src = ((r - delta) % p + p) % p;
    let len = x.len() as u64;
    world.world.process_at_rank(dest).send(&len);
    let (their_len, _status): (u64, _) = world.world.process_at_rank(src).receive();
    if len > 0 {
        world.world.process_at_rank(dest).send(x);
    }
    if their_len == 0 {
        Vec::new()
    } else {
        let (buf, _status) = world.world.process_at_rank(src).receive_vec::<u8>();
        buf
    }
}

/// The all-to-all-v small-message path: a fixed-size all-to-all of the
/// per-rank counts followed by one native `MPI_Alltoallv` call (§4.1's small
/// path; the native collective uses 32-bit counts, which is exactly why the
/// large path exists for anything [BIG_TYPE_THRESHOLD] or bigger).
fn small_alltoallv(world: &MpiWorld, parts: &[Vec<u8>]) -> Vec<Vec<u8>> {
    use mpi::datatype::{Partition, PartitionMut};
    use mpi::traits::Communicator;
    let p = world.size();
    assert_eq!(parts.len(), p);

    let send_counts: Vec<i32> = parts.iter().map(|v| v.len() as i32).collect();
    let send_displs = prefix_displs(&send_counts);
    let send_buf: Vec<u8> = parts.concat();

    let mut recv_counts = vec![0i32; p];
    world.world.all_to_all_into(&send_counts[..], &mut recv_counts[..]);
    let recv_displs = prefix_displs(&recv_counts);
    let total_recv: usize = recv_counts.iter().map(|&c| c as usize).sum();
    let mut recv_buf = vec![0u8; total_recv];

    let send_partition = Partition::new(&send_buf[..], send_counts, send_displs);
    let mut recv_partition = PartitionMut::new(&mut recv_buf[..], recv_counts.clone(), recv_displs.clone());
    world.world.all_to_all_varcount_into(&send_partition, &mut recv_partition);

    (0..p)
        .map(|r| {
            let start = recv_displs[r] as usize;
            let len = recv_counts[r] as usize;
            recv_buf[start..start + len].to_vec()
        })
        .collect()
}

/// The all-gather-v small-message path: one native `MPI_Allgatherv` call
/// over the already-exchanged per-rank lengths (§4.1's small path).
fn small_allgatherv(world: &MpiWorld, x: &[u8], lens: &[u64]) -> Vec<u8> {
    use mpi::datatype::PartitionMut;
    use mpi::traits::Communicator;
    let counts: Vec<i32> = lens.iter().map(|&l| l as i32).collect();
    let displs = prefix_displs(&counts);
    let total: usize = counts.iter().map(|&c| c as usize).sum();
    let mut recv_buf = vec![0u8; total];
    let mut partition = PartitionMut::new(&mut recv_buf[..], counts, displs);
    world.world.all_gather_varcount_into(x, &mut partition);
    recv_buf
}

/// The root-driven scatter-v small-message path. Non-root ranks don't know
/// their own share's length ahead of time, so a fixed-size scatter of the
/// per-rank counts runs first to size each receive buffer.
fn small_scatterv(world: &MpiWorld, root: usize, parts: Option<&[Vec<u8>]>) -> Vec<u8> {
    use mpi::datatype::Partition;
    use mpi::traits::{Communicator, Root};
    let root_process = world.world.process_at_rank(root as i32);

    let mut my_count = 0i32;
    if world.rank() == root {
        let counts: Vec<i32> = parts
            .expect("scatterv root must supply parts")
            .iter()
            .map(|v| v.len() as i32)
            .collect();
        root_process.scatter_into_root(&counts[..], &mut my_count);

        let displs = prefix_displs(&counts);
        let send_buf: Vec<u8> = parts.unwrap().concat();
        let partition = Partition::new(&send_buf[..], counts, displs);
        let mut recv_buf = vec![0u8; my_count as usize];
        root_process.scatter_varcount_into_root(&partition, &mut recv_buf[..]);
        recv_buf
    } else {
        root_process.scatter_into(&mut my_count);
        let mut recv_buf = vec![0u8; my_count as usize];
        root_process.scatter_varcount_into(&mut recv_buf[..]);
        recv_buf
    }
}

/// The root-driven gather-v small-message path. Root doesn't know each
/// rank's contribution length ahead of time, so a fixed-size gather of the
/// per-rank lengths runs first to size root's receive buffer.
fn small_gatherv(world: &MpiWorld, root: usize, x: &[u8]) -> Option<Vec<Vec<u8>>> {
    use mpi::datatype::PartitionMut;
    use mpi::traits::{Communicator, Root};
    let p = world.size();
    let root_process = world.world.process_at_rank(root as i32);
    let my_len = x.len() as i32;

    if world.rank() == root {
        let mut counts = vec![0i32; p];
        root_process.gather_into_root(&my_len, &mut counts[..]);
        let displs = prefix_displs(&counts);
        let total: usize = counts.iter().map(|&c| c as usize).sum();
        let mut recv_buf = vec![0u8; total];
        let mut partition = PartitionMut::new(&mut recv_buf[..], counts.clone(), displs.clone());
        root_process.gather_varcount_into_root(x, &mut partition);
        Some(
            (0..p)
                .map(|r| {
                    let start = displs[r] as usize;
                    let len = counts[r] as usize;
                    recv_buf[start..start + len].to_vec()
                })
                .collect(),
        )
    } else {
        root_process.gather_into(&my_len);
        root_process.gather_varcount_into(x);
        None
    }
}

/// Exclusive prefix sum of `counts`, the displacement array every varcount
/// collective needs alongside its counts array.
fn prefix_displs(counts: &[i32]) -> Vec<i32> {
    let mut displs = vec![0i32; counts.len()];
    for i in 1..counts.len() {
        displs[i] = displs[i - 1] + counts[i - 1];
    }
    displs
}

/////////////////////////////////////////////// LocalComm //////////////////////////////////////////

/// A P=1 in-process [Collective]. Every collective degenerates to the
/// identity, matching §8's boundary behaviour for P=1 exactly -- not as a
/// special case in the algorithms, but because that's what these
/// definitions reduce to when there is only one participant.
#[derive(Clone, Copy, Default)]
pub struct LocalComm;

impl Collective for LocalComm {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn barrier(&self) {}

    fn ex_prefix_sum(&self, _x: u64) -> u64 {
        0
    }

    fn allreduce_sum(&self, x: u64) -> u64 {
        x
    }

    fn allreduce_max(&self, x: u64) -> u64 {
        x
    }

    fn allreduce_min(&self, x: u64) -> u64 {
        x
    }

    fn allreduce_and(&self, x: bool) -> bool {
        x
    }

    fn allreduce_sum_vec(&self, x: &[u64]) -> Vec<u64> {
        x.to_vec()
    }

    fn allgather(&self, x: u64) -> Vec<u64> {
        vec![x]
    }

    fn allgatherv(&self, x: &[u8]) -> Vec<u8> {
        x.to_vec()
    }

    fn alltoallv(&self, parts: &[Vec<u8>]) -> Vec<Vec<u8>> {
        assert_eq!(parts.len(), 1);
        parts.to_vec()
    }

    fn shift_left(&self, _x: &[u8]) -> Vec<u8> {
        Vec::new()
    }

    fn shift_right(&self, _x: &[u8]) -> Vec<u8> {
        Vec::new()
    }

    fn scatterv(&self, root: usize, parts: Option<&[Vec<u8>]>) -> Vec<u8> {
        assert_eq!(root, 0);
        parts.expect("LocalComm::scatterv requires parts on its sole rank")[0].clone()
    }

    fn gatherv(&self, root: usize, x: &[u8]) -> Option<Vec<Vec<u8>>> {
        assert_eq!(root, 0);
        Some(vec![x.to_vec()])
    }
}

/// Rank 0's single stdout result line (§6): `algo, time_ms, input, size,
/// threads, memory_max, memory_total` as `key=value` pairs.
pub fn print_result_line<C: Collective>(
    comm: &C,
    algo: &str,
    time_ms: u128,
    input: &str,
    size: u64,
    memory_max: u64,
    memory_total: u64,
) {
    if comm.rank() == 0 {
        let line = format!(
            "algo={algo} time_ms={time_ms} input={input} size={size} threads={} memory_max={memory_max} memory_total={memory_total}",
            comm.size(),
        );
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{line}");
    }
}
