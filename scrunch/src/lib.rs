use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::num::TryFromIntError;

use buffertk::Unpackable;
use prototk::FieldNumber;

pub mod binary_search;
pub mod bit_array;
pub mod bit_vector;
pub mod builder;
pub mod encoder;
pub mod isa;
pub mod psi;
pub mod sa;
pub mod sais;
pub mod sampled;
pub mod sigma;
pub mod wavelet_tree;

use crate::bit_vector::BitVector;
use crate::builder::{Builder, Helper};

/////////////////////////////////////////////// Error //////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    IntoUsize,
    Unparseable,
    TextTooLong,
    BadSearch,
    BadTextOffset,
    BadRecordOffset,
    CouldNotConstructBitVector,
    InvalidEncoder,
    InvalidBitVector,
    InvalidWaveletTree,
    InvalidSigma,
    InvalidSuffixArray,
    InvalidInverseSuffixArray,
    InvalidPsi,
    InvalidDocument,
    BadRank(usize),
    BadSelect(usize),
    BadIndex(usize),
    LogicError(&'static str),
}

impl From<TryFromIntError> for Error {
    fn from(_: TryFromIntError) -> Self {
        Self::IntoUsize
    }
}

////////////////////////////////////////////// Offset //////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextOffset(pub usize);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecordOffset(pub usize);

///////////////////////////////////////////// Document /////////////////////////////////////////////

pub trait Document {
    type Search: Iterator<Item = TextOffset>;

    fn construct<H: Helper>(
        text: Vec<u32>,
        record_boundaries: Vec<usize>,
        builder: &mut Builder<H>,
    ) -> Result<(), Error>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(&self) -> usize;

    fn search(&self, needle: &[u32]) -> Result<Self::Search, Error>;
    fn count(&self, needle: &[u32]) -> Result<usize, Error>;

    fn lookup(&self, offset: TextOffset) -> Result<RecordOffset, Error>;
    fn retrieve(&self, record: RecordOffset) -> Result<Vec<u32>, Error>;
    fn offset_of(&self, record: RecordOffset) -> Result<TextOffset, Error>;
}

/////////////////////////////////////// ReferenceDocumentStub //////////////////////////////////////

#[derive(Clone, Debug, Default, prototk_derive::Message)]
struct ReferenceDocumentStub {
    #[prototk(1, uint32)]
    text: Vec<u32>,
    #[prototk(2, uint64)]
    record_boundaries: Vec<u64>,
}

impl From<ReferenceDocument> for ReferenceDocumentStub {
    fn from(rd: ReferenceDocument) -> Self {
        let ReferenceDocument {
            text,
            record_boundaries,
        } = rd;
        let record_boundaries = record_boundaries.into_iter().map(|x| x as u64).collect();
        Self {
            text,
            record_boundaries,
        }
    }
}

impl TryFrom<ReferenceDocumentStub> for ReferenceDocument {
    type Error = Error;

    fn try_from(rds: ReferenceDocumentStub) -> Result<Self, Self::Error> {
        let ReferenceDocumentStub {
            text,
            record_boundaries,
        } = rds;
        if record_boundaries.iter().any(|x| *x > usize::MAX as u64) {
            return Err(Error::IntoUsize);
        }
        let record_boundaries = record_boundaries.into_iter().map(|x| x as usize).collect();
        Ok(ReferenceDocument {
            text,
            record_boundaries,
        })
    }
}

///////////////////////////////////////// ReferenceDocument ////////////////////////////////////////

pub struct ReferenceDocument {
    text: Vec<u32>,
    record_boundaries: Vec<usize>,
}

impl Document for ReferenceDocument {
    type Search = std::vec::IntoIter<TextOffset>;

    fn construct<H: Helper>(
        text: Vec<u32>,
        record_boundaries: Vec<usize>,
        builder: &mut Builder<H>,
    ) -> Result<(), Error> {
        check_record_boundaries(&text, &record_boundaries)?;
        builder.append_vec_u32(FieldNumber::must(1), &text);
        builder.append_vec_usize(FieldNumber::must(2), &record_boundaries);
        Ok(())
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn records(&self) -> usize {
        self.record_boundaries.len()
    }

    fn search(&self, needle: &[u32]) -> Result<Self::Search, Error> {
        let offsets: Vec<TextOffset> = if needle.is_empty() {
            (0..self.len()).map(TextOffset).collect()
        } else {
            let mut offsets = vec![];
            for (idx, candidate) in self.text.windows(needle.len()).enumerate() {
                if candidate == needle {
                    offsets.push(TextOffset(idx));
                }
            }
            offsets
        };
        Ok(offsets.into_iter())
    }

    fn count(&self, needle: &[u32]) -> Result<usize, Error> {
        Ok(self.search(needle)?.count())
    }

    fn lookup(&self, offset: TextOffset) -> Result<RecordOffset, Error> {
        let partition_point = self.record_boundaries.partition_point(|b| *b < offset.0);
        if partition_point >= self.record_boundaries.len() && !self.record_boundaries.is_empty() {
            Ok(RecordOffset(self.record_boundaries.len() - 1))
        } else if partition_point >= self.record_boundaries.len() {
            Err(Error::BadTextOffset)
        } else if self.record_boundaries[partition_point] <= offset.0 {
            Ok(RecordOffset(partition_point))
        } else {
            Ok(RecordOffset(partition_point - 1))
        }
    }

    fn retrieve(&self, record: RecordOffset) -> Result<Vec<u32>, Error> {
        if record.0 >= self.record_boundaries.len() {
            return Err(Error::BadRecordOffset);
        }
        let record_start = self.record_boundaries[record.0];
        let record_limit = if record.0 + 1 >= self.record_boundaries.len() {
            self.text.len()
        } else {
            self.record_boundaries[record.0 + 1]
        };
        Ok(Vec::from(&self.text[record_start..record_limit]))
    }

    fn offset_of(&self, record: RecordOffset) -> Result<TextOffset, Error> {
        if record.0 >= self.record_boundaries.len() {
            return Err(Error::BadRecordOffset);
        }
        Ok(TextOffset(self.record_boundaries[record.0]))
    }
}

impl<'a> Unpackable<'a> for ReferenceDocument {
    type Error = Error;

    fn unpack<'b: 'a>(buf: &'b [u8]) -> Result<(Self, &'b [u8]), Self::Error> {
        let (rds, buf) = <ReferenceDocumentStub as Unpackable>::unpack(buf)
            .map_err(|_| Error::InvalidDocument)?;
        Ok((rds.try_into()?, buf))
    }
}

////////////////////////////////////////// PsiDocumentStub /////////////////////////////////////////

#[derive(Clone, Debug, Default, prototk_derive::Message)]
struct PsiDocumentStub<'a> {
    #[prototk(1, bytes)]
    record_boundaries: &'a [u8],
    #[prototk(2, bytes)]
    sigma: &'a [u8],
    #[prototk(3, bytes)]
    sa: &'a [u8],
    #[prototk(4, bytes)]
    isa: &'a [u8],
    #[prototk(5, bytes)]
    psi: &'a [u8],
}

//////////////////////////////////////////// PsiDocument ///////////////////////////////////////////

pub struct PsiDocument<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    // Record boundaries, where select(i) returns the offset of the i'th record in text.
    record_boundaries: bit_vector::sparse::BitVector<'a>,

    // Translate indices to characters.
    sigma: sigma::Sigma<'a>,

    // Sorted array of all suffixes of the original text.
    //
    // Each entry sa[i] in the suffix array indicates the offset in the original text at which the
    // i'th prefix begins.  Compactly: i<j => text[sa[i]..] < text[sa[j]..].
    sa: SA,

    // Inverse of `sa`.  This maps a location in the text to its location in the suffix array.
    isa: ISA,

    // Psi is the successor function applied to the suffix array.
    // Using psi, you can traverse the suffix array because sa, isa, psi are all related:
    //
    // psi[idx] = isa[sa[idx] + 1]
    //
    // See [DGA] for a more thorough understanding.
    psi: PSI,
}

impl<'a, SA, ISA, PSI> PsiDocument<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    fn backwards_search(&self, needle: &[u32]) -> Result<(usize, usize), Error> {
        let mut needle = needle.iter().rev();
        let mut range = if let Some(t) = needle.next() {
            self.sigma.sa_range_for(*t)?
        } else {
            // If there's no needle, we should return everything except the artificial end marker.
            return Ok((1usize, self.psi.len() - 1));
        };
        // This performs backwards search.
        for t in needle {
            range = self
                .psi
                .constrain(&self.sigma, self.sigma.sa_range_for(*t)?, range)?;
        }
        Ok(range)
    }
}

impl<'a, SA, ISA, PSI> Document for PsiDocument<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    type Search = std::vec::IntoIter<TextOffset>;

    fn construct<H: Helper>(
        text: Vec<u32>,
        record_boundaries: Vec<usize>,
        builder: &mut Builder<H>,
    ) -> Result<(), Error> {
        check_record_boundaries(&text, &record_boundaries)?;
        // compute the record boundaries
        let sparse_boundaries: Vec<usize> = record_boundaries[1..].iter().map(|rb| rb - 1).collect();
        bit_vector::sparse::BitVector::from_indices(
            64,
            text.len(),
            &sparse_boundaries,
            &mut builder.sub(FieldNumber::must(1)),
        )
        .ok_or(Error::InvalidBitVector)?;
        // compute sigma
        let mut sigma_builder = builder.sub(FieldNumber::must(2));
        sigma::Sigma::construct(text.iter().copied(), &mut sigma_builder)?;
        let sigma_buf = sigma_builder.relative_bytes(0).to_vec();
        let sigma = sigma::Sigma::unpack(&sigma_buf)?.0;
        drop(sigma_builder);
        // convert the text into a compacted alphabet
        let mut s = Vec::with_capacity(text.len() + 1);
        for t in text.iter().copied() {
            s.push(sigma.char_to_sigma(t).ok_or(Error::LogicError(
                "freshly constructed sigma cannot translate text",
            ))?);
        }
        s.push(0);
        // compute the suffix array
        let mut sa = vec![0usize; s.len()];
        sais::sais(&sigma, &s, &mut sa)?;
        // compute the inverse suffix array
        let isa = inverse(&sa);
        // compute the successor array, psi
        let psi = psi::compute(&isa);
        // Now build them.
        // TODO(rescrv): parameterize
        SA::construct(3, &sa, &mut builder.sub(FieldNumber::must(3)))?;
        ISA::construct(&isa, &record_boundaries, &mut builder.sub(FieldNumber::must(4)))?;
        PSI::construct(&sigma, &psi, &mut builder.sub(FieldNumber::must(5)))?;
        Ok(())
    }

    fn len(&self) -> usize {
        // psi always includes an implicit end character that we strip
        self.psi.len() - 1
    }

    fn records(&self) -> usize {
        // TODO(rescrv): better error handling; requires modifying Document trait.
        self.record_boundaries
            .rank(self.record_boundaries.len())
            .unwrap_or(0)
            + 1
    }

    fn search(&self, needle: &[u32]) -> Result<Self::Search, Error> {
        let range = self.backwards_search(needle)?;
        if range.0 > range.1 {
            Ok(vec![].into_iter())
        } else {
            let mut result = Vec::with_capacity(range.1 - range.0 + 1);
            for offset in range.0..=range.1 {
                result.push(TextOffset(self.sa.lookup(&self.sigma, &self.psi, offset)?));
            }
            result.sort();
            Ok(result.into_iter())
        }
    }

    fn count(&self, needle: &[u32]) -> Result<usize, Error> {
        let range = self.backwards_search(needle)?;
        if range.0 > range.1 {
            Ok(0)
        } else {
            Ok(range.1 - range.0 + 1)
        }
    }

    fn lookup(&self, offset: TextOffset) -> Result<RecordOffset, Error> {
        Ok(RecordOffset(
            self.record_boundaries
                .rank(offset.0)
                .ok_or(Error::BadRank(offset.0))?,
        ))
    }

    fn offset_of(&self, record: RecordOffset) -> Result<TextOffset, Error> {
        Ok(TextOffset(
            self.record_boundaries
                .select(record.0)
                .ok_or(Error::BadSelect(record.0))?,
        ))
    }

    fn retrieve(&self, record: RecordOffset) -> Result<Vec<u32>, Error> {
        let start: usize = self
            .record_boundaries
            .select(record.0)
            .ok_or(Error::BadSelect(record.0))?;
        // TODO(rescrv):  This treats an error as if it's end.  Need to change the bit_vector API.
        let limit: usize = self
            .record_boundaries
            .select(record.0 + 1)
            .unwrap_or(self.len());
        if start > limit {
            return Err(Error::BadRecordOffset);
        }
        let mut idx = self.isa.lookup(start)?;
        let mut result = Vec::with_capacity(limit - start);
        for _ in start..limit {
            result.push(
                self.sigma
                    .sa_index_to_t(idx)
                    .ok_or(Error::InvalidSigma)?,
            );
            idx = self.psi.lookup(&self.sigma, idx)?;
        }
        Ok(result)
    }
}

impl<'a, SA, ISA, PSI> Unpackable<'a> for PsiDocument<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray + Unpackable<'a>,
    ISA: isa::InverseSuffixArray + Unpackable<'a>,
    PSI: psi::Psi + Unpackable<'a>,
    Error: From<<SA as Unpackable<'a>>::Error> + From<<ISA as Unpackable<'a>>::Error> + From<<PSI as Unpackable<'a>>::Error>,
{
    type Error = Error;

    fn unpack<'b: 'a>(buf: &'b [u8]) -> Result<(Self, &'b [u8]), Self::Error> {
        let (stub, buf) = <PsiDocumentStub as Unpackable>::unpack(buf)
            .map_err(|_| Error::InvalidBitVector)?;
        let record_boundaries = bit_vector::sparse::BitVector::new(stub.record_boundaries)
            .ok_or(Error::InvalidBitVector)?;
        let sigma = sigma::Sigma::unpack(stub.sigma)?.0;
        let sa = SA::unpack(stub.sa)?.0;
        let isa = ISA::unpack(stub.isa)?.0;
        let psi = PSI::unpack(stub.psi)?.0;
        Ok((PsiDocument {
            record_boundaries,
            sigma,
            sa,
            isa,
            psi,
        }, buf))
    }
}

pub type CompressedDocument<'a> = PsiDocument::<'a, sa::SampledSuffixArray<'a>, isa::SampledInverseSuffixArray<'a>, psi::wavelet_tree::WaveletTreePsi<'a, wavelet_tree::prefix::WaveletTree<'a, encoder::HuffmanEncoder>>>;

///////////////////////////////////////////// Correlate ////////////////////////////////////////////

#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Exemplar {
    count: usize,
    needle: Vec<u32>,
}

impl Exemplar {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn text(&self) -> &[u32] {
        &self.needle
    }
}

impl From<CorrelateState> for Exemplar {
    fn from(mut cs: CorrelateState) -> Self {
        cs.needle.reverse();
        Self {
            count: cs.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add),
            needle: cs.needle,
        }
    }
}

impl From<ExemplarState> for Exemplar {
    fn from(mut es: ExemplarState) -> Self {
        es.needle.reverse();
        Self {
            count: es.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add),
            needle: es.needle,
        }
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
struct CorrelateDocState {
    numer: usize,
    range: (usize, usize),
}

#[derive(Debug, Default, Eq, PartialEq)]
struct CorrelateState {
    terminal: u32,
    needle: Vec<u32>,
    docs: HashMap<usize, CorrelateDocState>,
}

impl Ord for CorrelateState {
    fn cmp(&self, other: &CorrelateState) -> Ordering {
        if self == other {
            Ordering::Equal
        } else {
            let numer_lhs = self.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add);
            let numer_rhs = other.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add);
            let denom_lhs = self.docs.iter().map(|(_, d)| d.range.1 + 1 - d.range.0).fold(0, usize::saturating_add);
            let denom_rhs = other.docs.iter().map(|(_, d)| d.range.1 + 1 - d.range.0).fold(0, usize::saturating_add);
            if denom_lhs == 0 && denom_rhs == 0 {
                Ordering::Equal
            } else if denom_lhs == 0 {
                Ordering::Less
            } else if denom_rhs == 0 {
                Ordering::Greater
            } else {
                (numer_lhs as f64 / denom_lhs as f64).total_cmp(&(numer_rhs as f64 / denom_rhs as f64))
            }
        }
    }
}

impl PartialOrd for CorrelateState {
    fn partial_cmp(&self, other: &CorrelateState) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn correlate<'a, SA, ISA, PSI, F>(docs: &'a [&'a PsiDocument<'a, SA, ISA, PSI>], boundaries: &[(u32, u32)], select: F) -> Correlate<'a, SA, ISA, PSI, F>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
    F: Fn(usize, RecordOffset) -> bool,
{
    let mut heap = BinaryHeap::new();
    for boundary in boundaries.iter() {
        let mut state = CorrelateState {
            // the starting boundary because we do backwards search.
            terminal: boundary.0,
            needle: vec![boundary.1],
            docs: HashMap::new(),
        };
        for (idx, doc) in docs.iter().enumerate() {
            let Ok(range) = doc.sigma.sa_range_for(boundary.1) else {
                continue;
            };
            if range.0 > range.1 {
                continue;
            }
            let mut numer = 0;
            for offset in range.0..=range.1 {
                let Ok(text_offset) = doc.sa.lookup(&doc.sigma, &doc.psi, offset) else {
                    // TODO(rescrv): Metrics because this should never happen.
                    continue;
                };
                let Ok(record_offset) = doc.lookup(TextOffset(text_offset)) else {
                    // TODO(rescrv): Metrics because this should never happen.
                    continue;
                };
                if select(idx, record_offset) {
                    numer += 1;
                }
            }
            if numer > 0 {
                state.docs.insert(idx, CorrelateDocState {
                    numer,
                    range,
                });
            }
        }
        if !state.docs.is_empty() {
            heap.push(state);
        }
    }
    Correlate {
        docs,
        heap,
        select,
    }
}

pub struct Correlate<'a, SA, ISA, PSI, F>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
    F: Fn(usize, RecordOffset) -> bool,
{
    docs: &'a [&'a PsiDocument<'a, SA, ISA, PSI>],
    heap: BinaryHeap<CorrelateState>,
    select: F,
}

impl<'a, SA, ISA, PSI, F> Iterator for Correlate<'a, SA, ISA, PSI, F>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
    F: Fn(usize, RecordOffset) -> bool,
{
    type Item = Exemplar;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(correlate) = self.heap.pop() {
            if correlate.terminal == correlate.needle[correlate.needle.len() - 1] {
                return Some(Exemplar::from(correlate));
            }
            let mut new_correlates: HashMap<u32, CorrelateState> = HashMap::new();
            for (idx, doc_state) in correlate.docs.iter() {
                let doc = &self.docs[*idx];
                for i in 1..=doc.sigma.K() as u32 {
                    let Some(t) = doc.sigma.sigma_to_char(i) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    let new_correlate = new_correlates.entry(t).or_insert_with(|| {
                        let mut needle = correlate.needle.clone();
                        needle.push(t);
                        CorrelateState {
                            terminal: correlate.terminal,
                            needle,
                            docs: HashMap::new(),
                        }
                    });
                    let Ok(range) = doc.sigma.sa_range_for_sigma(i) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    if range.0 > range.1 {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    }
                    let Ok(range) = doc
                        .psi
                        .constrain(&doc.sigma, range, doc_state.range) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    if range.0 > range.1 {
                        continue;
                    }
                    let mut numer = 0;
                    for offset in range.0..=range.1 {
                        let Ok(text_offset) = doc.sa.lookup(&doc.sigma, &doc.psi, offset) else {
                            // TODO(rescrv): Metrics because this should never happen.
                            continue;
                        };
                        let Ok(record_offset) = doc.lookup(TextOffset(text_offset)) else {
                            // TODO(rescrv): Metrics because this should never happen.
                            continue;
                        };
                        if (self.select)(*idx, record_offset) {
                            numer += 1;
                        }
                    }
                    if numer > 0 {
                        new_correlate.docs.insert(*idx, CorrelateDocState {
                            numer,
                            range,
                        });
                    }
                }
            }
            for (_, new_correlate) in new_correlates {
                if !new_correlate.docs.is_empty() {
                    self.heap.push(new_correlate);
                }
            }
        }
        None
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
struct ExemplarState {
    terminal: u32,
    needle: Vec<u32>,
    docs: HashMap<usize, CorrelateDocState>,
}

impl Ord for ExemplarState {
    fn cmp(&self, other: &ExemplarState) -> Ordering {
        if self == other {
            Ordering::Equal
        } else {
            let numer_lhs = self.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add);
            let numer_rhs = other.docs.iter().map(|(_, d)| d.numer).fold(0, usize::saturating_add);
            numer_lhs.cmp(&numer_rhs)
        }
    }
}

impl PartialOrd for ExemplarState {
    fn partial_cmp(&self, other: &ExemplarState) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn exemplars<'a, SA, ISA, PSI>(docs: &'a [&'a PsiDocument<'a, SA, ISA, PSI>], boundaries: &[(u32, u32)]) -> Exemplars<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    let mut heap = BinaryHeap::new();
    for boundary in boundaries.iter() {
        let mut state = ExemplarState {
            // the starting boundary because we do backwards search.
            terminal: boundary.0,
            needle: vec![boundary.1],
            docs: HashMap::new(),
        };
        for (idx, doc) in docs.iter().enumerate() {
            let Ok(range) = doc.sigma.sa_range_for(boundary.1) else {
                continue;
            };
            if range.0 > range.1 {
                continue;
            }
            let numer = range.1 - range.0 + 1;
            state.docs.insert(idx, CorrelateDocState {
                numer,
                range,
            });
        }
        if !state.docs.is_empty() {
            heap.push(state);
        }
    }
    Exemplars {
        docs,
        heap,
    }
}

pub struct Exemplars<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    docs: &'a [&'a PsiDocument<'a, SA, ISA, PSI>],
    heap: BinaryHeap<ExemplarState>,
}

impl<'a, SA, ISA, PSI> Iterator for Exemplars<'a, SA, ISA, PSI>
where
    SA: sa::SuffixArray,
    ISA: isa::InverseSuffixArray,
    PSI: psi::Psi,
{
    type Item = Exemplar;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(correlate) = self.heap.pop() {
            if correlate.terminal == correlate.needle[correlate.needle.len() - 1] {
                return Some(Exemplar::from(correlate));
            }
            let mut new_correlates: HashMap<u32, ExemplarState> = HashMap::new();
            for (idx, doc_state) in correlate.docs.iter() {
                let doc = &self.docs[*idx];
                for i in 1..=doc.sigma.K() as u32 {
                    let Some(t) = doc.sigma.sigma_to_char(i) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    let new_correlate = new_correlates.entry(t).or_insert_with(|| {
                        let mut needle = correlate.needle.clone();
                        needle.push(t);
                        ExemplarState {
                            terminal: correlate.terminal,
                            needle,
                            docs: HashMap::new(),
                        }
                    });
                    let Ok(range) = doc.sigma.sa_range_for_sigma(i) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    if range.0 > range.1 {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    }
                    let Ok(range) = doc
                        .psi
                        .constrain(&doc.sigma, range, doc_state.range) else {
                        // TODO(rescrv): Metrics because this should never happen.
                        continue;
                    };
                    if range.0 > range.1 {
                        continue;
                    }
                    let numer = range.1 - range.0 + 1;
                    new_correlate.docs.insert(*idx, CorrelateDocState {
                        numer,
                        range,
                    });
                }
            }
            for (_, new_correlate) in new_correlates {
                if !new_correlate.docs.is_empty() {
                    self.heap.push(new_correlate);
                }
            }
        }
        None
    }
}

////////////////////////////////////////////// inverse /////////////////////////////////////////////

fn inverse(x: &[usize]) -> Vec<usize> {
    let mut ix = vec![0usize; x.len()];
    for i in 0..x.len() {
        ix[x[i]] = i
    }
    ix
}

////////////////////////////////////// check_record_boundaries /////////////////////////////////////

fn check_record_boundaries(text: &[u32], record_boundaries: &[usize]) -> Result<(), Error> {
    if record_boundaries.is_empty() {
        return Err(Error::BadRecordOffset);
    }
    for (lhs, rhs) in std::iter::zip(record_boundaries.iter(), record_boundaries[1..].iter()) {
        if lhs >= rhs {
            return Err(Error::BadRecordOffset);
        }
    }
    if record_boundaries[0] != 0 {
        return Err(Error::BadRecordOffset);
    }
    if record_boundaries[record_boundaries.len() - 1] >= text.len() {
        return Err(Error::BadRecordOffset);
    }
    Ok(())
}

///////////////////////////////////////////// test_util ////////////////////////////////////////////


#[cfg(test)]
mod tests {
    use crate::sa::SuffixArray;
    use crate::isa::InverseSuffixArray;

    use super::psi::Psi;
    use super::test_util::*;
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn u32_as_usize() {
        assert!(u32::BITS <= usize::BITS);
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn usize_as_u64() {
        assert!(usize::BITS <= u64::BITS);
    }

    #[test]
    fn inverse() {
        let x = &[8, 6, 9, 5, 0, 3, 1, 2, 7, 4];
        let ix = &[4, 6, 7, 5, 9, 3, 1, 8, 0, 2];
        let returned: &[usize] = &super::inverse(x);
        assert_eq!(ix, returned);
        let returned: &[usize] = &super::inverse(returned);
        assert_eq!(x, returned);
    }

    fn check_string(t: &TestCase) {
        let sigma = t.sigma();
        let sigma = sigma::Sigma::unpack(&sigma).expect("test should unpack").0;
        let mut s: Vec<u32> = t.text.chars().map(|x| sigma.char_to_sigma(x as u32).unwrap()).collect();
        s.push(0);
        assert_eq!(t.S, s);
    }

    test_cases_for! {string, super::check_string}

    fn check_isa(t: &TestCase) {
        let returned = super::inverse(t.SA);
        assert_eq_with_ctx!(t.ISA, returned);
    }

    test_cases_for! {isa, super::check_isa}

    fn check_unpack_psi_document(t: &TestCase) {
        let text: Vec<u32> = t.text.chars().map(|c| c as u32).collect();
        let record_boundaries = vec![0usize];
        let mut buf = Vec::new();
        let mut builder = Builder::new(&mut buf);
        type Document<'a> = super::PsiDocument::<'a, super::sa::ReferenceSuffixArray, super::isa::ReferenceInverseSuffixArray, super::psi::ReferencePsi>;
        Document::construct(text, record_boundaries, &mut builder)
            .expect("test case should index");
        drop(builder);
        let doc = Document::unpack(&buf).expect("document should unpack").0;

        for (idx, sa) in t.SA.iter().enumerate() {
            assert_eq_with_ctx!(*sa, doc.sa.lookup(&doc.sigma, &doc.psi, idx).unwrap(), idx);
        }

        for (idx, isa) in t.ISA.iter().enumerate() {
            assert_eq_with_ctx!(*isa, doc.isa.lookup(idx).unwrap(), idx);
        }

        assert_eq!(t.PSI.len(), doc.psi.len());
        for (idx, psi) in t.PSI.iter().enumerate() {
            assert_eq_with_ctx!(*psi, doc.psi.lookup(&doc.sigma, idx).unwrap(), idx);
        }
    }

    test_cases_for!{unpack_psi_document, super::check_unpack_psi_document}

    search_cases_for! {reference, crate::ReferenceDocument}
    search_cases_for! {psi_with_all_reference, crate::PsiDocument::<crate::sa::ReferenceSuffixArray, crate::isa::ReferenceInverseSuffixArray, psi::ReferencePsi>}
    search_cases_for! {psi_with_wavelet_psi, crate::PsiDocument::<crate::sa::ReferenceSuffixArray, crate::isa::ReferenceInverseSuffixArray, psi::wavelet_tree::WaveletTreePsi<wavelet_tree::ReferenceWaveletTree>>}
    search_cases_for! {compressed_document, crate::CompressedDocument}
}
