use crate::error;

/// The result of partitioning a slice into fixed-size chunks.
///
/// The chunks borrow from the original slice. Concatenating them in order
/// gives back the original slice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkResult<'a, T> {
    chunks: Vec<&'a [T]>,
    chunk_size: usize,
    total: usize,
    remainder: usize,
}

impl<'a, T> ChunkResult<'a, T> {
    /// The chunks, each holding at most `chunk_size` elements.
    pub fn chunks(&self) -> &[&'a [T]] {
        &self.chunks
    }

    /// The requested chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The number of elements in the original slice.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The length of the last chunk if it is short, otherwise 0.
    pub fn remainder(&self) -> usize {
        self.remainder
    }

    /// The number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a [T]> {
        self.chunks.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        self.chunks.iter().copied()
    }

    pub fn into_chunks(self) -> Vec<&'a [T]> {
        self.chunks
    }
}

impl<'a, T> IntoIterator for ChunkResult<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::vec::IntoIter<&'a [T]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'r, 'a, T> IntoIterator for &'r ChunkResult<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::iter::Copied<std::slice::Iter<'r, &'a [T]>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter().copied()
    }
}

/// Partition `seq` into chunks of at most `size` elements.
///
/// All chunks but the last hold exactly `size` elements; the last one holds
/// whatever is left. An empty slice gives no chunks at all.
///
/// A `size` of 0 is rejected with [`crate::Error::InvalidArgument`].
pub fn chunk<T>(seq: &[T], size: usize) -> error::Result<ChunkResult<'_, T>> {
    if size == 0 {
        tracing::debug!(size, "rejecting chunk size");
        return Err(error::Error::InvalidArgument(size));
    }
    Ok(ChunkResult {
        chunks: seq.chunks(size).collect(),
        chunk_size: size,
        total: seq.len(),
        remainder: seq.len() % size,
    })
}
