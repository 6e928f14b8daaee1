// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when operating on a chunked sequence
///
/// Invariant breaches are not represented here: they indicate a library bug
/// and are caught by debug assertions instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Pop or peek on an empty sequence
    Empty,

    /// Index or split position past the end of the sequence
    OutOfRange,

    /// Bulk pop or peek asked for more elements than are stored
    ///
    /// Bulk removal is all-or-nothing; nothing is removed when this is
    /// returned.
    Underflow,

    /// Push into a chunk that already holds `K` elements
    ///
    /// Only surfaced by the chunk-level `try_push` operations; the sequence
    /// engine promotes full chunks into the spine instead.
    CapacityFull,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChunkedSeqError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Chunked sequence result
pub type Result<T> = std::result::Result<T, Error>;
