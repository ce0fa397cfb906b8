//! Evidence table: clue id -> suspect, chained hashing over a fixed directory.
//!
//! New evidence is pushed onto the head of its bucket, and entries are never
//! deduplicated. A lookup returns the first match from the head, so the most
//! recent link for an id shadows older ones that stay in the chain.

use std::fmt;

use crate::error::{CaseError, Result};
use crate::text::{bounded, MAX_SUSPECT};

/// Bucket count used by a default case.
pub const DEFAULT_BUCKETS: usize = 10;

/// One link in a bucket chain.
pub struct Evidence {
    clue_id: i32,
    suspect: String,
    next: Option<Box<Evidence>>,
}

impl Evidence {
    pub fn clue_id(&self) -> i32 {
        self.clue_id
    }

    pub fn suspect(&self) -> &str {
        &self.suspect
    }

    pub fn next(&self) -> Option<&Evidence> {
        self.next.as_deref()
    }
}

impl fmt::Debug for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evidence")
            .field("clue_id", &self.clue_id)
            .field("suspect", &self.suspect)
            .finish()
    }
}

impl Drop for Evidence {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut entry) = next {
            next = entry.next.take();
        }
    }
}

pub struct EvidenceTable {
    buckets: Vec<Option<Box<Evidence>>>,
    count: usize,
}

impl EvidenceTable {
    /// Creates a table with `size` empty buckets.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CaseError::InvalidBucketCount);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(size)
            .map_err(|_| CaseError::OutOfMemory {
                what: "evidence bucket directory",
            })?;
        buckets.resize_with(size, || None);
        Ok(Self { buckets, count: 0 })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of entries, shadowed ones included.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bucket for `id`: the non-negative remainder of `id` by the bucket count,
    /// so negative ids land in range too (`-1` goes to the last bucket).
    pub fn bucket_of(&self, id: i32) -> usize {
        // Widen first: `i32::MIN % n + n` must not overflow.
        i64::from(id).rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Links `suspect` to clue `id` and returns the bucket it went into.
    pub fn insert(&mut self, id: i32, suspect: &str) -> Result<usize> {
        let suspect = bounded("suspect name", suspect, MAX_SUSPECT)?;
        let bucket = self.bucket_of(id);
        let head = &mut self.buckets[bucket];
        *head = Some(Box::new(Evidence {
            clue_id: id,
            suspect,
            next: head.take(),
        }));
        self.count += 1;
        Ok(bucket)
    }

    /// Suspect most recently linked to `id`, or `None` if there is none.
    pub fn lookup(&self, id: i32) -> Option<&str> {
        self.lookup_all(id).next()
    }

    /// Every suspect linked to `id`, most recent first.
    pub fn lookup_all(&self, id: i32) -> impl Iterator<Item = &str> + '_ {
        self.chain(self.bucket_of(id))
            .filter(move |e| e.clue_id == id)
            .map(Evidence::suspect)
    }

    /// Entries of one bucket from head to tail. Out-of-range buckets are empty.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            next: self.buckets.get(bucket).and_then(|head| head.as_deref()),
        }
    }

    /// All entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Evidence> + '_ {
        (0..self.buckets.len()).flat_map(move |b| self.chain(b))
    }
}

impl Default for EvidenceTable {
    fn default() -> Self {
        Self {
            buckets: std::iter::repeat_with(|| None).take(DEFAULT_BUCKETS).collect(),
            count: 0,
        }
    }
}

impl Clone for EvidenceTable {
    fn clone(&self) -> Self {
        let buckets = (0..self.buckets.len())
            .map(|b| {
                // Rebuild tail-first so the copy keeps the chain order.
                let entries: Vec<&Evidence> = self.chain(b).collect();
                entries.into_iter().rev().fold(None, |next, e| {
                    Some(Box::new(Evidence {
                        clue_id: e.clue_id,
                        suspect: e.suspect.clone(),
                        next,
                    }))
                })
            })
            .collect();
        Self {
            buckets,
            count: self.count,
        }
    }
}

impl fmt::Debug for EvidenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|e| (e.clue_id, e.suspect())))
            .finish()
    }
}

pub struct Chain<'a> {
    next: Option<&'a Evidence>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Evidence;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next();
        Some(entry)
    }
}
