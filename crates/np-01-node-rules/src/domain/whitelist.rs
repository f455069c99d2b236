//! The enode whitelist: a circular doubly-linked collection keyed by derived
//! enode key.
//!
//! Links are expressed as keys into the backing map (arena pattern) rather
//! than pointers, so there are no ownership cycles. The structure maintains
//! these invariants after every mutation:
//!
//! - keys are unique; a duplicate add is rejected, never overwritten;
//! - a non-empty list forms exactly one cycle: following `next` from any
//!   entry for `len()` steps returns to it, and `prev` is the exact inverse;
//! - a single entry self-loops (`prev == next == key`);
//! - an empty list has no head and no entries.

use std::collections::HashMap;

use crate::domain::enode::{EnodeId, EnodeKey};

/// A stored whitelist record.
///
/// Entries are owned exclusively by the [`Whitelist`]; callers hold keys.
/// An entry's links are rewritten only when an adjacent entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnodeEntry {
    /// Key of the successor entry in the cycle.
    pub next: EnodeKey,
    /// Key of the predecessor entry in the cycle.
    pub prev: EnodeKey,
    /// The whitelisted identity.
    pub enode: EnodeId,
}

/// The whitelist store.
///
/// Constructed empty; the host decides where it lives and how access is
/// serialized. Every mutation either applies fully or not at all.
#[derive(Debug, Default)]
pub struct Whitelist {
    entries: HashMap<EnodeKey, EnodeEntry>,
    head: Option<EnodeKey>,
}

impl Whitelist {
    /// Create an empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of whitelisted enodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the whitelist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the current head (anchor) entry, if any.
    pub fn head_key(&self) -> Option<EnodeKey> {
        self.head
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &EnodeKey) -> Option<&EnodeEntry> {
        self.entries.get(key)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &EnodeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Add an enode to the whitelist.
    ///
    /// Returns `false` without touching the structure when the derived key is
    /// already present, so repeated adds of the same identity are idempotent.
    /// A new entry is inserted as the head's predecessor (the tail position);
    /// the head itself never moves on insertion.
    pub fn add(&mut self, enode: EnodeId) -> bool {
        let key = enode.compute_key();
        if self.entries.contains_key(&key) {
            return false;
        }

        match self.head {
            None => {
                // Sole entry: self-loop and become the head.
                self.entries.insert(
                    key,
                    EnodeEntry {
                        next: key,
                        prev: key,
                        enode,
                    },
                );
                self.head = Some(key);
            }
            Some(head) => {
                let tail = self.entries[&head].prev;
                self.entries.insert(
                    key,
                    EnodeEntry {
                        next: head,
                        prev: tail,
                        enode,
                    },
                );
                // When the list had one entry, tail == head and both updates
                // land on the same record.
                if let Some(tail_entry) = self.entries.get_mut(&tail) {
                    tail_entry.next = key;
                }
                if let Some(head_entry) = self.entries.get_mut(&head) {
                    head_entry.prev = key;
                }
            }
        }

        true
    }

    /// Remove an enode from the whitelist.
    ///
    /// Removing an identity that was never added is a silent no-op returning
    /// `false`, so idempotent cleanup never fails. Returns `true` when an
    /// entry was actually removed.
    pub fn remove(&mut self, enode: &EnodeId) -> bool {
        let key = enode.compute_key();
        let Some(removed) = self.entries.remove(&key) else {
            return false;
        };

        if self.entries.is_empty() {
            self.head = None;
            return true;
        }

        let EnodeEntry { next, prev, .. } = removed;
        if let Some(prev_entry) = self.entries.get_mut(&prev) {
            prev_entry.next = next;
        }
        if let Some(next_entry) = self.entries.get_mut(&next) {
            next_entry.prev = prev;
        }
        if self.head == Some(key) {
            self.head = Some(next);
        }

        true
    }

    /// Iterate over entries in cycle order, starting at the head.
    ///
    /// The traversal is bounded both by the entry count captured at creation
    /// and by the return to the starting key, so it terminates even if the
    /// list is mutated between constructions.
    pub fn iter(&self) -> WhitelistIter<'_> {
        WhitelistIter {
            list: self,
            cursor: self.head,
            start: self.head,
            remaining: self.entries.len(),
        }
    }
}

/// Lazy cycle-order traversal over a [`Whitelist`].
#[derive(Debug)]
pub struct WhitelistIter<'a> {
    list: &'a Whitelist,
    cursor: Option<EnodeKey>,
    start: Option<EnodeKey>,
    remaining: usize,
}

impl<'a> Iterator for WhitelistIter<'a> {
    type Item = (EnodeKey, &'a EnodeEntry);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.cursor?;
        let entry = self.list.entries.get(&key)?;

        self.remaining -= 1;
        self.cursor = if Some(entry.next) == self.start {
            None
        } else {
            Some(entry.next)
        };

        Some((key, entry))
    }
}
