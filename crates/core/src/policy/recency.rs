//! Arena-backed recency list.
//!
//! Pages live in a slot vector; a hash index maps page ids to slots and the
//! slots are threaded into a doubly-linked list ordered from least to most
//! recently used. Freed slots are recycled through a free stack, so every
//! operation except the ordered walk is O(1) and no slot is ever moved.

use std::collections::HashMap;

use crate::common::{Page, PageId};

#[derive(Debug)]
struct Slot {
    page: Page,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Resident pages ordered LRU (head) to MRU (tail).
#[derive(Debug, Default)]
pub(crate) struct RecencyList {
    slots: Vec<Slot>,
    free: Vec<usize>,
    index: HashMap<PageId, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl RecencyList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub(crate) fn contains(&self, page_id: PageId) -> bool {
        self.index.contains_key(&page_id)
    }

    /// Moves a resident page to the MRU end and returns it for update.
    pub(crate) fn touch(&mut self, page_id: PageId) -> Option<&mut Page> {
        let idx = *self.index.get(&page_id)?;
        if self.tail != Some(idx) {
            self.unlink(idx);
            self.link_back(idx);
        }
        Some(&mut self.slots[idx].page)
    }

    /// Inserts a page at the MRU end. The page id must not be resident.
    pub(crate) fn push_back(&mut self, page: Page) {
        debug_assert!(!self.contains(page.id));
        let slot = Slot {
            page,
            prev: None,
            next: None,
        };
        let idx = if let Some(idx) = self.free.pop() {
            self.slots[idx] = slot;
            idx
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        };
        let _ = self.index.insert(page.id, idx);
        self.link_back(idx);
    }

    /// Removes and returns the least recently used page.
    pub(crate) fn pop_front(&mut self) -> Option<Page> {
        let idx = self.head?;
        Some(self.release(idx))
    }

    /// Removes and returns the given page.
    pub(crate) fn remove(&mut self, page_id: PageId) -> Option<Page> {
        let idx = *self.index.get(&page_id)?;
        Some(self.release(idx))
    }

    /// Walks the pages from LRU to MRU.
    pub(crate) const fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn release(&mut self, idx: usize) -> Page {
        self.unlink(idx);
        let page = self.slots[idx].page;
        let _ = self.index.remove(&page.id);
        self.free.push(idx);
        page
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[idx].prev = None;
        self.slots[idx].next = None;
    }

    fn link_back(&mut self, idx: usize) {
        self.slots[idx].prev = self.tail;
        self.slots[idx].next = None;
        match self.tail {
            Some(t) => self.slots[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

/// LRU-to-MRU iterator over a [`RecencyList`].
#[derive(Debug)]
pub(crate) struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Page;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let slot = &self.list.slots[idx];
        self.cursor = slot.next;
        Some(&slot.page)
    }
}
