//! Global pointer listeners scoped to a drag session.
//!
//! A drag attaches a move listener and a release listener to a table shared
//! by the whole slider (the stand-in for document-level listeners). The
//! returned [`ListenerGuard`] removes both when dropped, so release runs
//! exactly once per drag no matter how the drag ends.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::Handle;
use crate::pointer::{Modality, PointerPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Move,
    /// Fires on pointer-up and pointer-cancel.
    Release,
}

impl ListenerKind {
    /// Which listener a pointer phase is delivered to, if any.
    pub fn for_phase(phase: PointerPhase) -> Option<ListenerKind> {
        match phase {
            PointerPhase::Down => None,
            PointerPhase::Move => Some(ListenerKind::Move),
            PointerPhase::Up | PointerPhase::Cancel => Some(ListenerKind::Release),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: Handle,
    modality: Modality,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
    attached_total: u64,
    released_total: u64,
}

impl Table {
    fn insert(&mut self, entry: Entry) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, entry);
        self.attached_total += 1;
        id
    }
}

/// Shared, single-threaded listener table.
#[derive(Debug, Clone, Default)]
pub struct GlobalListeners {
    table: Rc<RefCell<Table>>,
}

impl GlobalListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the move and release listeners for one drag session.
    pub fn attach(&self, handle: Handle, modality: Modality) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        let ids = [ListenerKind::Move, ListenerKind::Release].map(|kind| {
            table.insert(Entry {
                handle,
                modality,
                kind,
            })
        });
        ListenerGuard {
            table: Rc::clone(&self.table),
            ids,
        }
    }

    /// Number of listeners currently attached.
    pub fn active_count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_attached(&self, handle: Handle, kind: ListenerKind) -> bool {
        self.table
            .borrow()
            .entries
            .values()
            .any(|e| e.handle == handle && e.kind == kind)
    }

    /// True if `handle` has a listener of `kind` for `modality`.
    pub fn listens(&self, handle: Handle, modality: Modality, kind: ListenerKind) -> bool {
        self.table
            .borrow()
            .entries
            .values()
            .any(|e| e.handle == handle && e.modality == modality && e.kind == kind)
    }

    /// Listeners ever attached.
    pub fn attached_total(&self) -> u64 {
        self.table.borrow().attached_total
    }

    /// Listeners ever released.
    pub fn released_total(&self) -> u64 {
        self.table.borrow().released_total
    }
}

/// Owns the two listeners of a drag session; removes them on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    table: Rc<RefCell<Table>>,
    ids: [u64; 2],
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut table = self.table.borrow_mut();
        for id in self.ids {
            if table.entries.remove(&id).is_some() {
                table.released_total += 1;
            }
        }
    }
}
