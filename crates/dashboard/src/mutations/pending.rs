use std::collections::HashSet;
use std::sync::Mutex;

use super::kind::MutationKind;

/// At most one in-flight call per mutation kind.
#[derive(Debug, Default)]
pub struct PendingGuard {
    in_flight: Mutex<HashSet<MutationKind>>,
}

/// Released on drop, whatever the outcome of the call.
#[derive(Debug)]
pub struct PendingToken<'a> {
    guard: &'a PendingGuard,
    kind: MutationKind,
}

impl PendingGuard {
    /// `None` while the same kind is still pending.
    pub fn try_begin(&self, kind: MutationKind) -> Option<PendingToken<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if !in_flight.insert(kind) {
            return None;
        }
        Some(PendingToken { guard: self, kind })
    }

    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains(&kind)
    }
}

impl Drop for PendingToken<'_> {
    fn drop(&mut self) {
        self.guard
            .in_flight
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&self.kind);
    }
}
