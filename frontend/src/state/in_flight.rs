use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use shared::PaymentId;

/// User actions that must not overlap with themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    Login,
    LoadPayments,
    SaveEdit,
    Delete(PaymentId),
}

/// Keys of actions currently awaiting the backend. A second trigger of a
/// pending key is dropped; distinct keys run independently.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Rc<RefCell<HashSet<ActionKey>>>,
}

impl InFlight {
    /// Claim `key`, or `None` if it is already pending. The key is released
    /// when the returned ticket is dropped.
    pub fn try_begin(&self, key: ActionKey) -> Option<InFlightTicket> {
        if !self.pending.borrow_mut().insert(key) {
            log::debug!(target: "in-flight", "Dropping duplicate {:?}", key);
            return None;
        }
        Some(InFlightTicket {
            key,
            pending: Rc::clone(&self.pending),
        })
    }

    pub fn is_pending(&self, key: ActionKey) -> bool {
        self.pending.borrow().contains(&key)
    }
}

impl PartialEq for InFlight {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

#[derive(Debug)]
pub struct InFlightTicket {
    key: ActionKey,
    pending: Rc<RefCell<HashSet<ActionKey>>>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.key);
    }
}
