use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::FightId;

/// One mutex per fight id. Exchanges on the same fight queue up behind each
/// other; different fights never contend beyond the short map lookup.
#[derive(Debug, Default)]
pub(crate) struct FightLocks {
    locks: Mutex<HashMap<FightId, Arc<Mutex<()>>>>,
}

impl FightLocks {
    pub(crate) fn for_fight(&self, id: FightId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id).or_default())
    }

    /// Drop the entry of a decided fight. Callers already
    /// waiting on the old mutex re-read the fight and find nothing to do.
    pub(crate) fn release(&self, id: FightId) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
