use crate::domain::{Member, MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-lifetime store state.
///
/// Ids are assigned in increasing order, so iterating the `BTreeMap`
/// yields members in insertion order.
#[derive(Debug, Default)]
struct Store {
    members: BTreeMap<MemberId, Member>,
    last_id: u64,
}

/// In-memory implementation of MemberRepository
///
/// Each instance owns its own store; nothing is shared through statics.
/// The map and the id sequence sit behind one mutex that is never held
/// across an `.await`.
#[derive(Debug, Default)]
pub struct MemberRepository {
    store: Mutex<Store>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all members and restart the id sequence at 1 (test-only)
    pub fn reset(&self) {
        let mut store = self.lock();
        store.members.clear();
        store.last_id = 0;
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Store has no cross-field invariant a panicking writer could break.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store {
    fn insert(&mut self, member: Member) -> Member {
        self.last_id += 1;
        let id = MemberId::from_u64(self.last_id);
        let member = member.with_id(id);
        self.members.insert(id, member.clone());
        tracing::debug!(member_id = id.value(), "member saved");
        member
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.members.values().find(|m| m.name == name)
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: Member) -> Result<Member> {
        Ok(self.lock().insert(member))
    }

    /// Name lookup and insert happen under the same guard
    async fn save_if_name_absent(&self, member: Member) -> Result<Option<Member>> {
        let mut store = self.lock();
        if store.find_by_name(&member.name).is_some() {
            return Ok(None);
        }
        Ok(Some(store.insert(member)))
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.lock().members.get(&id).cloned())
    }

    /// Linear scan in insertion order
    async fn find_by_name(&self, name: &str) -> Result<Option<Member>> {
        Ok(self.lock().find_by_name(name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.lock().members.values().cloned().collect())
    }

    /// Removes every member; the id sequence keeps counting
    async fn clear(&self) -> Result<()> {
        self.lock().members.clear();
        Ok(())
    }
}
