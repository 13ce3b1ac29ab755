//! Unit of work and generic repositories
//!
//! A [`UnitOfWork`] is created per inbound request. Repositories obtained
//! from it stage mutations; nothing touches the committed tables until
//! [`UnitOfWork::save`] applies the whole batch in one atomic step.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::database::Database;
use crate::error::StoreResult;
use crate::tables::{Record, Tables};

/// A staged mutation, applied at commit time.
pub(crate) type Op = Box<dyn FnOnce(&mut Tables) -> StoreResult<()> + Send>;

/// Transactional boundary coordinating repository mutations into one commit.
pub struct UnitOfWork {
    db: Arc<Database>,
    pending: Mutex<Vec<Op>>,
}

impl UnitOfWork {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Typed repository handle for one entity table.
    pub fn repository<T: Record>(&self) -> Repository<'_, T> {
        Repository {
            uow: self,
            _entity: PhantomData,
        }
    }

    fn stage(&self, op: impl FnOnce(&mut Tables) -> StoreResult<()> + Send + 'static) {
        self.pending.lock().push(Box::new(op));
    }

    /// Commit all staged mutations atomically.
    ///
    /// On failure the committed tables are unchanged and the staged batch
    /// is discarded.
    pub fn save(&self) -> StoreResult<()> {
        let ops = std::mem::take(&mut *self.pending.lock());
        if ops.is_empty() {
            return Ok(());
        }
        self.db.commit(ops)
    }

    /// Number of staged, uncommitted mutations.
    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }
}

impl std::fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitOfWork")
            .field("pending", &self.pending_len())
            .finish()
    }
}

/// Generic CRUD access to one table.
///
/// Reads see committed state only; `add`, `update` and `delete` stage
/// mutations on the owning unit of work.
pub struct Repository<'a, T: Record> {
    uow: &'a UnitOfWork,
    _entity: PhantomData<T>,
}

impl<T: Record> Repository<'_, T> {
    /// Snapshot of all committed rows in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.uow.db.read(|tables| T::table(tables).rows().to_vec())
    }

    /// Reserve the next id from the table's monotonic sequence.
    pub fn next_id(&self) -> i32 {
        self.uow.db.write(|tables| T::table_mut(tables).reserve_id())
    }

    pub fn add(&self, entity: T) {
        self.uow.stage(move |tables| T::table_mut(tables).insert(entity));
    }

    pub fn update(&self, entity: T) {
        self.uow.stage(move |tables| T::table_mut(tables).replace(entity));
    }

    pub fn delete(&self, entity: &T) {
        let key = entity.key();
        self.uow.stage(move |tables| T::table_mut(tables).remove(key));
    }
}
