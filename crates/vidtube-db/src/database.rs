//! Shared committed state

use parking_lot::RwLock;
use tracing::debug;

use crate::error::StoreResult;
use crate::tables::Tables;
use crate::unit_of_work::Op;

/// The committed tables behind a single lock.
///
/// One instance is shared by the whole process; every request works on it
/// through its own [`crate::UnitOfWork`]. The lock is never held across an
/// await point since all store operations are synchronous.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        f(&self.tables.read())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.write())
    }

    /// Apply a batch of staged operations atomically.
    ///
    /// Operations run against a scratch copy of the tables; the committed
    /// state is only replaced once every operation has succeeded, so a
    /// failing commit leaves no partial writes behind.
    pub(crate) fn commit(&self, ops: Vec<Op>) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let mut scratch = tables.clone();
        let count = ops.len();
        for op in ops {
            op(&mut scratch)?;
        }
        *tables = scratch;
        debug!(operations = count, "unit of work committed");
        Ok(())
    }
}
