//! Table storage and the `Record` trait
//!
//! Every entity type maps to one [`Table`] inside [`Tables`]. Rows keep
//! insertion order, which is the ordering guarantee the read operations
//! expose. Each table owns a monotonic id sequence; ids are reserved
//! eagerly and never reused, even when a commit later fails or the row is
//! deleted.

use vidtube_core::{Channel, ChannelMembership, FavoriteVideo, Friendship, King, User, Video};

use crate::error::{CommitError, StoreResult};

/// Ties an entity type to its table within [`Tables`].
///
/// Implemented for every stored entity in this crate; the service layer
/// only uses it through [`crate::Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Table name, used in commit errors.
    const TABLE: &'static str;

    /// Primary key of this row.
    fn key(&self) -> i32;

    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

/// An ordered table of rows plus its id sequence.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    sequence: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sequence: 0,
        }
    }
}

impl<T: Record> Table<T> {
    /// Committed rows in insertion order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Reserve the next id. The sequence only moves forward, so ids are
    /// never reused after a deletion.
    pub(crate) fn reserve_id(&mut self) -> i32 {
        self.sequence += 1;
        self.sequence
    }

    pub(crate) fn insert(&mut self, row: T) -> StoreResult<()> {
        let key = row.key();
        if self.rows.iter().any(|r| r.key() == key) {
            return Err(CommitError::DuplicateKey {
                table: T::TABLE,
                key,
            });
        }
        // Seeded rows may carry explicit ids; keep the sequence ahead of them.
        self.sequence = self.sequence.max(key);
        self.rows.push(row);
        Ok(())
    }

    pub(crate) fn replace(&mut self, row: T) -> StoreResult<()> {
        let key = row.key();
        match self.rows.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = row;
                Ok(())
            }
            None => Err(CommitError::MissingRow {
                table: T::TABLE,
                key,
            }),
        }
    }

    pub(crate) fn remove(&mut self, key: i32) -> StoreResult<()> {
        match self.rows.iter().position(|r| r.key() == key) {
            Some(index) => {
                self.rows.remove(index);
                Ok(())
            }
            None => Err(CommitError::MissingRow {
                table: T::TABLE,
                key,
            }),
        }
    }
}

/// The full committed state: one table per entity type.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub(crate) users: Table<User>,
    pub(crate) videos: Table<Video>,
    pub(crate) channels: Table<Channel>,
    pub(crate) favorites: Table<FavoriteVideo>,
    pub(crate) friendships: Table<Friendship>,
    pub(crate) memberships: Table<ChannelMembership>,
    pub(crate) kings: Table<King>,
}

macro_rules! impl_record {
    ($entity:ty, $table:literal, $field:ident) => {
        impl Record for $entity {
            const TABLE: &'static str = $table;

            fn key(&self) -> i32 {
                self.id
            }

            fn table(tables: &Tables) -> &Table<Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
                &mut tables.$field
            }
        }
    };
}

impl_record!(User, "users", users);
impl_record!(Video, "videos", videos);
impl_record!(Channel, "channels", channels);
impl_record!(FavoriteVideo, "favorite_videos", favorites);
impl_record!(Friendship, "friendships", friendships);
impl_record!(ChannelMembership, "channel_memberships", memberships);
impl_record!(King, "kings", kings);
