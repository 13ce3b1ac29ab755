//! Development seed data
//!
//! Channels and kings have no write endpoints; in development they are
//! seeded here so the API is usable out of the box.

use std::sync::Arc;

use tracing::info;
use vidtube_core::{Channel, King};

use crate::database::Database;
use crate::error::StoreResult;
use crate::unit_of_work::UnitOfWork;

/// Seed a couple of channels and the kings table. Does nothing if channels
/// already exist.
pub fn seed_demo(db: &Arc<Database>) -> StoreResult<()> {
    let uow = UnitOfWork::new(db.clone());

    let channels = uow.repository::<Channel>();
    if !channels.all().is_empty() {
        return Ok(());
    }
    let id = channels.next_id();
    channels.add(Channel::new(id, "Funny videos", "try not to laugh."));
    let id = channels.next_id();
    channels.add(Channel::new(id, "Sports", "goals, saves and misses."));

    let kings = uow.repository::<King>();
    let id = kings.next_id();
    kings.add(King::new(id, "Harald Fairhair", "first king of Norway."));
    let id = kings.next_id();
    kings.add(King::new(id, "Cnut the Great", "ruled the North Sea Empire."));

    uow.save()?;
    info!("seeded demo channels and kings");
    Ok(())
}
