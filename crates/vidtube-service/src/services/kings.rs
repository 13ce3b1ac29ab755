//! Kings service - serves the read-only kings table

use vidtube_core::King;
use vidtube_db::{Repository, UnitOfWork};

use crate::dto::KingResponse;

pub struct KingsService<'a> {
    kings: Repository<'a, King>,
}

impl<'a> KingsService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self {
            kings: uow.repository(),
        }
    }

    pub fn get_all_kings(&self) -> Vec<KingResponse> {
        self.kings.all().iter().map(KingResponse::from).collect()
    }
}
