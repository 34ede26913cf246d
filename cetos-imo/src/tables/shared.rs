use super::ReferenceTables;
use crate::Result;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Reference tables shared between estimators, replaceable at runtime.
///
/// Estimations work on a snapshot, so a replacement never affects an estimation in flight.
#[derive(Debug)]
pub struct SharedReferenceTables {
    current: RwLock<Arc<ReferenceTables>>,
}

impl SharedReferenceTables {
    pub fn new(tables: Arc<ReferenceTables>) -> Result<Self> {
        tables.validate()?;
        Ok(Self {
            current: RwLock::new(tables),
        })
    }

    pub fn snapshot(&self) -> Arc<ReferenceTables> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validates and installs `tables`, returning the previous set.
    pub fn replace(&self, tables: ReferenceTables) -> Result<Arc<ReferenceTables>> {
        tables.validate()?;
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, Arc::new(tables));
        info!("replaced reference tables");
        Ok(previous)
    }
}

impl Default for SharedReferenceTables {
    fn default() -> Self {
        Self {
            current: RwLock::new(ReferenceTables::imo_2020()),
        }
    }
}
