//! Clock port - source of the current time for repository stamping

use crate::domain::value_objects::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
