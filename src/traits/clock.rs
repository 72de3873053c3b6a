use std::rc::Rc;
use std::sync::Arc;

use crate::models::common::Timestamp;

/// Source of block time for registry operations.
///
/// Implementations must be monotonic: a later call never returns an earlier
/// timestamp than a previous one.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
