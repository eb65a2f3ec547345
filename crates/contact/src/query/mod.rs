use std::ops::Deref;

mod list;

pub use list::*;

#[derive(Clone)]
pub struct Query(pub triove_shared::State);

impl Deref for Query {
    type Target = triove_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
