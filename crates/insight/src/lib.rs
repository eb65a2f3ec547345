pub mod case_study;
pub mod post;

use std::ops::Deref;

pub use case_study::{CaseStudy, CreateCaseStudyInput};
pub use post::{BlogPost, CreatePostInput};

#[derive(Clone)]
pub struct Command(pub triove_shared::State);

impl Deref for Command {
    type Target = triove_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone)]
pub struct Query(pub triove_shared::State);

impl Deref for Query {
    type Target = triove_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
