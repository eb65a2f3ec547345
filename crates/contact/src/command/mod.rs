use std::ops::Deref;

use crate::Notifier;

mod submit_form;
mod update_status;

pub use submit_form::SubmitFormInput;

#[derive(Clone)]
pub struct Command {
    state: triove_shared::State,
    notifier: Notifier,
}

impl Deref for Command {
    type Target = triove_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: triove_shared::State, notifier: Notifier) -> Self {
        Self { state, notifier }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
