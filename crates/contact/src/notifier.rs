use tokio::sync::broadcast;

use crate::Status;

#[derive(Debug, Clone, PartialEq)]
pub enum ContactChanged {
    Created { id: String },
    StatusChanged { id: String, status: Status },
}

/// Fan-out of submission changes to live admin views.
#[derive(Clone)]
pub struct Notifier(broadcast::Sender<ContactChanged>);

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);

        Self(sender)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContactChanged> {
        self.0.subscribe()
    }

    pub(crate) fn notify(&self, change: ContactChanged) {
        // no receivers is fine
        if self.0.send(change).is_err() {
            tracing::debug!("contact change dropped, no live subscriber");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
