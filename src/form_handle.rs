use anyhow::Context;
use tokio::sync::{mpsc, oneshot};

use crate::form_event::{FormEvent, ProfileSnapshot};

pub type EventSender = mpsc::UnboundedSender<FormEvent>;

/// Sends events to a running [`FormEngine`](crate::FormEngine).
#[derive(Clone, Debug)]
pub struct FormHandle {
    event_sender: EventSender,
}

impl FormHandle {
    pub(crate) fn new(event_sender: EventSender) -> Self {
        Self { event_sender }
    }

    pub fn send_event(&self, event: FormEvent) -> anyhow::Result<()> {
        self.event_sender
            .send(event)
            .map_err(|err| anyhow::anyhow!("form engine stopped, dropped {:?}", err.0))
    }

    pub fn edit_username(&self, value: impl Into<String>) -> anyhow::Result<()> {
        self.send_event(FormEvent::EditUsername(value.into()))
    }

    pub fn edit_email(&self, value: impl Into<String>) -> anyhow::Result<()> {
        self.send_event(FormEvent::EditEmail(value.into()))
    }

    /// Presses "Update". Resolves once every observer has been notified.
    pub async fn submit(&self) -> anyhow::Result<()> {
        let (ack, done) = oneshot::channel();
        self.send_event(FormEvent::Submit(ack))?;
        done.await.context("form engine dropped submit acknowledgement")
    }

    pub async fn snapshot(&self) -> anyhow::Result<ProfileSnapshot> {
        let (reply, snapshot) = oneshot::channel();
        self.send_event(FormEvent::Snapshot(reply))?;
        snapshot.await.context("form engine dropped snapshot reply")
    }

    pub fn quit(&self) -> anyhow::Result<()> {
        self.send_event(FormEvent::Quit)
    }
}
