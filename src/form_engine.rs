use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::form::ProfileForm;
use crate::form_event::{FormEvent, ProfileSnapshot};
use crate::form_handle::FormHandle;
use crate::input_source::TextField;
use crate::user_profile::UserProfile;

type EventReceiver = mpsc::UnboundedReceiver<FormEvent>;

/// Owns the subject and the form and applies events to them one at a time.
///
/// Everything that touches the profile goes through the single task started
/// by [`FormEngine::run_loop`], so observers are always notified in the order
/// the events were sent.
pub struct FormEngine {
    profile: UserProfile,
    username_field: TextField,
    email_field: TextField,
    form: ProfileForm,
    event_receiver: EventReceiver,
}

impl FormEngine {
    pub fn new(
        profile: UserProfile,
        username_field: TextField,
        email_field: TextField,
    ) -> (Self, FormHandle) {
        let (event_sender, event_receiver) = mpsc::unbounded_channel::<FormEvent>();
        let form = ProfileForm::new(username_field.clone(), email_field.clone());
        let engine = Self {
            profile,
            username_field,
            email_field,
            form,
            event_receiver,
        };
        (engine, FormHandle::new(event_sender))
    }

    /// Processes events until `Quit` or until every handle is gone, then
    /// hands the profile back.
    pub fn run_loop(mut self) -> JoinHandle<UserProfile> {
        tokio::spawn(async move {
            while let Some(event) = self.event_receiver.recv().await {
                log::debug!("Handling {:?}", event);
                match event {
                    FormEvent::EditUsername(value) => self.username_field.set_text(value),
                    FormEvent::EditEmail(value) => self.email_field.set_text(value),
                    FormEvent::Submit(ack) => {
                        self.form.submit(&mut self.profile);
                        // Nobody waiting is fine.
                        let _ = ack.send(());
                    }
                    FormEvent::Snapshot(reply) => {
                        let _ = reply.send(ProfileSnapshot {
                            username: self.profile.username().to_owned(),
                            email: self.profile.email().to_owned(),
                        });
                    }
                    FormEvent::Quit => break,
                }
            }
            log::debug!("Form engine stopped");
            self.profile
        })
    }
}
