use crate::input_source::InputSource;
use crate::user_profile::UserProfile;

/// The "Update Profile" trigger.
///
/// Holds the two input controls it reads from; the subject is passed in on
/// every submit rather than captured.
pub struct ProfileForm {
    username: Box<dyn InputSource>,
    email: Box<dyn InputSource>,
}

impl ProfileForm {
    pub fn new(username: impl InputSource + 'static, email: impl InputSource + 'static) -> Self {
        Self {
            username: Box::new(username),
            email: Box::new(email),
        }
    }

    /// Copies the current input values into `profile`, username first.
    pub fn submit(&self, profile: &mut UserProfile) {
        let username = self.username.text();
        let email = self.email.text();
        log::debug!("Submitting profile form username={:?} email={:?}", username, email);
        profile.set_username(username);
        profile.set_email(email);
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::input_source::TextField;
    use crate::user_profile::test::Spy;

    #[test]
    fn test_submit_copies_fields_and_notifies_twice() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let username = TextField::with_text("heidi");
        let email = TextField::with_text("heidi@example.org");
        let form = ProfileForm::new(username, email);
        let mut profile = UserProfile::new();
        profile.add_observer(Spy::new("spy", calls.clone()));

        form.submit(&mut profile);

        assert_eq!(profile.username(), "heidi");
        assert_eq!(profile.email(), "heidi@example.org");
        assert_eq!(
            *calls.lock(),
            vec![
                ("spy", "heidi".to_owned(), "".to_owned()),
                ("spy", "heidi".to_owned(), "heidi@example.org".to_owned()),
            ]
        );
    }

    #[test]
    fn test_submit_reads_fields_at_submit_time() {
        let username = TextField::new();
        let email = TextField::new();
        let form = ProfileForm::new(username.clone(), email.clone());
        let mut profile = UserProfile::new();

        username.set_text("ivan");
        form.submit(&mut profile);
        username.set_text("judy");
        email.set_text("judy@example.org");
        form.submit(&mut profile);

        assert_eq!(profile.username(), "judy");
        assert_eq!(profile.email(), "judy@example.org");
    }
}
