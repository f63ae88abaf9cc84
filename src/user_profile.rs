use crate::observer::{observer_ptr, ProfileObserver, SharedObserver};

/// The subject: a username and an email plus the observers interested in them.
///
/// Every setter notifies all registered observers, in registration order,
/// before it returns.
#[derive(Default)]
pub struct UserProfile {
    username: String,
    email: String,
    observers: Vec<SharedObserver>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer`. Returns `false` if that same reference is
    /// already registered, in which case nothing changes.
    pub fn add_observer(&mut self, observer: SharedObserver) -> bool {
        let ptr = observer_ptr(&observer);
        if self.observers.iter().any(|o| observer_ptr(o) == ptr) {
            log::debug!("Observer {:p} already registered", ptr);
            return false;
        }
        log::debug!("Registering observer {:p}", ptr);
        self.observers.push(observer);
        true
    }

    /// Unregisters `observer`. Unknown observers are ignored.
    pub fn remove_observer<O: ProfileObserver + ?Sized>(
        &mut self,
        observer: &std::sync::Arc<O>,
    ) -> bool {
        let ptr = observer_ptr(observer);
        let before = self.observers.len();
        self.observers.retain(|o| observer_ptr(o) != ptr);
        let removed = self.observers.len() != before;
        if removed {
            log::debug!("Removed observer {:p}", ptr);
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_observers(&self) {
        for (index, observer) in self.observers.iter().enumerate() {
            // A failing observer must not keep the rest from seeing the change.
            if let Err(err) = observer.update(self) {
                log::warn!("Observer #{} failed to update: {:#}", index, err);
            }
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
        self.notify_observers();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.notify_observers();
    }
}

impl std::fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserProfile")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("observers", &self.observers.len())
            .finish()
    }
}
