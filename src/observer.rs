use std::sync::Arc;

use crate::user_profile::UserProfile;

/// Something that reacts to changes of a [`UserProfile`].
///
/// `update` is called synchronously from inside the mutating call, with the
/// subject itself. Implementations read whatever fields they need from it and
/// see the live, post-mutation state.
pub trait ProfileObserver: Send + Sync {
    fn update(&self, profile: &UserProfile) -> anyhow::Result<()>;
}

pub type SharedObserver = Arc<dyn ProfileObserver>;

/// Identity of a shared observer, ignoring the vtable half of the fat pointer.
pub(crate) fn observer_ptr<O: ProfileObserver + ?Sized>(observer: &Arc<O>) -> *const () {
    Arc::as_ptr(observer).cast::<()>()
}
