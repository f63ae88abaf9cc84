use tokio::sync::oneshot;

/// Point-in-time copy of the subject's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub username: String,
    pub email: String,
}

pub enum FormEvent {
    EditUsername(String),
    EditEmail(String),
    Submit(oneshot::Sender<()>),
    Snapshot(oneshot::Sender<ProfileSnapshot>),
    Quit,
}

impl std::fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditUsername(value) => write!(f, "EditUsername({value:?})"),
            Self::EditEmail(value) => write!(f, "EditEmail({value:?})"),
            Self::Submit(_) => f.write_str("Submit"),
            Self::Snapshot(_) => f.write_str("Snapshot"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}
