mod command;
mod command_source;
mod driver;
mod form;
mod form_engine;
mod form_event;
mod form_handle;
mod input_source;
mod observer;
mod profile_views;
mod render_sink;
mod user_profile;

pub use command::Command;
pub use command_source::{CommandSource, ScriptedSource, StdinSource};
pub use driver::{drive, write_panes, Panes};
pub use form::ProfileForm;
pub use form_engine::FormEngine;
pub use form_event::{FormEvent, ProfileSnapshot};
pub use form_handle::FormHandle;
pub use input_source::{InputSource, TextField};
pub use observer::{ProfileObserver, SharedObserver};
pub use profile_views::{ProfileDashboard, ProfileView};
pub use render_sink::{RenderSink, TextArea};
pub use user_profile::UserProfile;
