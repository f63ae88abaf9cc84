use std::io::Write;

use crate::command::Command;
use crate::command_source::CommandSource;
use crate::form_handle::FormHandle;
use crate::render_sink::TextArea;

/// The two display panes the front end prints after each update.
#[derive(Clone, Default, Debug)]
pub struct Panes {
    pub view: TextArea,
    pub dashboard: TextArea,
}

pub fn write_panes<W: Write>(panes: &Panes, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Profile View:")?;
    write!(out, "{}", panes.view.contents())?;
    writeln!(out, "Profile Dashboard:")?;
    write!(out, "{}", panes.dashboard.contents())?;
    out.flush()?;
    Ok(())
}

/// Feeds lines from `source` to the form until `quit` or end of input.
///
/// Lines that do not parse are reported to `out` and skipped.
pub async fn drive<W: Write>(
    source: &mut dyn CommandSource,
    handle: &FormHandle,
    panes: &Panes,
    out: &mut W,
) -> anyhow::Result<()> {
    while let Some(line) = source.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("Rejected input {:?}: {:#}", line, err);
                writeln!(out, "error: {err:#} (try `help`)")?;
                continue;
            }
        };
        log::debug!("Running {:?}", command);

        match command {
            Command::Username(value) => handle.edit_username(value)?,
            Command::Email(value) => handle.edit_email(value)?,
            Command::Update => {
                handle.submit().await?;
                write_panes(panes, out)?;
            }
            Command::Show => {
                let snapshot = handle.snapshot().await?;
                writeln!(out, "Username: {}", snapshot.username)?;
                writeln!(out, "Email: {}", snapshot.email)?;
            }
            Command::Help => write!(out, "{}", Command::USAGE)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::command_source::ScriptedSource;
    use crate::form_engine::FormEngine;
    use crate::input_source::TextField;
    use crate::profile_views::{ProfileDashboard, ProfileView};
    use crate::user_profile::UserProfile;

    fn start(panes: &Panes) -> (FormHandle, tokio::task::JoinHandle<UserProfile>) {
        let mut profile = UserProfile::new();
        profile.add_observer(Arc::new(ProfileView::new(panes.view.clone())));
        profile.add_observer(Arc::new(ProfileDashboard::new(panes.dashboard.clone())));
        let (engine, handle) = FormEngine::new(profile, TextField::new(), TextField::new());
        (handle, engine.run_loop())
    }

    #[tokio::test]
    async fn test_update_prints_both_panes() {
        let panes = Panes::default();
        let (handle, join) = start(&panes);
        let mut source = ScriptedSource::new(["username bob", "email bob@x.com", "update", "quit"]);
        let mut out = Vec::new();

        drive(&mut source, &handle, &panes, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Profile View:\n\
             Profile View Updated:\nUsername: bob\nEmail: bob@x.com\n\
             Profile Dashboard:\n\
             Profile Dashboard Updated:\nUsername: bob\nEmail: bob@x.com\n"
        );

        handle.quit().unwrap();
        let profile = join.await.unwrap();
        assert_eq!(profile.email(), "bob@x.com");
    }

    #[tokio::test]
    async fn test_bad_lines_are_reported_and_skipped() {
        let panes = Panes::default();
        let (handle, _join) = start(&panes);
        let mut source = ScriptedSource::new(["", "frobnicate", "username zoe", "update", "show"]);
        let mut out = Vec::new();

        drive(&mut source, &handle, &panes, &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("error: unknown command `frobnicate`"));
        assert!(out.ends_with("Username: zoe\nEmail: \n"));
        assert_eq!(
            panes.view.contents(),
            "Profile View Updated:\nUsername: zoe\nEmail: \n"
        );
    }
}
