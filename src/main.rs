use std::io::Write;
use std::sync::Arc;

use profile_observer::{
    drive, Command, FormEngine, Panes, ProfileDashboard, ProfileView, StdinSource, TextField,
    UserProfile,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let panes = Panes::default();
    let mut profile = UserProfile::new();
    profile.add_observer(Arc::new(ProfileView::new(panes.view.clone())));
    profile.add_observer(Arc::new(ProfileDashboard::new(panes.dashboard.clone())));

    let (engine, handle) = FormEngine::new(profile, TextField::new(), TextField::new());
    let join = engine.run_loop();

    let mut stdout = std::io::stdout();
    write!(stdout, "User Profile\n{}", Command::USAGE)?;

    let mut source = StdinSource::new();
    let result = drive(&mut source, &handle, &panes, &mut stdout).await;

    handle.quit()?;
    let profile = join.await?;
    log::info!("Exiting with {:?}", profile);
    result
}
