use crate::observer::ProfileObserver;
use crate::render_sink::RenderSink;
use crate::user_profile::UserProfile;

fn render(sink: &dyn RenderSink, header: &str, profile: &UserProfile) -> anyhow::Result<()> {
    sink.set_text(&format!("{header}\n"))?;
    sink.append(&format!("Username: {}\n", profile.username()))?;
    sink.append(&format!("Email: {}\n", profile.email()))?;
    Ok(())
}

/// Renders the profile into the "view" pane.
pub struct ProfileView<S: RenderSink> {
    sink: S,
}

impl<S: RenderSink> ProfileView<S> {
    pub const HEADER: &'static str = "Profile View Updated:";

    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: RenderSink> ProfileObserver for ProfileView<S> {
    fn update(&self, profile: &UserProfile) -> anyhow::Result<()> {
        render(&self.sink, Self::HEADER, profile)
    }
}

/// Renders the profile into the "dashboard" pane.
pub struct ProfileDashboard<S: RenderSink> {
    sink: S,
}

impl<S: RenderSink> ProfileDashboard<S> {
    pub const HEADER: &'static str = "Profile Dashboard Updated:";

    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: RenderSink> ProfileObserver for ProfileDashboard<S> {
    fn update(&self, profile: &UserProfile) -> anyhow::Result<()> {
        render(&self.sink, Self::HEADER, profile)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::render_sink::TextArea;

    #[test]
    fn test_view_and_dashboard_render_same_fields() {
        let view_pane = TextArea::new();
        let dashboard_pane = TextArea::new();
        let mut profile = UserProfile::new();
        profile.add_observer(Arc::new(ProfileView::new(view_pane.clone())));
        profile.add_observer(Arc::new(ProfileDashboard::new(dashboard_pane.clone())));

        profile.set_username("bob");
        profile.set_email("bob@x.com");

        assert_eq!(
            view_pane.contents(),
            "Profile View Updated:\nUsername: bob\nEmail: bob@x.com\n"
        );
        assert_eq!(
            dashboard_pane.contents(),
            "Profile Dashboard Updated:\nUsername: bob\nEmail: bob@x.com\n"
        );
    }

    #[test]
    fn test_unset_email_renders_empty() {
        let pane = TextArea::new();
        let mut profile = UserProfile::new();
        profile.add_observer(Arc::new(ProfileView::new(pane.clone())));

        profile.set_username("carol");

        assert_eq!(pane.contents(), "Profile View Updated:\nUsername: carol\nEmail: \n");
    }

    #[test]
    fn test_panes_untouched_before_first_change() {
        let pane = TextArea::new();
        let mut profile = UserProfile::new();
        profile.add_observer(Arc::new(ProfileDashboard::new(pane.clone())));

        assert!(pane.is_empty());
    }
}
