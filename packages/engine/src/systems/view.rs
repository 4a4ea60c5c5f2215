//! View mode bookkeeping
//!
//! The host negotiates immersive sessions; we only track which mode is active
//! and whether the skybox should be drawn. Passthrough AR shows the real room,
//! so the skybox is hidden for as long as an immersive session runs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Orbit camera on a regular canvas
    Fixed,
    Immersive,
}

#[derive(Clone, Debug)]
pub struct ViewState {
    mode: ViewMode,
    skybox_visible: bool,
    last_error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Fixed,
            skybox_visible: true,
            last_error: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn skybox_visible(&self) -> bool {
        self.skybox_visible
    }

    /// Message of the last failed session request, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn session_started(&mut self) {
        if self.mode == ViewMode::Immersive {
            return;
        }
        console_log!("immersive session started, hiding skybox");
        self.mode = ViewMode::Immersive;
        self.skybox_visible = false;
    }

    pub fn session_ended(&mut self) {
        if self.mode == ViewMode::Fixed {
            return;
        }
        console_log!("immersive session ended, showing skybox");
        self.mode = ViewMode::Fixed;
        self.skybox_visible = true;
    }

    /// Session request rejected by the platform. Not fatal: stay on the
    /// fixed view.
    pub fn session_failed(&mut self, reason: &str) {
        console_warn!("immersive session unavailable, using fixed view: {}", reason);
        self.mode = ViewMode::Fixed;
        self.skybox_visible = true;
        self.last_error = Some(reason.to_string());
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fixed_with_skybox() {
        let view = ViewState::new();
        assert_eq!(view.mode(), ViewMode::Fixed);
        assert!(view.skybox_visible());
        assert!(view.last_error().is_none());
    }

    #[test]
    fn session_hides_then_restores_skybox() {
        let mut view = ViewState::new();
        view.session_started();
        assert_eq!(view.mode(), ViewMode::Immersive);
        assert!(!view.skybox_visible());
        view.session_ended();
        assert_eq!(view.mode(), ViewMode::Fixed);
        assert!(view.skybox_visible());
    }

    #[test]
    fn failure_falls_back_to_fixed() {
        let mut view = ViewState::new();
        view.session_started();
        view.session_failed("NotSupportedError");
        assert_eq!(view.mode(), ViewMode::Fixed);
        assert!(view.skybox_visible());
        assert_eq!(view.last_error(), Some("NotSupportedError"));
    }
}
