use crate::core::vec3::Vec3;
use crate::domain::medal::Placement;

/// Physics/render engine as seen by the lifecycle controller.
///
/// Frame-time calls never fail from the controller's point of view, except
/// creation: a body the engine could not make is never tracked.
pub trait MedalEngine {
    /// Host-side handle for one medal body
    type Handle;

    /// Create a dynamic medal body at the placement. `None` when the engine
    /// could not create it.
    fn create_body(&mut self, placement: &Placement) -> Option<Self::Handle>;

    /// Release the body and everything attached to it
    fn destroy_body(&mut self, handle: Self::Handle);

    /// Current simulated position of the body
    fn position(&self, handle: &Self::Handle) -> Vec3;

    /// Move the pusher block. Engines without a driven pusher ignore this.
    fn place_pusher(&mut self, _position: Vec3) {}
}

/// The two text labels of the score panel
pub trait ScoreDisplay {
    fn set_insert_text(&mut self, text: &str);
    fn set_score_text(&mut self, text: &str);
}
