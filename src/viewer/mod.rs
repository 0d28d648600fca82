// The 3D globe capability the page drives, and its Cesium implementation.

pub mod cesium;
pub mod subscription;

pub use cesium::CesiumViewer;
pub use subscription::{Subscription, SubscriptionSlot};

use crate::error::ViewerError;
use crate::geo::{Geodetic, Matrix4};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeadingPitchRange {
    pub heading: f64,
    pub pitch: f64,
    pub range: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeadingPitchRoll {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraView {
    pub destination: Geodetic,
    pub orientation: HeadingPitchRoll,
}

/// Everything the page needs from a globe widget. Implementations are cheap
/// handles onto one underlying viewer, so clones share the same camera.
pub trait GlobeViewer: Clone + 'static {
    type Layer;

    /// Locks the camera onto `transform` and places it at `offset` from the frame origin.
    fn look_at_transform(&self, transform: &Matrix4, offset: HeadingPitchRange);

    // Back to the fixed frame, undoing look_at_transform.
    fn release_camera_frame(&self);

    fn rotate_camera(&self, axis: [f64; 3], angle: f64);

    fn set_view(&self, view: CameraView);

    fn on_tick(&self, callback: Box<dyn FnMut()>) -> Subscription;

    fn add_imagery_layer(&self, url_template: &str) -> Result<Self::Layer, ViewerError>;

    fn remove_imagery_layer(&self, layer: Self::Layer);

    // Load failures are logged, never returned.
    fn load_tileset(&self, url: &str);
}
