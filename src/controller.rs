// Location focus controller: aims the globe camera above the selected
// location and keeps it orbiting. At most one tick subscription is live.

use std::f64::consts::PI;
use tracing::{debug, info, warn};

use crate::error::ViewerError;
use crate::geo::{Geodetic, Matrix4, east_north_up_to_fixed_frame};
use crate::model::Location;
use crate::state::OverlayToggle;
use crate::viewer::{CameraView, GlobeViewer, HeadingPitchRange, HeadingPitchRoll, SubscriptionSlot};

pub const SETTLE_ELEVATION_M: f64 = 30.0;
pub const FOCUS_RANGE_M: f64 = 100.0;
pub const FOCUS_PITCH_RAD: f64 = -PI / 8.0;
// radians per rendered frame
pub const ROTATION_STEP_RAD: f64 = 0.002;
const ORBIT_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

pub const HAWAII_OVERVIEW: CameraView = CameraView {
    destination: Geodetic {
        lon_deg: -157.35410577367455,
        lat_deg: 20.072002180635586,
        height_m: 900_000.0,
    },
    orientation: HeadingPitchRoll {
        heading: 0.0,
        pitch: -85.0 * PI / 180.0,
        roll: 0.0,
    },
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTarget {
    pub transform: Matrix4,
    pub offset: HeadingPitchRange,
}

pub fn camera_target(location: &Location, elevation_m: f64) -> Result<CameraTarget, ViewerError> {
    if !elevation_m.is_finite() || elevation_m <= 0.0 {
        return Err(ViewerError::InvalidElevation(elevation_m));
    }
    let c = location.coordinates();
    Ok(CameraTarget {
        transform: east_north_up_to_fixed_frame(Geodetic::new(c.lon, c.lat, elevation_m)),
        offset: HeadingPitchRange {
            heading: 0.0,
            pitch: FOCUS_PITCH_RAD,
            range: FOCUS_RANGE_M,
        },
    })
}

pub struct FocusController<V: GlobeViewer> {
    viewer: V,
    selection: Option<Location>,
    rotation: SubscriptionSlot,
    overlay: OverlayToggle,
    imagery_source: Option<String>,
    imagery_layer: Option<V::Layer>,
}

impl<V: GlobeViewer> FocusController<V> {
    pub fn new(viewer: V) -> Self {
        Self {
            viewer,
            selection: None,
            rotation: SubscriptionSlot::default(),
            overlay: OverlayToggle::default(),
            imagery_source: None,
            imagery_layer: None,
        }
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn selection(&self) -> Option<&Location> {
        self.selection.as_ref()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_active()
    }

    pub fn reset_view(&self) {
        self.viewer.release_camera_frame();
        self.viewer.set_view(HAWAII_OVERVIEW);
    }

    pub fn focus(&self, location: &Location, elevation_m: f64) -> Result<(), ViewerError> {
        let target = camera_target(location, elevation_m)?;
        self.viewer.look_at_transform(&target.transform, target.offset);
        debug!(location = location.name(), elevation_m, "camera focused");
        Ok(())
    }

    /// Focuses `location` and starts a slow orbit around it, replacing any orbit in progress.
    pub fn start_rotation(&mut self, location: &Location, elevation_m: f64) -> Result<(), ViewerError> {
        self.rotation.clear();
        self.focus(location, elevation_m)?;
        let viewer = self.viewer.clone();
        self.rotation.replace_with(|| {
            self.viewer.on_tick(Box::new(move || {
                viewer.rotate_camera(ORBIT_AXIS, ROTATION_STEP_RAD);
            }))
        });
        Ok(())
    }

    pub fn stop_rotation(&mut self) -> bool {
        let stopped = self.rotation.clear();
        if stopped {
            debug!("rotation stopped");
        }
        stopped
    }

    /// Always restarts the orbit, even when `location` is already selected.
    pub fn set_selection(&mut self, location: Location) -> Result<(), ViewerError> {
        info!(location = location.name(), "location selected");
        self.selection = Some(location.clone());
        self.start_rotation(&location, SETTLE_ELEVATION_M)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.stop_rotation();
        self.reset_view();
    }

    pub fn set_imagery_source(&mut self, url_template: Option<String>) {
        self.imagery_source = url_template;
    }

    /// Press/release of the hold-to-show control. Never touches selection or rotation.
    pub fn toggle_overlay(&mut self, pressed: bool) -> bool {
        self.overlay.set(pressed);
        if pressed {
            self.attach_imagery();
        } else {
            self.detach_imagery();
        }
        self.overlay.is_showing()
    }

    pub fn overlay_image(&self) -> Option<&str> {
        if !self.overlay.is_showing() {
            return None;
        }
        self.selection.as_ref().and_then(Location::after_image)
    }

    fn attach_imagery(&mut self) {
        if self.imagery_layer.is_some() {
            return;
        }
        let Some(url) = self.imagery_source.as_deref() else {
            return;
        };
        match self.viewer.add_imagery_layer(url) {
            Ok(layer) => self.imagery_layer = Some(layer),
            Err(e) => warn!(error = %e, "2D imagery layer not shown"),
        }
    }

    fn detach_imagery(&mut self) {
        if let Some(layer) = self.imagery_layer.take() {
            self.viewer.remove_imagery_layer(layer);
        }
    }
}

impl<V: GlobeViewer> Drop for FocusController<V> {
    fn drop(&mut self) {
        self.rotation.clear();
        self.detach_imagery();
    }
}

// Calls before the viewer mounts, or after teardown, fail with NotReady.
pub enum ViewerSlot<V: GlobeViewer> {
    Uninitialized,
    Ready(FocusController<V>),
}

impl<V: GlobeViewer> Default for ViewerSlot<V> {
    fn default() -> Self {
        ViewerSlot::Uninitialized
    }
}

impl<V: GlobeViewer> ViewerSlot<V> {
    pub fn install(&mut self, controller: FocusController<V>) {
        *self = ViewerSlot::Ready(controller);
    }

    pub fn get(&self) -> Option<&FocusController<V>> {
        match self {
            ViewerSlot::Ready(c) => Some(c),
            ViewerSlot::Uninitialized => None,
        }
    }

    pub fn controller(&mut self) -> Result<&mut FocusController<V>, ViewerError> {
        match self {
            ViewerSlot::Ready(c) => Ok(c),
            ViewerSlot::Uninitialized => Err(ViewerError::NotReady),
        }
    }

    pub fn teardown(&mut self) -> Option<V> {
        match std::mem::take(self) {
            ViewerSlot::Ready(controller) => {
                let viewer = controller.viewer().clone();
                drop(controller);
                Some(viewer)
            }
            ViewerSlot::Uninitialized => None,
        }
    }
}
