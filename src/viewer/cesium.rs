use js_sys::{Array, Function, Object, Promise, Reflect};
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Element;

use super::{CameraView, GlobeViewer, HeadingPitchRange, Subscription};
use crate::error::ViewerError;
use crate::geo::Matrix4;

// Imports from the global `Cesium` namespace loaded by index.html.
mod bindings {
    use js_sys::{Array, Function, Object, Promise};
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Cesium)]
        #[derive(Clone)]
        pub type Viewer;
        #[wasm_bindgen(constructor, js_namespace = Cesium, catch)]
        pub fn new(container: &Element, options: &Object) -> Result<Viewer, JsValue>;
        #[wasm_bindgen(method, getter)]
        pub fn scene(this: &Viewer) -> Scene;
        #[wasm_bindgen(method, getter)]
        pub fn camera(this: &Viewer) -> Camera;
        #[wasm_bindgen(method, getter)]
        pub fn clock(this: &Viewer) -> Clock;
        #[wasm_bindgen(method)]
        pub fn destroy(this: &Viewer);
        #[wasm_bindgen(method, js_name = isDestroyed)]
        pub fn is_destroyed(this: &Viewer) -> bool;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type Scene;
        #[wasm_bindgen(method, getter, js_name = imageryLayers)]
        pub fn imagery_layers(this: &Scene) -> ImageryLayerCollection;
        #[wasm_bindgen(method, getter)]
        pub fn primitives(this: &Scene) -> PrimitiveCollection;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type Camera;
        #[wasm_bindgen(method, js_name = lookAtTransform)]
        pub fn look_at_transform(this: &Camera, transform: &CesiumMatrix4, offset: &HeadingPitchRange);
        #[wasm_bindgen(method, js_name = lookAtTransform)]
        pub fn release_transform(this: &Camera, transform: &CesiumMatrix4);
        #[wasm_bindgen(method)]
        pub fn rotate(this: &Camera, axis: &Cartesian3, angle: f64);
        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Camera, options: &Object);

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type Clock;
        #[wasm_bindgen(method, getter, js_name = onTick)]
        pub fn on_tick(this: &Clock) -> TickEvent;

        #[wasm_bindgen(js_namespace = Cesium, js_name = Event)]
        pub type TickEvent;
        /// Returns a function that removes the listener again.
        #[wasm_bindgen(method, js_name = addEventListener)]
        pub fn add_event_listener(this: &TickEvent, listener: &Function) -> Function;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type ImageryLayerCollection;
        #[wasm_bindgen(method, js_name = addImageryProvider)]
        pub fn add_imagery_provider(
            this: &ImageryLayerCollection,
            provider: &UrlTemplateImageryProvider,
        ) -> ImageryLayer;
        #[wasm_bindgen(method)]
        pub fn remove(this: &ImageryLayerCollection, layer: &ImageryLayer, destroy: bool) -> bool;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type ImageryLayer;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type UrlTemplateImageryProvider;
        #[wasm_bindgen(constructor, js_namespace = Cesium, catch)]
        pub fn new(options: &Object) -> Result<UrlTemplateImageryProvider, JsValue>;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type PrimitiveCollection;
        #[wasm_bindgen(method, catch)]
        pub fn add(this: &PrimitiveCollection, primitive: &JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type HeadingPitchRange;
        #[wasm_bindgen(constructor, js_namespace = Cesium)]
        pub fn new(heading: f64, pitch: f64, range: f64) -> HeadingPitchRange;

        #[wasm_bindgen(js_namespace = Cesium)]
        pub type Cartesian3;
        #[wasm_bindgen(constructor, js_namespace = Cesium)]
        pub fn new(x: f64, y: f64, z: f64) -> Cartesian3;
        #[wasm_bindgen(static_method_of = Cartesian3, js_namespace = Cesium, js_name = fromDegrees)]
        pub fn from_degrees(lon: f64, lat: f64, height: f64) -> Cartesian3;

        #[wasm_bindgen(js_namespace = Cesium, js_name = Matrix4)]
        pub type CesiumMatrix4;
        #[wasm_bindgen(js_namespace = ["Cesium", "Matrix4"], js_name = fromColumnMajorArray)]
        pub fn matrix4_from_column_major_array(values: &Array) -> CesiumMatrix4;

        #[wasm_bindgen(js_namespace = ["Cesium", "Cesium3DTileset"], js_name = fromUrl, catch)]
        pub fn tileset_from_url(url: &str) -> Result<Promise, JsValue>;
    }
}

// The page supplies its own controls.
const DISABLED_WIDGETS: [&str; 9] = [
    "baseLayer",
    "sceneModePicker",
    "navigationHelpButton",
    "animation",
    "timeline",
    "fullscreenButton",
    "baseLayerPicker",
    "homeButton",
    "geocoder",
];

fn set(obj: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn to_cesium_matrix(m: &Matrix4) -> bindings::CesiumMatrix4 {
    let values: Array = m.0.iter().map(|v| JsValue::from_f64(*v)).collect();
    bindings::matrix4_from_column_major_array(&values)
}

#[derive(Clone)]
pub struct CesiumViewer {
    viewer: bindings::Viewer,
}

impl CesiumViewer {
    pub fn mount(container: &Element) -> Result<Self, ViewerError> {
        let options = Object::new();
        for key in DISABLED_WIDGETS {
            set(&options, key, &JsValue::FALSE);
        }
        let viewer = bindings::Viewer::new(container, &options)
            .map_err(|e| ViewerError::js("new Viewer", &e))?;
        info!("cesium viewer mounted");
        Ok(Self { viewer })
    }

    pub fn destroy(self) {
        if !self.viewer.is_destroyed() {
            self.viewer.destroy();
            info!("cesium viewer destroyed");
        }
    }
}

impl GlobeViewer for CesiumViewer {
    type Layer = bindings::ImageryLayer;

    fn look_at_transform(&self, transform: &Matrix4, offset: HeadingPitchRange) {
        let transform = to_cesium_matrix(transform);
        let offset = bindings::HeadingPitchRange::new(offset.heading, offset.pitch, offset.range);
        self.viewer.camera().look_at_transform(&transform, &offset);
    }

    fn release_camera_frame(&self) {
        let identity = to_cesium_matrix(&Matrix4::IDENTITY);
        self.viewer.camera().release_transform(&identity);
    }

    fn rotate_camera(&self, axis: [f64; 3], angle: f64) {
        let axis = bindings::Cartesian3::new(axis[0], axis[1], axis[2]);
        self.viewer.camera().rotate(&axis, angle);
    }

    fn set_view(&self, view: CameraView) {
        let d = view.destination;
        let orientation = Object::new();
        set(&orientation, "heading", &view.orientation.heading.into());
        set(&orientation, "pitch", &view.orientation.pitch.into());
        set(&orientation, "roll", &view.orientation.roll.into());
        let options = Object::new();
        set(
            &options,
            "destination",
            &bindings::Cartesian3::from_degrees(d.lon_deg, d.lat_deg, d.height_m),
        );
        set(&options, "orientation", &orientation);
        self.viewer.camera().set_view(&options);
    }

    fn on_tick(&self, callback: Box<dyn FnMut()>) -> Subscription {
        let closure = Closure::wrap(callback);
        let remove: Function = self
            .viewer
            .clock()
            .on_tick()
            .add_event_listener(closure.as_ref().unchecked_ref());
        Subscription::new(move || {
            // Throws if the viewer was destroyed first; the listener is gone either way.
            let _ = remove.call0(&JsValue::NULL);
            drop(closure);
        })
    }

    fn add_imagery_layer(&self, url_template: &str) -> Result<Self::Layer, ViewerError> {
        let options = Object::new();
        set(&options, "url", &JsValue::from_str(url_template));
        let provider = bindings::UrlTemplateImageryProvider::new(&options)
            .map_err(|e| ViewerError::js("new UrlTemplateImageryProvider", &e))?;
        Ok(self.viewer.scene().imagery_layers().add_imagery_provider(&provider))
    }

    fn remove_imagery_layer(&self, layer: Self::Layer) {
        if !self.viewer.is_destroyed() {
            self.viewer.scene().imagery_layers().remove(&layer, true);
        }
    }

    fn load_tileset(&self, url: &str) {
        let promise: Promise = match bindings::tileset_from_url(url) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %ViewerError::js("Cesium3DTileset.fromUrl", &e), "3D tileset rejected");
                return;
            }
        };
        let viewer = self.viewer.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(tileset) => {
                    if viewer.is_destroyed() {
                        return;
                    }
                    match viewer.scene().primitives().add(&tileset) {
                        Ok(_) => info!("3D tileset loaded"),
                        Err(e) => warn!(error = %ViewerError::js("primitives.add", &e), "3D tileset not attached"),
                    }
                }
                Err(e) => {
                    warn!(error = %ViewerError::js("Cesium3DTileset.fromUrl", &e), "3D tileset failed to load")
                }
            }
        });
    }
}
