use std::rc::Rc;
use tracing::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use super::fallback_image::FallbackImage;
use super::location_panel::LocationPanel;
use crate::config::AppConfig;
use crate::controller::{FocusController, ViewerSlot};
use crate::error::ViewerError;
use crate::model::Location;
use crate::state::{MapAction, MapUiState};
use crate::tiles;
use crate::viewer::{CesiumViewer, GlobeViewer};

#[derive(Properties, PartialEq, Clone)]
pub struct MapSectionProps {
    pub locations: Rc<Vec<Location>>,
    pub config: Rc<AppConfig>,
}

fn log_outcome(action: &str, result: Result<(), ViewerError>) -> bool {
    match result {
        Ok(()) => true,
        Err(ViewerError::NotReady) => {
            debug!(action, "viewer not ready, ignoring");
            false
        }
        Err(e) => {
            warn!(action, error = %e, "viewer call failed");
            false
        }
    }
}

#[function_component(MapSection)]
pub fn map_section(props: &MapSectionProps) -> Html {
    let container_ref = use_node_ref();
    let slot = use_mut_ref(ViewerSlot::<CesiumViewer>::default);
    let ui = use_reducer(MapUiState::default);

    // Mount the Cesium viewer once; destroy it with the section
    {
        let container_ref = container_ref.clone();
        let slot = slot.clone();
        let ui = ui.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            match container_ref.cast::<Element>().map(|el| CesiumViewer::mount(&el)) {
                Some(Ok(viewer)) => {
                    match config.tileset_url() {
                        Ok(url) => viewer.load_tileset(&url),
                        Err(e) => warn!(error = %e, "photorealistic 3D tiles disabled"),
                    }
                    let controller = FocusController::new(viewer);
                    controller.reset_view();
                    slot.borrow_mut().install(controller);
                    ui.dispatch(MapAction::ViewerReady);

                    if config.api_key.is_some() {
                        let slot = slot.clone();
                        let ui = ui.clone();
                        let config = config.clone();
                        spawn_local(async move {
                            match tiles::imagery_template(&config).await {
                                Ok(template) => {
                                    let installed = slot
                                        .borrow_mut()
                                        .controller()
                                        .map(|c| c.set_imagery_source(Some(template)));
                                    if installed.is_ok() {
                                        ui.dispatch(MapAction::ImageryAvailable);
                                    }
                                }
                                Err(e) => warn!(error = %e, "2D tiles unavailable, overlay shows photos only"),
                            }
                        });
                    }
                }
                Some(Err(e)) => {
                    error!(error = %e, "could not create the 3D viewer");
                    ui.dispatch(MapAction::ViewerFailed(e.to_string()));
                }
                None => error!("map container missing"),
            }
            move || {
                if let Some(viewer) = slot.borrow_mut().teardown() {
                    viewer.destroy();
                }
            }
        });
    }

    let on_select = {
        let slot = slot.clone();
        let ui = ui.clone();
        let locations = props.locations.clone();
        Callback::from(move |idx: usize| {
            let Some(location) = locations.get(idx).cloned() else {
                return;
            };
            let result = slot
                .borrow_mut()
                .controller()
                .and_then(|c| c.set_selection(location));
            if log_outcome("select", result) {
                ui.dispatch(MapAction::Select(idx));
            }
        })
    };
    let on_overlay = {
        let slot = slot.clone();
        let ui = ui.clone();
        Callback::from(move |pressed: bool| {
            let result = slot.borrow_mut().controller().map(|c| {
                c.toggle_overlay(pressed);
            });
            log_outcome("overlay", result);
            ui.dispatch(MapAction::Overlay(pressed));
        })
    };
    let on_reset = {
        let slot = slot.clone();
        let ui = ui.clone();
        Callback::from(move |()| {
            let result = slot.borrow_mut().controller().map(|c| c.clear_selection());
            if log_outcome("reset", result) {
                ui.dispatch(MapAction::ClearSelection);
            }
        })
    };

    let (overlay_image, caption) = match slot.borrow().get() {
        Some(c) => (
            c.overlay_image().map(str::to_string),
            c.selection().map(|loc| {
                if c.is_rotating() {
                    format!("Circling {}", loc.name())
                } else {
                    loc.name().to_string()
                }
            }),
        ),
        None => (None, None),
    };

    html! {
        <section style="padding:64px 0; background:#e5e7eb;">
            <div style="max-width:1200px; margin:0 auto; padding:0 16px;">
                <h2 style="font-size:36px; font-weight:700; margin:0 0 8px 0; text-align:center;">{"Affected Areas"}</h2>
                <p style="min-height:24px; margin:0 0 24px 0; text-align:center; color:#4b5563;">{ caption.unwrap_or_default() }</p>
                <div style="position:relative; height:600px;">
                    <div ref={container_ref} style="position:absolute; inset:0;"></div>
                    { if let Some(src) = overlay_image {
                        html!{ <FallbackImage src={src} alt="After the fire" style="position:absolute; inset:0; width:100%; height:100%; object-fit:cover; z-index:5;" /> }
                    } else { html!{} } }
                    { if let Some(msg) = &ui.viewer_error {
                        html!{ <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:#111827; color:#f9fafb; z-index:6;">{ format!("The 3D map could not be loaded: {}", msg) }</div> }
                    } else if !ui.viewer_ready {
                        html!{ <div style="position:absolute; bottom:16px; right:16px; color:#4b5563; font-size:13px;">{"Loading 3D map..."}</div> }
                    } else { html!{} } }
                    <LocationPanel
                        locations={props.locations.clone()}
                        selected={ui.selected}
                        overlay_showing={ui.overlay.is_showing()}
                        imagery_available={ui.imagery_available}
                        {on_select}
                        {on_overlay}
                        {on_reset}
                    />
                </div>
            </div>
        </section>
    }
}
