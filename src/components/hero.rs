use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::state::{Carousel, CarouselAction, timer_timeout};

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub backgrounds: Rc<Vec<String>>,
    pub interval_ms: u32,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let carousel = use_reducer(|| Carousel::new(props.backgrounds.len()));

    // Cycle the background on a fixed interval
    {
        let carousel = carousel.clone();
        use_effect_with(props.interval_ms, move |interval_ms| {
            let tick = Closure::wrap(Box::new(move || {
                carousel.dispatch(CarouselAction::Advance);
            }) as Box<dyn FnMut()>);
            let window = web_sys::window();
            let interval_id = window.as_ref().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    timer_timeout(*interval_ms),
                )
                .ok()
            });
            move || {
                if let (Some(w), Some(id)) = (window, interval_id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let background = carousel
        .current(&props.backgrounds)
        .map(|src| format!("background-image:url({});", src))
        .unwrap_or_default();

    html! {
        <section style={format!("position:relative; height:100vh; display:flex; align-items:center; justify-content:center; background-size:cover; background-position:center; transition:background-image 1s ease-in-out; {}", background)}>
            <div style="position:absolute; inset:0; background:#000; opacity:0.5;"></div>
            <div style="position:relative; z-index:10; text-align:center; color:#fff; padding:0 16px;">
                <h1 style="font-size:60px; font-weight:700; margin:0 0 16px 0;">{"Lahaina Fires: Before and After"}</h1>
                <p style="font-size:24px; margin:0;">{"Witness the impact and support the recovery"}</p>
            </div>
        </section>
    }
}
