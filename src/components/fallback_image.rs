use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::model::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq, Clone)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub style: AttrValue,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            // Guard against the placeholder itself being missing.
            if !img.src().ends_with(PLACEHOLDER_IMAGE) {
                tracing::debug!(src = %img.src(), "image missing, using placeholder");
                img.set_src(PLACEHOLDER_IMAGE);
            }
        }
    });
    html! {
        <img src={props.src.clone()} alt={props.alt.clone()} style={props.style.clone()} {onerror} />
    }
}
