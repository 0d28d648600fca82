use std::rc::Rc;
use yew::prelude::*;

use crate::model::Location;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationPanelProps {
    pub locations: Rc<Vec<Location>>,
    pub selected: Option<usize>,
    pub overlay_showing: bool,
    pub imagery_available: bool,
    pub on_select: Callback<usize>,
    /// true on press, false on release or when the pointer leaves the button.
    pub on_overlay: Callback<bool>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn LocationPanel(props: &LocationPanelProps) -> Html {
    let press = {
        let cb = props.on_overlay.clone();
        Callback::from(move |_: MouseEvent| cb.emit(true))
    };
    let release = {
        let cb = props.on_overlay.clone();
        Callback::from(move |_: MouseEvent| cb.emit(false))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let hold_label = if props.imagery_available {
        "Hold to Show 2D Tiles"
    } else {
        "Hold to Show After Photo"
    };
    let button_style = |active: bool| {
        format!(
            "margin-top:16px; background:{}; color:#fff; padding:8px 16px; border:none; border-radius:4px; cursor:pointer; transition:background 0.3s;",
            if active { "#1d4ed8" } else { "#2563eb" }
        )
    };

    let selected_description = props
        .selected
        .and_then(|i| props.locations.get(i))
        .and_then(Location::description)
        .map(str::to_string);

    html! {<div style="position:absolute; top:16px; left:16px; background:rgba(255,255,255,0.85); padding:16px; border-radius:8px; z-index:10; max-width:280px;">
        <h3 style="font-size:20px; font-weight:600; margin:0 0 8px 0;">{"Affected Locations"}</h3>
        <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
            { for props.locations.iter().enumerate().map(|(i, loc)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(i));
                let weight = if props.selected == Some(i) { "font-weight:600;" } else { "" };
                html! {
                    <li key={loc.name().to_string()} {onclick} style={format!("cursor:pointer; color:#2563eb; {}", weight)}>
                        { loc.name().to_string() }
                    </li>
                }
            }) }
        </ul>
        { if let Some(text) = selected_description { html!{ <p style="font-size:13px; color:#374151; margin:10px 0 0 0;">{ text }</p> } } else { html!{} } }
        <div style="display:flex; gap:8px; flex-wrap:wrap;">
            <button
                style={button_style(props.overlay_showing)}
                onmousedown={press}
                onmouseup={release.clone()}
                onmouseleave={release}
            >
                { hold_label }
            </button>
            { if props.selected.is_some() { html!{ <button style={button_style(false)} onclick={reset}>{"Back to overview"}</button> } } else { html!{} } }
        </div>
    </div>}
}
