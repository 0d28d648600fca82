use std::rc::Rc;
use tracing::{error, info};
use yew::prelude::*;

use super::{
    donation_gallery::DonationGallery, hero::HeroSection, info_section::InfoSection,
    map_section::MapSection,
};
use crate::config::AppConfig;
use crate::model::{Content, DonationLink, Location};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

#[derive(PartialEq)]
struct Sections {
    locations: Rc<Vec<Location>>,
    donations: Rc<Vec<DonationLink>>,
    backgrounds: Rc<Vec<String>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo(props.config.clone(), |cfg| cfg.clone());
    let sections = use_memo((), |_| match Content::bundled() {
        Ok(content) => {
            info!(
                locations = content.locations.len(),
                donations = content.donations.len(),
                "content loaded"
            );
            Ok(Sections {
                locations: Rc::new(content.locations),
                donations: Rc::new(content.donations),
                backgrounds: Rc::new(content.background_images),
            })
        }
        Err(e) => {
            error!(error = %e, "bundled content is invalid");
            Err(e.to_string())
        }
    });

    match &*sections {
        Ok(s) => html! {
            <div style="display:flex; flex-direction:column; min-height:100vh; font-family:system-ui, sans-serif;">
                <HeroSection backgrounds={s.backgrounds.clone()} interval_ms={config.carousel_interval_ms} />
                <InfoSection />
                <MapSection locations={s.locations.clone()} config={config.clone()} />
                <DonationGallery donations={s.donations.clone()} />
            </div>
        },
        Err(msg) => html! {
            <div style="padding:32px; font-family:system-ui, sans-serif;">
                <h1>{"Lahaina Fires: Before and After"}</h1>
                <p>{ format!("This page could not load its content: {}", msg) }</p>
            </div>
        },
    }
}
