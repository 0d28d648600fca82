use std::rc::Rc;
use yew::prelude::*;

use super::fallback_image::FallbackImage;
use crate::model::DonationLink;

#[derive(Properties, PartialEq, Clone)]
pub struct DonationCardProps {
    pub link: DonationLink,
}

#[function_component]
pub fn DonationCard(props: &DonationCardProps) -> Html {
    let link = &props.link;
    html! {
        <div style="background:#fff; border-radius:8px; box-shadow:0 4px 6px rgba(0,0,0,0.1); overflow:hidden; display:flex; flex-direction:column;">
            <FallbackImage src={link.image.clone()} alt={link.name.clone()} style="width:100%; height:160px; object-fit:cover;" />
            <div style="padding:24px; display:flex; flex-direction:column; flex:1;">
                <h3 style="font-size:20px; font-weight:600; margin:0 0 8px 0;">{ link.name.clone() }</h3>
                <p style="color:#4b5563; font-size:14px; margin:0 0 16px 0; flex:1;">{ link.description.clone() }</p>
                <a href={link.url.clone()} target="_blank" rel="noopener noreferrer"
                    style="align-self:flex-start; background:#2563eb; color:#fff; padding:8px 16px; border-radius:4px; text-decoration:none;">
                    {"Donate Now"}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DonationGalleryProps {
    pub donations: Rc<Vec<DonationLink>>,
}

#[function_component]
pub fn DonationGallery(props: &DonationGalleryProps) -> Html {
    html! {
        <section style="padding:64px 0; background:#f3f4f6;">
            <div style="max-width:1200px; margin:0 auto; padding:0 16px;">
                <h2 style="font-size:36px; font-weight:700; margin:0 0 32px 0; text-align:center;">{"Support the Recovery"}</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(240px, 1fr)); gap:32px;">
                    { for props.donations.iter().map(|link| html! { <DonationCard key={link.name.clone()} link={link.clone()} /> }) }
                </div>
            </div>
        </section>
    }
}
