use yew::prelude::*;

#[function_component(InfoSection)]
pub fn info_section() -> Html {
    let heading = "font-size:24px; font-weight:600; margin:0 0 16px 0;";
    let body = "color:#374151; line-height:1.6; margin:0;";
    html! {
        <section style="padding:64px 0; background:#f3f4f6;">
            <div style="max-width:1100px; margin:0 auto; padding:0 16px;">
                <h2 style="font-size:36px; font-weight:700; margin:0 0 32px 0; text-align:center;">{"The Lahaina Fires"}</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(320px, 1fr)); gap:32px;">
                    <div>
                        <h3 style={heading}>{"The Devastation"}</h3>
                        <p style={body}>
                            {"In August 2023, the historic town of Lahaina on Maui, Hawaii, was devastated by wildfires. \
                              The fires, fueled by dry conditions and strong winds, destroyed over 2,000 structures and \
                              displaced thousands of residents."}
                        </p>
                    </div>
                    <div>
                        <h3 style={heading}>{"The Impact"}</h3>
                        <p style={body}>
                            {"The fires have had a profound impact on the community, destroying homes, businesses, and \
                              historic landmarks. The recovery process is ongoing, with efforts focused on rebuilding \
                              and supporting those affected by this tragedy."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
