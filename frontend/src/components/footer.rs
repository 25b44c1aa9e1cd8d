use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{CERTIFICATIONS, COMPANY_NAME, FOOTER_SERVICES, INFO_EMAIL, QUICK_LINKS, SISTER_CONCERN};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{COMPANY_NAME}</h3>
                    <p>{"Over three decades of engineering excellence in railway infrastructure across India."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|item| html! {
                            <li><Link<Route> to={item.route.clone()} classes="footer-link">{item.label}</Link<Route>></li>
                        })}
                    </ul>
                </div>
                <div>
                    <h4>{"Our Services"}</h4>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|name| html! {
                            <li><Link<Route> to={Route::Services} classes="footer-link">{*name}</Link<Route>></li>
                        })}
                    </ul>
                </div>
                <div>
                    <h4>{"Contact Info"}</h4>
                    <p>{"Ramapura Luxa, Varanasi, Uttar Pradesh 221010"}</p>
                    <p>{"+91-5422400225"}</p>
                    <p><a href={format!("mailto:{}", INFO_EMAIL)}>{INFO_EMAIL}</a></p>
                </div>
            </div>
            <div class="footer-certifications">
                { for CERTIFICATIONS.iter().map(|cert| html! { <span class="certification">{*cert}</span> }) }
            </div>
            <div class="footer-sister">
                <h4>{SISTER_CONCERN.name}</h4>
                <p>{"Specializing in precision machining and fabrication for ALCO & EMD Engines, Turbo Dowelling, HHP Traction Motors, and Industrial Blowers."}</p>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved. | Building the Future of Indian Railways", current_year, COMPANY_NAME)}
            </div>
        </footer>
    }
}
