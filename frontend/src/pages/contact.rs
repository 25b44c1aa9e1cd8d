use yew::prelude::*;

use crate::components::contact_form::ContactFormCard;
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <PageBanner title="Contact Us" breadcrumbs={vec![Breadcrumb::current("Contact Us")]} />
            <section class="section">
                <div class="card-grid">
                    { for CONTACT_INFO.iter().map(|info| html! {
                        <Reveal class="info-card" trigger={RevealTrigger::once(0.9)}>
                            <i class={info.icon}></i>
                            <h3>{info.title}</h3>
                            { for info.details.iter().map(|d| html! { <p>{*d}</p> }) }
                        </Reveal>
                    })}
                </div>
            </section>
            <section class="section">
                <div class="two-col">
                    <Reveal class="contact-form-wrap" trigger={RevealTrigger::once(0.8)}>
                        <h2>{"Send Us a Message"}</h2>
                        <ContactFormCard />
                    </Reveal>
                    <Reveal class="contact-aside" trigger={RevealTrigger::once(0.8)}>
                        <div class="map-embed">
                            <iframe
                                title="Khemchand Group head office"
                                src="https://maps.google.com/maps?q=Ramapura%20Luxa%2C%20Varanasi&output=embed"
                                loading="lazy"
                            ></iframe>
                        </div>
                        <h3>{"Follow Us"}</h3>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|s| html! {
                                <a href={s.href} target="_blank" rel="noopener noreferrer">{s.name}</a>
                            })}
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
