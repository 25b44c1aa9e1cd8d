use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::expandable::use_expanded;
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::SERVICES;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    // indexed by position in SERVICES
    let (expanded, on_toggle) = use_expanded::<usize>();

    html! {
        <div class="services-page">
            <PageBanner title="Our Services" breadcrumbs={vec![Breadcrumb::current("Services")]} />
            <style>
                {r#"
                    .service-detail {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 3rem;
                        align-items: center;
                    }
                    .service-detail.flipped .service-image { order: 2; }
                    .service-image {
                        min-height: 280px;
                        border-radius: 16px;
                        background-size: cover;
                        background-position: center;
                    }
                    .service-stats { color: #022a61; font-weight: 600; }
                    .service-more { overflow: hidden; max-height: 0; transition: max-height 0.4s ease; }
                    .service-more.open { max-height: 400px; }
                    @media (max-width: 768px) {
                        .service-detail { grid-template-columns: 1fr; }
                        .service-detail.flipped .service-image { order: 0; }
                    }
                "#}
            </style>
            <section class="section">
                { for SERVICES.iter().enumerate().map(|(index, service)| {
                    let open = expanded == Some(index);
                    let toggle = {
                        let on_toggle = on_toggle.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
                    };
                    html! {
                        <Reveal
                            class={classes!("service-detail", (index % 2 == 1).then(|| "flipped"))}
                            trigger={RevealTrigger::once(0.85)}
                        >
                            <div
                                class="service-image"
                                style={format!("background-image: url({});", service.image)}
                            ></div>
                            <div class="service-body">
                                <i class={service.icon}></i>
                                <h2>{service.title}</h2>
                                <h4>{service.subtitle}</h4>
                                <p>{service.description}</p>
                                <p class="service-stats">{service.stats}</p>
                                <div class={classes!("service-more", open.then(|| "open"))}>
                                    <ul class="feature-list">
                                        { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                    </ul>
                                </div>
                                <button class="btn-outline" onclick={toggle}>
                                    { if open { "Show Less" } else { "Learn More" } }
                                </button>
                            </div>
                        </Reveal>
                    }
                })}
            </section>
            <section class="section cta-band">
                <h2>{"Need a custom solution?"}</h2>
                <p>{"Talk to our engineers about your track infrastructure requirements."}</p>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Contact Us"}</Link<Route>>
            </section>
        </div>
    }
}
