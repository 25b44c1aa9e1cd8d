use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::StatGrid;
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::{ABOUT_STATS, CERTIFICATIONS, MILESTONES};
use crate::Route;

struct Value {
    title: &'static str,
    description: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        title: "Quality First",
        description: "Every sleeper, weld and test report meets Indian Railway and RDSO specifications.",
    },
    Value {
        title: "Safety",
        description: "Track safety drives how we plan, execute and inspect every project.",
    },
    Value {
        title: "Innovation",
        description: "We bring modern welding, testing and monitoring technology to Indian track.",
    },
    Value {
        title: "Partnership",
        description: "Long-standing relationships with railway zones built on timely delivery.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <PageBanner title="About Us" breadcrumbs={vec![Breadcrumb::current("About Us")]} />

            <section class="section">
                <div class="two-col">
                    <Reveal class="about-text" trigger={RevealTrigger::once(0.8)}>
                        <h2>{"Engineering Excellence Since 1990"}</h2>
                        <p>
                            {"Khemchand Group was founded by Mr. S. Kumar, a 1975 graduate of IIT Kanpur, with a mission to strengthen India's railway infrastructure. What started as a sleeper manufacturing unit is today a multi-disciplinary railway engineering company."}
                        </p>
                        <p>
                            {"We manufacture MBC sleepers, carry out flash butt welding and ultrasonic flaw detection, recondition CMS crossings and install broken rail detection and lubrication systems for zones across the country."}
                        </p>
                    </Reveal>
                    <Reveal class="vision-mission" trigger={RevealTrigger::once(0.8)}>
                        <div class="info-card">
                            <h3>{"Our Vision"}</h3>
                            <p>{"To be the most trusted engineering partner of Indian Railways, setting the benchmark for quality and safety in track infrastructure."}</p>
                        </div>
                        <div class="info-card">
                            <h3>{"Our Mission"}</h3>
                            <p>{"To deliver reliable products and services on time, invest in our people and adopt technology that makes rail travel safer."}</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <StatGrid stats={ABOUT_STATS} />

            <section class="section">
                <h2 class="section-title">{"Our Milestones"}</h2>
                <div class="vertical-timeline">
                    { for MILESTONES.iter().enumerate().map(|(i, m)| html! {
                        <Reveal
                            class={classes!("timeline-entry", if i % 2 == 0 { "left" } else { "right" })}
                            trigger={RevealTrigger::once(0.85)}
                        >
                            <span class="milestone-year">{m.year}</span>
                            <h4>{m.title}</h4>
                            <p>{m.description}</p>
                        </Reveal>
                    })}
                </div>
            </section>

            <section class="section values-section">
                <h2 class="section-title">{"Our Values"}</h2>
                <div class="card-grid">
                    { for VALUES.iter().map(|v| html! {
                        <Reveal class="info-card" trigger={RevealTrigger::once(0.85)}>
                            <h3>{v.title}</h3>
                            <p>{v.description}</p>
                        </Reveal>
                    })}
                </div>
            </section>

            <section class="section certifications">
                <h2 class="section-title">{"Certifications"}</h2>
                <ul class="badge-list">
                    { for CERTIFICATIONS.iter().map(|c| html! { <li class="badge">{*c}</li> }) }
                </ul>
                <div class="section-cta">
                    <Link<Route> to={Route::Leadership} classes="btn-primary">{"Meet Our Leadership"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
