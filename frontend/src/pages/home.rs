use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{use_carousel, Autoplay, CarouselAction, CarouselControls};
use crate::components::contact_form::ContactFormCard;
use crate::components::counter::StatGrid;
use crate::components::loader::Loader;
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::components::timeline::DiagonalTimeline;
use crate::content::{
    CONTACT_INFO, HERO_SLIDES, HOME_STATS, JOB_OPENINGS, JOURNEY, JOURNEY_BREAKPOINTS, MILESTONES, SERVICES,
    TESTIMONIALS,
};
use crate::Route;

const HERO_DELAY_MS: u32 = 4000;
const TESTIMONIAL_DELAY_MS: u32 = 5000;

#[function_component(Hero)]
fn hero() -> Html {
    // the hero keeps rotating even after manual navigation
    let carousel = use_carousel(HERO_SLIDES.len(), HERO_DELAY_MS, true);

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let on_select = {
        let carousel = carousel.clone();
        Callback::from(move |i: usize| carousel.dispatch(CarouselAction::GoTo(i)))
    };

    html! {
        <section class="hero">
            { for HERO_SLIDES.iter().enumerate().map(|(index, slide)| html! {
                <div
                    key={index}
                    class={classes!("hero-slide", (index == carousel.index()).then(|| "active"))}
                    style={format!(
                        "background-image: linear-gradient(rgba(1, 5, 77, 0.7), rgba(2, 42, 97, 0.8)), url({});",
                        slide.image
                    )}
                >
                    <div class="hero-content">
                        <h1>{slide.title}</h1>
                        <p class="hero-subtitle">{slide.subtitle}</p>
                        if index == 0 {
                            <div class="hero-actions">
                                <Link<Route> to={Route::Services} classes="btn-primary">{"Explore Services"}</Link<Route>>
                                <Link<Route> to={Route::Projects} classes="btn-outline">{"View Projects"}</Link<Route>>
                            </div>
                        }
                    </div>
                </div>
            })}
            <CarouselControls
                index={carousel.index()}
                len={carousel.len()}
                {on_prev}
                {on_next}
                {on_select}
            />
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section class="section about-section">
            <Reveal class="section-header">
                <h2>{"About Khemchand Group"}</h2>
                <p>{"Three decades of engineering excellence in Indian railway infrastructure"}</p>
            </Reveal>
            <div class="two-col">
                <Reveal class="about-text" trigger={RevealTrigger::once(0.8)}>
                    <p>
                        {"Founded by Mr. S. Kumar, an IIT Kanpur alumnus, Khemchand Group has grown into a trusted partner of Indian Railways, delivering concrete sleepers, flash butt welding and ultrasonic flaw detection across the country."}
                    </p>
                    <p>
                        {"Under the leadership of Mr. Sandeep Sukhwani, MBA UK, we combine international best practices with deep domain expertise."}
                    </p>
                    <Link<Route> to={Route::About} classes="btn-primary">{"Learn More"}</Link<Route>>
                </Reveal>
                <div class="milestone-list">
                    { for MILESTONES.iter().map(|m| html! {
                        <Reveal class="milestone-item" trigger={RevealTrigger::once(0.85)}>
                            <span class="milestone-year">{m.year}</span>
                            <div>
                                <h4>{m.title}</h4>
                                <p>{m.description}</p>
                            </div>
                        </Reveal>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Journey)]
fn journey() -> Html {
    html! {
        <section class="section journey-section">
            <h2 class="section-title">{"Our Journey"}</h2>
            <DiagonalTimeline milestones={JOURNEY} breakpoints={JOURNEY_BREAKPOINTS} />
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section class="section services-section">
            <Reveal class="section-header">
                <h2>{"Our Services"}</h2>
                <p>{"Comprehensive railway engineering solutions built on decades of expertise"}</p>
            </Reveal>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <Reveal class="service-card" trigger={RevealTrigger::once(0.85)}>
                        <i class={service.icon}></i>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <ul class="feature-list">
                            { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                    </Reveal>
                })}
            </div>
            <div class="section-cta">
                <Link<Route> to={Route::Services} classes="btn-primary">{"View All Services"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let autoplay = use_state(Autoplay::default);
    let carousel = use_carousel(TESTIMONIALS.len(), TESTIMONIAL_DELAY_MS, autoplay.running());

    let navigate = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            autoplay.set(autoplay.stop());
            carousel.dispatch(action());
        })
    };
    let on_select = {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |i: usize| {
            autoplay.set(autoplay.stop());
            carousel.dispatch(CarouselAction::GoTo(i));
        })
    };
    let on_enter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(autoplay.hover(true)))
    };
    let on_leave = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(autoplay.hover(false)))
    };

    html! {
        <section class="section testimonials-section">
            <Reveal class="section-header">
                <h2>{"What Our Clients Say"}</h2>
                <p>{"Trusted by railway zones across India for over three decades"}</p>
            </Reveal>
            <div class="testimonial-carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
                { for TESTIMONIALS.iter().enumerate().map(|(index, t)| html! {
                    <div key={index} class={classes!("testimonial", (index == carousel.index()).then(|| "active"))}>
                        <p class="testimonial-message">{format!("\"{}\"", t.message)}</p>
                        <div class="testimonial-footer">
                            <div>
                                <h4>{t.name}</h4>
                                <p>{t.designation}</p>
                            </div>
                            <span class="zone-badge">{t.zone}</span>
                        </div>
                    </div>
                })}
                <CarouselControls
                    index={carousel.index()}
                    len={carousel.len()}
                    on_prev={navigate(|| CarouselAction::Prev)}
                    on_next={navigate(|| CarouselAction::Next)}
                    {on_select}
                />
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section class="section contact-section">
            <Reveal class="section-header">
                <h2>{"Get In Touch"}</h2>
                <p>{"Ready to discuss your railway infrastructure needs? Contact our expert team today."}</p>
            </Reveal>
            <div class="two-col">
                <Reveal class="contact-info" trigger={RevealTrigger::reversible(0.7)}>
                    { for CONTACT_INFO.iter().take(3).map(|info| html! {
                        <div class="contact-card">
                            <i class={info.icon}></i>
                            <div>
                                <h4>{info.title}</h4>
                                { for info.details.iter().map(|d| html! { <p>{*d}</p> }) }
                            </div>
                        </div>
                    })}
                    <div class="contact-card careers-teaser">
                        <h4>{"Current Openings"}</h4>
                        <ul>
                            { for JOB_OPENINGS.iter().map(|job| html! {
                                <li>
                                    <span>{job.title}</span>
                                    <span class="muted">{format!(" · {} · {}", job.department, job.kind)}</span>
                                </li>
                            })}
                        </ul>
                        <Link<Route> to={Route::Careers} classes="btn-outline">{"View Careers"}</Link<Route>>
                    </div>
                </Reveal>
                <Reveal class="contact-form-wrap" trigger={RevealTrigger::reversible(0.7)}>
                    <ContactFormCard show_company={true} />
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Loader />
            <div class="home-page">
                <Hero />
                <AboutSection />
                <Journey />
                <StatGrid stats={HOME_STATS} title="Our Achievements" />
                <ServicesSection />
                <Testimonials />
                <ContactSection />
            </div>
        </>
    }
}
