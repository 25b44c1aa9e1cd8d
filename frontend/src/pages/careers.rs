use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::expandable::use_expanded;
use crate::components::notification::{Notify, ToastContext};
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::{JobOpening, CAREERS_EMAIL, CAREER_BENEFITS, JOB_OPENINGS};
use crate::forms::{ApplicationField, ApplicationForm};
use crate::mailer;

#[derive(Properties, PartialEq)]
struct ApplicationModalProps {
    job_title: AttrValue,
    on_close: Callback<()>,
}

#[function_component(ApplicationModal)]
fn application_modal(props: &ApplicationModalProps) -> Html {
    let form = use_state(|| ApplicationForm::for_job(&props.job_title));
    let sending = use_state(|| false);
    let toasts = use_context::<ToastContext>();

    let on_input = |field: ApplicationField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_cover_letter = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(ApplicationField::CoverLetter, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let sending = sending.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let payload = match next.submit() {
                Ok(payload) => payload,
                Err(err) => {
                    if let Some(toasts) = &toasts {
                        toasts.error(&err.to_string(), err.detail());
                    }
                    return;
                }
            };
            info!("Application for {} from {}", payload.job_title, payload.from_email);
            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let toasts = toasts.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = mailer::send(&payload).await;
                sending.set(false);
                match result {
                    Ok(()) => {
                        form.set(next);
                        if let Some(toasts) = &toasts {
                            toasts.success(
                                "Application submitted successfully!",
                                "We'll review your application and get back to you soon.",
                            );
                        }
                        on_close.emit(());
                    }
                    Err(e) => {
                        error!("Application delivery failed: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error(
                                "Failed to submit application",
                                &format!("Please try again or email us directly at {}", CAREERS_EMAIL),
                            );
                        }
                    }
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={keep_open}>
                <div class="modal-header">
                    <h3>{format!("Apply for {}", props.job_title)}</h3>
                    <button class="modal-close" onclick={close}>{"×"}</button>
                </div>
                <form class="application-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <label>
                            {"First Name *"}
                            <input type="text" value={form.first_name.clone()} oninput={on_input(ApplicationField::FirstName)} />
                        </label>
                        <label>
                            {"Last Name"}
                            <input type="text" value={form.last_name.clone()} oninput={on_input(ApplicationField::LastName)} />
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            {"Email *"}
                            <input type="email" value={form.email.clone()} oninput={on_input(ApplicationField::Email)} />
                        </label>
                        <label>
                            {"Phone *"}
                            <input type="tel" value={form.phone.clone()} oninput={on_input(ApplicationField::Phone)} />
                        </label>
                    </div>
                    <label>
                        {"Years of Experience"}
                        <input type="text" value={form.experience.clone()} oninput={on_input(ApplicationField::Experience)} />
                    </label>
                    <label>
                        {"Cover Letter"}
                        <textarea rows="5" value={form.cover_letter.clone()} oninput={on_cover_letter}></textarea>
                    </label>
                    <button type="submit" class="btn-primary" disabled={*sending}>
                        { if *sending { "Submitting..." } else { "Submit Application" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct JobCardProps {
    job: &'static JobOpening,
    open: bool,
    on_toggle: Callback<u32>,
    on_apply: Callback<&'static str>,
}

#[function_component(JobCard)]
fn job_card(props: &JobCardProps) -> Html {
    let job = props.job;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = job.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };
    let apply = {
        let on_apply = props.on_apply.clone();
        let title = job.title;
        Callback::from(move |_: MouseEvent| on_apply.emit(title))
    };

    let section = |heading: &'static str, items: &'static [&'static str]| html! {
        <div class="job-detail">
            <h4>{heading}</h4>
            <ul class="feature-list">
                { for items.iter().map(|i| html! { <li>{*i}</li> }) }
            </ul>
        </div>
    };

    html! {
        <div class={classes!("job-card", props.open.then(|| "open"))}>
            <div class="job-summary" onclick={toggle}>
                <div>
                    <h3>{job.title}</h3>
                    <div class="job-meta">
                        <span>{job.department}</span>
                        <span>{job.location}</span>
                        <span>{job.kind}</span>
                        <span>{job.experience}</span>
                    </div>
                </div>
                <span class="job-chevron">{ if props.open { "−" } else { "+" } }</span>
            </div>
            if props.open {
                <div class="job-body">
                    <p>{job.description}</p>
                    <div class="job-details">
                        { section("Requirements", job.requirements) }
                        { section("Responsibilities", job.responsibilities) }
                        { section("Benefits", job.benefits) }
                    </div>
                    <button class="btn-primary" onclick={apply}>{"Apply Now"}</button>
                </div>
            }
        </div>
    }
}

#[function_component(Careers)]
pub fn careers() -> Html {
    let (expanded, on_toggle) = use_expanded::<u32>();
    let applying = use_state(|| None::<&'static str>);

    let on_apply = {
        let applying = applying.clone();
        Callback::from(move |title: &'static str| applying.set(Some(title)))
    };
    let on_close = {
        let applying = applying.clone();
        Callback::from(move |_: ()| applying.set(None))
    };

    html! {
        <div class="careers-page">
            <PageBanner title="Careers" breadcrumbs={vec![Breadcrumb::current("Careers")]} />
            <style>
                {r#"
                    .job-card { background: #fff; border-radius: 12px; margin-bottom: 1rem; box-shadow: 0 4px 16px rgba(1, 5, 77, 0.08); }
                    .job-summary { display: flex; justify-content: space-between; align-items: center; padding: 1.5rem; cursor: pointer; }
                    .job-meta { display: flex; flex-wrap: wrap; gap: 1rem; color: #666; font-size: 0.9rem; }
                    .job-chevron { font-size: 1.5rem; color: #022a61; }
                    .job-body { padding: 0 1.5rem 1.5rem; }
                    .job-details { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(1, 5, 77, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 90;
                    }
                    .modal { background: #fff; border-radius: 16px; padding: 2rem; width: min(640px, 92vw); max-height: 90vh; overflow-y: auto; }
                    .modal-header { display: flex; justify-content: space-between; align-items: center; }
                    .modal-close { background: none; border: none; font-size: 1.5rem; cursor: pointer; }
                "#}
            </style>

            <section class="section">
                <Reveal class="section-header">
                    <h2>{"Why Work With Us"}</h2>
                    <p>{"Build your career with a company that has shaped Indian railway infrastructure for over three decades."}</p>
                </Reveal>
                <div class="card-grid">
                    { for CAREER_BENEFITS.iter().map(|b| html! {
                        <Reveal class="info-card" trigger={RevealTrigger::once(0.85)}>
                            <i class={b.icon}></i>
                            <h3>{b.title}</h3>
                            <p>{b.description}</p>
                        </Reveal>
                    })}
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Current Openings"}</h2>
                { for JOB_OPENINGS.iter().map(|job| html! {
                    <JobCard
                        key={job.id}
                        {job}
                        open={expanded == Some(job.id)}
                        on_toggle={on_toggle.clone()}
                        on_apply={on_apply.clone()}
                    />
                })}
            </section>

            <section class="section cta-band">
                <h2>{"Don't see a role that fits?"}</h2>
                <p>{"Send your resume and we'll reach out when a matching position opens."}</p>
                <a class="btn-primary" href={format!("mailto:{}", CAREERS_EMAIL)}>{CAREERS_EMAIL}</a>
            </section>

            if let Some(title) = *applying {
                <ApplicationModal job_title={title} {on_close} />
            }
        </div>
    }
}
