use yew::prelude::*;

use crate::components::expandable::use_expanded;
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::{Leader, ADVISORS, COMPANY_NAME, LEADERS};

fn mailto(leader: &Leader) -> String {
    let subject = format!("Enquiry for {} - {}", leader.name, COMPANY_NAME);
    format!("mailto:{}?subject={}", leader.email, urlencoding::encode(&subject))
}

const HONORIFICS: &[&str] = &["Mr.", "Ms.", "Mrs.", "Dr.", "Er."];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !HONORIFICS.contains(part))
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[derive(Properties, PartialEq)]
struct LeaderCardProps {
    leader: &'static Leader,
    flipped: bool,
    on_flip: Callback<u32>,
}

#[function_component(LeaderCard)]
fn leader_card(props: &LeaderCardProps) -> Html {
    let leader = props.leader;
    let (badges, more) = leader.expertise_badges();
    let flip = {
        let on_flip = props.on_flip.clone();
        let id = leader.id;
        Callback::from(move |_: MouseEvent| on_flip.emit(id))
    };

    html! {
        <div class={classes!("leader-card", props.flipped.then(|| "flipped"))}>
            <div class="leader-card-inner">
                <div class="leader-face front">
                    <div class="avatar">{initials(leader.name)}</div>
                    <h3>{leader.name}</h3>
                    <p class="designation">{leader.designation}</p>
                    <p class="muted">{leader.education}</p>
                    <p class="muted">{format!("Experience: {}", leader.experience)}</p>
                    <div class="badges">
                        { for badges.iter().map(|b| html! { <span class="badge">{*b}</span> }) }
                        if let Some(n) = more {
                            <span class="badge muted">{format!("+{} more", n)}</span>
                        }
                    </div>
                    <button class="btn-outline" onclick={flip.clone()}>{"Read Bio"}</button>
                </div>
                <div class="leader-face back">
                    <h3>{leader.name}</h3>
                    <p>{leader.bio}</p>
                    <h4>{"Key Achievements"}</h4>
                    <ul class="feature-list">
                        { for leader.achievements.iter().map(|a| html! { <li>{*a}</li> }) }
                    </ul>
                    <div class="badges">
                        { for leader.expertise.iter().map(|b| html! { <span class="badge">{*b}</span> }) }
                    </div>
                    <div class="leader-actions">
                        <a class="btn-primary" href={mailto(leader)}>{"Contact"}</a>
                        <button class="btn-outline" onclick={flip}>{"Back"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Leadership)]
pub fn leadership() -> Html {
    let (flipped, on_flip) = use_expanded::<u32>();

    html! {
        <div class="leadership-page">
            <PageBanner title="Our Leadership" breadcrumbs={vec![Breadcrumb::current("Leadership")]} />
            <style>
                {r#"
                    .leader-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .leader-card { perspective: 1200px; min-height: 520px; }
                    .leader-card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        min-height: 520px;
                        transition: transform 0.7s;
                        transform-style: preserve-3d;
                    }
                    .leader-card.flipped .leader-card-inner { transform: rotateY(180deg); }
                    .leader-face {
                        position: absolute;
                        inset: 0;
                        padding: 2rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 8px 24px rgba(1, 5, 77, 0.1);
                        backface-visibility: hidden;
                        overflow-y: auto;
                    }
                    .leader-face.back { transform: rotateY(180deg); }
                    .avatar {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #01054d, #022a61);
                        color: #fff;
                        font-size: 2rem;
                        margin: 0 auto 1rem;
                    }
                    .designation { color: #022a61; font-weight: 600; }
                    .leader-actions { display: flex; gap: 0.75rem; margin-top: 1rem; }
                "#}
            </style>
            <section class="section">
                <Reveal class="section-header">
                    <h2>{"Meet the People Behind Our Success"}</h2>
                    <p>{"Visionaries and engineers who have shaped three decades of railway infrastructure."}</p>
                </Reveal>
                <div class="leader-grid">
                    { for LEADERS.iter().map(|leader| html! {
                        <LeaderCard
                            key={leader.id}
                            {leader}
                            flipped={flipped == Some(leader.id)}
                            on_flip={on_flip.clone()}
                        />
                    })}
                </div>
            </section>
            <section class="section advisors">
                <h2 class="section-title">{"Advisory Board"}</h2>
                <div class="card-grid">
                    { for ADVISORS.iter().map(|advisor| html! {
                        <Reveal class="info-card" trigger={RevealTrigger::once(0.85)}>
                            <div class="avatar">{initials(advisor.name)}</div>
                            <h3>{advisor.name}</h3>
                            <p class="designation">{advisor.position}</p>
                            <p>{advisor.speciality}</p>
                            <p class="muted">{advisor.experience}</p>
                        </Reveal>
                    })}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_honorifics() {
        assert_eq!(initials("Mr. Sandeep Sukhwani"), "SS");
        assert_eq!(initials("Er. Rajesh Mehta"), "RM");
        assert_eq!(initials("Dr. Rajesh Sharma"), "RS");
        assert_eq!(initials("Mr. S. Kumar"), "SK");
    }

    #[test]
    fn mailto_encodes_subject() {
        let link = mailto(&LEADERS[0]);
        assert!(link.starts_with("mailto:s.kumar@khemchandgroup.com?subject="));
        assert!(link.contains("Enquiry%20for%20Mr.%20S.%20Kumar"));
        assert!(!link.contains(' '));
    }
}
