use log::info;
use yew::prelude::*;

use crate::components::counter::StatGrid;
use crate::components::expandable::toggle;
use crate::components::page_banner::{Breadcrumb, PageBanner};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::content::{filter_projects, Project, ProjectCategory, ProjectStatus, PROJECT_STATS, SISTER_CONCERN};

/// Keeps the open card only if it is still listed under the new filter.
fn expanded_after_filter(expanded: Option<u32>, visible: &[&Project]) -> Option<u32> {
    expanded.filter(|id| visible.iter().any(|p| p.id == *id))
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let category = use_state(|| ProjectCategory::All);
    let expanded = use_state(|| None::<u32>);
    let visible = filter_projects(*category);

    let on_filter = |next: ProjectCategory| {
        let category = category.clone();
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Project filter set to {}", next.label());
            expanded.set(expanded_after_filter(*expanded, &filter_projects(next)));
            category.set(next);
        })
    };

    html! {
        <div class="projects-page">
            <PageBanner title="Our Projects" breadcrumbs={vec![Breadcrumb::current("Projects")]} />
            <style>
                {r#"
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                        margin-bottom: 2.5rem;
                    }
                    .filter-btn {
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        border: 1px solid #022a61;
                        background: transparent;
                        color: #022a61;
                        cursor: pointer;
                    }
                    .filter-btn.active { background: #022a61; color: #fff; }
                    .project-card { border-radius: 16px; overflow: hidden; background: #fff; box-shadow: 0 8px 24px rgba(1, 5, 77, 0.08); }
                    .project-image { height: 200px; background-size: cover; background-position: center; position: relative; }
                    .status-badge { position: absolute; top: 1rem; right: 1rem; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.8rem; color: #fff; }
                    .status-badge.ongoing { background: #f59e0b; }
                    .status-badge.completed { background: #16a34a; }
                    .project-stats { display: flex; gap: 1rem; }
                    .project-stats div { flex: 1; text-align: center; }
                    .empty-state { text-align: center; color: #666; padding: 3rem 0; }
                "#}
            </style>

            <section class="section">
                <div class="filter-bar">
                    { for ProjectCategory::FILTERS.iter().map(|c| html! {
                        <button
                            class={classes!("filter-btn", (*c == *category).then(|| "active"))}
                            onclick={on_filter(*c)}
                        >
                            {c.label()}
                        </button>
                    })}
                </div>

                if visible.is_empty() {
                    <p class="empty-state">{"No projects in this category yet."}</p>
                } else {
                    <div class="card-grid">
                        { for visible.iter().map(|project| {
                            let open = *expanded == Some(project.id);
                            let on_click = {
                                let expanded = expanded.clone();
                                let id = project.id;
                                Callback::from(move |_: MouseEvent| expanded.set(toggle(*expanded, id)))
                            };
                            html! {
                                <Reveal key={project.id} class="project-card" trigger={RevealTrigger::once(0.9)}>
                                    <div class="project-image" style={format!("background-image: url({});", project.image)}>
                                        <span class={classes!(
                                            "status-badge",
                                            match project.status {
                                                ProjectStatus::Ongoing => "ongoing",
                                                ProjectStatus::Completed => "completed",
                                            }
                                        )}>
                                            {project.status.label()}
                                        </span>
                                    </div>
                                    <div class="card-body">
                                        <span class="muted">{format!("{} · {}", project.category.label(), project.year)}</span>
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <p class="muted">{format!("{} · {}", project.location, project.client)}</p>
                                        <div class="project-stats">
                                            { for project.stats.iter().map(|(label, value)| html! {
                                                <div>
                                                    <strong>{*value}</strong>
                                                    <p class="muted">{*label}</p>
                                                </div>
                                            })}
                                        </div>
                                        if open {
                                            <ul class="feature-list">
                                                { for project.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                                            </ul>
                                        }
                                        <button class="btn-outline" onclick={on_click}>
                                            { if open { "Show Less" } else { "View Details" } }
                                        </button>
                                    </div>
                                </Reveal>
                            }
                        })}
                    </div>
                }
            </section>

            <StatGrid stats={PROJECT_STATS} title="Project Highlights" />

            <section class="section sister-concern">
                <Reveal class="info-card" trigger={RevealTrigger::once(0.8)}>
                    <span class="muted">{"Sister Concern"}</span>
                    <h2>{SISTER_CONCERN.name}</h2>
                    <p>{SISTER_CONCERN.description}</p>
                    <ul class="feature-list two-col">
                        { for SISTER_CONCERN.services.iter().map(|s| html! { <li>{*s}</li> }) }
                    </ul>
                    <div class="project-stats">
                        { for SISTER_CONCERN.achievements.iter().map(|(number, label)| html! {
                            <div>
                                <strong>{*number}</strong>
                                <p class="muted">{*label}</p>
                            </div>
                        })}
                    </div>
                </Reveal>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_card_survives_when_still_visible() {
        let welding = filter_projects(ProjectCategory::Welding);
        assert_eq!(expanded_after_filter(Some(1), &welding), Some(1));
    }

    #[test]
    fn open_card_collapses_when_filtered_out() {
        let testing = filter_projects(ProjectCategory::Testing);
        assert_eq!(expanded_after_filter(Some(1), &testing), None);
        assert_eq!(expanded_after_filter(None, &testing), None);
    }
}
