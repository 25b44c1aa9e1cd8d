use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: AttrValue,
    pub route: Option<Route>,
}

impl Breadcrumb {
    pub fn current(label: &'static str) -> Self {
        Self { label: label.into(), route: None }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    html! {
        <div class="page-banner">
            <div class="page-banner-inner">
                <h1>{props.title.clone()}</h1>
                <div class="breadcrumbs">
                    <Link<Route> to={Route::Home} classes="breadcrumb-link">{"Home"}</Link<Route>>
                    { for props.breadcrumbs.iter().map(|crumb| html! {
                        <>
                            <span class="breadcrumb-sep">{"›"}</span>
                            {
                                match &crumb.route {
                                    Some(route) => html! {
                                        <Link<Route> to={route.clone()} classes="breadcrumb-link">
                                            {crumb.label.clone()}
                                        </Link<Route>>
                                    },
                                    None => html! { <span class="breadcrumb-current">{crumb.label.clone()}</span> },
                                }
                            }
                        </>
                    })}
                </div>
            </div>
        </div>
    }
}
