use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod content;
mod forms;
mod mailer;
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod counter;
    pub mod expandable;
    pub mod footer;
    pub mod loader;
    pub mod notification;
    pub mod page_banner;
    pub mod reveal;
    pub mod timeline;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod leadership;
    pub mod not_found;
    pub mod projects;
    pub mod services;
}

use components::footer::Footer;
use components::notification::{ToastStack, Toaster};
use content::{inquiry_phone, social_links, COMPANY_NAME, HEADER_SOCIALS, INFO_EMAIL, NAV_ITEMS};
use pages::{
    about::About,
    careers::Careers,
    contact::Contact,
    home::Home,
    leadership::Leadership,
    not_found::NotFound,
    projects::Projects,
    services::Services,
};

const SCROLLED_AFTER_PX: i32 = 50;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/projects")]
    Projects,
    #[at("/leadership")]
    Leadership,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Leadership => {
            info!("Rendering Leadership page");
            html! { <Leadership /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document
                    .document_element()
                    .map(|el| el.scroll_top())
                    .unwrap_or_default();
                is_scrolled.set(scroll_top > SCROLLED_AFTER_PX);
            }) as Box<dyn FnMut()>);

            let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

            move || {
                let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            if !*is_scrolled {
                <ContactStrip />
            }
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {COMPANY_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| {
                        let active = current.as_ref() == Some(&item.route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={item.route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}
                                >
                                    {item.label}
                                </Link<Route>>
                            </div>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}

#[function_component(ContactStrip)]
fn contact_strip() -> Html {
    html! {
        <div class="contact-strip">
            if let Some(phone) = inquiry_phone() {
                <a class="strip-item" href={format!("tel:{}", phone)}>
                    <i class="icon-phone"></i>
                    <span class="strip-label">{"Inquiry"}</span>
                    <span>{phone}</span>
                </a>
            }
            <div class="strip-socials">
                { for social_links(HEADER_SOCIALS).into_iter().map(|link| html! {
                    <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.name}>
                        <i class={format!("icon-{}", link.name.to_lowercase())}></i>
                    </a>
                })}
            </div>
            <a class="strip-item" href={format!("mailto:{}", INFO_EMAIL)}>
                <i class="icon-mail"></i>
                <span class="strip-label">{"Mail Us"}</span>
                <span>{INFO_EMAIL}</span>
            </a>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let toasts = use_reducer(ToastStack::default);

    html! {
        <BrowserRouter>
            <ContextProvider<UseReducerHandle<ToastStack>> context={toasts}>
                <Nav />
                <main class="page">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <Toaster />
            </ContextProvider<UseReducerHandle<ToastStack>>>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
