use gloo_timers::callback::Timeout;
use yew::prelude::*;

const LOADER_MS: u32 = 2000;

/// Full-screen splash shown while the home page settles.
#[function_component(Loader)]
pub fn loader() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADER_MS, move || visible.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="loader">
            <style>
                {r#"
                    .loader {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #01054d;
                    }
                    .loader-track {
                        position: relative;
                        width: 160px;
                        height: 4px;
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 2px;
                        overflow: hidden;
                        margin: 1.5rem auto 0;
                    }
                    .loader-bar {
                        height: 100%;
                        background: #e11d48;
                        animation: slide 1.5s ease-in-out infinite;
                    }
                    .loader p { color: #fff; margin-top: 2rem; font-size: 1.1rem; }
                    @keyframes slide {
                        0% { width: 0%; margin-left: 0%; }
                        50% { width: 100%; margin-left: 0%; }
                        100% { width: 0%; margin-left: 100%; }
                    }
                "#}
            </style>
            <div style="text-align: center;">
                <i class="icon-train loader-icon"></i>
                <div class="loader-track"><div class="loader-bar"></div></div>
                <p>{"Loading Excellence..."}</p>
            </div>
        </div>
    }
}
