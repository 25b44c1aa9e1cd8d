use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <div class="page-banner">
                <div class="page-banner-inner">
                    <h1>{"404"}</h1>
                    <p>{"The page you are looking for does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
