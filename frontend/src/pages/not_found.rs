use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page">
            <div class="page-inner empty-state fade-in">
                <i class="fas fa-compass"></i>
                <h1>{"Page not found"}</h1>
                <p>{"This stop isn't on the journey. Head back and pick up where you left off."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
