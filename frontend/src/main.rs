use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod models {
    pub mod listing_models;
}
mod utils {
    pub mod journey;
    pub mod listing_filter;
    pub mod scroll;
    pub mod text;
}
mod components {
    pub mod footer;
    pub mod navigation;
    pub mod ui;
}
mod pages {
    pub mod about;
    pub mod employment;
    pub mod home;
    pub mod internships;
    pub mod learning;
    pub mod not_found;
    pub mod student_resources;
}

use components::footer::Footer;
use components::navigation::Navigation;
use pages::{
    about::About, employment::Employment, home::Home, internships::Internships,
    learning::Learning, not_found::NotFound, student_resources::StudentResources,
};

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/student-resources")]
    StudentResources,
    #[at("/learning")]
    Learning,
    #[at("/internships")]
    Internships,
    #[at("/employment")]
    Employment,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::StudentResources => html! { <StudentResources /> },
        Route::Learning => html! { <Learning /> },
        Route::Internships => html! { <Internships /> },
        Route::Employment => html! { <Employment /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <Navigation />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
