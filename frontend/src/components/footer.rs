use web_sys::js_sys;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::utils::journey::JOURNEY_STEPS;
use crate::Route;

fn journey_link_label(route: Route) -> &'static str {
    match route {
        Route::StudentResources => "Student Resources",
        Route::Learning => "Learning",
        Route::Internships => "Internships",
        Route::Employment => "Employment",
        _ => "",
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-stripe journey-gradient"></div>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <Link<Route> to={Route::Home} classes="brand">
                            <span class="brand-mark">{"F"}</span>
                            <span class="brand-name">{config::SITE_NAME}</span>
                        </Link<Route>>
                        <p class="footer-blurb">{config::TAGLINE}</p>
                        <div class="social-links">
                            { for config::social_links().into_iter().map(|(icon, label, href)| html! {
                                <a key={label} href={href} aria-label={label}>
                                    <i class={icon}></i>
                                </a>
                            })}
                        </div>
                    </div>

                    <div>
                        <h3>{"Explore"}</h3>
                        <ul>
                            <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Journey"}</h3>
                        <ul>
                            { for JOURNEY_STEPS.iter().map(|step| html! {
                                <li key={step.title}>
                                    <Link<Route> to={step.route}>{journey_link_label(step.route)}</Link<Route>>
                                </li>
                            })}
                        </ul>
                    </div>

                    <div>
                        <h3>{"Get Started"}</h3>
                        <p class="footer-blurb">{"Take the first step in your career journey today."}</p>
                        <Link<Route> to={Route::StudentResources} classes="btn-primary">
                            {"Start Your Journey"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}</p>
                <div class="legal-links">
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Privacy"}</a>
                    <a href={format!("mailto:{}", config::contact_email())}>{"Contact"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_journey_step_has_a_footer_label() {
        for step in JOURNEY_STEPS.iter() {
            assert!(!journey_link_label(step.route).is_empty());
        }
    }
}
