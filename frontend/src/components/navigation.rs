use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::utils::journey::{resolve_step, step_status, JourneyStep, StepStatus, JOURNEY_STEPS};
use crate::Route;

fn step_classes(step: &JourneyStep, position: usize, current: Option<usize>) -> Classes {
    classes!(
        "journey-step",
        step_status(position, current).class(),
        format!("accent-{}", step.accent)
    )
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let is_open = use_state(|| false);
    // Derived on every render, never stored.
    let path = match use_location() {
        Some(location) => location.path().to_string(),
        None => {
            log::warn!("Navigation rendered outside a router, journey progress disabled");
            String::new()
        }
    };
    let current = resolve_step(&path, &JOURNEY_STEPS);

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let last = JOURNEY_STEPS.len() - 1;

    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <div class="nav-row">
                    <Link<Route> to={Route::Home} classes="brand">
                        <span class="brand-mark">{"F"}</span>
                        <span class="brand-name">{config::SITE_NAME}</span>
                    </Link<Route>>

                    <div class="journey-progress desktop-only">
                        { for JOURNEY_STEPS.iter().enumerate().map(|(position, step)| {
                            let completed = step_status(position, current) == StepStatus::Completed;
                            html! {
                                <div class="journey-slot" key={step.title}>
                                    <Link<Route> to={step.route} classes={step_classes(step, position, current)}>
                                        <span class="step-bubble"><i class={step.icon}></i></span>
                                        <span class="step-title">{step.title}</span>
                                    </Link<Route>>
                                    if position < last {
                                        <i class={classes!("fas", "fa-arrow-right", "step-connector", completed.then_some("completed"))}></i>
                                    }
                                </div>
                            }
                        })}
                    </div>

                    <div class="nav-links desktop-only">
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                        <Link<Route> to={Route::StudentResources} classes="btn-primary">{"Get Started"}</Link<Route>>
                    </div>

                    <button class="menu-toggle mobile-only" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={if *is_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>

                <div class="journey-progress-compact mobile-only">
                    { for JOURNEY_STEPS.iter().enumerate().map(|(position, step)| html! {
                        <div key={step.title} onclick={close_menu.clone()}>
                            <Link<Route> to={step.route} classes={step_classes(step, position, current)}>
                                <span class="step-bubble"><i class={step.icon}></i></span>
                                <span class="step-title">{step.title}</span>
                            </Link<Route>>
                        </div>
                    })}
                </div>
            </div>

            if *is_open {
                <div class="mobile-menu mobile-only" onclick={close_menu.clone()}>
                    <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::StudentResources} classes="btn-primary full-width">{"Get Started"}</Link<Route>>
                </div>
            }
        </nav>
    }
}
