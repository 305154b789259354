use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

pub mod cta_section;
pub mod feature_card;
pub mod listing_card;
pub mod page_header;
pub mod search_filter;
pub mod section;
pub mod stats_grid;

pub use cta_section::CtaSection;
pub use feature_card::FeatureCard;
pub use listing_card::ListingCard;
pub use page_header::PageHeader;
pub use search_filter::SearchFilter;
pub use section::Section;
pub use stats_grid::StatsGrid;

#[derive(Clone, PartialEq)]
pub enum ActionTarget {
    Route(Route),
    Callback(Callback<MouseEvent>),
}

/// A labelled button that either navigates or runs a callback.
#[derive(Clone, PartialEq)]
pub struct Action {
    pub label: &'static str,
    pub target: ActionTarget,
}

impl Action {
    pub fn link(label: &'static str, route: Route) -> Self {
        Self {
            label,
            target: ActionTarget::Route(route),
        }
    }

    pub fn callback(label: &'static str, callback: Callback<MouseEvent>) -> Self {
        Self {
            label,
            target: ActionTarget::Callback(callback),
        }
    }

    /// Action with no destination yet; clicking it only records the interaction.
    pub fn logged(label: &'static str) -> Self {
        Self::callback(
            label,
            Callback::from(move |_: MouseEvent| log::info!("{} clicked", label)),
        )
    }
}

pub fn render_action(action: &Action, class: &'static str) -> Html {
    match &action.target {
        ActionTarget::Route(route) => html! {
            <Link<Route> to={*route} classes={class}>
                {action.label}
            </Link<Route>>
        },
        ActionTarget::Callback(callback) => html! {
            <button class={class} onclick={callback.clone()}>
                {action.label}
            </button>
        },
    }
}
