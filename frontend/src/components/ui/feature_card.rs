use yew::prelude::*;

use super::{render_action, Action};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    #[prop_or("gradient-blue")]
    pub gradient: &'static str,
    #[prop_or_default]
    pub items: Vec<&'static str>,
    #[prop_or_default]
    pub action: Option<Action>,
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: &'static str,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let delay = format!("animation-delay: {:.1}s;", props.index as f32 * 0.1);

    html! {
        <div class={classes!("card", "card-hover", "rise-in", props.class)} style={delay}>
            <div class={classes!("card-icon", props.gradient)}>
                <i class={props.icon}></i>
            </div>
            <h3>{props.title}</h3>
            <p class="card-description">{props.description}</p>
            if !props.items.is_empty() {
                <ul class="card-items">
                    { for props.items.iter().map(|item| html! {
                        <li><span class="dot dot-blue"></span>{*item}</li>
                    })}
                </ul>
            }
            if let Some(action) = &props.action {
                {render_action(action, "btn-primary full-width")}
            }
        </div>
    }
}
