use yew::prelude::*;

use super::{render_action, Action};

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or_default]
    pub primary: Option<Action>,
    #[prop_or_default]
    pub secondary: Option<Action>,
    #[prop_or("gradient-blue")]
    pub gradient: &'static str,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let has_actions = props.primary.is_some() || props.secondary.is_some();

    html! {
        <div class={classes!("cta-section", "fade-in", props.gradient)}>
            <h2>{props.title}</h2>
            <p>{props.subtitle}</p>
            { for props.children.iter() }
            if has_actions {
                <div class="cta-actions">
                    if let Some(primary) = &props.primary {
                        {render_action(primary, "cta-primary")}
                    }
                    if let Some(secondary) = &props.secondary {
                        {render_action(secondary, "cta-secondary")}
                    }
                </div>
            }
        </div>
    }
}
