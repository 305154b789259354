use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub title: Option<&'static str>,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
    #[prop_or_default]
    pub class: &'static str,
    #[prop_or(true)]
    pub animate: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let has_heading = props.title.is_some() || props.subtitle.is_some();

    html! {
        <section class={classes!("page-section", props.animate.then_some("fade-in"), props.class)}>
            if has_heading {
                <div class="section-heading">
                    if let Some(title) = props.title {
                        <h2>{title}</h2>
                    }
                    if let Some(subtitle) = props.subtitle {
                        <p>{subtitle}</p>
                    }
                </div>
            }
            { for props.children.iter() }
        </section>
    }
}
