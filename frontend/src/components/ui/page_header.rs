use yew::prelude::*;

use crate::utils::text::split_accent;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or_default]
    pub accent_word: Option<&'static str>,
    #[prop_or("accent-blue")]
    pub accent_class: &'static str,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let title = match props
        .accent_word
        .and_then(|accent| split_accent(props.title, accent).map(|parts| (accent, parts)))
    {
        Some((accent, (before, after))) => html! {
            <>
                {before}
                <span class={props.accent_class}>{accent}</span>
                {after}
            </>
        },
        None => html! { {props.title} },
    };

    html! {
        <div class="page-header fade-in">
            <h1>{title}</h1>
            <p>{props.subtitle}</p>
        </div>
    }
}
