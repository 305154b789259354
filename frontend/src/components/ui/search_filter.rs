use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::listing_models::ListingField;
use crate::utils::listing_filter::FilterCriteria;

/// One select box of the filter bar.
#[derive(Clone, PartialEq)]
pub struct FilterControl {
    pub field: ListingField,
    pub icon: &'static str,
    pub options: Vec<&'static str>,
}

impl FilterControl {
    pub fn new(field: ListingField, icon: &'static str, options: &[&'static str]) -> Self {
        Self {
            field,
            icon,
            options: options.to_vec(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchFilterProps {
    pub criteria: FilterCriteria,
    pub controls: Vec<FilterControl>,
    pub on_search: Callback<String>,
    pub on_select: Callback<(ListingField, String)>,
    pub on_clear: Callback<()>,
    #[prop_or("Search...")]
    pub placeholder: &'static str,
    /// (shown, total)
    #[prop_or_default]
    pub result_count: Option<(usize, usize)>,
}

#[function_component(SearchFilter)]
pub fn search_filter(props: &SearchFilterProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let onclear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="search-filter card fade-in">
            <div class="search-filter-grid">
                <div class="input-with-icon">
                    <i class="fas fa-search"></i>
                    <input
                        type="text"
                        placeholder={props.placeholder}
                        value={props.criteria.search.clone()}
                        {oninput}
                    />
                </div>
                { for props.controls.iter().map(|control| {
                    let field = control.field;
                    let selected = props.criteria.selected(field).to_string();
                    let onchange = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            on_select.emit((field, select.value()));
                        })
                    };
                    html! {
                        <div class="input-with-icon" key={field.label()}>
                            <i class={control.icon}></i>
                            <select
                                aria-label={field.label()}
                                value={selected.clone()}
                                {onchange}
                            >
                                { for control.options.iter().map(|option| html! {
                                    <option value={*option} selected={*option == selected}>
                                        {*option}
                                    </option>
                                })}
                            </select>
                        </div>
                    }
                })}
                <button class="btn-secondary" onclick={onclear}>
                    {"Clear Filters"}
                </button>
            </div>
            if let Some((shown, total)) = props.result_count {
                <p class="result-count">
                    {format!("Showing {} of {}", shown, total)}
                </p>
            }
        </div>
    }
}
