use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub const fn new(number: &'static str, label: &'static str) -> Self {
        Self { number, label }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatColumns {
    Two,
    Three,
    Four,
}

impl StatColumns {
    pub fn class(&self) -> &'static str {
        match self {
            StatColumns::Two => "cols-2",
            StatColumns::Three => "cols-3",
            // two per row on narrow screens, four on wide ones
            StatColumns::Four => "cols-2 cols-lg-4",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Vec<Stat>,
    #[prop_or(StatColumns::Four)]
    pub columns: StatColumns,
    #[prop_or_default]
    pub class: &'static str,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class={classes!("stats-grid", "fade-in", props.columns.class(), props.class)}>
            { for props.stats.iter().enumerate().map(|(index, stat)| html! {
                <div
                    class="stat rise-in"
                    key={stat.label}
                    style={format!("animation-delay: {:.1}s;", 0.3 + index as f32 * 0.1)}
                >
                    <div class="stat-number">{stat.number}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_columns_collapse_to_two() {
        assert_eq!(StatColumns::Four.class(), "cols-2 cols-lg-4");
        assert_eq!(StatColumns::Three.class(), "cols-3");
        assert_eq!(StatColumns::Two.class(), "cols-2");
    }
}
