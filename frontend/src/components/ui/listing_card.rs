use yew::prelude::*;

use crate::models::listing_models::{Internship, Job};

/// What a card shows, independent of whether the listing is a job or an internship.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingDetails {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub badge: &'static str,
    pub schedule: &'static str,
    pub pay: &'static str,
    pub description: &'static str,
    pub requirements: Vec<&'static str>,
    pub posted: &'static str,
}

impl From<&Internship> for ListingDetails {
    fn from(internship: &Internship) -> Self {
        Self {
            id: internship.id,
            title: internship.title,
            company: internship.company,
            location: internship.location,
            badge: internship.domain,
            schedule: internship.duration,
            pay: internship.stipend,
            description: internship.description,
            requirements: internship.requirements.clone(),
            posted: internship.posted,
        }
    }
}

impl From<&Job> for ListingDetails {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            badge: job.level,
            schedule: job.employment_type,
            pay: job.salary,
            description: job.description,
            requirements: job.requirements.clone(),
            posted: job.posted,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardTheme {
    Green,
    Orange,
}

impl CardTheme {
    fn class(&self) -> &'static str {
        match self {
            CardTheme::Green => "theme-green",
            CardTheme::Orange => "theme-orange",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ListingCardProps {
    pub details: ListingDetails,
    pub icon: &'static str,
    pub theme: CardTheme,
    #[prop_or_default]
    pub index: usize,
    pub on_apply: Callback<u32>,
}

#[function_component(ListingCard)]
pub fn listing_card(props: &ListingCardProps) -> Html {
    let details = &props.details;
    let delay = format!("animation-delay: {:.1}s;", props.index as f32 * 0.1);
    let onclick = {
        let on_apply = props.on_apply.clone();
        let id = details.id;
        Callback::from(move |_: MouseEvent| on_apply.emit(id))
    };

    html! {
        <div class={classes!("card", "card-hover", "rise-in", "listing-card", props.theme.class())} style={delay}>
            <div class="listing-head">
                <div class="listing-identity">
                    <div class="card-icon small themed">
                        <i class={props.icon}></i>
                    </div>
                    <div>
                        <h3>{details.title}</h3>
                        <p class="listing-company">{details.company}</p>
                    </div>
                </div>
                <span class="badge">{details.badge}</span>
            </div>

            <p class="card-description">{details.description}</p>

            <div class="listing-meta">
                <div><i class="fas fa-location-dot"></i>{details.location}</div>
                <div><i class="fas fa-clock"></i>{details.schedule}</div>
                <div><i class="fas fa-dollar-sign"></i>{details.pay}</div>
                <div class="posted">{format!("Posted {}", details.posted)}</div>
            </div>

            <div class="requirements">
                <h4>{"Requirements:"}</h4>
                <ul>
                    { for details.requirements.iter().map(|requirement| html! {
                        <li><span class="dot themed"></span>{*requirement}</li>
                    })}
                </ul>
            </div>

            <button class="btn-primary full-width" {onclick}>
                {"Apply Now"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::employment::jobs;
    use crate::pages::internships::internships;

    #[test]
    fn internship_badge_is_domain() {
        let listed = internships();
        let internship = &listed[0];
        let details = ListingDetails::from(internship);
        assert_eq!(details.badge, internship.domain);
        assert_eq!(details.schedule, internship.duration);
        assert_eq!(details.pay, internship.stipend);
    }

    #[test]
    fn job_badge_is_level() {
        let listed = jobs();
        let job = &listed[2];
        let details = ListingDetails::from(job);
        assert_eq!(details.badge, "Mid Level");
        assert_eq!(details.schedule, "Full-time");
        assert_eq!(details.pay, job.salary);
        assert_eq!(details.requirements, job.requirements);
    }
}
