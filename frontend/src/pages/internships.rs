use yew::prelude::*;

use crate::components::ui::listing_card::{CardTheme, ListingDetails};
use crate::components::ui::search_filter::FilterControl;
use crate::components::ui::{Action, CtaSection, ListingCard, PageHeader, SearchFilter};
use crate::models::listing_models::{Internship, ListingField};
use crate::utils::listing_filter::{filter_listings, FilterCriteria};
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

pub const DOMAINS: [&str; 6] = ["All", "Technology", "Marketing", "Design", "Finance", "Content"];
pub const LOCATIONS: [&str; 6] = [
    "All",
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "Chicago, IL",
    "Austin, TX",
];

const FILTER_FIELDS: [ListingField; 2] = [ListingField::Domain, ListingField::Location];

pub fn internships() -> Vec<Internship> {
    vec![
        Internship {
            id: 1,
            title: "Software Development Intern",
            company: "TechCorp Solutions",
            location: "Remote",
            duration: "3 months",
            stipend: "$1,200/month",
            domain: "Technology",
            description: "Work on real-world projects using React, Node.js, and cloud technologies.",
            requirements: vec!["Computer Science student", "JavaScript knowledge", "Git proficiency"],
            posted: "2 days ago",
        },
        Internship {
            id: 2,
            title: "Marketing Analytics Intern",
            company: "Digital Growth Agency",
            location: "New York, NY",
            duration: "4 months",
            stipend: "$1,000/month",
            domain: "Marketing",
            description: "Analyze marketing campaigns and create data-driven insights for client strategies.",
            requirements: vec!["Marketing/Business student", "Excel proficiency", "Analytics mindset"],
            posted: "1 week ago",
        },
        Internship {
            id: 3,
            title: "UX Design Intern",
            company: "Creative Studios Inc",
            location: "San Francisco, CA",
            duration: "6 months",
            stipend: "$1,500/month",
            domain: "Design",
            description: "Design user interfaces and conduct user research for mobile and web applications.",
            requirements: vec!["Design student", "Figma/Sketch skills", "Portfolio required"],
            posted: "3 days ago",
        },
        Internship {
            id: 4,
            title: "Financial Analyst Intern",
            company: "Investment Partners LLC",
            location: "Chicago, IL",
            duration: "3 months",
            stipend: "$1,300/month",
            domain: "Finance",
            description: "Assist with financial modeling, market research, and investment analysis.",
            requirements: vec!["Finance/Economics student", "Excel expertise", "Analytical skills"],
            posted: "5 days ago",
        },
        Internship {
            id: 5,
            title: "Content Writing Intern",
            company: "Media Hub",
            location: "Remote",
            duration: "4 months",
            stipend: "$800/month",
            domain: "Content",
            description: "Create engaging content for blogs, social media, and marketing campaigns.",
            requirements: vec!["English/Communications student", "Writing portfolio", "SEO knowledge"],
            posted: "1 day ago",
        },
        Internship {
            id: 6,
            title: "Data Science Intern",
            company: "Analytics Pro",
            location: "Austin, TX",
            duration: "5 months",
            stipend: "$1,400/month",
            domain: "Technology",
            description: "Work with big data, machine learning models, and statistical analysis.",
            requirements: vec!["STEM student", "Python/R skills", "Statistics background"],
            posted: "4 days ago",
        },
    ]
}

#[function_component(Internships)]
pub fn internships_page() -> Html {
    use_scroll_to_top();

    let listings = use_memo(|_| internships(), ());
    let criteria = use_state(|| FilterCriteria::new(&FILTER_FIELDS));
    let filtered = {
        let listings = listings.clone();
        use_memo(
            move |criteria: &FilterCriteria| filter_listings(&listings, criteria),
            (*criteria).clone(),
        )
    };

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |search: String| {
            let mut next = (*criteria).clone();
            next.set_search(search);
            criteria.set(next);
        })
    };
    let on_select = {
        let criteria = criteria.clone();
        Callback::from(move |(field, value): (ListingField, String)| {
            let mut next = (*criteria).clone();
            next.select(field, value);
            criteria.set(next);
        })
    };
    let on_clear = {
        let criteria = criteria.clone();
        Callback::from(move |_: ()| {
            let mut next = (*criteria).clone();
            next.clear();
            criteria.set(next);
        })
    };
    let clear_from_empty = on_clear.reform(|_: MouseEvent| ());
    let on_apply = Callback::from(|id: u32| {
        log::info!("Apply clicked for internship {}", id);
    });

    let controls = vec![
        FilterControl::new(ListingField::Domain, "fas fa-filter", &DOMAINS),
        FilterControl::new(ListingField::Location, "fas fa-location-dot", &LOCATIONS),
    ];

    html! {
        <div class="page">
            <div class="page-inner">
                <PageHeader
                    title="Internship Opportunities"
                    subtitle="Find the perfect internship to gain real-world experience, build your network, and kickstart your career journey."
                    accent_word="Internship"
                    accent_class="accent-green"
                />

                <SearchFilter
                    criteria={(*criteria).clone()}
                    {controls}
                    {on_search}
                    {on_select}
                    {on_clear}
                    placeholder="Search internships..."
                    result_count={Some((filtered.len(), listings.len()))}
                />

                if filtered.is_empty() {
                    <div class="empty-state card">
                        <i class="fas fa-magnifying-glass"></i>
                        <p>{"No internships match your filters."}</p>
                        <button class="btn-secondary" onclick={clear_from_empty}>
                            {"Clear Filters"}
                        </button>
                    </div>
                } else {
                    <div class="listing-grid">
                        { for filtered.iter().enumerate().map(|(index, internship)| html! {
                            <ListingCard
                                key={internship.id}
                                details={ListingDetails::from(internship)}
                                icon="fas fa-briefcase"
                                theme={CardTheme::Green}
                                {index}
                                on_apply={on_apply.clone()}
                            />
                        })}
                    </div>
                }

                <CtaSection
                    title="Need Application Guidance?"
                    subtitle="Get expert tips on crafting the perfect internship application and acing your interviews."
                    primary={Action::logged("Application Tips")}
                    secondary={Action::link("Explore Full-time Jobs", Route::Employment)}
                />
            </div>
        </div>
    }
}
