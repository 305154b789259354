use yew::prelude::*;

use crate::components::ui::listing_card::{CardTheme, ListingDetails};
use crate::components::ui::search_filter::FilterControl;
use crate::components::ui::{
    Action, CtaSection, FeatureCard, ListingCard, PageHeader, SearchFilter, Section,
};
use crate::models::listing_models::{Job, ListingField};
use crate::utils::listing_filter::{filter_listings, FilterCriteria};
use crate::utils::scroll::use_scroll_to_top;

pub const LEVELS: [&str; 4] = ["All", "Entry Level", "Mid Level", "Senior Level"];
pub const LOCATIONS: [&str; 7] = [
    "All",
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "Chicago, IL",
    "Austin, TX",
    "Seattle, WA",
];

const FILTER_FIELDS: [ListingField; 2] = [ListingField::Level, ListingField::Location];

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            title: "Frontend Developer",
            company: "TechFlow Inc",
            location: "Remote",
            salary: "$70,000 - $90,000",
            employment_type: "Full-time",
            level: "Entry Level",
            description: "Join our dynamic team to build responsive web applications using React and modern web technologies.",
            requirements: vec!["Bachelor's in Computer Science", "1-2 years React experience", "JavaScript proficiency"],
            posted: "2 days ago",
        },
        Job {
            id: 2,
            title: "Marketing Coordinator",
            company: "Growth Marketing Solutions",
            location: "New York, NY",
            salary: "$50,000 - $65,000",
            employment_type: "Full-time",
            level: "Entry Level",
            description: "Support marketing campaigns, analyze performance metrics, and coordinate with cross-functional teams.",
            requirements: vec!["Marketing degree", "Google Analytics knowledge", "Strong communication skills"],
            posted: "1 week ago",
        },
        Job {
            id: 3,
            title: "Product Manager",
            company: "Innovation Labs",
            location: "San Francisco, CA",
            salary: "$90,000 - $120,000",
            employment_type: "Full-time",
            level: "Mid Level",
            description: "Lead product development from conception to launch, working closely with engineering and design teams.",
            requirements: vec!["3+ years product experience", "Technical background", "Agile methodology knowledge"],
            posted: "3 days ago",
        },
        Job {
            id: 4,
            title: "Data Analyst",
            company: "DataDriven Corp",
            location: "Chicago, IL",
            salary: "$60,000 - $80,000",
            employment_type: "Full-time",
            level: "Entry Level",
            description: "Analyze business data to provide insights and support data-driven decision making.",
            requirements: vec!["Statistics/Math degree", "SQL proficiency", "Python or R experience"],
            posted: "5 days ago",
        },
        Job {
            id: 5,
            title: "UX Designer",
            company: "Creative Digital Agency",
            location: "Austin, TX",
            salary: "$65,000 - $85,000",
            employment_type: "Full-time",
            level: "Mid Level",
            description: "Design intuitive user experiences for web and mobile applications.",
            requirements: vec!["Design portfolio", "2+ years UX experience", "Figma expertise"],
            posted: "1 day ago",
        },
        Job {
            id: 6,
            title: "Software Engineer",
            company: "CloudTech Systems",
            location: "Seattle, WA",
            salary: "$80,000 - $110,000",
            employment_type: "Full-time",
            level: "Entry Level",
            description: "Develop scalable software solutions using cloud technologies and modern programming languages.",
            requirements: vec!["Computer Science degree", "Programming experience", "Cloud platform knowledge"],
            posted: "4 days ago",
        },
    ]
}

struct CareerResource {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    action: &'static str,
}

const CAREER_RESOURCES: [CareerResource; 4] = [
    CareerResource {
        title: "Resume Builder",
        description: "Create a professional resume with a guided builder",
        icon: "fas fa-file-lines",
        action: "Build Resume",
    },
    CareerResource {
        title: "Interview Preparation",
        description: "Practice with mock interviews and get feedback from experts",
        icon: "fas fa-users",
        action: "Start Practice",
    },
    CareerResource {
        title: "Salary Negotiation",
        description: "Learn how to negotiate your salary and benefits package",
        icon: "fas fa-dollar-sign",
        action: "Learn More",
    },
    CareerResource {
        title: "Career Coaching",
        description: "Get personalized career guidance from industry professionals",
        icon: "fas fa-briefcase",
        action: "Book Session",
    },
];

struct EmployerProgram {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const EMPLOYER_PROGRAMS: [EmployerProgram; 3] = [
    EmployerProgram {
        title: "Direct Connect Program",
        description: "Get matched directly with hiring managers at top companies",
        features: ["Exclusive job listings", "Fast-track applications", "Direct communication with recruiters"],
    },
    EmployerProgram {
        title: "Skills Assessment",
        description: "Validate your skills with industry-standard assessments",
        features: ["Technical skill tests", "Soft skill evaluations", "Certification upon completion"],
    },
    EmployerProgram {
        title: "Employer Networking Events",
        description: "Connect with potential employers at virtual and in-person events",
        features: ["Industry meetups", "Company showcases", "Speed networking sessions"],
    },
];

#[function_component(Employment)]
pub fn employment() -> Html {
    use_scroll_to_top();

    let listings = use_memo(|_| jobs(), ());
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
        log::info!("Apply clicked for job {}", id);
    });

    let controls = vec![
        FilterControl::new(ListingField::Level, "fas fa-filter", &LEVELS),
        FilterControl::new(ListingField::Location, "fas fa-location-dot", &LOCATIONS),
    ];

    html! {
        <div class="page">
            <style>
                {r#"
                .program-card {
                    padding: 2rem;
                }
                .program-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .program-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                }
                .program-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #4b5563;
                    margin-bottom: 0.5rem;
                }
                .program-features i {
                    color: #ea580c;
                }
                .resource-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                "#}
            </style>
            <div class="page-inner">
                <PageHeader
                    title="Employment Opportunities"
                    subtitle="Take the final step in your journey. Find full-time positions, build your career, and achieve your professional goals."
                    accent_word="Employment"
                    accent_class="accent-orange"
                />

                <SearchFilter
                    criteria={(*criteria).clone()}
                    {controls}
                    {on_search}
                    {on_select}
                    {on_clear}
                    placeholder="Search jobs..."
                    result_count={Some((filtered.len(), listings.len()))}
                />

                if filtered.is_empty() {
                    <div class="empty-state card">
                        <i class="fas fa-magnifying-glass"></i>
                        <p>{"No jobs match your filters."}</p>
                        <button class="btn-secondary" onclick={clear_from_empty}>
                            {"Clear Filters"}
                        </button>
                    </div>
                } else {
                    <div class="listing-grid">
                        { for filtered.iter().enumerate().map(|(index, job)| html! {
                            <ListingCard
                                key={job.id}
                                details={ListingDetails::from(job)}
                                icon="fas fa-building"
                                theme={CardTheme::Orange}
                                {index}
                                on_apply={on_apply.clone()}
                            />
                        })}
                    </div>
                }

                <Section
                    title="Career Resources">
                    <div class="resource-grid">
                        { for CAREER_RESOURCES.iter().enumerate().map(|(index, resource)| html! {
                            <FeatureCard
                                key={resource.title}
                                title={resource.title}
                                description={resource.description}
                                icon={resource.icon}
                                gradient="gradient-orange"
                                action={Action::logged(resource.action)}
                                {index}
                            />
                        })}
                    </div>
                </Section>

                <Section
                    title="Employer Connect Programs" class="panel">
                    <div class="resource-grid">
                        { for EMPLOYER_PROGRAMS.iter().enumerate().map(|(index, program)| html! {
                            <div
                                key={program.title}
                                class="card card-hover rise-in program-card"
                                style={format!("animation-delay: {:.1}s;", index as f32 * 0.1)}
                            >
                                <h3>{program.title}</h3>
                                <p class="card-description">{program.description}</p>
                                <ul class="program-features">
                                    { for program.features.iter().map(|feature| html! {
                                        <li><i class="fas fa-circle-check"></i>{*feature}</li>
                                    })}
                                </ul>
                            </div>
                        })}
                    </div>
                </Section>

                <CtaSection
                    title="Congratulations on Your Journey!"
                    subtitle="You've completed the full journey from student to professional. Continue growing and achieving your career goals."
                    gradient="gradient-orange"
                    primary={Action::logged("Career Development")}
                    secondary={Action::logged("Professional Network")}
                />
            </div>
        </div>
    }
}
