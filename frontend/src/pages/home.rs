use yew::prelude::*;
use yew_router::components::Link;

use crate::components::ui::stats_grid::Stat;
use crate::components::ui::{Action, FeatureCard, StatsGrid};
use crate::config;
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

struct JourneyCard {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    gradient: &'static str,
    route: Route,
}

const JOURNEY_CARDS: [JourneyCard; 4] = [
    JourneyCard {
        title: "Student Resources",
        description: "Study materials, scholarships, and productivity tools to excel in academics",
        icon: "fas fa-book-open",
        gradient: "gradient-blue",
        route: Route::StudentResources,
    },
    JourneyCard {
        title: "Learning & Skills",
        description: "Online courses, certifications, and career guidance from experts",
        icon: "fas fa-star",
        gradient: "gradient-blue",
        route: Route::Learning,
    },
    JourneyCard {
        title: "Internships",
        description: "Find the perfect internship opportunities and application guidance",
        icon: "fas fa-briefcase",
        gradient: "gradient-green",
        route: Route::Internships,
    },
    JourneyCard {
        title: "Employment",
        description: "Job listings, resume building, and career advancement opportunities",
        icon: "fas fa-building",
        gradient: "gradient-orange",
        route: Route::Employment,
    },
];

const STATS: [Stat; 4] = [
    Stat::new("10K+", "Students Helped"),
    Stat::new("500+", "Courses Available"),
    Stat::new("1K+", "Internship Listings"),
    Stat::new("95%", "Success Rate"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home">
            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #f9fafb, #ffffff);
                }
                .hero {
                    padding: 5rem 1rem 8rem;
                }
                .hero-copy {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .hero-copy h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                    line-height: 1.1;
                }
                .hero-copy h1 .hero-sub {
                    display: block;
                    font-size: 2.25rem;
                }
                .hero-copy p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                    line-height: 1.7;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .journey-cards {
                    margin-top: 5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .stats-band {
                    background: #ffffff;
                    padding: 5rem 1rem;
                }
                @media (min-width: 768px) {
                    .hero-copy h1 {
                        font-size: 4.5rem;
                    }
                    .hero-copy h1 .hero-sub {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>

            <section class="hero">
                <div class="page-inner">
                    <div class="hero-copy fade-in">
                        <h1>
                            {"From Classroom to "}
                            <span class="journey-text">{"Career"}</span>
                            <span class="hero-sub">{format!("{} is with You", config::SITE_NAME)}</span>
                        </h1>
                        <p>
                            {format!(
                                "{} empowers your journey from learning to earning. \
                                 Navigate your path from student to professional with confidence.",
                                config::SITE_NAME
                            )}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::StudentResources} classes="btn-primary">
                                {"Start Your Journey"}
                                <i class="fas fa-arrow-right"></i>
                            </Link<Route>>
                            <Link<Route> to={Route::About} classes="btn-secondary">
                                {"Learn More"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="journey-cards">
                        { for JOURNEY_CARDS.iter().enumerate().map(|(index, card)| html! {
                            <FeatureCard
                                key={card.title}
                                title={card.title}
                                description={card.description}
                                icon={card.icon}
                                gradient={card.gradient}
                                action={Action::link("Explore", card.route)}
                                {index}
                            />
                        })}
                    </div>
                </div>
            </section>

            <section class="stats-band">
                <div class="page-inner">
                    <StatsGrid stats={STATS.to_vec()} />
                </div>
            </section>

            <section class="cta-band gradient-blue">
                <div class="cta-band-inner fade-in">
                    <h2>{"Ready to Transform Your Future?"}</h2>
                    <p>
                        {format!(
                            "Join thousands of students who have successfully navigated their career journey with {}",
                            config::SITE_NAME
                        )}
                    </p>
                    <Link<Route> to={Route::StudentResources} classes="cta-primary">
                        {"Begin Your Journey"}
                        <i class="fas fa-arrow-right"></i>
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_cards_follow_the_journey_order() {
        let routes: Vec<Route> = JOURNEY_CARDS.iter().map(|card| card.route).collect();
        assert_eq!(
            routes,
            vec![
                Route::StudentResources,
                Route::Learning,
                Route::Internships,
                Route::Employment
            ]
        );
    }
}
