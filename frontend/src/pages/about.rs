use yew::prelude::*;

use crate::components::ui::stats_grid::Stat;
use crate::components::ui::{render_action, Action, FeatureCard, PageHeader, Section, StatsGrid};
use crate::config;
use crate::utils::journey::JOURNEY_STEPS;
use crate::utils::scroll::use_scroll_to_top;
use crate::utils::text::initials;

struct Value {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Purpose-Driven",
        description: "Every feature we build is designed to help you progress on your career journey",
        icon: "fas fa-bullseye",
    },
    Value {
        title: "Community-Focused",
        description: "We believe in the power of mentorship, networking, and peer support",
        icon: "fas fa-users",
    },
    Value {
        title: "Student-Centric",
        description: "Your success is our success. We put students at the heart of everything we do",
        icon: "fas fa-heart",
    },
    Value {
        title: "Growth-Oriented",
        description: "We're committed to continuous improvement and helping you reach new heights",
        icon: "fas fa-arrow-trend-up",
    },
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    background: &'static str,
}

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Sarah Johnson",
        role: "Founder & CEO",
        background: "Former Google PM with 8+ years in EdTech",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Head of Product",
        background: "Ex-Microsoft engineer passionate about student success",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Head of Partnerships",
        background: "Former McKinsey consultant specializing in career development",
    },
];

const IMPACT: [Stat; 4] = [
    Stat::new("10,000+", "Students Supported"),
    Stat::new("85%", "Placement Rate"),
    Stat::new("500+", "Partner Companies"),
    Stat::new("50+", "Universities"),
];

/// One line per journey step, in step order.
const PHASE_DESCRIPTIONS: [&str; 4] = [
    "Access study materials, scholarships, and academic resources to excel in your education",
    "Develop new skills through courses, certifications, and mentorship programs",
    "Gain real-world experience through carefully curated internship opportunities",
    "Launch your career with full-time opportunities and continued professional growth",
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    let join = Action::logged("Join Our Mission");
    let last_phase = JOURNEY_STEPS.len() - 1;

    html! {
        <div class="page">
            <style>
                {r#"
                .mission {
                    text-align: center;
                }
                .mission h2,
                .vision h2,
                .journey-heading {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    text-align: center;
                }
                .mission p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 56rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .icon-tile {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1.5rem;
                    color: #ffffff;
                    font-size: 2rem;
                }
                .phase-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .phase {
                    position: relative;
                }
                .phase-number {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .phase-link {
                    display: none;
                }
                @media (min-width: 1024px) {
                    .phase-link {
                        display: block;
                        position: absolute;
                        top: 50%;
                        right: -0.75rem;
                        width: 1.5rem;
                        height: 2px;
                        background: #d1d5db;
                    }
                }
                .values-grid,
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .team-member {
                    text-align: center;
                }
                .avatar {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 9999px;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.5rem;
                }
                .team-role {
                    color: #2563eb;
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }
                .vision {
                    border-radius: 1rem;
                    padding: 2rem;
                    color: #ffffff;
                    text-align: center;
                }
                .vision p {
                    font-size: 1.25rem;
                    color: #dbeafe;
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                }
                .vision .icon-tile {
                    background: rgba(255, 255, 255, 0.2);
                }
                "#}
            </style>
            <div class="page-inner">
                <PageHeader
                    title="About Fynally"
                    subtitle="We're on a mission to bridge the gap between education and employment, empowering every student to navigate their journey from learning to earning with confidence."
                    accent_word={config::SITE_NAME}
                    accent_class="accent-dark"
                />

                <section class="panel mission fade-in">
                    <div class="icon-tile journey-gradient">
                        <i class="fas fa-lightbulb"></i>
                    </div>
                    <h2>{"Our Mission"}</h2>
                    <p>
                        {format!(
                            "\"{} empowers your journey from learning to earning.\" We believe that every student \
                             deserves access to the resources, guidance, \
                             and opportunities needed to transform their educational experience into a successful \
                             career. Our platform serves as your growth companion, supporting you through every \
                             phase of your professional development.",
                            config::SITE_NAME
                        )}
                    </p>
                </section>

                <section class="page-section fade-in">
                    <h2 class="journey-heading">{format!("Your Journey with {}", config::SITE_NAME)}</h2>
                    <div class="phase-grid">
                        { for JOURNEY_STEPS.iter().zip(PHASE_DESCRIPTIONS).enumerate().map(|(index, (step, description))| html! {
                            <div
                                class="phase rise-in"
                                key={step.title}
                                style={format!("animation-delay: {:.1}s;", 0.3 + index as f32 * 0.1)}
                            >
                                <div class="card card-hover">
                                    <div class={classes!("phase-number", format!("gradient-{}", step.accent))}>
                                        {index + 1}
                                    </div>
                                    <h3>{step.title}</h3>
                                    <p class="card-description">{description}</p>
                                </div>
                                if index < last_phase {
                                    <div class="phase-link"></div>
                                }
                            </div>
                        })}
                    </div>
                </section>

                <Section title="Our Values">
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <FeatureCard
                                key={value.title}
                                title={value.title}
                                description={value.description}
                                icon={value.icon}
                                {index}
                            />
                        })}
                    </div>
                </Section>

                <section class="panel page-section">
                    <h2 class="journey-heading">{"Our Impact"}</h2>
                    <StatsGrid stats={IMPACT.to_vec()} />
                </section>

                <Section title="Meet Our Team">
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <div
                                class="card card-hover rise-in team-member"
                                key={member.name}
                                style={format!("animation-delay: {:.1}s;", 0.6 + index as f32 * 0.1)}
                            >
                                <div class="avatar gradient-blue">{initials(member.name)}</div>
                                <h3>{member.name}</h3>
                                <p class="team-role">{member.role}</p>
                                <p class="card-description">{member.background}</p>
                            </div>
                        })}
                    </div>
                </Section>

                <section class="vision gradient-blue fade-in">
                    <div class="icon-tile">
                        <i class="fas fa-award"></i>
                    </div>
                    <h2>{"Our Vision"}</h2>
                    <p>
                        {"To create a world where every student has equal access to career opportunities, \
                          regardless of their background, and where the transition from education to employment \
                          is seamless, supportive, and empowering."}
                    </p>
                    {render_action(&join, "cta-primary")}
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_journey_step_has_a_phase_description() {
        assert_eq!(PHASE_DESCRIPTIONS.len(), JOURNEY_STEPS.len());
    }

    #[test]
    fn team_avatars_use_initials() {
        let avatars: Vec<String> = TEAM.iter().map(|member| initials(member.name)).collect();
        assert_eq!(avatars, vec!["SJ", "MC", "ER"]);
    }
}
