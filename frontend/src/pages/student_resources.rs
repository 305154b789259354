use yew::prelude::*;

use crate::components::ui::{Action, CtaSection, FeatureCard, PageHeader, Section};
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

struct ResourceCategory {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    gradient: &'static str,
    items: [&'static str; 4],
}

const RESOURCES: [ResourceCategory; 4] = [
    ResourceCategory {
        title: "Study Materials",
        description: "Comprehensive notes, guides, and reference materials",
        icon: "fas fa-book-open",
        gradient: "gradient-blue",
        items: ["Lecture Notes", "Study Guides", "Reference Books", "Practice Tests"],
    },
    ResourceCategory {
        title: "Scholarships",
        description: "Financial aid opportunities and application guidance",
        icon: "fas fa-award",
        gradient: "gradient-green",
        items: ["Merit Scholarships", "Need-based Aid", "Industry Grants", "Application Tips"],
    },
    ResourceCategory {
        title: "Productivity Tools",
        description: "Apps and techniques to maximize your study efficiency",
        icon: "fas fa-star",
        gradient: "gradient-purple",
        items: ["Time Management", "Study Planners", "Focus Apps", "Goal Setting"],
    },
    ResourceCategory {
        title: "Academic Calendar",
        description: "Important dates, deadlines, and exam schedules",
        icon: "fas fa-calendar",
        gradient: "gradient-orange",
        items: ["Exam Dates", "Assignment Deadlines", "Academic Events", "Registration"],
    },
];

const STUDY_TIPS: [&str; 6] = [
    "Create a consistent study schedule",
    "Use active learning techniques",
    "Form study groups with classmates",
    "Take regular breaks to stay focused",
    "Practice past papers and mock tests",
    "Seek help from professors during office hours",
];

#[function_component(StudentResources)]
pub fn student_resources() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <style>
                {r#"
                .resources-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .tips-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1rem;
                }
                .tip {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    color: #374151;
                }
                .tip-number {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    background: #3b82f6;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                "#}
            </style>
            <div class="page-inner">
                <PageHeader
                    title="Student Resources"
                    subtitle="Everything you need to excel in your academic journey. From study materials to financial aid, we've got you covered."
                    accent_word="Resources"
                />

                <Section>
                    <div class="resources-grid">
                        { for RESOURCES.iter().enumerate().map(|(index, resource)| html! {
                            <FeatureCard
                                key={resource.title}
                                title={resource.title}
                                description={resource.description}
                                icon={resource.icon}
                                gradient={resource.gradient}
                                items={resource.items.to_vec()}
                                action={Action::logged("Access Resources")}
                                {index}
                            />
                        })}
                    </div>
                </Section>

                <Section class="panel">
                    <div class="panel-title">
                        <div class="card-icon small gradient-blue">
                            <i class="fas fa-users"></i>
                        </div>
                        <h2>{"Study Tips for Success"}</h2>
                    </div>
                    <div class="tips-grid">
                        { for STUDY_TIPS.iter().enumerate().map(|(index, tip)| html! {
                            <div
                                class="tip slide-in"
                                key={*tip}
                                style={format!("animation-delay: {:.1}s;", 0.5 + index as f32 * 0.1)}
                            >
                                <span class="tip-number">{index + 1}</span>
                                <p>{*tip}</p>
                            </div>
                        })}
                    </div>
                </Section>

                <CtaSection
                    title="Ready to Level Up Your Skills?"
                    subtitle="Explore our learning platform to gain new skills and advance your career prospects."
                    primary={Action::link("Explore Learning Resources", Route::Learning)}
                />
            </div>
        </div>
    }
}
