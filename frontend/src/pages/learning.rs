use yew::prelude::*;

use crate::components::ui::{Action, CtaSection, FeatureCard, PageHeader, Section};
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

struct Course {
    title: &'static str,
    category: &'static str,
    duration: &'static str,
    rating: f32,
    students: u32,
    skills: [&'static str; 3],
    level: &'static str,
}

const COURSES: [Course; 4] = [
    Course {
        title: "Communication Skills",
        category: "Soft Skills",
        duration: "4 weeks",
        rating: 4.8,
        students: 2341,
        skills: ["Public Speaking", "Written Communication", "Active Listening"],
        level: "Beginner",
    },
    Course {
        title: "Project Management",
        category: "Business",
        duration: "6 weeks",
        rating: 4.9,
        students: 1876,
        skills: ["Agile Methodology", "Team Leadership", "Risk Management"],
        level: "Intermediate",
    },
    Course {
        title: "Data Analysis with Python",
        category: "Technical",
        duration: "8 weeks",
        rating: 4.7,
        students: 3210,
        skills: ["Python Programming", "Data Visualization", "Statistical Analysis"],
        level: "Intermediate",
    },
    Course {
        title: "Digital Marketing",
        category: "Marketing",
        duration: "5 weeks",
        rating: 4.6,
        students: 1542,
        skills: ["SEO", "Social Media Marketing", "Content Strategy"],
        level: "Beginner",
    },
];

struct Mentorship {
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    sessions: &'static str,
    mentor: &'static str,
}

const MENTORSHIPS: [Mentorship; 3] = [
    Mentorship {
        title: "Career Guidance Mentorship",
        description: "One-on-one sessions with industry professionals to guide your career path",
        duration: "3 months",
        sessions: "6 sessions",
        mentor: "Industry Expert",
    },
    Mentorship {
        title: "Skill Development Coaching",
        description: "Personalized coaching to develop specific technical or soft skills",
        duration: "2 months",
        sessions: "8 sessions",
        mentor: "Skill Specialist",
    },
    Mentorship {
        title: "Interview Preparation",
        description: "Mock interviews and feedback to prepare for job applications",
        duration: "1 month",
        sessions: "4 sessions",
        mentor: "HR Professional",
    },
];

const CERTIFICATIONS: [&str; 6] = [
    "Google Digital Marketing Certificate",
    "AWS Cloud Practitioner",
    "Project Management Professional (PMP)",
    "Certified Scrum Master (CSM)",
    "Microsoft Office Specialist",
    "Adobe Creative Suite Certification",
];

fn course_card(index: usize, course: &Course) -> Html {
    let on_enroll = {
        let title = course.title;
        Callback::from(move |_: MouseEvent| log::info!("Enroll clicked for {}", title))
    };

    html! {
        <div
            key={course.title}
            class="card card-hover rise-in course-card"
            style={format!("animation-delay: {:.1}s;", index as f32 * 0.1)}
        >
            <div class="course-banner gradient-blue">
                <i class="fas fa-book-open"></i>
            </div>
            <div class="course-body">
                <div class="course-tags">
                    <span class="badge badge-blue">{course.category}</span>
                    <span class="course-level">{course.level}</span>
                </div>
                <h3>{course.title}</h3>
                <div class="course-meta">
                    <i class="fas fa-clock"></i>
                    <span>{course.duration}</span>
                    <i class="fas fa-star rating-star"></i>
                    <span>{format!("{:.1}", course.rating)}</span>
                    <span>{format!("({} students)", course.students)}</span>
                </div>
                <h4>{"Skills you'll learn:"}</h4>
                <div class="skill-chips">
                    { for course.skills.iter().map(|skill| html! {
                        <span class="skill-chip">{*skill}</span>
                    })}
                </div>
                <button class="btn-primary full-width" onclick={on_enroll}>
                    {"Enroll Now"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Learning)]
pub fn learning() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <style>
                {r#"
                .course-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .course-card {
                    padding: 0;
                    overflow: hidden;
                }
                .course-banner {
                    height: 12rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-size: 4rem;
                }
                .course-body {
                    padding: 1.5rem;
                }
                .course-tags {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.5rem;
                }
                .course-level {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .course-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .course-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.35rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 1rem;
                }
                .rating-star {
                    color: #facc15;
                    margin-left: 0.75rem;
                }
                .course-body h4 {
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .skill-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .skill-chip {
                    background: #f3f4f6;
                    color: #374151;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                }
                .mentorship-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .certs-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1rem;
                }
                .cert {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    transition: background 0.3s;
                }
                .cert:hover {
                    background: #f3f4f6;
                }
                .cert i {
                    color: #eab308;
                }
                "#}
            </style>
            <div class="page-inner">
                <PageHeader
                    title="Learning & Skills"
                    subtitle="Enhance your skills with our comprehensive online courses, mentorship programs, and industry-recognized certifications."
                    accent_word="Skills"
                />

                <Section title="Featured Courses">
                    <div class="course-grid">
                        { for COURSES.iter().enumerate().map(|(index, course)| course_card(index, course)) }
                    </div>
                </Section>

                <Section title="Mentorship Programs">
                    <div class="mentorship-grid">
                        { for MENTORSHIPS.iter().enumerate().map(|(index, program)| html! {
                            <FeatureCard
                                key={program.title}
                                title={program.title}
                                description={program.description}
                                icon="fas fa-users"
                                gradient="gradient-green"
                                items={vec![program.duration, program.sessions, program.mentor]}
                                action={Action::logged("Apply Now")}
                                class="centered"
                                {index}
                            />
                        })}
                    </div>
                </Section>

                <Section class="panel">
                    <div class="panel-title">
                        <div class="card-icon small gradient-yellow">
                            <i class="fas fa-award"></i>
                        </div>
                        <h2>{"Industry Certifications"}</h2>
                    </div>
                    <p class="card-description">
                        {"Earn recognized certifications that validate your skills and boost your career prospects."}
                    </p>
                    <div class="certs-grid">
                        { for CERTIFICATIONS.iter().enumerate().map(|(index, cert)| html! {
                            <div
                                class="cert slide-in"
                                key={*cert}
                                style={format!("animation-delay: {:.2}s;", 0.6 + index as f32 * 0.05)}
                            >
                                <i class="fas fa-award"></i>
                                <span>{*cert}</span>
                            </div>
                        })}
                    </div>
                </Section>

                <CtaSection
                    title="Ready to Apply Your Skills?"
                    subtitle="Explore internship opportunities to gain real-world experience and build your professional network."
                    primary={Action::link("Find Internships", Route::Internships)}
                />
            </div>
        </div>
    }
}
