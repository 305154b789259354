use yew_router::Routable;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JourneyStep {
    pub route: Route,
    pub title: &'static str,
    pub icon: &'static str,
    /// Colour theme suffix, e.g. `blue` for `.accent-blue`.
    pub accent: &'static str,
}

// Order is the progression student -> learner -> intern -> employee.
pub const JOURNEY_STEPS: [JourneyStep; 4] = [
    JourneyStep {
        route: Route::StudentResources,
        title: "Student",
        icon: "fas fa-graduation-cap",
        accent: "blue",
    },
    JourneyStep {
        route: Route::Learning,
        title: "Learner",
        icon: "fas fa-book-open",
        accent: "blue",
    },
    JourneyStep {
        route: Route::Internships,
        title: "Intern",
        icon: "fas fa-briefcase",
        accent: "green",
    },
    JourneyStep {
        route: Route::Employment,
        title: "Employee",
        icon: "fas fa-building",
        accent: "orange",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Active,
    Completed,
    Upcoming,
}

impl StepStatus {
    pub fn class(&self) -> &'static str {
        match self {
            StepStatus::Active => "active",
            StepStatus::Completed => "completed",
            StepStatus::Upcoming => "upcoming",
        }
    }
}

/// Position of the step whose path equals `current_path`, or `None` when the page is not
/// part of the journey (home, about, unknown routes).
pub fn resolve_step(current_path: &str, steps: &[JourneyStep]) -> Option<usize> {
    steps
        .iter()
        .position(|step| step.route.to_path() == current_path)
}

pub fn step_status(position: usize, current: Option<usize>) -> StepStatus {
    match current {
        Some(index) if position == index => StepStatus::Active,
        Some(index) if position < index => StepStatus::Completed,
        _ => StepStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(current: Option<usize>) -> Vec<StepStatus> {
        (0..JOURNEY_STEPS.len())
            .map(|i| step_status(i, current))
            .collect()
    }

    #[test]
    fn steps_follow_the_journey_order() {
        let paths: Vec<String> = JOURNEY_STEPS.iter().map(|s| s.route.to_path()).collect();
        assert_eq!(
            paths,
            vec!["/student-resources", "/learning", "/internships", "/employment"]
        );
    }

    #[test]
    fn internships_is_third_step() {
        let current = resolve_step("/internships", &JOURNEY_STEPS);
        assert_eq!(current, Some(2));
        assert_eq!(
            statuses(current),
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn home_is_outside_the_journey() {
        let current = resolve_step("/", &JOURNEY_STEPS);
        assert_eq!(current, None);
        assert!(statuses(current).iter().all(|s| *s == StepStatus::Upcoming));
    }

    #[test]
    fn about_and_unknown_paths_do_not_match() {
        assert_eq!(resolve_step("/about", &JOURNEY_STEPS), None);
        assert_eq!(resolve_step("/internships/", &JOURNEY_STEPS), None);
        assert_eq!(resolve_step("/Internships", &JOURNEY_STEPS), None);
        assert_eq!(resolve_step("", &JOURNEY_STEPS), None);
    }

    #[test]
    fn first_and_last_steps() {
        let first = resolve_step("/student-resources", &JOURNEY_STEPS);
        assert_eq!(statuses(first)[0], StepStatus::Active);
        assert!(statuses(first)[1..].iter().all(|s| *s == StepStatus::Upcoming));

        let last = resolve_step("/employment", &JOURNEY_STEPS);
        assert_eq!(last, Some(3));
        assert!(statuses(last)[..3].iter().all(|s| *s == StepStatus::Completed));
    }

    #[test]
    fn empty_step_list_never_matches() {
        assert_eq!(resolve_step("/learning", &[]), None);
    }
}
