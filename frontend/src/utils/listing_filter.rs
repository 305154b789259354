//! Search and selector filtering shared by the internship and job listing pages.
//!
//! A listing is kept when the search text is a case-insensitive substring of its title or
//! organization and every selector is either [`ALL`] or exactly equal to the listing's value
//! for that field. Selector comparison is case-sensitive. Filtering never reorders or
//! mutates the source slice.

use crate::models::listing_models::{Listing, ListingField};

/// Selector value meaning "no constraint on this dimension".
pub const ALL: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub field: ListingField,
    pub value: String,
}

/// Transient filter state owned by a listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub selections: Vec<Selection>,
}

impl FilterCriteria {
    /// Default criteria for the given dimensions: empty search, every selector at [`ALL`].
    pub fn new(fields: &[ListingField]) -> Self {
        Self {
            search: String::new(),
            selections: fields
                .iter()
                .map(|&field| Selection {
                    field,
                    value: ALL.to_string(),
                })
                .collect(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_selection(mut self, field: ListingField, value: impl Into<String>) -> Self {
        self.select(field, value);
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Sets the selector for `field`, adding the dimension if it was not configured.
    pub fn select(&mut self, field: ListingField, value: impl Into<String>) {
        let value = value.into();
        match self.selections.iter_mut().find(|s| s.field == field) {
            Some(selection) => selection.value = value,
            None => self.selections.push(Selection { field, value }),
        }
    }

    pub fn selected(&self, field: ListingField) -> &str {
        self.selections
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.value.as_str())
            .unwrap_or(ALL)
    }

    /// Back to defaults, keeping the configured dimensions.
    pub fn clear(&mut self) {
        self.search.clear();
        for selection in &mut self.selections {
            selection.value = ALL.to_string();
        }
    }

    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.selections.iter().all(|s| s.value == ALL)
    }
}

fn matches_search<L: Listing + ?Sized>(listing: &L, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    listing.title().to_lowercase().contains(&needle)
        || listing.organization().to_lowercase().contains(&needle)
}

fn matches_selection<L: Listing + ?Sized>(listing: &L, selection: &Selection) -> bool {
    selection.value == ALL || listing.field(selection.field) == Some(selection.value.as_str())
}

pub fn matches<L: Listing + ?Sized>(listing: &L, criteria: &FilterCriteria) -> bool {
    matches_search(listing, &criteria.search)
        && criteria
            .selections
            .iter()
            .all(|selection| matches_selection(listing, selection))
}

/// The listings matching `criteria`, in their input order.
pub fn filter_listings<L: Listing + Clone>(listings: &[L], criteria: &FilterCriteria) -> Vec<L> {
    listings
        .iter()
        .filter(|listing| matches(*listing, criteria))
        .cloned()
        .collect()
}

/// [`ALL`] followed by the distinct values of `field`, in first-seen order.
pub fn filter_options<L: Listing>(listings: &[L], field: ListingField) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for value in listings.iter().filter_map(|listing| listing.field(field)) {
        if !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing_models::{Internship, Job};
    use crate::pages::employment::{jobs, LEVELS};
    use crate::pages::internships::{internships, DOMAINS, LOCATIONS};
    use proptest::prelude::*;

    fn internship_criteria() -> FilterCriteria {
        FilterCriteria::new(&[ListingField::Domain, ListingField::Location])
    }

    fn job_criteria() -> FilterCriteria {
        FilterCriteria::new(&[ListingField::Level, ListingField::Location])
    }

    fn titles<L: Listing>(listings: &[L]) -> Vec<&str> {
        listings.iter().map(|l| l.title()).collect()
    }

    #[test]
    fn search_data_finds_data_science_intern() {
        let criteria = internship_criteria().with_search("data");
        let result = filter_listings(&internships(), &criteria);
        assert_eq!(titles(&result), vec!["Data Science Intern"]);
    }

    #[test]
    fn entry_level_jobs_keep_listing_order() {
        let criteria = job_criteria().with_selection(ListingField::Level, "Entry Level");
        let result = filter_listings(&jobs(), &criteria);
        let ids: Vec<u32> = result.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 6]);
    }

    #[test]
    fn search_matches_company_name() {
        let criteria = job_criteria().with_search("datadriven");
        let result = filter_listings(&jobs(), &criteria);
        assert_eq!(titles(&result), vec!["Data Analyst"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = filter_listings(&internships(), &internship_criteria().with_search("tech"));
        let upper = filter_listings(&internships(), &internship_criteria().with_search("TECH"));
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[test]
    fn selectors_are_case_sensitive() {
        let criteria = internship_criteria().with_selection(ListingField::Domain, "technology");
        assert!(filter_listings(&internships(), &criteria).is_empty());
    }

    #[test]
    fn search_is_not_trimmed() {
        let criteria = internship_criteria().with_search(" Data");
        assert!(filter_listings(&internships(), &criteria).is_empty());
    }

    #[test]
    fn pattern_characters_are_literal() {
        let criteria = job_criteria().with_search(".*");
        assert!(filter_listings(&jobs(), &criteria).is_empty());
    }

    #[test]
    fn combined_criteria_must_all_hold() {
        let criteria = internship_criteria()
            .with_search("intern")
            .with_selection(ListingField::Domain, "Technology")
            .with_selection(ListingField::Location, "Remote");
        let result = filter_listings(&internships(), &criteria);
        assert_eq!(titles(&result), vec!["Software Development Intern"]);
    }

    #[test]
    fn unknown_value_yields_empty_result() {
        let criteria = job_criteria().with_selection(ListingField::Location, "Mars");
        assert!(filter_listings(&jobs(), &criteria).is_empty());
    }

    #[test]
    fn missing_field_never_matches_a_selector() {
        let criteria = FilterCriteria::new(&[ListingField::Domain])
            .with_selection(ListingField::Domain, "Technology");
        let jobs: Vec<Job> = jobs();
        assert!(filter_listings(&jobs, &criteria).is_empty());
    }

    #[test]
    fn clear_restores_defaults() {
        let mut criteria = job_criteria()
            .with_search("engineer")
            .with_selection(ListingField::Level, "Mid Level");
        assert!(!criteria.is_default());
        criteria.clear();
        assert_eq!(criteria, job_criteria());
        assert_eq!(filter_listings(&jobs(), &criteria), jobs());
    }

    #[test]
    fn select_adds_unconfigured_dimension() {
        let mut criteria = FilterCriteria::new(&[]);
        assert_eq!(criteria.selected(ListingField::Level), ALL);
        criteria.select(ListingField::Level, "Mid Level");
        assert_eq!(criteria.selected(ListingField::Level), "Mid Level");
        assert_eq!(criteria.selections.len(), 1);
    }

    #[test]
    fn sample_values_are_all_selectable() {
        let listed: Vec<Internship> = internships();
        for option in filter_options(&listed, ListingField::Domain) {
            assert!(DOMAINS.contains(&option.as_str()), "missing domain {option}");
        }
        for option in filter_options(&listed, ListingField::Location) {
            assert!(LOCATIONS.contains(&option.as_str()), "missing location {option}");
        }
        for option in filter_options(&jobs(), ListingField::Level) {
            assert!(LEVELS.contains(&option.as_str()), "missing level {option}");
        }
    }

    #[test]
    fn filter_options_keep_first_seen_order() {
        let options = filter_options(&jobs(), ListingField::Level);
        assert_eq!(options, vec![ALL, "Entry Level", "Mid Level"]);
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Posting {
        id: u32,
        title: String,
        company: String,
        level: String,
        location: String,
    }

    impl Listing for Posting {
        fn id(&self) -> u32 {
            self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn organization(&self) -> &str {
            &self.company
        }

        fn field(&self, field: ListingField) -> Option<&str> {
            match field {
                ListingField::Level => Some(self.level.as_str()),
                ListingField::Location => Some(self.location.as_str()),
                _ => None,
            }
        }
    }

    fn posting() -> impl Strategy<Value = Posting> {
        (
            "[A-Za-z ]{0,16}",
            "[A-Za-z ]{0,12}",
            prop::sample::select(vec!["Entry Level", "Mid Level", "Senior Level"]),
            prop::sample::select(vec!["Remote", "Austin, TX", "Chicago, IL"]),
        )
            .prop_map(|(title, company, level, location)| Posting {
                id: 0,
                title,
                company,
                level: level.to_string(),
                location: location.to_string(),
            })
    }

    fn postings() -> impl Strategy<Value = Vec<Posting>> {
        prop::collection::vec(posting(), 0..12).prop_map(|mut postings| {
            for (i, posting) in postings.iter_mut().enumerate() {
                posting.id = i as u32;
            }
            postings
        })
    }

    fn any_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[A-Za-z ]{0,3}",
            prop::sample::select(vec![ALL, "Entry Level", "Mid Level", "Senior Level"]),
            prop::sample::select(vec![ALL, "Remote", "Austin, TX", "Seattle, WA"]),
        )
            .prop_map(|(search, level, location)| {
                job_criteria()
                    .with_search(search)
                    .with_selection(ListingField::Level, level)
                    .with_selection(ListingField::Location, location)
            })
    }

    proptest! {
        #[test]
        fn default_criteria_is_identity(listings in postings()) {
            prop_assert_eq!(filter_listings(&listings, &job_criteria()), listings);
        }

        #[test]
        fn result_is_ordered_subset(listings in postings(), criteria in any_criteria()) {
            let result = filter_listings(&listings, &criteria);
            let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&ids, &sorted);
            for posting in &result {
                prop_assert!(listings.contains(posting));
            }
        }

        #[test]
        fn filtering_is_idempotent(listings in postings(), criteria in any_criteria()) {
            let once = filter_listings(&listings, &criteria);
            let twice = filter_listings(&once, &criteria);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn search_ignores_ascii_case(listings in postings(), criteria in any_criteria()) {
            let upper = criteria.clone().with_search(criteria.search.to_uppercase());
            let lower = criteria.clone().with_search(criteria.search.to_lowercase());
            prop_assert_eq!(
                filter_listings(&listings, &upper),
                filter_listings(&listings, &lower)
            );
        }

        #[test]
        fn clearing_restores_everything(listings in postings(), criteria in any_criteria()) {
            let mut criteria = criteria;
            criteria.clear();
            prop_assert_eq!(filter_listings(&listings, &criteria), listings);
        }
    }
}
