/// A filterable attribute of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListingField {
    Domain,
    Level,
    Location,
    EmploymentType,
}

impl ListingField {
    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Domain => "Domain",
            ListingField::Level => "Experience Level",
            ListingField::Location => "Location",
            ListingField::EmploymentType => "Employment Type",
        }
    }
}

/// Anything that can be shown on a listing page and narrowed by the search bar.
pub trait Listing {
    fn id(&self) -> u32;
    fn title(&self) -> &str;
    fn organization(&self) -> &str;
    /// Value of `field`, or `None` when this kind of listing has no such attribute.
    fn field(&self, field: ListingField) -> Option<&str>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Internship {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub stipend: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
    pub requirements: Vec<&'static str>,
    pub posted: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub employment_type: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    pub requirements: Vec<&'static str>,
    pub posted: &'static str,
}

impl Listing for Internship {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn organization(&self) -> &str {
        self.company
    }

    fn field(&self, field: ListingField) -> Option<&str> {
        match field {
            ListingField::Domain => Some(self.domain),
            ListingField::Location => Some(self.location),
            ListingField::Level | ListingField::EmploymentType => None,
        }
    }
}

impl Listing for Job {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn organization(&self) -> &str {
        self.company
    }

    fn field(&self, field: ListingField) -> Option<&str> {
        match field {
            ListingField::Level => Some(self.level),
            ListingField::Location => Some(self.location),
            ListingField::EmploymentType => Some(self.employment_type),
            ListingField::Domain => None,
        }
    }
}
