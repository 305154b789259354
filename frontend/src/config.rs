pub const SITE_NAME: &str = "Fynally";

pub const TAGLINE: &str =
    "Empowering your journey from learning to earning. Guidance, resources, and opportunities at every step.";

pub fn contact_email() -> &'static str {
    option_env!("FYNALLY_CONTACT_EMAIL").unwrap_or("hello@fynally.io")
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Social links shown in the footer as (font-awesome class, label, href).
pub fn social_links() -> Vec<(&'static str, &'static str, String)> {
    vec![
        ("fab fa-github", "GitHub", "#".to_string()),
        ("fab fa-linkedin", "LinkedIn", "#".to_string()),
        ("fab fa-twitter", "Twitter", "#".to_string()),
        ("fab fa-instagram", "Instagram", "#".to_string()),
        ("fas fa-envelope", "Email", format!("mailto:{}", contact_email())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_link_points_at_contact_email() {
        let links = social_links();
        let (_, _, href) = links.last().unwrap();
        assert_eq!(href, &format!("mailto:{}", contact_email()));
    }

    #[test]
    fn social_labels_are_unique() {
        let links = social_links();
        let mut labels: Vec<_> = links.iter().map(|(_, label, _)| *label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), links.len());
    }
}
