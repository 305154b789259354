/// Splits `title` around the first occurrence of `accent`.
pub fn split_accent<'a>(title: &'a str, accent: &str) -> Option<(&'a str, &'a str)> {
    if accent.is_empty() {
        return None;
    }
    title.split_once(accent)
}

/// First letter of every space-separated word, e.g. "Sarah Johnson" -> "SJ".
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_in_the_middle() {
        assert_eq!(
            split_accent("Learning & Skills", "Skills"),
            Some(("Learning & ", ""))
        );
        assert_eq!(
            split_accent("About Fynally", "About"),
            Some(("", " Fynally"))
        );
    }

    #[test]
    fn missing_or_empty_accent() {
        assert_eq!(split_accent("Student Resources", "Jobs"), None);
        assert_eq!(split_accent("Student Resources", ""), None);
    }

    #[test]
    fn initials_of_team_members() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Emily Rodriguez"), "ER");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
