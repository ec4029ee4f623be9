use crate::services::random_user::{ProfileLocation, ProfileName};

/// Upper-case the first character, leave the rest alone ("female" -> "Female")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "First Last", used for headings and image alt text
pub fn display_name(name: &ProfileName) -> String {
    join_non_empty(&[&name.first, &name.last], " ")
}

/// "Title First Last"; title is skipped when the API sends an empty one
pub fn full_name(name: &ProfileName) -> String {
    join_non_empty(&[&name.title, &name.first, &name.last], " ")
}

/// "City, Country"
pub fn location_label(location: &ProfileLocation) -> String {
    join_non_empty(&[&location.city, &location.country], ", ")
}

fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
