//! Selectable values for the annotator profile fields

pub const DOMAINS: &[&str] = &[
    "Agriculture",
    "Automotive",
    "E-commerce",
    "Education",
    "Finance",
    "Healthcare",
    "Legal",
    "Manufacturing",
    "Media",
    "Retail",
    "Robotics",
    "Security",
];

pub const LANGUAGES: &[&str] = &[
    "Arabic",
    "Bengali",
    "Chinese",
    "English",
    "French",
    "German",
    "Hindi",
    "Japanese",
    "Portuguese",
    "Russian",
    "Spanish",
    "Swahili",
];

pub const LOCATIONS: &[&str] = &[
    "Africa",
    "Asia",
    "Europe",
    "Middle East",
    "North America",
    "Oceania",
    "Remote",
    "South America",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn from_label(label: &str) -> Self {
        SelectOption {
            value: label.to_lowercase(),
            label: label.to_string(),
        }
    }
}

pub fn to_options(labels: &[&str]) -> Vec<SelectOption> {
    labels.iter().map(|label| SelectOption::from_label(label)).collect()
}

pub fn domain_options() -> Vec<SelectOption> {
    to_options(DOMAINS)
}

pub fn language_options() -> Vec<SelectOption> {
    to_options(LANGUAGES)
}

pub fn location_options() -> Vec<SelectOption> {
    to_options(LOCATIONS)
}

/// Display label for a stored value; custom entries are shown as typed
pub fn label_for<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(value)
}
