use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Introduction,
    Overview,
    Analysis,
    Training,
    Comparison,
    Conclusion,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::Overview,
        Section::Analysis,
        Section::Training,
        Section::Comparison,
        Section::Conclusion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Overview => "Dataset Overview",
            Section::Analysis => "Preliminary Analysis",
            Section::Training => "Model Training",
            Section::Comparison => "Comparative Study",
            Section::Conclusion => "Conclusion",
        }
    }

    /// Accent class used by the sidebar entry and the section heading.
    pub fn accent(self) -> &'static str {
        match self {
            Section::Introduction => "accent-blue",
            Section::Overview => "accent-green",
            Section::Analysis => "accent-purple",
            Section::Training => "accent-orange",
            Section::Comparison => "accent-pink",
            Section::Conclusion => "accent-indigo",
        }
    }
}

/// Which section is on screen. Created once at mount, mutated only by
/// sidebar clicks.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Navigation {
    active: Section,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_introduction() {
        assert_eq!(Navigation::new().active(), Section::Introduction);
    }

    #[test]
    fn select_replaces_active_section() {
        let mut nav = Navigation::new();
        nav.select(Section::Training);
        assert_eq!(nav.active(), Section::Training);
        nav.select(Section::Conclusion);
        assert_eq!(nav.active(), Section::Conclusion);
    }

    #[test]
    fn select_is_idempotent() {
        let mut nav = Navigation::new();
        nav.select(Section::Comparison);
        let first = nav.active();
        nav.select(Section::Comparison);
        assert_eq!(nav.active(), first);
    }

    #[test]
    fn every_section_has_a_distinct_label() {
        for (i, a) in Section::ALL.iter().enumerate() {
            assert!(!a.label().is_empty());
            for b in &Section::ALL[..i] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn sections_serialize_by_name() {
        let json = serde_json::to_string(&Section::Training).expect("serialize");
        assert_eq!(json, "\"Training\"");
    }
}
