//! Sectioned navigation shared by the settings and workspace layouts

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    /// Optional heading the settings sidebar groups entries under
    pub group: Option<String>,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            group: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// The current section when it exists, otherwise the first section
pub fn resolve_current<'a>(sections: &'a [SectionEntry], current: Option<&str>) -> Option<&'a str> {
    current
        .and_then(|id| sections.iter().find(|s| s.id == id))
        .or_else(|| sections.first())
        .map(|s| s.id.as_str())
}

/// Entries grouped by `group`, keeping first-seen group order
pub fn grouped(sections: &[SectionEntry]) -> Vec<(Option<String>, Vec<SectionEntry>)> {
    let mut out: Vec<(Option<String>, Vec<SectionEntry>)> = Vec::new();
    for entry in sections {
        match out.iter_mut().find(|(g, _)| *g == entry.group) {
            Some((_, items)) => items.push(entry.clone()),
            None => out.push((entry.group.clone(), vec![entry.clone()])),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionEntry> {
        vec![
            SectionEntry::new("general", "General").group("App"),
            SectionEntry::new("appearance", "Appearance").group("App"),
            SectionEntry::new("schemas", "Schemas").group("Developer"),
        ]
    }

    #[test]
    fn current_defaults_to_first() {
        let s = sections();
        assert_eq!(resolve_current(&s, None), Some("general"));
        assert_eq!(resolve_current(&s, Some("missing")), Some("general"));
        assert_eq!(resolve_current(&s, Some("schemas")), Some("schemas"));
        assert_eq!(resolve_current(&[], Some("schemas")), None);
    }

    #[test]
    fn groups_keep_order() {
        let groups = grouped(&sections());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.as_deref(), Some("App"));
        assert_eq!(groups[0].1.len(), 2);
    }
}
