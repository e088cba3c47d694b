//! Document editor chrome: save status line, word count and outline

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saving,
    Unsaved,
    Saved(DateTime<Utc>),
    /// Nothing to show
    Idle,
}

impl SaveStatus {
    /// Priority: saving, then unsaved changes, then last save time
    pub fn resolve(saving: bool, is_dirty: bool, last_saved: Option<DateTime<Utc>>) -> Self {
        if saving {
            Self::Saving
        } else if is_dirty {
            Self::Unsaved
        } else if let Some(at) = last_saved {
            Self::Saved(at)
        } else {
            Self::Idle
        }
    }

    pub fn label(&self) -> Option<String> {
        match self {
            Self::Saving => Some("Saving…".to_string()),
            Self::Unsaved => Some("Unsaved changes".to_string()),
            Self::Saved(at) => Some(format!("Saved at {}", at.format("%H:%M"))),
            Self::Idle => None,
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    pub id: String,
    pub title: String,
    /// Heading level, 1-6
    pub level: u8,
}

/// Outline from markdown-style `#` headings
pub fn outline_from_text(text: &str) -> Vec<OutlineItem> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_start();
            let level = line.chars().take_while(|c| *c == '#').count();
            if level == 0 || level > 6 {
                return None;
            }
            let title = line[level..].trim();
            if title.is_empty() || !line[level..].starts_with(' ') {
                return None;
            }
            Some(OutlineItem {
                id: slugify(title),
                title: title.to_string(),
                level: level as u8,
            })
        })
        .collect()
}

fn slugify(title: &str) -> String {
    let mut out = String::new();
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_priority() {
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 14, 5, 0).unwrap();
        assert_eq!(SaveStatus::resolve(true, true, Some(at)), SaveStatus::Saving);
        assert_eq!(SaveStatus::resolve(false, true, Some(at)), SaveStatus::Unsaved);
        assert_eq!(SaveStatus::resolve(false, false, Some(at)), SaveStatus::Saved(at));
        assert_eq!(SaveStatus::resolve(false, false, None), SaveStatus::Idle);
        assert_eq!(
            SaveStatus::Saved(at).label().as_deref(),
            Some("Saved at 14:05")
        );
        assert_eq!(SaveStatus::Idle.label(), None);
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("  Run of show\n for  the gala "), 6);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn outline_reads_headings() {
        let text = "# Run of Show\nintro\n## Doors & Seating\n#hashtag\n####### too deep";
        let outline = outline_from_text(text);
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].id, "run-of-show");
        assert_eq!(outline[1].level, 2);
        assert_eq!(outline[1].id, "doors-seating");
    }
}
