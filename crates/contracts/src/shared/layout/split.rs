//! Master/detail split: keyboard focus, filtering and responsive mode

pub const DEFAULT_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl SplitKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    Focus(usize),
    /// Select the item at this index of the filtered list
    Select(usize),
    ClearSelection,
    Ignore,
}

/// Keyboard handling over the filtered list. No wraparound; an empty list
/// ignores movement keys.
pub fn handle_key(key: SplitKey, focused: Option<usize>, len: usize) -> SplitOutcome {
    match key {
        SplitKey::Escape => SplitOutcome::ClearSelection,
        _ if len == 0 => SplitOutcome::Ignore,
        SplitKey::Up => match focused {
            None => SplitOutcome::Focus(0),
            Some(i) => SplitOutcome::Focus(i.min(len - 1).saturating_sub(1)),
        },
        SplitKey::Down => match focused {
            None => SplitOutcome::Focus(0),
            Some(i) => SplitOutcome::Focus((i + 1).min(len - 1)),
        },
        SplitKey::Enter => match focused {
            Some(i) if i < len => SplitOutcome::Select(i),
            _ => SplitOutcome::Ignore,
        },
    }
}

/// Indices of items whose label contains the search, case-insensitively
pub fn filter_items<T>(items: &[T], search: &str, label: impl Fn(&T) -> String) -> Vec<usize> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || label(item).to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitView {
    /// Wide viewport: both panels with a resize handle
    SideBySide,
    /// Narrow viewport, nothing selected
    Master,
    /// Narrow viewport with a selection; shows a back button
    Detail,
}

pub fn split_view(viewport_width: f64, breakpoint: f64, has_selection: bool) -> SplitView {
    if viewport_width >= breakpoint {
        SplitView::SideBySide
    } else if has_selection {
        SplitView::Detail
    } else {
        SplitView::Master
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    pub default_pct: f64,
    pub min_pct: f64,
    pub max_pct: f64,
}

impl Default for PanelBounds {
    fn default() -> Self {
        Self {
            default_pct: 35.0,
            min_pct: 20.0,
            max_pct: 60.0,
        }
    }
}

impl PanelBounds {
    pub fn clamp(&self, pct: f64) -> f64 {
        pct.clamp(self.min_pct, self.max_pct)
    }

    /// Master width after dragging the handle by `dx` pixels
    pub fn resize(&self, start_pct: f64, dx: f64, container_width: f64) -> f64 {
        if container_width <= 0.0 {
            return self.clamp(start_pct);
        }
        self.clamp(start_pct + dx * 100.0 / container_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_clamps_without_wraparound() {
        assert_eq!(handle_key(SplitKey::Up, Some(0), 5), SplitOutcome::Focus(0));
        assert_eq!(handle_key(SplitKey::Down, Some(4), 5), SplitOutcome::Focus(4));
        assert_eq!(handle_key(SplitKey::Down, Some(1), 5), SplitOutcome::Focus(2));
        assert_eq!(handle_key(SplitKey::Down, None, 5), SplitOutcome::Focus(0));
        assert_eq!(handle_key(SplitKey::Up, None, 5), SplitOutcome::Focus(0));
    }

    #[test]
    fn stale_focus_after_filtering_is_clamped() {
        assert_eq!(handle_key(SplitKey::Down, Some(9), 3), SplitOutcome::Focus(2));
        assert_eq!(handle_key(SplitKey::Up, Some(9), 3), SplitOutcome::Focus(1));
        assert_eq!(handle_key(SplitKey::Enter, Some(9), 3), SplitOutcome::Ignore);
    }

    #[test]
    fn empty_list_ignores_movement() {
        assert_eq!(handle_key(SplitKey::Down, None, 0), SplitOutcome::Ignore);
        assert_eq!(handle_key(SplitKey::Escape, None, 0), SplitOutcome::ClearSelection);
    }

    #[test]
    fn enter_selects_focused() {
        assert_eq!(handle_key(SplitKey::Enter, Some(2), 5), SplitOutcome::Select(2));
        assert_eq!(handle_key(SplitKey::Enter, None, 5), SplitOutcome::Ignore);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let items = vec!["Main Stage", "Green Room", "Backstage"];
        assert_eq!(filter_items(&items, "STAGE", |s| s.to_string()), vec![0, 2]);
        assert_eq!(filter_items(&items, " ", |s| s.to_string()).len(), 3);
    }

    #[test]
    fn responsive_modes() {
        assert_eq!(split_view(1024.0, DEFAULT_BREAKPOINT, false), SplitView::SideBySide);
        assert_eq!(split_view(500.0, DEFAULT_BREAKPOINT, false), SplitView::Master);
        assert_eq!(split_view(500.0, DEFAULT_BREAKPOINT, true), SplitView::Detail);
    }

    #[test]
    fn resize_is_clamped() {
        let bounds = PanelBounds::default();
        assert_eq!(bounds.resize(35.0, 1000.0, 1000.0), 60.0);
        assert_eq!(bounds.resize(35.0, -1000.0, 1000.0), 20.0);
        assert_eq!(bounds.resize(35.0, 50.0, 1000.0), 40.0);
    }
}
