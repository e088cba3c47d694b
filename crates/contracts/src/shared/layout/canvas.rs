//! Canvas editor state: zoom, tools, grid and keyboard commands

use super::keyboard::KeyChord;

pub const DEFAULT_MIN_ZOOM: u32 = 25;
pub const DEFAULT_MAX_ZOOM: u32 = 200;
pub const RESET_ZOOM: u32 = 100;
/// Step of the zoom buttons and shortcuts
pub const BUTTON_STEP: u32 = 10;
/// Step of the zoom slider
pub const SLIDER_STEP: u32 = 5;

/// Zoom percentage clamped to `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    value: u32,
    min: u32,
    max: u32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

impl ZoomState {
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: RESET_ZOOM.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Scale factor for CSS transforms
    pub fn scale(&self) -> f64 {
        self.value as f64 / 100.0
    }

    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn zoom_in(&mut self) {
        self.set(self.value.saturating_add(BUTTON_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set(self.value.saturating_sub(BUTTON_STEP));
    }

    pub fn reset(&mut self) {
        self.set(RESET_ZOOM);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.value < self.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.value > self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasTool {
    #[default]
    Select,
    /// Pan the viewport by dragging
    Hand,
    /// Rubber-band selection
    Marquee,
}

impl CanvasTool {
    pub const ALL: [CanvasTool; 3] = [Self::Select, Self::Hand, Self::Marquee];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select (V)",
            Self::Hand => "Hand (H)",
            Self::Marquee => "Marquee (M)",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Select => "mouse-pointer",
            Self::Hand => "hand",
            Self::Marquee => "square-dashed",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Select => "default",
            Self::Hand => "grab",
            Self::Marquee => "crosshair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasCommand {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Undo,
    Redo,
    Tool(CanvasTool),
    ToggleGrid,
}

/// Map a key chord to a canvas command.
///
/// Cmd/Ctrl combinations drive zoom and history; bare letters pick tools
/// and are ignored while any modifier is held.
pub fn command_for(chord: &KeyChord) -> Option<CanvasCommand> {
    let key = chord.key_lower();
    if chord.primary() {
        return match key.as_str() {
            "+" | "=" => Some(CanvasCommand::ZoomIn),
            "-" | "_" => Some(CanvasCommand::ZoomOut),
            "0" => Some(CanvasCommand::ZoomReset),
            "z" if chord.shift => Some(CanvasCommand::Redo),
            "z" => Some(CanvasCommand::Undo),
            _ => None,
        };
    }
    if chord.has_modifier() {
        return None;
    }
    match key.as_str() {
        "v" => Some(CanvasCommand::Tool(CanvasTool::Select)),
        "h" => Some(CanvasCommand::Tool(CanvasTool::Hand)),
        "m" => Some(CanvasCommand::Tool(CanvasTool::Marquee)),
        "g" => Some(CanvasCommand::ToggleGrid),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasState {
    pub zoom: ZoomState,
    pub tool: CanvasTool,
    pub show_grid: bool,
    pub pan: (f64, f64),
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            zoom: ZoomState::default(),
            tool: CanvasTool::Select,
            show_grid: true,
            pan: (0.0, 0.0),
        }
    }
}

impl CanvasState {
    pub fn with_zoom_bounds(min: u32, max: u32) -> Self {
        Self {
            zoom: ZoomState::new(min, max),
            ..Self::default()
        }
    }

    /// Apply a view command. Undo and redo are not view state and are
    /// returned for the caller to forward.
    pub fn apply(&mut self, command: CanvasCommand) -> Option<CanvasCommand> {
        match command {
            CanvasCommand::ZoomIn => self.zoom.zoom_in(),
            CanvasCommand::ZoomOut => self.zoom.zoom_out(),
            CanvasCommand::ZoomReset => self.zoom.reset(),
            CanvasCommand::Tool(tool) => self.tool = tool,
            CanvasCommand::ToggleGrid => self.show_grid = !self.show_grid,
            CanvasCommand::Undo | CanvasCommand::Redo => return Some(command),
        }
        None
    }

    /// Drag with the hand tool; other tools do not pan
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if self.tool == CanvasTool::Hand {
            self.pan = (self.pan.0 + dx, self.pan.1 + dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut zoom = ZoomState::default();
        zoom.set(25);
        zoom.zoom_out();
        assert_eq!(zoom.value(), 25);
        zoom.set(195);
        zoom.zoom_in();
        assert_eq!(zoom.value(), 200);
        zoom.set(10_000);
        assert_eq!(zoom.value(), 200);
        zoom.reset();
        assert_eq!(zoom.value(), 100);
    }

    #[test]
    fn reset_respects_custom_bounds() {
        let mut zoom = ZoomState::new(150, 400);
        zoom.reset();
        assert_eq!(zoom.value(), 150);
        assert!(!zoom.can_zoom_out());
    }

    #[test]
    fn primary_shortcuts() {
        assert_eq!(command_for(&KeyChord::new("=").meta()), Some(CanvasCommand::ZoomIn));
        assert_eq!(command_for(&KeyChord::new("+").ctrl().shift()), Some(CanvasCommand::ZoomIn));
        assert_eq!(command_for(&KeyChord::new("-").ctrl()), Some(CanvasCommand::ZoomOut));
        assert_eq!(command_for(&KeyChord::new("0").ctrl()), Some(CanvasCommand::ZoomReset));
        assert_eq!(command_for(&KeyChord::new("z").ctrl()), Some(CanvasCommand::Undo));
        assert_eq!(command_for(&KeyChord::new("Z").meta().shift()), Some(CanvasCommand::Redo));
    }

    #[test]
    fn bare_letters_pick_tools() {
        assert_eq!(
            command_for(&KeyChord::new("h")),
            Some(CanvasCommand::Tool(CanvasTool::Hand))
        );
        assert_eq!(
            command_for(&KeyChord::new("m")),
            Some(CanvasCommand::Tool(CanvasTool::Marquee))
        );
        assert_eq!(command_for(&KeyChord::new("g")), Some(CanvasCommand::ToggleGrid));
        assert_eq!(command_for(&KeyChord::new("v").ctrl()), None);
        assert_eq!(command_for(&KeyChord::new("h").shift()), None);
        assert_eq!(command_for(&KeyChord::new("x")), None);
    }

    #[test]
    fn state_applies_view_commands() {
        let mut state = CanvasState::default();
        assert_eq!(state.apply(CanvasCommand::ToggleGrid), None);
        assert!(!state.show_grid);
        assert_eq!(state.apply(CanvasCommand::Undo), Some(CanvasCommand::Undo));

        state.pan_by(10.0, 5.0);
        assert_eq!(state.pan, (0.0, 0.0));
        state.apply(CanvasCommand::Tool(CanvasTool::Hand));
        state.pan_by(10.0, 5.0);
        assert_eq!(state.pan, (10.0, 5.0));
    }
}
