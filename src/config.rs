use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous width/height pair, making the two axes unambiguous
/// at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Side length of the fixed square play grid, in cells.
pub const GRID_CELLS: u16 = 30;

/// The fixed play grid used by the game binary.
#[must_use]
pub const fn play_grid() -> GridSize {
    GridSize {
        width: GRID_CELLS,
        height: GRID_CELLS,
    }
}

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Frame loop sleep in milliseconds; rendering and input polling run at this
/// cadence regardless of the tick interval.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head glyph.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for food.
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_title: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Classic retro green-on-dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_title: Color::Green,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_title: Color::Cyan,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    menu_title: Color::Cyan,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_title: Color::Magenta,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Returns the index of the theme with the given name, case-insensitive.
#[must_use]
pub fn theme_index_by_name(name: &str) -> Option<usize> {
    THEMES
        .iter()
        .position(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
