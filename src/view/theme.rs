use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub number: Color,
    pub pointer: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub function: Color,
    pub scope_name: Color,
    pub type_name: Color, // Cyan for type names
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    pointer: Color::Rgb(137, 180, 250),        // Blue for addresses held in pointers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    scope_name: Color::Rgb(180, 165, 120),     // Muted yellow for block scopes
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
};
