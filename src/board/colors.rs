/// ANSI reset sequence appended after every painted symbol.
pub const RESET: &str = "\x1b[0m";

/// The closed set of display colors a player may pick. Parsing is exact:
/// only the uppercase names listed here are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BoardColor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BLACK" => Some(BoardColor::Black),
            "RED" => Some(BoardColor::Red),
            "GREEN" => Some(BoardColor::Green),
            "YELLOW" => Some(BoardColor::Yellow),
            "BLUE" => Some(BoardColor::Blue),
            "MAGENTA" => Some(BoardColor::Magenta),
            "CYAN" => Some(BoardColor::Cyan),
            "WHITE" => Some(BoardColor::White),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoardColor::Black => "BLACK",
            BoardColor::Red => "RED",
            BoardColor::Green => "GREEN",
            BoardColor::Yellow => "YELLOW",
            BoardColor::Blue => "BLUE",
            BoardColor::Magenta => "MAGENTA",
            BoardColor::Cyan => "CYAN",
            BoardColor::White => "WHITE",
        }
    }

    /// Bold ANSI escape for this color. Black uses the bright variant so it
    /// stays visible on dark terminals.
    pub fn code(&self) -> &'static str {
        match self {
            BoardColor::Black => "\x1b[1;90m",
            BoardColor::Red => "\x1b[1;31m",
            BoardColor::Green => "\x1b[1;32m",
            BoardColor::Yellow => "\x1b[1;33m",
            BoardColor::Blue => "\x1b[1;34m",
            BoardColor::Magenta => "\x1b[1;35m",
            BoardColor::Cyan => "\x1b[1;36m",
            BoardColor::White => "\x1b[1;37m",
        }
    }

    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}
