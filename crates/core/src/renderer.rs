use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use derivative::Derivative;

use crate::{
    error::{Result, SetupError},
    game::{Color, File, FullPosition, Role, SideArrangement},
};

const FILE_LABELS: &str = "    a b c d e f g h";

/// Which glyph set each side is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphConvention {
    /// Black's pieces (ranks 8 and 7) in outline glyphs, white's (ranks 1 and
    /// 2) in filled glyphs. Reads correctly on dark terminals.
    #[default]
    Inverted,
    /// White in outline glyphs, black in filled glyphs, as Unicode names them.
    Literal,
}

impl GlyphConvention {
    fn glyph_set(self, side: Color) -> GlyphSet {
        match (self, side) {
            (GlyphConvention::Inverted, Color::Black) | (GlyphConvention::Literal, Color::White) => {
                GlyphSet::Outline
            }
            (GlyphConvention::Inverted, Color::White) | (GlyphConvention::Literal, Color::Black) => {
                GlyphSet::Filled
            }
        }
    }
}

impl FromStr for GlyphConvention {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inverted" => Ok(GlyphConvention::Inverted),
            "literal" => Ok(GlyphConvention::Literal),
            _ => Err(SetupError::InvalidArgument(format!(
                "unknown glyph convention {s:?}, expected \"inverted\" or \"literal\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlyphSet {
    Outline,
    Filled,
}

impl GlyphSet {
    fn piece(self, role: Role) -> char {
        match (self, role) {
            (GlyphSet::Outline, Role::King) => '♔',
            (GlyphSet::Outline, Role::Queen) => '♕',
            (GlyphSet::Outline, Role::Rook) => '♖',
            (GlyphSet::Outline, Role::DarkBishop | Role::LightBishop) => '♗',
            (GlyphSet::Outline, Role::Knight) => '♘',
            (GlyphSet::Filled, Role::King) => '♚',
            (GlyphSet::Filled, Role::Queen) => '♛',
            (GlyphSet::Filled, Role::Rook) => '♜',
            (GlyphSet::Filled, Role::DarkBishop | Role::LightBishop) => '♝',
            (GlyphSet::Filled, Role::Knight) => '♞',
        }
    }

    fn pawn(self) -> char {
        match self {
            GlyphSet::Outline => '♙',
            GlyphSet::Filled => '♟',
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub glyphs: GlyphConvention,
    /// Drawn on every square of ranks 3 to 6.
    #[derivative(Default(value = "'·'"))]
    pub empty: char,
}

/// Text diagram of a starting position: ranks 8 to 1, then the file labels.
pub struct Diagram<'a> {
    position: &'a FullPosition,
    config: &'a RenderConfig,
}

impl<'a> Diagram<'a> {
    pub fn new(position: &'a FullPosition, config: &'a RenderConfig) -> Self {
        Self { position, config }
    }

    fn cell(&self, file: File, rank: u8) -> char {
        let glyphs = self.config.glyphs;
        match rank {
            8 => glyphs.glyph_set(Color::Black).piece(self.position.black.role_at(file)),
            7 => glyphs.glyph_set(Color::Black).pawn(),
            2 => glyphs.glyph_set(Color::White).pawn(),
            1 => glyphs.glyph_set(Color::White).piece(self.position.white.role_at(file)),
            _ => self.config.empty,
        }
    }
}

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for rank in (1..=8).rev() {
            write!(f, "{rank} │")?;
            for file in File::ALL {
                write!(f, " {}", self.cell(file, rank))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{FILE_LABELS}")
    }
}

pub fn render(position: &FullPosition) -> String {
    render_with(position, &RenderConfig::default())
}

pub fn render_with(position: &FullPosition, config: &RenderConfig) -> String {
    Diagram::new(position, config).to_string()
}

/// Renders loose role/file assignments. Both sides are checked before any
/// text is produced.
pub fn render_assignments<W, B>(white: W, black: B, config: &RenderConfig) -> Result<String>
where
    W: IntoIterator<Item = (Role, File)>,
    B: IntoIterator<Item = (Role, File)>,
{
    let white = SideArrangement::from_assignments(white)?;
    let black = SideArrangement::from_assignments(black)?;
    Ok(render_with(&FullPosition::new(white, black), config))
}
