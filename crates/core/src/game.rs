use std::{
    fmt::{Debug, Display, Formatter},
    ops::Index,
    str::FromStr,
};

use crate::error::{Result, SetupError};

pub type FileTyp = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// File parity (0 for a, c, e, g and 1 for b, d, f, h) of the dark squares
    /// on this color's own back rank.
    ///
    /// a1 is dark but a8 is light, so white's dark-squared bishop goes on an
    /// even file and black's on an odd one. Each side is drawn against its
    /// own color, so the two sides never need to know about each other.
    pub const fn dark_parity(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

impl FromStr for Color {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(SetupError::InvalidArgument(format!(
                "unknown color {s:?}, expected \"white\" or \"black\""
            ))),
        }
    }
}

/// One of the eight back-rank columns, `a` through `h`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(FileTyp);

impl File {
    pub const ALL: [File; 8] = [
        File(0),
        File(1),
        File(2),
        File(3),
        File(4),
        File(5),
        File(6),
        File(7),
    ];

    pub const fn new(index: FileTyp) -> Option<Self> {
        if index < 8 {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn parity(self) -> u8 {
        self.0 % 2
    }

    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// Files show up inside arrangement dumps, where `c` reads better than `File(2)`.
impl Debug for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for File {
    type Error = SetupError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'a'..='h' => Ok(Self(c as FileTyp - b'a')),
            _ => Err(SetupError::MalformedArrangement(format!(
                "invalid file: {c:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    DarkBishop,
    LightBishop,
    Knight,
    Queen,
    Rook,
    King,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::DarkBishop,
        Role::LightBishop,
        Role::Knight,
        Role::Queen,
        Role::Rook,
        Role::King,
    ];

    /// How many pieces of this role stand on a back rank.
    pub const fn count(self) -> usize {
        match self {
            Role::Knight | Role::Rook => 2,
            _ => 1,
        }
    }

    /// Upper-case piece letter as used in FEN.
    pub const fn letter(self) -> char {
        match self {
            Role::DarkBishop | Role::LightBishop => 'B',
            Role::Knight => 'N',
            Role::Queen => 'Q',
            Role::Rook => 'R',
            Role::King => 'K',
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::DarkBishop => "dark bishop",
            Role::LightBishop => "light bishop",
            Role::Knight => "knight",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::King => "king",
        })
    }
}

/// One side's back rank: every role mapped to its file, each file used once.
///
/// Knights and rooks are kept as sorted pairs, so two arrangements compare
/// equal whenever they put the same pieces on the same files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideArrangement {
    dark_bishop: File,
    light_bishop: File,
    queen: File,
    knights: [File; 2],
    rooks: [File; 2],
    king: File,
}

fn sorted_pair([a, b]: [File; 2]) -> [File; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}

impl SideArrangement {
    /// Callers guarantee the eight files are distinct.
    pub(crate) fn from_parts(
        dark_bishop: File,
        light_bishop: File,
        queen: File,
        knights: [File; 2],
        rooks: [File; 2],
        king: File,
    ) -> Self {
        let side = Self {
            dark_bishop,
            light_bishop,
            queen,
            knights: sorted_pair(knights),
            rooks: sorted_pair(rooks),
            king,
        };
        debug_assert!(side.occupancy().iter().all(Option::is_some));
        side
    }

    /// Builds an arrangement from loose `(role, file)` pairs.
    ///
    /// Fails with [`SetupError::MalformedArrangement`] unless there is exactly
    /// one dark bishop, one light bishop, one queen, one king, two knights and
    /// two rooks on eight distinct files. Chess960 rules are not checked here,
    /// see [`SideArrangement::is_chess960`].
    pub fn from_assignments<I>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, File)>,
    {
        let mut occupant: [Option<Role>; 8] = [None; 8];
        let mut by_role: [Vec<File>; 6] = Default::default();

        for (role, file) in assignments {
            if let Some(other) = occupant[file.index()] {
                return Err(SetupError::MalformedArrangement(format!(
                    "file {file} holds both the {other} and the {role}"
                )));
            }
            occupant[file.index()] = Some(role);
            by_role[role as usize].push(file);
        }

        for role in Role::ALL {
            let found = by_role[role as usize].len();
            if found != role.count() {
                return Err(SetupError::MalformedArrangement(format!(
                    "expected {} {role}, found {found}",
                    role.count()
                )));
            }
        }

        let single = |role: Role| by_role[role as usize][0];
        let pair = |role: Role| [by_role[role as usize][0], by_role[role as usize][1]];

        Ok(Self::from_parts(
            single(Role::DarkBishop),
            single(Role::LightBishop),
            single(Role::Queen),
            pair(Role::Knight),
            pair(Role::Rook),
            single(Role::King),
        ))
    }

    pub fn dark_bishop(&self) -> File {
        self.dark_bishop
    }

    pub fn light_bishop(&self) -> File {
        self.light_bishop
    }

    pub fn queen(&self) -> File {
        self.queen
    }

    pub fn knights(&self) -> [File; 2] {
        self.knights
    }

    pub fn rooks(&self) -> [File; 2] {
        self.rooks
    }

    pub fn king(&self) -> File {
        self.king
    }

    pub fn assignments(&self) -> [(Role, File); 8] {
        [
            (Role::DarkBishop, self.dark_bishop),
            (Role::LightBishop, self.light_bishop),
            (Role::Knight, self.knights[0]),
            (Role::Knight, self.knights[1]),
            (Role::Queen, self.queen),
            (Role::Rook, self.rooks[0]),
            (Role::Rook, self.rooks[1]),
            (Role::King, self.king),
        ]
    }

    fn occupancy(&self) -> [Option<Role>; 8] {
        let mut rank = [None; 8];
        for (role, file) in self.assignments() {
            rank[file.index()] = Some(role);
        }
        rank
    }

    /// Roles in file order, a to h.
    pub fn back_rank(&self) -> [Role; 8] {
        let mut rank = [Role::King; 8];
        for (role, file) in self.assignments() {
            rank[file.index()] = role;
        }
        rank
    }

    pub fn role_at(&self, file: File) -> Role {
        self.back_rank()[file.index()]
    }

    /// Bishops on opposite parities and the king strictly between the rooks,
    /// regardless of which bishop is labelled dark.
    pub(crate) fn has_chess960_shape(&self) -> bool {
        self.dark_bishop.parity() != self.light_bishop.parity()
            && self.rooks[0] < self.king
            && self.king < self.rooks[1]
    }

    /// Checks the Chess960 placement rules with `reference` deciding which
    /// parity the dark bishop must stand on.
    pub fn is_chess960(&self, reference: Color) -> bool {
        self.has_chess960_shape() && self.dark_bishop.parity() == reference.dark_parity()
    }

    /// The back rank as eight upper-case piece letters, e.g. `RNBQKBNR`.
    pub fn to_notation(&self) -> String {
        self.back_rank().iter().map(|role| role.letter()).collect()
    }
}

impl Display for SideArrangement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_notation())
    }
}

/// Both sides of a starting position. The sides need not mirror each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FullPosition {
    pub white: SideArrangement,
    pub black: SideArrangement,
}

impl FullPosition {
    pub const fn new(white: SideArrangement, black: SideArrangement) -> Self {
        Self { white, black }
    }

    /// Shredder-FEN of the starting position. Castling rights name the rook
    /// files, king side first.
    pub fn to_fen(&self) -> String {
        let [white_queen_side, white_king_side] = self.white.rooks;
        let [black_queen_side, black_king_side] = self.black.rooks;
        let castling = format!(
            "{}{}{}{}",
            white_king_side.to_char().to_ascii_uppercase(),
            white_queen_side.to_char().to_ascii_uppercase(),
            black_king_side,
            black_queen_side,
        );

        format!(
            "{}/pppppppp/8/8/8/8/PPPPPPPP/{} w {castling} - 0 1",
            self.black.to_notation().to_ascii_lowercase(),
            self.white.to_notation()
        )
    }
}

impl Index<Color> for FullPosition {
    type Output = SideArrangement;

    fn index(&self, color: Color) -> &Self::Output {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(c: char) -> File {
        File::try_from(c).unwrap()
    }

    fn classical() -> SideArrangement {
        SideArrangement::from_assignments([
            (Role::DarkBishop, file('c')),
            (Role::LightBishop, file('f')),
            (Role::Queen, file('d')),
            (Role::Knight, file('b')),
            (Role::Knight, file('g')),
            (Role::Rook, file('a')),
            (Role::King, file('e')),
            (Role::Rook, file('h')),
        ])
        .unwrap()
    }

    #[test]
    fn color_names() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!(" Black\n".parse::<Color>(), Ok(Color::Black));
        assert!(matches!(
            "green".parse::<Color>(),
            Err(SetupError::InvalidArgument(_))
        ));
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn file_labels() {
        assert_eq!(File::ALL.map(File::to_char), ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
        assert_eq!(File::new(8), None);
        assert!(File::try_from('i').is_err());
        assert_eq!(file('d').index(), 3);
    }

    #[test]
    fn back_rank_follows_file_order() {
        let side = classical();
        assert_eq!(side.to_notation(), "RNBQKBNR");
        assert_eq!(side.role_at(file('c')), Role::DarkBishop);
        assert_eq!(side.role_at(file('f')), Role::LightBishop);
    }

    #[test]
    fn pairs_are_unordered() {
        let swapped = SideArrangement::from_assignments([
            (Role::Rook, file('h')),
            (Role::Rook, file('a')),
            (Role::Knight, file('g')),
            (Role::Knight, file('b')),
            (Role::King, file('e')),
            (Role::Queen, file('d')),
            (Role::LightBishop, file('f')),
            (Role::DarkBishop, file('c')),
        ])
        .unwrap();
        assert_eq!(swapped, classical());
        assert_eq!(swapped.rooks(), [file('a'), file('h')]);
    }

    #[test]
    fn duplicate_file_is_rejected() {
        let res = SideArrangement::from_assignments([
            (Role::DarkBishop, file('c')),
            (Role::LightBishop, file('c')),
        ]);
        assert!(matches!(res, Err(SetupError::MalformedArrangement(_))));
    }

    #[test]
    fn missing_role_is_rejected() {
        let mut assignments = classical().assignments().to_vec();
        assignments.retain(|(role, _)| *role != Role::Queen);
        let res = SideArrangement::from_assignments(assignments);
        assert!(matches!(res, Err(SetupError::MalformedArrangement(_))));
    }

    #[test]
    fn chess960_rules() {
        let side = classical();
        assert!(side.is_chess960(Color::White));
        // c8 is a light square, so the same labels are wrong for black.
        assert!(!side.is_chess960(Color::Black));

        let king_outside = SideArrangement::from_assignments([
            (Role::DarkBishop, file('c')),
            (Role::LightBishop, file('f')),
            (Role::Queen, file('d')),
            (Role::Knight, file('b')),
            (Role::Knight, file('g')),
            (Role::King, file('a')),
            (Role::Rook, file('e')),
            (Role::Rook, file('h')),
        ])
        .unwrap();
        assert!(!king_outside.is_chess960(Color::White));
    }

    #[test]
    fn classical_fen() {
        let position = FullPosition::new(classical(), classical());
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w HAha - 0 1"
        );
        assert_eq!(position[Color::Black], classical());
    }
}
