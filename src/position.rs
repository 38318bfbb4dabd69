/*
  Skewer, a bitboard-based chess move generation library.
  Copyright (C) 2026 The Skewer Authors (see AUTHORS.md file)

  Skewer is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Skewer is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Immutable chess positions.
//!
//! A `Position` carries the piece placement and game state of one moment of
//! a chess game, plus data derived at construction time which the move
//! generator consumes: which squares the enemy attacks, which enemy pieces
//! give check, the capture and push masks that constrain non-king moves
//! while in check, and the set of absolutely pinned pieces. Because a
//! position is never mutated after construction, the derived data can never
//! go stale.

use arrayvec::ArrayVec;

use super::{AttackTables, Bitboard, CastleRights, Color, Piece, Square};

use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One enemy piece giving check: its type and the single-bit board of its
/// square.
pub struct Checker {
    /// The type of the checking piece.
    pub piece: Piece,
    /// A bitboard containing exactly the checking piece's square.
    pub board: Bitboard,
}

/// The pieces checking the player to move. There can be at most two.
pub type CheckerList = ArrayVec<Checker, 2>;

#[derive(Debug, Clone)]
/// A complete chess position. Immutable once constructed; to examine a
/// different position, construct a new one.
pub struct Position {
    /// The squares occupied by White and Black, respectively.
    sides: [Bitboard; 2],
    /// The squares occupied by (in order) knights, bishops, rooks, queens,
    /// pawns, and kings.
    pieces: [Bitboard; Piece::NUM_TYPES],
    /// The color of the player to move.
    player: Color,
    /// The square which can be moved to by a pawn in en passant. Will be
    /// `None` when a pawn has not moved two squares in the previous move.
    en_passant_square: Option<Square>,
    /// The castling rights of both players.
    castle_rights: CastleRights,
    /// The number of plies since the last capture or pawn move.
    halfmove_clock: u16,
    /// The move number, starting at 1 and incremented after Black moves.
    fullmove_number: u16,
    /// The squares of the White and Black kings, respectively.
    king_sqs: [Square; 2],
    /// The squares attacked by the enemy, computed as if the friendly king
    /// were not on the board. The king may not move to any of these squares.
    king_danger: Bitboard,
    /// The enemy pieces checking the friendly king.
    checkers: CheckerList,
    /// The squares on which capturing an enemy piece can address check.
    /// `ALL` when not in check, `EMPTY` in double check.
    capture_mask: Bitboard,
    /// The squares to which a piece can move to block check. `ALL` when not
    /// in check, `EMPTY` in double check or when the lone checker cannot be
    /// blocked.
    push_mask: Bitboard,
    /// The friendly pieces which are absolutely pinned to the king, and so
    /// may only move along their pin line.
    pinned: Bitboard,
}

impl Position {
    /// Construct a position from its components, validating the placement.
    /// The boards in `pieces` must be pairwise disjoint, `sides` must be
    /// disjoint and together cover the same squares as `pieces`, and each
    /// side must have exactly one king.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sides: [Bitboard; 2],
        pieces: [Bitboard; Piece::NUM_TYPES],
        player: Color,
        en_passant_square: Option<Square>,
        castle_rights: CastleRights,
        halfmove_clock: u16,
        fullmove_number: u16,
        tables: &AttackTables,
    ) -> Result<Position, String> {
        let mut piece_union = Bitboard::EMPTY;
        for bb in pieces {
            if !(piece_union & bb).is_empty() {
                return Err("two piece types occupy the same square".into());
            }
            piece_union |= bb;
        }
        if !(sides[0] & sides[1]).is_empty() {
            return Err("both colors occupy the same square".into());
        }
        if (sides[0] | sides[1]) != piece_union {
            return Err("side occupancy does not match piece occupancy".into());
        }
        if !(pieces[Piece::King as usize] & sides[Color::White as usize]).has_single_bit() {
            return Err("White must have exactly one king".into());
        }
        if !(pieces[Piece::King as usize] & sides[Color::Black as usize]).has_single_bit() {
            return Err("Black must have exactly one king".into());
        }

        Ok(Position::assemble(
            sides,
            pieces,
            player,
            en_passant_square,
            castle_rights,
            halfmove_clock,
            fullmove_number,
            tables,
        ))
    }

    /// Create a position from the given FEN. Returns `Err` with a
    /// description of the failure if the FEN is invalid. The halfmove clock
    /// and fullmove number may be omitted, defaulting to 0 and 1.
    pub fn from_fen(fen: &str, tables: &AttackTables) -> Result<Position, String> {
        let mut sides = [Bitboard::EMPTY; 2];
        let mut pieces = [Bitboard::EMPTY; Piece::NUM_TYPES];
        let mut fen_chrs = fen.chars();
        let mut r = 7; // current rank being parsed
        let mut c = 0; // current file being parsed

        loop {
            if (r, c) == (0, 8) {
                break;
            }
            let chr = fen_chrs
                .next()
                .ok_or("reached end of FEN before board was fully parsed")?;
            let color = if chr.is_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let pt = chr.to_uppercase().next().and_then(Piece::from_code);
            if let Some(p) = pt {
                if c >= 8 {
                    return Err("too many pieces in one rank".into());
                }
                let sq = Square::new(r, c).ok_or("too many pieces in one rank")?;
                sides[color as usize].insert(sq);
                pieces[p as usize].insert(sq);
                c += 1;
            } else if chr == '/' {
                if r == 0 {
                    return Err("too many ranks in FEN".into());
                }
                r -= 1;
                c = 0;
            } else {
                let num_blanks = chr.to_digit(10).ok_or("expected number of blanks")?;
                c += num_blanks as usize;
            }
        }

        if fen_chrs.next() != Some(' ') {
            return Err("expected space after board array section of FEN".into());
        }

        let player_chr = fen_chrs
            .next()
            .ok_or("reached end of string while parsing for player to move")?;
        let player = match player_chr {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err("unrecognized player to move".into()),
        };

        if fen_chrs.next() != Some(' ') {
            return Err("expected space after player to move section of FEN".into());
        }

        let mut castle_rights = CastleRights::NO_RIGHTS;
        let mut castle_chr = fen_chrs
            .next()
            .ok_or("reached end of string while parsing castle rights")?;
        while castle_chr != ' ' {
            // this may accept some technically illegal FENs, but that's ok
            castle_rights |= match castle_chr {
                'K' => CastleRights::king_castle(Color::White),
                'Q' => CastleRights::queen_castle(Color::White),
                'k' => CastleRights::king_castle(Color::Black),
                'q' => CastleRights::queen_castle(Color::Black),
                '-' => CastleRights::NO_RIGHTS,
                _ => return Err("unrecognized castle rights character".into()),
            };
            castle_chr = fen_chrs
                .next()
                .ok_or("reached end of string while parsing castle rights")?;
        }

        // castle rights parsing ate the space already
        let mut en_passant_square = None;
        let ep_file_chr = fen_chrs
            .next()
            .ok_or("reached end of string while parsing en passant")?;
        if ep_file_chr != '-' {
            let ep_rank_chr = fen_chrs
                .next()
                .ok_or("reached end of string while parsing en passant rank")?;
            let mut s = String::from(ep_file_chr);
            s.push(ep_rank_chr);
            en_passant_square = Some(Square::from_algebraic(&s)?);
        }

        let mut clocks = fen_chrs.as_str().split_whitespace();
        let halfmove_clock = match clocks.next() {
            None => 0,
            Some(tok) => tok
                .parse()
                .map_err(|_| "halfmove clock is not a number".to_string())?,
        };
        let fullmove_number = match clocks.next() {
            None => 1,
            Some(tok) => tok
                .parse()
                .map_err(|_| "fullmove number is not a number".to_string())?,
        };

        Position::new(
            sides,
            pieces,
            player,
            en_passant_square,
            castle_rights,
            halfmove_clock,
            fullmove_number,
            tables,
        )
    }

    /// Build a position from components known to be valid, computing all of
    /// the derived data.
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        sides: [Bitboard; 2],
        pieces: [Bitboard; Piece::NUM_TYPES],
        player: Color,
        en_passant_square: Option<Square>,
        castle_rights: CastleRights,
        halfmove_clock: u16,
        fullmove_number: u16,
        tables: &AttackTables,
    ) -> Position {
        let kings = pieces[Piece::King as usize];
        // SAFETY: the caller has verified that each side has one king.
        let king_sqs = [
            unsafe { Square::unsafe_from(kings & sides[Color::White as usize]) },
            unsafe { Square::unsafe_from(kings & sides[Color::Black as usize]) },
        ];
        let king_sq = king_sqs[player as usize];
        let enemy = !player;
        let enemies = sides[enemy as usize];
        let occupancy = sides[0] | sides[1];

        // Attacks are computed as if the friendly king were absent, so that
        // stepping away from a slider along its own line of attack still
        // registers as dangerous.
        let occ_no_king = occupancy ^ Bitboard::from(king_sq);
        let mut king_danger = Bitboard::EMPTY;
        for sq in pieces[Piece::Pawn as usize] & enemies {
            king_danger |= tables.pawn_attacks(enemy, sq);
        }
        for sq in pieces[Piece::Knight as usize] & enemies {
            king_danger |= tables.knight_attacks(sq);
        }
        for sq in (pieces[Piece::Bishop as usize] | pieces[Piece::Queen as usize]) & enemies {
            king_danger |= tables.bishop_attacks(occ_no_king, sq);
        }
        for sq in (pieces[Piece::Rook as usize] | pieces[Piece::Queen as usize]) & enemies {
            king_danger |= tables.rook_attacks(occ_no_king, sq);
        }
        king_danger |= tables.king_attacks(king_sqs[enemy as usize]);

        // Find checkers by looking outward from the king: the enemy pawns a
        // friendly pawn on the king's square would attack, and so on for
        // each piece type.
        let mut checkers = CheckerList::new();
        let bishop_vision = tables.bishop_attacks(occupancy, king_sq);
        let rook_vision = tables.rook_attacks(occupancy, king_sq);
        let reach = [
            (Piece::Pawn, tables.pawn_attacks(player, king_sq)),
            (Piece::Knight, tables.knight_attacks(king_sq)),
            (Piece::Bishop, bishop_vision),
            (Piece::Rook, rook_vision),
            (Piece::Queen, bishop_vision | rook_vision),
        ];
        for (pt, vision) in reach {
            for sq in vision & pieces[pt as usize] & enemies {
                // More than two checkers is impossible in a position with a
                // legal history; if the list is somehow full, the masks
                // would be empty regardless.
                let _ = checkers.try_push(Checker {
                    piece: pt,
                    board: Bitboard::from(sq),
                });
            }
        }

        let (capture_mask, push_mask) = match checkers.len() {
            0 => (Bitboard::ALL, Bitboard::ALL),
            1 => {
                let checker = checkers[0];
                // SAFETY: a checker's board has exactly one bit.
                let checker_sq = unsafe { Square::unsafe_from(checker.board) };
                let push = if checker.piece.is_slider() {
                    tables.between(king_sq, checker_sq)
                } else {
                    // Contact checks cannot be blocked.
                    Bitboard::EMPTY
                };
                (checker.board, push)
            }
            _ => (Bitboard::EMPTY, Bitboard::EMPTY),
        };

        // A piece is pinned when it is the lone occupant of the interval
        // between the king and an enemy slider which sees the king on an
        // otherwise empty board.
        let allies = sides[player as usize];
        let mut pinned = Bitboard::EMPTY;
        let rook_like = (pieces[Piece::Rook as usize] | pieces[Piece::Queen as usize]) & enemies;
        for sq in rook_like & tables.rook_attacks(Bitboard::EMPTY, king_sq) {
            let blockers = tables.between(king_sq, sq) & occupancy;
            if blockers.has_single_bit() && !(blockers & allies).is_empty() {
                pinned |= blockers;
            }
        }
        let bishop_like =
            (pieces[Piece::Bishop as usize] | pieces[Piece::Queen as usize]) & enemies;
        for sq in bishop_like & tables.bishop_attacks(Bitboard::EMPTY, king_sq) {
            let blockers = tables.between(king_sq, sq) & occupancy;
            if blockers.has_single_bit() && !(blockers & allies).is_empty() {
                pinned |= blockers;
            }
        }

        Position {
            sides,
            pieces,
            player,
            en_passant_square,
            castle_rights,
            halfmove_clock,
            fullmove_number,
            king_sqs,
            king_danger,
            checkers,
            capture_mask,
            push_mask,
            pinned,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by pieces of either color.
    pub fn occupancy(&self) -> Bitboard {
        self[Color::White] | self[Color::Black]
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of the player to move.
    pub const fn player(&self) -> Color {
        self.player
    }

    #[inline(always)]
    #[must_use]
    /// Get the en passant target square, if a pawn just made a double push.
    pub const fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline(always)]
    #[must_use]
    /// Get the castling rights of both players.
    pub const fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline(always)]
    #[must_use]
    /// Get the number of plies since the last capture or pawn move.
    pub const fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline(always)]
    #[must_use]
    /// Get the move number, which starts at 1 and increments after each of
    /// Black's moves.
    pub const fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline(always)]
    #[must_use]
    /// Get the square of the given color's king.
    pub const fn king_square(&self, color: Color) -> Square {
        self.king_sqs[color as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares attacked by the enemy, computed with the friendly
    /// king removed from the board. The friendly king may not move to any of
    /// these squares.
    pub const fn king_danger(&self) -> Bitboard {
        self.king_danger
    }

    #[inline(always)]
    #[must_use]
    /// Get the enemy pieces which currently check the player to move.
    pub fn checkers(&self) -> &CheckerList {
        &self.checkers
    }

    #[inline(always)]
    #[must_use]
    /// Is the player to move in check?
    pub fn in_check(&self) -> bool {
        !self.checkers.is_empty()
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares on which a capture can resolve check. `ALL` when not
    /// in check, the checker's square in single check, and `EMPTY` in double
    /// check.
    pub const fn capture_mask(&self) -> Bitboard {
        self.capture_mask
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a piece can move to in order to block check. `ALL`
    /// when not in check, the interval between the king and a sliding
    /// checker in single check, and `EMPTY` otherwise.
    pub const fn push_mask(&self) -> Bitboard {
        self.push_mask
    }

    #[inline(always)]
    #[must_use]
    /// Get the friendly pieces which are absolutely pinned to the king.
    pub const fn pinned(&self) -> Bitboard {
        self.pinned
    }

    #[inline(always)]
    #[must_use]
    /// Get the type of the piece occupying a given square, or `None` if the
    /// square is empty.
    pub fn type_at_square(&self, sq: Square) -> Option<Piece> {
        Piece::ALL_TYPES.into_iter().find(|&pt| self[pt].contains(sq))
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of the piece occupying a given square, or `None` if the
    /// square is empty.
    pub fn color_at_square(&self, sq: Square) -> Option<Color> {
        if self[Color::White].contains(sq) {
            Some(Color::White)
        } else if self[Color::Black].contains(sq) {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl Index<Piece> for Position {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given piece type, of both colors.
    fn index(&self, index: Piece) -> &Self::Output {
        &self.pieces[index as usize]
    }
}

impl Index<Color> for Position {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by pieces of the given color.
    fn index(&self, index: Color) -> &Self::Output {
        &self.sides[index as usize]
    }
}

impl PartialEq for Position {
    /// Positions compare equal when their game state matches; the derived
    /// data is a function of the rest and is not examined.
    fn eq(&self, other: &Position) -> bool {
        self.sides == other.sides
            && self.pieces == other.pieces
            && self.player == other.player
            && self.en_passant_square == other.en_passant_square
            && self.castle_rights == other.castle_rights
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl Default for Position {
    /// The position at the start of a chess game.
    fn default() -> Position {
        Position::assemble(
            [
                Bitboard::new(0x0000_0000_0000_FFFF),
                Bitboard::new(0xFFFF_0000_0000_0000),
            ],
            [
                Bitboard::new(0x4200_0000_0000_0042), // knights
                Bitboard::new(0x2400_0000_0000_0024), // bishops
                Bitboard::new(0x8100_0000_0000_0081), // rooks
                Bitboard::new(0x0800_0000_0000_0008), // queens
                Bitboard::new(0x00FF_0000_0000_FF00), // pawns
                Bitboard::new(0x1000_0000_0000_0010), // kings
            ],
            Color::White,
            None,
            CastleRights::ALL_RIGHTS,
            0,
            1,
            AttackTables::shared(),
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for r in (0..8).rev() {
            for c in 0..8 {
                // Ranks are validly constructed, so a square always exists.
                if let Some(sq) = Square::new(r, c) {
                    match self.type_at_square(sq) {
                        Some(pt) => match self.color_at_square(sq) {
                            Some(Color::Black) => write!(f, "{}", pt.code().to_lowercase())?,
                            _ => write!(f, "{}", pt.code())?,
                        },
                        None => write!(f, ".")?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn load_start_fen() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen(STARTPOS_FEN, tables).unwrap();
        assert_eq!(pos, Position::default());
        assert_eq!(pos.king_square(Color::White), Square::E1);
        assert_eq!(pos.king_square(Color::Black), Square::E8);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn load_two_kings_fen() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1", tables).unwrap();
        assert_eq!(pos.king_square(Color::White), Square::A1);
        assert_eq!(pos.king_square(Color::Black), Square::H8);
        assert_eq!(pos.castle_rights(), CastleRights::NO_RIGHTS);
        assert!(!pos.in_check());
    }

    #[test]
    fn load_en_passant_square() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen(
            "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            tables,
        )
        .unwrap();
        assert_eq!(pos.en_passant_square(), Some(Square::F6));
        assert_eq!(pos.fullmove_number(), 3);
    }

    #[test]
    fn missing_clocks_default() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("7k/8/8/8/8/8/8/K7 w - -", tables).unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn reject_bad_fens() {
        let tables = AttackTables::shared();
        // no kings at all
        assert!(Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1", tables).is_err());
        // two white kings
        assert!(Position::from_fen("7k/8/8/8/8/8/8/KK6 w - - 0 1", tables).is_err());
        // truncated board
        assert!(Position::from_fen("rnbqkbnr/pppppppp w KQkq - 0 1", tables).is_err());
        // bad player to move
        assert!(Position::from_fen("7k/8/8/8/8/8/8/K7 x - - 0 1", tables).is_err());
        // bad halfmove clock
        assert!(Position::from_fen("7k/8/8/8/8/8/8/K7 w - - x 1", tables).is_err());
    }

    #[test]
    fn startpos_derived_data() {
        let pos = Position::default();
        assert!(!pos.in_check());
        assert!(pos.checkers().is_empty());
        assert_eq!(pos.capture_mask(), Bitboard::ALL);
        assert_eq!(pos.push_mask(), Bitboard::ALL);
        assert_eq!(pos.pinned(), Bitboard::EMPTY);
        // White's back rank is not attacked by anything.
        assert!(!pos.king_danger().contains(Square::E1));
        // Black's pawns cover White's sixth rank.
        assert!(pos.king_danger().contains(Square::A6));
    }

    #[test]
    fn rook_check_masks() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/8/8/8/4R3/8/8/4K3 b - - 0 1", tables).unwrap();
        assert!(pos.in_check());
        assert_eq!(pos.checkers().len(), 1);
        assert_eq!(pos.checkers()[0].piece, Piece::Rook);
        assert_eq!(pos.capture_mask(), Bitboard::from(Square::E4));
        assert_eq!(
            pos.push_mask(),
            Bitboard::from(Square::E5) | Bitboard::from(Square::E6) | Bitboard::from(Square::E7)
        );
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1", tables).unwrap();
        assert_eq!(pos.checkers().len(), 1);
        assert_eq!(pos.checkers()[0].piece, Piece::Knight);
        assert_eq!(pos.capture_mask(), Bitboard::from(Square::D6));
        assert_eq!(pos.push_mask(), Bitboard::EMPTY);
    }

    #[test]
    fn double_check_empties_masks() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/8/3N4/8/8/8/8/4R1K1 b - - 0 1", tables).unwrap();
        assert_eq!(pos.checkers().len(), 2);
        assert_eq!(pos.capture_mask(), Bitboard::EMPTY);
        assert_eq!(pos.push_mask(), Bitboard::EMPTY);
    }

    #[test]
    fn absolute_pin_detected() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/4r3/8/8/4B3/8/8/4K3 w - - 0 1", tables).unwrap();
        assert!(!pos.in_check());
        assert_eq!(pos.pinned(), Bitboard::from(Square::E4));
    }

    #[test]
    fn two_blockers_are_not_pins() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/4r3/8/4N3/4B3/8/8/4K3 w - - 0 1", tables).unwrap();
        assert_eq!(pos.pinned(), Bitboard::EMPTY);
    }

    #[test]
    fn enemy_blocker_is_not_a_pin() {
        let tables = AttackTables::shared();
        let pos = Position::from_fen("4k3/4r3/8/8/4n3/8/8/4K3 w - - 0 1", tables).unwrap();
        assert_eq!(pos.pinned(), Bitboard::EMPTY);
    }

    #[test]
    fn king_danger_sees_through_king() {
        let tables = AttackTables::shared();
        // The rook's attack extends past the king itself, so retreating
        // along the file would still be in danger.
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", tables).unwrap();
        assert!(pos.king_danger().contains(Square::F1));
        assert!(pos.king_danger().contains(Square::G1));
        assert!(pos.in_check());
    }
}
