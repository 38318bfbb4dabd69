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

//! Moves, compactly encoded together with the kind of move they are.

use arrayvec::ArrayVec;

use super::{Color, Piece, Square};

use std::{
    fmt::{Display, Formatter},
    mem::transmute,
};

/// A list of moves, allocated on the stack. No chess position has more than
/// 256 legal moves, so generation never spills to the heap.
pub type MoveList = ArrayVec<Move, 256>;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The classification of a move. The kind alone determines whether a move
/// captures, promotes, or has special follow-up effects; no board context is
/// needed to interpret it.
///
/// The promotion kinds are laid out so that the promotion type occupies the
/// two low bits of the offset from `KnightPromotion` (or from
/// `KnightPromotionCapture` for capturing promotions).
pub enum MoveKind {
    /// A quiet move with no side effects.
    Normal = 0,
    /// A move which removes an enemy piece from the target square.
    Capture = 1,
    /// A two-square pawn advance from the start rank, which exposes the pawn
    /// to capture en passant.
    DoublePawnPush = 2,
    KnightPromotion = 3,
    BishopPromotion = 4,
    RookPromotion = 5,
    QueenPromotion = 6,
    KnightPromotionCapture = 7,
    BishopPromotionCapture = 8,
    RookPromotionCapture = 9,
    QueenPromotionCapture = 10,
    WhiteKingsideCastle = 11,
    WhiteQueensideCastle = 12,
    BlackKingsideCastle = 13,
    BlackQueensideCastle = 14,
    /// A pawn capture of a pawn which just made a double push. The captured
    /// pawn is not on the target square.
    EnPassant = 15,
}

impl MoveKind {
    #[inline(always)]
    #[must_use]
    /// Does a move of this kind remove an enemy piece from the board?
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture
                | MoveKind::KnightPromotionCapture
                | MoveKind::BishopPromotionCapture
                | MoveKind::RookPromotionCapture
                | MoveKind::QueenPromotionCapture
                | MoveKind::EnPassant
        )
    }

    #[inline(always)]
    #[must_use]
    /// Does a move of this kind promote a pawn?
    pub const fn is_promotion(self) -> bool {
        MoveKind::KnightPromotion as u8 <= self as u8
            && self as u8 <= MoveKind::QueenPromotionCapture as u8
    }

    #[inline(always)]
    #[must_use]
    /// Is a move of this kind a castle?
    pub const fn is_castle(self) -> bool {
        MoveKind::WhiteKingsideCastle as u8 <= self as u8
            && self as u8 <= MoveKind::BlackQueensideCastle as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The information of one move, containing its from- and to-squares, as well
/// as its kind, in one integer.
/// From MSB to LSB:
/// * 4 bits: kind
/// * 6 bits: to-square
/// * 6 bits: from-square
pub struct Move(u16);

impl Move {
    #[inline(always)]
    #[must_use]
    /// Make a new `Move` with the given kind.
    pub const fn new(from_square: Square, to_square: Square, kind: MoveKind) -> Move {
        Move(from_square as u16 | (to_square as u16) << 6 | (kind as u16) << 12)
    }

    #[inline(always)]
    #[must_use]
    /// Create a quiet `Move` with no side effects.
    pub const fn normal(from_square: Square, to_square: Square) -> Move {
        Move::new(from_square, to_square, MoveKind::Normal)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` which captures the piece on its target square.
    pub const fn capture(from_square: Square, to_square: Square) -> Move {
        Move::new(from_square, to_square, MoveKind::Capture)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` representing a two-square pawn push.
    pub const fn double_pawn_push(from_square: Square, to_square: Square) -> Move {
        Move::new(from_square, to_square, MoveKind::DoublePawnPush)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` which is tagged as an en passant capture.
    pub const fn en_passant(from_square: Square, to_square: Square) -> Move {
        Move::new(from_square, to_square, MoveKind::EnPassant)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` with the given promotion type. `promote_type` must be
    /// a knight, bishop, rook, or queen.
    pub const fn promoting(
        from_square: Square,
        to_square: Square,
        promote_type: Piece,
        is_capture: bool,
    ) -> Move {
        let base = if is_capture {
            MoveKind::KnightPromotionCapture as u16
        } else {
            MoveKind::KnightPromotion as u16
        };
        Move(from_square as u16 | (to_square as u16) << 6 | (base + promote_type as u16) << 12)
    }

    #[inline(always)]
    #[must_use]
    /// Create the castling `Move` for the given color and side. The move runs
    /// from the king's start square to its castled square.
    pub const fn castling(color: Color, kingside: bool) -> Move {
        match (color, kingside) {
            (Color::White, true) => {
                Move::new(Square::E1, Square::G1, MoveKind::WhiteKingsideCastle)
            }
            (Color::White, false) => {
                Move::new(Square::E1, Square::C1, MoveKind::WhiteQueensideCastle)
            }
            (Color::Black, true) => {
                Move::new(Square::E8, Square::G8, MoveKind::BlackKingsideCastle)
            }
            (Color::Black, false) => {
                Move::new(Square::E8, Square::C8, MoveKind::BlackQueensideCastle)
            }
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from_square(self) -> Square {
        // Masking out the high bits makes this always valid.
        unsafe { transmute((self.0 & 63u16) as u8) }
    }

    #[inline(always)]
    #[must_use]
    /// Get the target square of this move.
    pub const fn to_square(self) -> Square {
        // Masking out the high bits makes this always valid.
        unsafe { transmute(((self.0 >> 6) & 63u16) as u8) }
    }

    #[inline(always)]
    #[must_use]
    /// Get the kind of this move.
    pub const fn kind(self) -> MoveKind {
        // All sixteen values of the top 4 bits name a `MoveKind` variant, so
        // the transmutation is total.
        unsafe { transmute((self.0 >> 12) as u8) }
    }

    #[inline(always)]
    #[must_use]
    /// Get the promotion type of this move, or `None` if this move is not a
    /// promotion. The resulting type will never be a pawn or a king.
    pub const fn promote_type(self) -> Option<Piece> {
        if self.kind().is_promotion() {
            // The layout of the promotion kinds puts the promoting type in
            // the two low bits of the offset from `KnightPromotion`.
            Some(unsafe { transmute((self.kind() as u8 - MoveKind::KnightPromotion as u8) & 3) })
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get a number representing this move uniquely. The value may change from
    /// version to version.
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Reconstruct a move based on its `value`. Should only be used with
    /// values returned from `Move::value()`.
    pub const fn from_val(val: u16) -> Move {
        Move(val)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.promote_type() {
            None => write!(f, "{} -> {}", self.from_square(), self.to_square())?,
            Some(p) => write!(f, "{} -> {} ={}", self.from_square(), self.to_square(), p)?,
        };
        if self.kind() == MoveKind::EnPassant {
            write!(f, " [e.p.]")?;
        }
        if self.kind().is_castle() {
            write!(f, " [castle]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_identity() {
        let cases = [
            Move::normal(Square::E2, Square::E3),
            Move::capture(Square::E4, Square::D5),
            Move::double_pawn_push(Square::E2, Square::E4),
            Move::en_passant(Square::E5, Square::F6),
            Move::promoting(Square::B7, Square::B8, Piece::Queen, false),
            Move::promoting(Square::B7, Square::A8, Piece::Knight, true),
            Move::castling(Color::White, true),
            Move::castling(Color::Black, false),
        ];
        for m in cases {
            assert_eq!(m, Move::from_val(m.value()));
            assert_eq!(m, Move::new(m.from_square(), m.to_square(), m.kind()));
        }
    }

    #[test]
    fn promote_type_round_trip() {
        for pt in Piece::PROMOTING {
            for is_capture in [false, true] {
                let m = Move::promoting(Square::C7, Square::C8, pt, is_capture);
                assert_eq!(m.promote_type(), Some(pt));
                assert_eq!(m.kind().is_capture(), is_capture);
                assert!(m.kind().is_promotion());
            }
        }
    }

    #[test]
    fn kind_classification() {
        assert!(MoveKind::Capture.is_capture());
        assert!(MoveKind::EnPassant.is_capture());
        assert!(!MoveKind::Normal.is_capture());
        assert!(!MoveKind::DoublePawnPush.is_capture());
        assert!(!MoveKind::QueenPromotion.is_capture());
        assert!(MoveKind::QueenPromotionCapture.is_promotion());
        assert!(!MoveKind::WhiteKingsideCastle.is_promotion());
        assert!(MoveKind::BlackQueensideCastle.is_castle());
        assert!(!MoveKind::EnPassant.is_castle());
    }

    #[test]
    fn castling_squares() {
        let m = Move::castling(Color::Black, true);
        assert_eq!(m.from_square(), Square::E8);
        assert_eq!(m.to_square(), Square::G8);
        assert_eq!(m.kind(), MoveKind::BlackKingsideCastle);
        assert!(!m.kind().is_capture());
    }
}
