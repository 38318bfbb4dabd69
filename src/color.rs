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

//! Representation of player colors.

use super::{Bitboard, Direction};
use std::{mem::transmute, ops::Not};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible colors that a piece or player can be.
pub enum Color {
    /// The white player, a.k.a. the first player to move in a game.
    White = 0,
    /// The black player, a.k.a. the second player to move in a game.
    Black = 1,
}

impl Color {
    #[inline(always)]
    #[must_use]
    /// Get the direction that a pawn of the given color normally moves.
    pub const fn pawn_direction(self) -> Direction {
        match self {
            Color::White => Direction::NORTH,
            Color::Black => Direction::SOUTH,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the promotion rank of a given color.
    pub const fn pawn_promote_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::new(0xFF00_0000_0000_0000),
            Color::Black => Bitboard::new(0x0000_0000_0000_00FF),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get a `Bitboard` with 1's on the start rank of the pawn of the given
    /// color.
    pub const fn pawn_start_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::new(0x0000_0000_0000_FF00),
            Color::Black => Bitboard::new(0x00FF_0000_0000_0000),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get a `Bitboard` with 1's on the rank a pawn of this color lands on
    /// after a single push from its start rank. Double pushes must pass
    /// through this rank.
    pub const fn pawn_single_push_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::new(0x0000_0000_00FF_0000),
            Color::Black => Bitboard::new(0x0000_FF00_0000_0000),
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Color {
        // self as u8 will always be 0 or 1
        // so self as u8 ^ 1 will always be 1 or 0
        // so we can safely transmute back
        unsafe { transmute(self as u8 ^ 1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the opposite color of `Color::White` is `Color::Black`, and
    /// vice versa.
    fn opposite_color() {
        assert_eq!(Color::White, !Color::Black);
        assert_eq!(Color::Black, !Color::White);
    }

    #[test]
    /// Test that the direction for White pawns is north and the direction for
    /// Black pawns is south.
    fn pawn_directions() {
        assert_eq!(Color::White.pawn_direction(), Direction::NORTH);
        assert_eq!(Color::Black.pawn_direction(), Direction::SOUTH);
    }

    #[test]
    /// Test that the pawn promotion rank bitboards are correct.
    fn pawn_promote_rank() {
        assert_eq!(
            Bitboard::new(0xFF00_0000_0000_0000),
            Color::White.pawn_promote_rank()
        );
        assert_eq!(
            Bitboard::new(0x0000_0000_0000_00FF),
            Color::Black.pawn_promote_rank()
        );
    }

    #[test]
    /// Test that the start ranks for pawns are correct.
    fn pawn_start_rank() {
        assert_eq!(
            Color::White.pawn_start_rank(),
            Bitboard::new(0x0000_0000_0000_FF00)
        );
        assert_eq!(
            Color::Black.pawn_start_rank(),
            Bitboard::new(0x00FF_0000_0000_0000)
        );
    }
}
