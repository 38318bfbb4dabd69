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

//! Bitboards, data structures used to efficiently represent sets of squares.

use super::{Direction, Square};

use std::{
    fmt::{Display, Formatter, Result},
    iter::Iterator,
    mem::transmute,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub},
};

/// A bitboard, which uses an integer to express a set of `Square`s.
/// This expression allows the efficient computation of set intersection, union,
/// disjunction, element selection, and more, all in constant time.
///
/// Nearly all board-related representations use `Bitboard`s as a key part of
/// their construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    /// Accordingly, `Bitboard::EMPTY` contains no squares, and functions
    /// exactly like the empty set in all observable behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let sq = Square::A1; // this could be any square
    /// assert!(!Bitboard::EMPTY.contains(sq));
    /// ```
    pub const EMPTY: Bitboard = Bitboard::new(0);

    /// A bitboard containing all 64 squares on the board, i.e. the universal
    /// set.
    ///
    /// Often, it can be used as an efficient way to iterate over every square
    /// of a board.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let sq = Square::A1;
    /// assert!(Bitboard::ALL.contains(sq));
    /// ```
    pub const ALL: Bitboard = Bitboard::new(!0);

    /// The squares of the A file, used to prevent eastward shifts from
    /// wrapping around the board edge.
    const FILE_A: Bitboard = Bitboard::new(0x0101_0101_0101_0101);

    /// The squares of the H file, used to prevent westward shifts from
    /// wrapping around the board edge.
    const FILE_H: Bitboard = Bitboard::new(0x8080_8080_8080_8080);

    #[inline(always)]
    #[must_use]
    /// Construct a new Bitboard from a numeric literal.
    /// Internally, `Bitboard`s are 64-bit integers, where the LSB represents
    /// whether the square A1 is an element, the second-least bit represents the
    /// square B1, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// bb.insert(Square::A1);
    ///
    /// assert_eq!(bb, Bitboard::new(1));
    /// ```
    pub const fn new(x: u64) -> Bitboard {
        Bitboard(x)
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard contains a given square.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// assert!(Bitboard::new(1).contains(Square::A1));
    /// assert!(!(Bitboard::new(2).contains(Square::A1)));
    /// ```
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    #[inline(always)]
    /// Add a square to the set of squares contained in this `Bitboard`.
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq as u8;
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    /// Compute the number of squares contained in this `Bitboard`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert!(bb.len() == 0);
    /// bb.insert(Square::A1);
    /// assert!(bb.len() == 1);
    /// ```
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of trailing zeros (i.e. empty squares between A1 and
    /// the first non-empty square) in this bitboard. Alternately, this can be
    /// used to construct a `Square` from the lowest-rank square in this
    /// bitboard.
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert!(bb.is_empty());
    /// bb.insert(Square::A1);
    /// assert!(!bb.is_empty());
    /// ```
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard has exactly one bit. Equivalent to
    /// `Bitboard.len() == 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert!(!bb.has_single_bit());
    /// bb.insert(Square::A1);
    /// assert!(bb.has_single_bit());
    /// bb.insert(Square::A2);
    /// assert!(!bb.has_single_bit());
    /// ```
    pub const fn has_single_bit(self) -> bool {
        // 5 arithmetic operations,
        // faster than the 13 required for `count_ones() == 1`
        self.0 != 0 && (self.0 & self.0.overflowing_sub(1).0) == 0
    }

    #[must_use]
    /// Determine whether this bitboard contains more than one `Square`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert!(!bb.more_than_one());
    /// bb.insert(Square::A1);
    /// assert!(!bb.more_than_one());
    /// bb.insert(Square::A2);
    /// assert!(bb.more_than_one());
    /// ```
    pub const fn more_than_one(self) -> bool {
        (self.0 & self.0.overflowing_sub(1).0) != 0
    }

    #[inline(always)]
    #[must_use]
    /// Reverse the bit order of this bitboard, so that A1 swaps with H8, B1
    /// with G8, and so on. Sliding attack generation uses reversal to compute
    /// attacks toward decreasing square indices.
    pub const fn reverse(self) -> Bitboard {
        Bitboard(self.0.reverse_bits())
    }

    #[must_use]
    /// Translate every square of this bitboard one step in the given
    /// direction. Squares which would leave the board are removed, rather
    /// than wrapping onto the next rank. `dir` must be one of the eight
    /// compass directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use skewer::{Bitboard, Direction, Square};
    ///
    /// let bb = Bitboard::from(Square::H4);
    /// assert_eq!(bb.shift(Direction::NORTH), Bitboard::from(Square::H5));
    /// assert_eq!(bb.shift(Direction::EAST), Bitboard::EMPTY);
    /// ```
    pub fn shift(self, dir: Direction) -> Bitboard {
        match dir {
            Direction::NORTH => Bitboard(self.0 << 8),
            Direction::SOUTH => Bitboard(self.0 >> 8),
            Direction::EAST => Bitboard(self.0 << 1) & !Bitboard::FILE_A,
            Direction::WEST => Bitboard(self.0 >> 1) & !Bitboard::FILE_H,
            Direction::NORTHEAST => Bitboard(self.0 << 9) & !Bitboard::FILE_A,
            Direction::NORTHWEST => Bitboard(self.0 << 7) & !Bitboard::FILE_H,
            Direction::SOUTHEAST => Bitboard(self.0 >> 7) & !Bitboard::FILE_A,
            Direction::SOUTHWEST => Bitboard(self.0 >> 9) & !Bitboard::FILE_H,
            // callers only ever shift by single compass steps
            _ => unreachable!(),
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Compute the intersection of the sets represented by this bitboard and
    /// the right-hand side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use skewer::Square;
    /// # use skewer::Bitboard;
    /// let bb1 = Bitboard::new(7); // {A1, B1, C1}
    /// let bb2 = Bitboard::new(14); // {B1, C1, D1}
    /// let intersection = bb1 & bb2; // {B1, C1}
    /// assert!(!intersection.contains(Square::A1));
    /// assert!(intersection.contains(Square::B1));
    /// assert!(intersection.contains(Square::C1));
    /// assert!(!intersection.contains(Square::D1));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Sub for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Subtract the right-hand side from this bitboard as a 64-bit integer,
    /// wrapping on underflow. The borrow propagation of integer subtraction
    /// is what clears the squares between a slider and its first blocker in
    /// hyperbola quintessence.
    fn sub(self, rhs: Self) -> Self::Output {
        Bitboard(self.0.wrapping_sub(rhs.0))
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u8)
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row_idx in 0..8 {
            for col_idx in 0..8 {
                let bit = 1 << ((8 * (7 - row_idx)) + col_idx);
                if bit & self.0 == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "1 ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[allow(clippy::copy_iterator)]
impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The empty bitboard case has been handled already, so the
        // number of trailing zeros is between 0 and 63.
        let result = Some(unsafe {
            transmute(
                #[allow(clippy::cast_possible_truncation)]
                {
                    self.trailing_zeros() as u8
                },
            )
        });
        self.0 &= self.0 - 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterate_in_square_order() {
        let bb = Bitboard::new(0x8000_0000_0000_0042);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::B1, Square::G1, Square::H8]);
    }

    #[test]
    fn empty_yields_nothing() {
        assert_eq!(Bitboard::EMPTY.next(), None);
    }

    #[test]
    fn shift_does_not_wrap_files() {
        assert_eq!(
            Bitboard::from(Square::A4).shift(Direction::WEST),
            Bitboard::EMPTY
        );
        assert_eq!(
            Bitboard::from(Square::H4).shift(Direction::NORTHEAST),
            Bitboard::EMPTY
        );
        assert_eq!(
            Bitboard::from(Square::A4).shift(Direction::SOUTHWEST),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn shift_off_the_back_rank() {
        assert_eq!(
            Bitboard::from(Square::E8).shift(Direction::NORTH),
            Bitboard::EMPTY
        );
        assert_eq!(
            Bitboard::from(Square::E1).shift(Direction::SOUTH),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn reverse_swaps_corners() {
        assert_eq!(
            Bitboard::from(Square::A1).reverse(),
            Bitboard::from(Square::H8)
        );
        assert_eq!(
            Bitboard::from(Square::B1).reverse(),
            Bitboard::from(Square::G8)
        );
    }

    #[test]
    fn wrapping_subtraction() {
        assert_eq!(Bitboard::EMPTY - Bitboard::new(1), Bitboard::ALL);
    }
}
