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

//! Precomputed attack tables, with sliding attacks computed by hyperbola
//! quintessence.
//!
//! Sliding attacks are answered from four per-square line masks (file, rank,
//! diagonal, and anti-diagonal). For one line, the attacked squares are
//!
//! ```text
//! ((o - s) ^ reverse(reverse(o) - reverse(s))) & mask
//! ```
//!
//! where `o` is the occupancy restricted to the line and `s` is the single
//! bit of the slider's square. The subtraction borrows through every empty
//! square up to the first blocker, and the xor with the original occupancy
//! turns the borrow trail into the set of reachable squares. The reversed
//! copy handles the half of the line below the slider.

use once_cell::sync::Lazy;

use super::{Bitboard, Color, Direction, Square};

use std::mem::transmute;

/// The shared set of attack tables. Initialized on first use and immutable
/// afterward, so references to it can be handed out freely across threads.
static TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::new);

/// A set of precomputed lookup tables for generating attacks.
///
/// Construction is somewhat expensive (it fills two 64x64 tables of
/// bitboards), so a table set should be made once and shared. `AttackTables::
/// shared()` gives a reference to a global set which is built on first use.
pub struct AttackTables {
    /// Per-square masks of the squares on the same file, excluding the square
    /// itself.
    files: [Bitboard; 64],
    /// Per-square masks of the squares on the same rank, excluding the square
    /// itself.
    ranks: [Bitboard; 64],
    /// Per-square masks of the squares on the same up-right diagonal,
    /// excluding the square itself.
    diagonals: [Bitboard; 64],
    /// Per-square masks of the squares on the same up-left anti-diagonal,
    /// excluding the square itself.
    anti_diagonals: [Bitboard; 64],
    /// The squares a knight can jump to from each square.
    knight: [Bitboard; 64],
    /// The squares a king can step to from each square.
    king: [Bitboard; 64],
    /// The squares a pawn of each color attacks from each square, indexed by
    /// color first.
    pawn: [[Bitboard; 64]; 2],
    /// For each pair of squares, the squares strictly between them, or
    /// `EMPTY` if no slider line connects them.
    between: Box<[[Bitboard; 64]; 64]>,
    /// For each pair of squares on a common slider line, the full line
    /// through both squares, endpoints included.
    lines: Box<[[Bitboard; 64]; 64]>,
}

impl AttackTables {
    #[must_use]
    /// Construct a new set of attack tables. Prefer `AttackTables::shared()`
    /// unless you specifically need an owned copy.
    pub fn new() -> AttackTables {
        let files = create_ray_masks(&[Direction::NORTH, Direction::SOUTH]);
        let ranks = create_ray_masks(&[Direction::EAST, Direction::WEST]);
        let diagonals = create_ray_masks(&[Direction::NORTHEAST, Direction::SOUTHWEST]);
        let anti_diagonals = create_ray_masks(&[Direction::NORTHWEST, Direction::SOUTHEAST]);

        let rook = |occupancy: Bitboard, sq: Square| {
            hyperbola(sq, occupancy, files[sq as usize])
                | hyperbola(sq, occupancy, ranks[sq as usize])
        };
        let bishop = |occupancy: Bitboard, sq: Square| {
            hyperbola(sq, occupancy, diagonals[sq as usize])
                | hyperbola(sq, occupancy, anti_diagonals[sq as usize])
        };

        let mut between = Box::new([[Bitboard::EMPTY; 64]; 64]);
        let mut lines = Box::new([[Bitboard::EMPTY; 64]; 64]);
        for sq1 in Bitboard::ALL {
            for sq2 in Bitboard::ALL {
                if rook(Bitboard::EMPTY, sq1).contains(sq2) {
                    // Seen from either endpoint with only the other endpoint
                    // occupied, the attacks stop exactly at the far square.
                    // Their intersection is the open interval between them.
                    between[sq1 as usize][sq2 as usize] =
                        rook(Bitboard::from(sq2), sq1) & rook(Bitboard::from(sq1), sq2);
                    lines[sq1 as usize][sq2 as usize] =
                        (rook(Bitboard::EMPTY, sq1) & rook(Bitboard::EMPTY, sq2))
                            | Bitboard::from(sq1)
                            | Bitboard::from(sq2);
                } else if bishop(Bitboard::EMPTY, sq1).contains(sq2) {
                    between[sq1 as usize][sq2 as usize] =
                        bishop(Bitboard::from(sq2), sq1) & bishop(Bitboard::from(sq1), sq2);
                    lines[sq1 as usize][sq2 as usize] =
                        (bishop(Bitboard::EMPTY, sq1) & bishop(Bitboard::EMPTY, sq2))
                            | Bitboard::from(sq1)
                            | Bitboard::from(sq2);
                }
            }
        }

        AttackTables {
            files,
            ranks,
            diagonals,
            anti_diagonals,
            knight: create_step_attacks(&Direction::KNIGHT_STEPS, 2),
            king: create_step_attacks(&Direction::KING_STEPS, 1),
            pawn: [
                create_step_attacks(&[Direction::NORTHEAST, Direction::NORTHWEST], 1),
                create_step_attacks(&[Direction::SOUTHEAST, Direction::SOUTHWEST], 1),
            ],
            between,
            lines,
        }
    }

    #[must_use]
    /// Get a reference to the process-wide shared tables, building them if
    /// this is the first use.
    pub fn shared() -> &'static AttackTables {
        &TABLES
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks a rook on `sq` makes, given a board occupancy.
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        hyperbola(sq, occupancy, self.files[sq as usize])
            | hyperbola(sq, occupancy, self.ranks[sq as usize])
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks a bishop on `sq` makes, given a board occupancy.
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        hyperbola(sq, occupancy, self.diagonals[sq as usize])
            | hyperbola(sq, occupancy, self.anti_diagonals[sq as usize])
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks a queen on `sq` makes, given a board occupancy.
    pub fn queen_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rook_attacks(occupancy, sq) | self.bishop_attacks(occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks a knight on `sq` makes.
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks a king on `sq` makes.
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares that a pawn of the given color on `sq` attacks. Pawn
    /// attacks are distinct from pawn pushes.
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color as usize][sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares strictly between `sq1` and `sq2`, along either a
    /// rook line or a bishop line. If the squares do not share a line, the
    /// result is `EMPTY`. Adjacent squares on a shared line also give
    /// `EMPTY`.
    pub fn between(&self, sq1: Square, sq2: Square) -> Bitboard {
        self.between[sq1 as usize][sq2 as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the full slider line through `sq1` and `sq2`, endpoints included,
    /// or `EMPTY` if no line contains both squares.
    pub fn line(&self, sq1: Square, sq2: Square) -> Bitboard {
        self.lines[sq1 as usize][sq2 as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether three squares are all on a common rook or bishop
    /// line.
    pub fn aligned(&self, sq1: Square, sq2: Square, sq3: Square) -> bool {
        self.line(sq1, sq2).contains(sq3)
    }
}

impl Default for AttackTables {
    fn default() -> AttackTables {
        AttackTables::new()
    }
}

#[inline(always)]
/// Compute the attacks along one line through `sq` by hyperbola
/// quintessence. `mask` must be one of the line masks through `sq`, not
/// containing `sq` itself.
fn hyperbola(sq: Square, occupancy: Bitboard, mask: Bitboard) -> Bitboard {
    let piece = Bitboard::from(sq);
    let forward = occupancy & mask;
    let reverse = forward.reverse();
    ((forward - piece) ^ (reverse - piece.reverse()).reverse()) & mask
}

/// Construct the per-square line masks extending in the given directions,
/// excluding the origin square. `dirs` should be a pair of opposite
/// single-step directions.
fn create_ray_masks(dirs: &[Direction]) -> [Bitboard; 64] {
    let mut masks = [Bitboard::EMPTY; 64];
    for (i, mask) in masks.iter_mut().enumerate() {
        // SAFETY: enumerating an array of 64 gives indices below 64.
        let sq: Square = unsafe { transmute(i as u8) };
        for &dir in dirs {
            let mut cursor = sq;
            // Square addition wraps around the board edge, so a step is only
            // real if it lands a king's move away.
            while cursor.chebyshev_to(cursor + dir) <= 1 {
                cursor = cursor + dir;
                mask.insert(cursor);
            }
        }
    }
    masks
}

/// Get the step attacks that could be made by moving in `dirs` from each
/// square. Exclude the steps that would wrap around the sides of the board,
/// which are recognizable by a Chebyshev distance greater than `max_dist`.
fn create_step_attacks(dirs: &[Direction], max_dist: u8) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (i, attack) in attacks.iter_mut().enumerate() {
        // SAFETY: enumerating an array of 64 gives indices below 64.
        let sq: Square = unsafe { transmute(i as u8) };
        for &dir in dirs {
            let target = sq + dir;
            if sq.chebyshev_to(target) <= max_dist {
                attack.insert(target);
            }
        }
    }
    attacks
}
