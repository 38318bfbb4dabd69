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

//! Skewer is a library for fast, correct chess move generation.
//!
//! Positions are immutable: a `Position` is constructed (directly or from a
//! FEN string), and all of the data the move generator needs about it is
//! derived at that moment. Sliding piece attacks are computed by hyperbola
//! quintessence over precomputed line masks, held in an `AttackTables` value
//! which is passed explicitly to everything that needs it.
//!
//! ```
//! use skewer::{movegen, AttackTables, Position};
//!
//! let tables = AttackTables::shared();
//! let pos = Position::default();
//! let moves = movegen::legal_moves(&pos, tables);
//! assert_eq!(moves.len(), 20);
//! ```

mod bitboard;
mod castling;
mod color;
mod direction;
pub mod movegen;
mod moves;
mod piece;
mod position;
mod square;
mod tables;

pub use bitboard::Bitboard;
pub use castling::CastleRights;
pub use color::Color;
pub use direction::Direction;
pub use moves::{Move, MoveKind, MoveList};
pub use piece::Piece;
pub use position::{Checker, CheckerList, Position};
pub use square::Square;
pub use tables::AttackTables;
