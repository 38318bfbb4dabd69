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

//! Legal move generation.
//!
//! Generation runs in two stages. The first stage emits pseudo-legal moves
//! per piece type, already constrained by the position's capture and push
//! masks so that most check evasions come out correct for free. The second
//! stage, `is_safe`, rejects the stragglers: king steps into attacked
//! squares, pinned pieces leaving their pin line, castling through danger,
//! and en passant captures which expose the king.

use super::{
    AttackTables, Bitboard, Color, Direction, Move, MoveKind, MoveList, Piece, Position, Square,
};

/// Get all the legal moves in a position.
#[must_use]
pub fn legal_moves(pos: &Position, tables: &AttackTables) -> MoveList {
    let mut moves = pseudo_legal_moves(pos, tables);
    moves.retain(|m| is_safe(*m, pos, tables));
    moves
}

/// Get the pseudo-legal moves in a position: every move a piece could make
/// by its movement rules, constrained by the capture and push masks, but not
/// yet checked for king safety or pins. In double check, only king moves are
/// generated, since no other move can resolve two checks at once.
#[must_use]
pub fn pseudo_legal_moves(pos: &Position, tables: &AttackTables) -> MoveList {
    let mut moves = MoveList::new();
    king_moves(pos, tables, &mut moves);
    if pos.checkers().len() < 2 {
        pawn_moves(pos, tables, &mut moves);
        knight_moves(pos, tables, &mut moves);
        bishop_moves(pos, tables, &mut moves);
        rook_moves(pos, tables, &mut moves);
        queen_moves(pos, tables, &mut moves);
        castles(pos, &mut moves);
    }
    moves
}

/// Determine whether a pseudo-legal move would leave the mover's king out of
/// check. Only meaningful for moves generated from `pos`.
#[must_use]
pub fn is_safe(m: Move, pos: &Position, tables: &AttackTables) -> bool {
    let player = pos.player();
    let king_sq = pos.king_square(player);
    let kind = m.kind();

    if kind.is_castle() {
        // The king may not castle out of, through, or into check. The
        // arrival square is part of the transit.
        if pos.in_check() {
            return false;
        }
        let transit = match kind {
            MoveKind::WhiteKingsideCastle => [Square::F1, Square::G1],
            MoveKind::WhiteQueensideCastle => [Square::D1, Square::C1],
            MoveKind::BlackKingsideCastle => [Square::F8, Square::G8],
            MoveKind::BlackQueensideCastle => [Square::D8, Square::C8],
            _ => unreachable!(),
        };
        return transit
            .iter()
            .all(|&sq| !pos.king_danger().contains(sq));
    }

    if kind == MoveKind::EnPassant {
        // En passant clears two squares at once, which can uncover a rank
        // attack no pin detects. Remove both pawns, place the capturer, and
        // ask whether any enemy slider now sees the king.
        let captured_sq = m.to_square() + -player.pawn_direction();
        let new_occupancy = pos.occupancy()
            ^ Bitboard::from(m.from_square())
            ^ Bitboard::from(captured_sq)
            ^ Bitboard::from(m.to_square());
        let enemies = pos[!player];
        let rook_like = (pos[Piece::Rook] | pos[Piece::Queen]) & enemies;
        let bishop_like = (pos[Piece::Bishop] | pos[Piece::Queen]) & enemies;
        return (tables.rook_attacks(new_occupancy, king_sq) & rook_like).is_empty()
            && (tables.bishop_attacks(new_occupancy, king_sq) & bishop_like).is_empty();
    }

    if m.from_square() == king_sq {
        // The danger map was computed with this king off the board, so it
        // already covers stepping away from a slider along its own line.
        return !pos.king_danger().contains(m.to_square());
    }

    if pos.pinned().contains(m.from_square()) {
        return tables.line(king_sq, m.from_square()).contains(m.to_square());
    }

    true
}

/// Emit captures and quiet moves for one piece given its attacked squares,
/// constrained by the position's capture and push masks.
fn append_piece_moves(pos: &Position, from: Square, attacks: Bitboard, moves: &mut MoveList) {
    let enemies = pos[!pos.player()];
    for to in attacks & enemies & pos.capture_mask() {
        moves.push(Move::capture(from, to));
    }
    for to in attacks & !pos.occupancy() & pos.push_mask() {
        moves.push(Move::normal(from, to));
    }
}

/// Generate the pseudo-legal moves of the knights belonging to the player to
/// move.
pub fn knight_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    for sq in pos[Piece::Knight] & pos[pos.player()] {
        append_piece_moves(pos, sq, tables.knight_attacks(sq), moves);
    }
}

/// Generate the pseudo-legal moves of the bishops belonging to the player to
/// move.
pub fn bishop_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    let occupancy = pos.occupancy();
    for sq in pos[Piece::Bishop] & pos[pos.player()] {
        append_piece_moves(pos, sq, tables.bishop_attacks(occupancy, sq), moves);
    }
}

/// Generate the pseudo-legal moves of the rooks belonging to the player to
/// move.
pub fn rook_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    let occupancy = pos.occupancy();
    for sq in pos[Piece::Rook] & pos[pos.player()] {
        append_piece_moves(pos, sq, tables.rook_attacks(occupancy, sq), moves);
    }
}

/// Generate the pseudo-legal moves of the queens belonging to the player to
/// move.
pub fn queen_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    let occupancy = pos.occupancy();
    for sq in pos[Piece::Queen] & pos[pos.player()] {
        append_piece_moves(pos, sq, tables.queen_attacks(occupancy, sq), moves);
    }
}

/// Generate the pseudo-legal steps of the king belonging to the player to
/// move. King steps are not constrained by the capture and push masks, since
/// the king resolves check by leaving the attacked square rather than by
/// capturing or blocking.
pub fn king_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    let player = pos.player();
    let from = pos.king_square(player);
    let attacks = tables.king_attacks(from) & !pos[player];
    for to in attacks & pos[!player] {
        moves.push(Move::capture(from, to));
    }
    for to in attacks & !pos.occupancy() {
        moves.push(Move::normal(from, to));
    }
}

/// Generate the pseudo-legal pawn moves of the player to move: single and
/// double pushes, captures, promotions, and en passant.
pub fn pawn_moves(pos: &Position, tables: &AttackTables, moves: &mut MoveList) {
    let player = pos.player();
    let dir = player.pawn_direction();
    let back = -dir;
    let pawns = pos[Piece::Pawn] & pos[player];
    let enemies = pos[!player];
    let unoccupied = !pos.occupancy();
    let promote_rank = player.pawn_promote_rank();

    // Pushes are computed setwise: advance every pawn at once, then read the
    // from-square back off each destination.
    let singles = pawns.shift(dir) & unoccupied;
    let doubles = (singles & player.pawn_single_push_rank()).shift(dir) & unoccupied & pos.push_mask();
    let singles = singles & pos.push_mask();
    for to in singles & !promote_rank {
        moves.push(Move::normal(to + back, to));
    }
    for to in singles & promote_rank {
        for pt in Piece::PROMOTING {
            moves.push(Move::promoting(to + back, to, pt, false));
        }
    }
    for to in doubles {
        moves.push(Move::double_pawn_push(to + back + back, to));
    }

    let capture_dirs = match player {
        Color::White => [Direction::NORTHEAST, Direction::NORTHWEST],
        Color::Black => [Direction::SOUTHEAST, Direction::SOUTHWEST],
    };
    for capture_dir in capture_dirs {
        let targets = pawns.shift(capture_dir) & enemies & pos.capture_mask();
        let capture_back = -capture_dir;
        for to in targets & !promote_rank {
            moves.push(Move::capture(to + capture_back, to));
        }
        for to in targets & promote_rank {
            for pt in Piece::PROMOTING {
                moves.push(Move::promoting(to + capture_back, to, pt, true));
            }
        }
    }

    if let Some(ep_sq) = pos.en_passant_square() {
        // The pawns able to capture en passant are the ones an enemy pawn on
        // the target square would attack.
        let from_sqs = tables.pawn_attacks(!player, ep_sq) & pawns;
        if !from_sqs.is_empty() {
            // While in check, en passant only helps if it captures the
            // checking pawn or lands on the push mask.
            let captured_sq = ep_sq + back;
            let allowed = !pos.in_check()
                || pos.capture_mask().contains(captured_sq)
                || pos.push_mask().contains(ep_sq);
            if allowed {
                for from in from_sqs {
                    moves.push(Move::en_passant(from, ep_sq));
                }
            }
        }
    }
}

/// Generate the pseudo-legal castling moves of the player to move. This
/// stage checks only rights and occupancy of the squares between king and
/// rook; attacks on the king's transit are the business of `is_safe`.
pub fn castles(pos: &Position, moves: &mut MoveList) {
    let player = pos.player();
    let occupancy = pos.occupancy();
    let (kingside_gap, queenside_gap) = match player {
        Color::White => (Bitboard::new(0x60), Bitboard::new(0xE)),
        Color::Black => (
            Bitboard::new(0x6000_0000_0000_0000),
            Bitboard::new(0x0E00_0000_0000_0000),
        ),
    };
    if pos.castle_rights().is_kingside_castle_legal(player) && (occupancy & kingside_gap).is_empty()
    {
        moves.push(Move::castling(player, true));
    }
    if pos.castle_rights().is_queenside_castle_legal(player)
        && (occupancy & queenside_gap).is_empty()
    {
        moves.push(Move::castling(player, false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(fen: &str) -> Position {
        Position::from_fen(fen, AttackTables::shared()).unwrap()
    }

    fn legal(fen: &str) -> MoveList {
        legal_moves(&load(fen), AttackTables::shared())
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let pos = Position::default();
        let tables = AttackTables::shared();
        let moves = legal_moves(&pos, tables);
        assert_eq!(moves.len(), 20);

        let mut knights = MoveList::new();
        knight_moves(&pos, tables, &mut knights);
        assert_eq!(knights.len(), 4);
        for m in [
            Move::normal(Square::B1, Square::A3),
            Move::normal(Square::B1, Square::C3),
            Move::normal(Square::G1, Square::F3),
            Move::normal(Square::G1, Square::H3),
        ] {
            assert!(knights.contains(&m));
        }

        let mut kings = MoveList::new();
        king_moves(&pos, tables, &mut kings);
        assert!(kings.is_empty());

        let mut sliders = MoveList::new();
        bishop_moves(&pos, tables, &mut sliders);
        rook_moves(&pos, tables, &mut sliders);
        queen_moves(&pos, tables, &mut sliders);
        assert!(sliders.is_empty());
    }

    #[test]
    fn knight_in_the_open() {
        let pos = load("2r5/2r2ppp/5k2/B1nBb3/2R5/6P1/P4P1P/3R2K1 b - - 0 1");
        let mut moves = MoveList::new();
        knight_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Move::normal(Square::C5, Square::B7)));
        assert!(moves.contains(&Move::normal(Square::C5, Square::A4)));
        assert!(moves.iter().all(|m| m.kind() == MoveKind::Normal));
    }

    #[test]
    fn rooks_in_the_open() {
        let pos = load("2r5/2r2ppp/5k2/B1nBb3/2R5/6P1/P4P1P/3R2K1 w - - 0 1");
        let mut moves = MoveList::new();
        rook_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 19);
        assert!(moves.contains(&Move::capture(Square::C4, Square::C5)));
        assert!(moves.contains(&Move::normal(Square::D1, Square::A1)));
        assert!(!moves.contains(&Move::normal(Square::D1, Square::D5)));
    }

    #[test]
    fn bishops_in_the_open() {
        let pos = load("2r5/2r2ppp/5k2/B1nBb3/2R5/6P1/P4P1P/3R2K1 w - - 0 1");
        let mut moves = MoveList::new();
        bishop_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 15);
        assert!(moves.contains(&Move::capture(Square::A5, Square::C7)));
        assert!(moves.contains(&Move::capture(Square::D5, Square::F7)));
        assert!(moves.contains(&Move::normal(Square::D5, Square::H1)));
    }

    #[test]
    fn queen_in_the_corner() {
        let pos = load("Q7/5p1k/7p/P7/4K3/8/8/3q4 w - - 0 1");
        let mut moves = MoveList::new();
        queen_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 12);
        assert!(moves.contains(&Move::normal(Square::A8, Square::H8)));
        assert!(moves.contains(&Move::normal(Square::A8, Square::D5)));
        // Our own pieces stop the queen.
        assert!(!moves.contains(&Move::normal(Square::A8, Square::A5)));
        assert!(!moves.contains(&Move::normal(Square::A8, Square::E4)));
    }

    #[test]
    fn pawn_playground_white() {
        let pos = load("2R1b2k/pP1PP1p1/8/PpPp1Pq1/4PppP/5n2/P1p3p1/K2Q1b1R w - d6 0 1");
        let mut moves = MoveList::new();
        pawn_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 22);
        assert!(moves.contains(&Move::en_passant(Square::C5, Square::D6)));
        assert!(moves.contains(&Move::promoting(Square::D7, Square::E8, Piece::Queen, true)));
        assert!(moves.contains(&Move::promoting(Square::B7, Square::B8, Piece::Knight, false)));
        assert!(moves.contains(&Move::capture(Square::H4, Square::G5)));
        assert!(moves.contains(&Move::double_pawn_push(Square::A2, Square::A4)));
        // The e7 pawn is boxed in entirely.
        assert!(moves.iter().all(|m| m.from_square() != Square::E7));
    }

    #[test]
    fn pawn_playground_black() {
        let pos = load("2R1b2k/pP1PP1p1/8/PpPp1Pq1/4PppP/5n2/P1p3p1/K2Q1b1R b - h3 0 1");
        let mut moves = MoveList::new();
        pawn_moves(&pos, AttackTables::shared(), &mut moves);
        assert_eq!(moves.len(), 23);
        assert!(moves.contains(&Move::en_passant(Square::G4, Square::H3)));
        assert!(moves.contains(&Move::promoting(Square::C2, Square::D1, Piece::Queen, true)));
        assert!(moves.contains(&Move::promoting(Square::G2, Square::G1, Piece::Knight, false)));
        assert!(moves.contains(&Move::capture(Square::D5, Square::E4)));
        // A double push cannot jump over the f3 knight's square occupant or
        // the g5 queen.
        assert!(!moves.contains(&Move::double_pawn_push(Square::G7, Square::G5)));
        assert!(moves.iter().all(|m| m.from_square() != Square::F4));
    }

    #[test]
    fn promotions_come_in_fours() {
        let moves = legal("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        let promotions: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| m.kind().is_promotion())
            .collect();
        assert_eq!(promotions.len(), 4);
        for pt in Piece::PROMOTING {
            assert!(promotions.contains(&Move::promoting(Square::A7, Square::A8, pt, false)));
        }
    }

    #[test]
    fn must_answer_rank_check() {
        // The c1 queen checks along the first rank. White must capture it,
        // or step the king out of the line; castling is forbidden in check.
        let moves = legal("r3k1br/8/8/8/8/8/8/R1q1K2R w KQkq - 0 1");
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::capture(Square::A1, Square::C1)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::E2)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::F2)));
        assert!(!moves.contains(&Move::castling(Color::White, true)));
        assert!(!moves.contains(&Move::castling(Color::White, false)));
    }

    #[test]
    fn castle_blocked_by_own_piece() {
        // Black's g8 bishop blocks the kingside castle, but the queenside
        // squares are open and unattacked.
        let moves = legal("r3k1br/8/8/8/8/8/8/R1q1K2R b KQkq - 0 1");
        assert!(moves.contains(&Move::castling(Color::Black, false)));
        assert!(!moves.contains(&Move::castling(Color::Black, true)));
    }

    #[test]
    fn legal_queenside_castle() {
        let moves = legal("r3kb1r/ppp1p1pp/2nq1n2/1B1p4/3P4/2N2Q2/PPP2PPP/R1B1K2R b KQkq - 0 8");
        assert!(moves.contains(&Move::castling(Color::Black, false)));
    }

    #[test]
    fn no_castle_through_attacked_square() {
        // The e3 knight covers both d1 and f1, so neither castle is legal,
        // even though the king itself is not in check.
        let pos = load("r3k2r/8/8/8/8/4n3/8/R3K2R w KQkq - 0 1");
        let tables = AttackTables::shared();
        assert!(!pos.in_check());
        let moves = legal_moves(&pos, tables);
        assert!(!moves.contains(&Move::castling(Color::White, true)));
        assert!(!moves.contains(&Move::castling(Color::White, false)));
    }

    #[test]
    fn en_passant_discovers_rank_attack() {
        // Capturing en passant would clear both e4 and f4, exposing the h4
        // king to the c4 rook.
        let moves = legal("8/2p5/3p4/KPr5/2R1Pp1k/8/6P1/8 b - e3 0 2");
        assert!(!moves.contains(&Move::en_passant(Square::F4, Square::E3)));
    }

    #[test]
    fn en_passant_resolves_check() {
        // The c5 pawn checks the b4 king; capturing it en passant is legal.
        let moves = legal("8/8/8/1Ppp3r/1KR2p1k/8/4P1P1/8 w - c6 0 3");
        assert!(moves.contains(&Move::en_passant(Square::B5, Square::C6)));
    }

    #[test]
    fn exactly_one_en_passant() {
        let moves = legal("rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        let eps: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| m.kind() == MoveKind::EnPassant)
            .collect();
        assert_eq!(eps, vec![Move::en_passant(Square::E5, Square::F6)]);
    }

    #[test]
    fn ladder_mate_has_no_moves() {
        let moves = legal("1R1k4/R7/8/5K2/8/8/8/8 b - - 1 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn double_check_forces_the_king() {
        let moves = legal("4k3/8/3N4/8/8/8/8/4R1K1 b - - 0 1");
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.from_square() == Square::E8));
        assert!(!moves.contains(&Move::normal(Square::E8, Square::E7)));
        assert!(!moves.contains(&Move::normal(Square::E8, Square::F7)));
    }

    #[test]
    fn pinned_knight_cannot_move() {
        // The d5 knight shields the f7 king from the c4 bishop; a knight can
        // never stay on its pin line.
        let moves = legal("r2q1b1r/ppp2kpp/2n5/3npb2/2B5/2N5/PPPP1PPP/R1BQ1RK1 b - - 3 8");
        assert!(moves.iter().all(|m| m.from_square() != Square::D5));
        // The unpinned c6 knight is free.
        assert!(moves.iter().any(|m| m.from_square() == Square::C6));
    }

    #[test]
    fn pinned_piece_slides_along_the_pin() {
        // The e4 bishop is pinned by the e7 rook; it may not leave the file,
        // and a bishop has no move on a file.
        let moves = legal("4k3/4r3/8/8/4B3/8/8/4K3 w - - 0 1");
        assert!(moves.iter().all(|m| m.from_square() != Square::E4));

        // A pinned rook, in contrast, can slide along the file and capture
        // its pinner.
        let moves = legal("4k3/4r3/8/8/4R3/8/8/4K3 w - - 0 1");
        assert!(moves.contains(&Move::capture(Square::E4, Square::E7)));
        assert!(moves.contains(&Move::normal(Square::E4, Square::E5)));
        assert!(!moves.contains(&Move::normal(Square::E4, Square::D4)));
    }

    #[test]
    fn king_cannot_retreat_along_checking_line() {
        let moves = legal("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(!moves.contains(&Move::normal(Square::E1, Square::F1)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::E2)));
    }

    #[test]
    fn king_cannot_capture_defended_checker() {
        // The e2 rook gives check and is defended by the d4 knight.
        let moves = legal("4k3/8/8/8/3n4/8/4r3/4K3 w - - 0 1");
        assert!(!moves.contains(&Move::capture(Square::E1, Square::E2)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::D1)));
    }
}
