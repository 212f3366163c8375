use gridblast_core::{Grid, Move, PieceSlot, Placement, Sequence, Shape};
use gridblast_engine::{apply_move, generate_placements, Dealer};
use gridblast_eval::{evaluate, EvalWeights};
use gridblast_search::{compute_best_sequence, Permutations, SequenceSearch};

fn shape(cells: &[(i16, i16)]) -> Shape {
    Shape::new(cells).expect("valid shape")
}

fn board(text: &str) -> Grid {
    text.parse().expect("valid board")
}

fn mono() -> Shape {
    shape(&[(0, 0)])
}

fn domino() -> Shape {
    shape(&[(0, 0), (0, 1)])
}

/// Flat enumeration of every complete path, first strictly-better wins.
mod reference {
    use super::*;

    fn orders(remaining: &[usize]) -> Vec<Vec<usize>> {
        if remaining.is_empty() {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for (i, &first) in remaining.iter().enumerate() {
            let mut rest = remaining.to_vec();
            rest.remove(i);
            for mut tail in orders(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    fn walk(
        grid: &Grid,
        slots: &[PieceSlot],
        order: &[usize],
        path: &mut Vec<Move>,
        reward: i64,
        weights: &EvalWeights,
        best: &mut Option<(i64, Vec<Move>)>,
    ) {
        let Some((&piece, rest)) = order.split_first() else {
            let total = reward + evaluate(grid, weights);
            if best.as_ref().map_or(true, |(score, _)| total > *score) {
                *best = Some((total, path.clone()));
            }
            return;
        };
        let shape = &slots[piece].shape;
        for placement in generate_placements(grid, shape) {
            let (next, lines) = apply_move(grid, shape, placement);
            path.push(Move::at(piece, placement));
            walk(
                &next,
                slots,
                rest,
                path,
                reward + weights.line_reward(lines),
                weights,
                best,
            );
            path.pop();
        }
    }

    pub fn best(
        grid: &Grid,
        slots: &[PieceSlot],
        weights: &EvalWeights,
    ) -> Option<(i64, Vec<Move>)> {
        let unplaced: Vec<usize> = (0..slots.len()).filter(|&i| !slots[i].placed).collect();
        let mut best = None;
        for order in orders(&unplaced) {
            walk(grid, slots, &order, &mut Vec::new(), 0, weights, &mut best);
        }
        best
    }
}

mod required_behaviour {
    use super::*;

    #[test]
    fn test_completes_nearly_full_row() {
        let grid = board(
            "
            ........
            ..#.....
            ........
            #####.##
            ........
            .....#..
            ........
            ........
            ",
        );
        let slots = [
            PieceSlot::placed(mono()),
            PieceSlot::new(mono()),
            PieceSlot::placed(mono()),
        ];
        let seq = compute_best_sequence(&grid, &slots).expect("a move exists");
        assert_eq!(seq.moves(), &[Move::new(1, 3, 5)]);
    }

    #[test]
    fn test_identical_shapes_pick_first_order() {
        let grid = board(
            "
            ###.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let slots = [
            PieceSlot::new(domino()),
            PieceSlot::new(domino()),
            PieceSlot::placed(mono()),
        ];
        let search = SequenceSearch::default();

        let forward = search.best_for_order(&grid, &slots, &[0, 1]).expect("forward");
        let backward = search.best_for_order(&grid, &slots, &[1, 0]).expect("backward");
        assert_eq!(forward.score, backward.score);

        let found = search.search(&grid, &slots).expect("sequence");
        assert_eq!(found.sequence.order(), vec![0, 1]);
        assert_eq!(found, forward);
    }

    #[test]
    fn test_equal_orders_resolve_to_earliest_permutation() {
        let grid = board(
            "
            #.#.....
            ........
            ...##...
            ........
            ........
            .#......
            ........
            ......##
            ",
        );
        let slots = [
            PieceSlot::new(domino()),
            PieceSlot::new(shape(&[(0, 0), (1, 0), (1, 1)])),
            PieceSlot::new(domino()),
        ];
        let search = SequenceSearch::default();

        let scored: Vec<(Vec<usize>, i64)> = Permutations::new(vec![0, 1, 2])
            .map(|order| {
                let score = search
                    .best_for_order(&grid, &slots, &order)
                    .expect("every order fits")
                    .score;
                (order, score)
            })
            .collect();
        let max = scored.iter().map(|(_, s)| *s).max().expect("six orders");
        let first_max = scored
            .iter()
            .find(|(_, s)| *s == max)
            .map(|(order, _)| order.clone())
            .expect("max exists");

        // slots 0 and 2 are interchangeable
        assert_eq!(scored[0].1, scored[5].1);

        let found = search.search(&grid, &slots).expect("sequence");
        assert_eq!(found.score, max);
        assert_eq!(found.sequence.order(), first_max);
    }

    #[test]
    fn test_no_solution_is_none() {
        let mut grid = Grid::new();
        for row in 0..8 {
            for col in 0..8 {
                grid.set(row, col, (row + col) % 2 == 0);
            }
        }
        let slots = [
            PieceSlot::new(domino()),
            PieceSlot::new(shape(&[(0, 0), (1, 0)])),
            PieceSlot::new(Shape::catalogue()[4].clone()),
        ];
        assert_eq!(compute_best_sequence(&grid, &slots), None);
    }

    #[test]
    fn test_nothing_to_place_is_empty_sequence() {
        let slots = [
            PieceSlot::placed(mono()),
            PieceSlot::placed(mono()),
            PieceSlot::placed(mono()),
        ];
        assert_eq!(
            compute_best_sequence(&Grid::new(), &slots),
            Some(Sequence::new())
        );
    }

    #[test]
    fn test_dead_permutation_is_skipped() {
        // only the two-cell gap is open; the line cannot go first
        let mut grid = Grid::from_bits(!0);
        grid.set(7, 0, false);
        grid.set(7, 1, false);
        let line = shape(&[(0, 0), (0, 1), (0, 2)]);
        let slots = [PieceSlot::new(line), PieceSlot::new(domino())];

        let search = SequenceSearch::default();
        assert!(search.best_for_order(&grid, &slots, &[0, 1]).is_none());

        let found = search.search(&grid, &slots).expect("domino first works");
        assert_eq!(
            found.sequence.moves(),
            &[Move::new(1, 7, 0), Move::new(0, 0, 0)]
        );
        // domino clears all 16 lines; leaf is a lone line of three
        assert_eq!(found.score, 2000 * 16 * 16 + (3 * -10 + 4 * 20));
    }

    #[test]
    fn test_leaf_ignores_lines_already_rewarded() {
        let grid = board(
            "
            ######..
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let slots = [PieceSlot::new(domino())];
        let found = SequenceSearch::default()
            .search(&grid, &slots)
            .expect("sequence");
        assert_eq!(found.sequence.moves(), &[Move::new(0, 0, 6)]);
        // one clear, then an empty board
        assert_eq!(found.score, 2000 + 10000);
    }
}

mod reference_agreement {
    use super::*;

    fn assert_matches_reference(grid: &Grid, slots: &[PieceSlot]) {
        let weights = EvalWeights::default();
        let expected = reference::best(grid, slots, &weights);
        let actual = SequenceSearch::new(weights)
            .search(grid, slots)
            .map(|found| (found.score, found.sequence.moves().to_vec()));
        assert_eq!(actual, expected, "\n{grid}");
    }

    #[test]
    fn test_dense_boards_with_dealt_pieces() {
        let boards = [
            board(
                "
                ##.###..
                #..#.##.
                .......#
                ###.####
                #.#.....
                ....##..
                ##.#..##
                .######.
                ",
            ),
            board(
                "
                #######.
                #######.
                ##.####.
                ###.###.
                ####.##.
                #####.#.
                ######..
                .......#
                ",
            ),
            board(
                "
                ##..##..
                ##..##..
                ..##..##
                ..##..##
                ##..##..
                ##..##..
                ..##..##
                ..##..##
                ",
            ),
        ];

        let mut dealer = Dealer::seeded(2024);
        for grid in &boards {
            for _ in 0..3 {
                let slots = dealer.deal_round();
                assert_matches_reference(grid, &slots);
            }
        }
    }

    #[test]
    fn test_partially_placed_round() {
        let grid = board(
            "
            ########
            #......#
            #......#
            #......#
            #......#
            #......#
            #......#
            #######.
            ",
        );
        let slots = [
            PieceSlot::new(shape(&[(0, 0), (1, 0)])),
            PieceSlot::placed(mono()),
            PieceSlot::new(mono()),
        ];
        assert_matches_reference(&grid, &slots);
    }

    #[test]
    fn test_search_is_repeatable() {
        let grid = board(
            "
            ...#....
            ..###...
            ...#....
            ........
            ##....##
            ........
            ...##...
            ...##...
            ",
        );
        let slots = Dealer::seeded(5).deal_round();
        let search = SequenceSearch::default();
        let first = search.search(&grid, &slots);
        let second = search.search(&grid, &slots);
        assert_eq!(first, second);
    }
}

#[test]
fn test_every_suggested_move_is_legal_in_sequence() {
    let grid = board(
        "
        #.#.#...
        ........
        ..####..
        ........
        #......#
        #......#
        #......#
        ###..###
        ",
    );
    let slots = Dealer::seeded(11).deal_round();
    let seq = compute_best_sequence(&grid, &slots).expect("sequence");

    assert_eq!(seq.len(), 3);
    let mut current = grid;
    for mv in &seq {
        let shape = &slots[mv.piece].shape;
        let legal = generate_placements(&current, shape);
        assert!(legal.iter().any(|p| *p == Placement::new(mv.row, mv.col)));
        current = apply_move(&current, shape, mv.placement()).0;
    }
}
