//! End-to-end decode tests against a reference record from a standard
//! `std_n_1.adkb` archive.

use adkb_core::{BitFlagReader, Cell, DecodeError, NibbleReader, Puzzle};

/// Nibble-packed value stream of the reference puzzle (N = 9, 32 bytes).
const VALUES: &[u8] = b"\x87\x04\x12SR7h\x14\x16@5\x87\x08SvBCr\x01ea%\x840 \x16Cx5\x81'\x06";

/// Bit-packed removal mask of the reference puzzle (81 flags, 11 bytes).
const MASK: &[u8] = b"\xe5\x07\x95j\xd2\xa5\xabT\xf0S\x80";

const UNSOLVED_FLAT: &str =
    "981003040000079250070106083090407502008010700703605010310704090069230000050900324";
const SOLVED_FLAT: &str =
    "981523647634879251275146983196487532548312769723695418312754896469238175857961324";
const UNSOLVED_SYMBOLS: &str =
    "981..3.4.....7925..7.1.6.83.9.4.75.2..8.1.7..7.36.5.1.31.7.4.9..6923.....5.9..324";

const UNSOLVED_CANDIDATES: &str = "256,128,1,511,511,4,511,8,511,511,511,511,511,64,256,2,16,511,\
511,64,511,1,511,32,511,128,4,511,256,511,8,511,64,16,511,2,511,511,128,511,1,511,64,511,511,64,\
511,4,32,511,16,511,1,511,4,1,511,64,511,8,511,256,511,511,32,256,2,4,511,511,511,511,511,16,511,\
256,511,511,4,2,8";

const SOLVED_CANDIDATES: &str = "256,128,1,16,2,4,32,8,64,32,4,8,128,64,256,2,16,1,2,64,16,1,8,\
32,256,128,4,1,256,32,8,128,64,16,4,2,16,8,128,4,1,2,64,32,256,64,2,4,32,256,16,8,1,128,4,1,2,\
64,16,8,128,256,32,8,32,256,2,4,128,1,64,16,128,16,64,256,32,1,4,2,8";

/// 0-based values of the stored 8x8 block, in stream order.
const DECODED_NIBBLES: [u8; 64] = [
    8, 7, 0, 4, 1, 2, 5, 3, 5, 2, 3, 7, 6, 8, 1, 4, 1, 6, 4, 0, 3, 5, 8, 7, 0, 8, 5, 3, 7, 6, 4,
    2, 4, 3, 7, 2, 0, 1, 6, 5, 6, 1, 2, 5, 8, 4, 3, 0, 2, 0, 1, 6, 4, 3, 7, 8, 3, 5, 8, 1, 2, 7,
    0, 6,
];

fn unsolved() -> Puzzle {
    let mut puz = Puzzle::new(9, VALUES.to_vec(), MASK.to_vec());
    puz.load(false).unwrap();
    puz
}

fn solved() -> Puzzle {
    let mut puz = Puzzle::new(9, VALUES.to_vec(), MASK.to_vec());
    puz.load(true).unwrap();
    puz
}

/// True when every row and column holds a permutation of 1..=N, ignoring
/// unknown cells (i.e. no known value repeats within a line).
fn is_valid_board(puz: &Puzzle) -> bool {
    let n = puz.dimension;
    for line in 0..n {
        let mut row_seen = vec![false; n + 1];
        let mut col_seen = vec![false; n + 1];
        for k in 0..n {
            for (seen, cell) in [
                (&mut row_seen, puz.grid.get(line, k).unwrap()),
                (&mut col_seen, puz.grid.get(k, line).unwrap()),
            ] {
                if let Some(v) = cell.value() {
                    if seen[v as usize] {
                        return false;
                    }
                    seen[v as usize] = true;
                }
            }
        }
    }
    true
}

#[test]
fn test_value_stream_decode() {
    let mut reader = NibbleReader::new(VALUES);
    for (k, expected) in DECODED_NIBBLES.iter().enumerate() {
        assert_eq!(reader.next().unwrap(), *expected, "nibble {k}");
    }
}

#[test]
fn test_mask_stream_msb_first() {
    // The reader must reproduce, bit for bit, the flags computed directly
    // from the raw bytes MSB-first.
    let mut reader = BitFlagReader::new(MASK);
    for k in 0..81 {
        let expected = (MASK[k / 8] >> (7 - k % 8)) & 1 == 1;
        assert_eq!(reader.next().unwrap(), expected, "flag {k}");
    }
}

#[test]
fn test_unsolved_forms() {
    let puz = unsolved();
    assert!(puz.loaded);
    assert!(!puz.solved);
    assert_eq!(puz.raw_values.len(), 32);
    assert_eq!(puz.raw_mask.len(), 11);
    assert_eq!(puz.flattened().unwrap(), UNSOLVED_FLAT);
    assert_eq!(puz.symbols().unwrap(), UNSOLVED_SYMBOLS);
    assert_eq!(puz.candidate_line().unwrap(), UNSOLVED_CANDIDATES);
    assert!(is_valid_board(&puz));
}

#[test]
fn test_solved_forms() {
    let puz = solved();
    assert!(puz.loaded);
    assert!(puz.solved);
    assert_eq!(puz.flattened().unwrap(), SOLVED_FLAT);
    // With no mask applied the symbols form has no dots.
    assert_eq!(puz.symbols().unwrap(), SOLVED_FLAT);
    assert_eq!(puz.candidate_line().unwrap(), SOLVED_CANDIDATES);
    assert!(is_valid_board(&puz));
}

#[test]
fn test_solved_grid_rows() {
    let expected = [
        [9, 8, 1, 5, 2, 3, 6, 4, 7],
        [6, 3, 4, 8, 7, 9, 2, 5, 1],
        [2, 7, 5, 1, 4, 6, 9, 8, 3],
        [1, 9, 6, 4, 8, 7, 5, 3, 2],
        [5, 4, 8, 3, 1, 2, 7, 6, 9],
        [7, 2, 3, 6, 9, 5, 4, 1, 8],
        [3, 1, 2, 7, 5, 4, 8, 9, 6],
        [4, 6, 9, 2, 3, 8, 1, 7, 5],
        [8, 5, 7, 9, 6, 1, 3, 2, 4],
    ];
    let puz = solved();
    for (i, row) in expected.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            assert_eq!(puz.grid.get(i, j), Some(&Cell::Value(*v)), "cell ({i}, {j})");
        }
    }
}

#[test]
fn test_line_sum_invariant() {
    // Every reconstructed row and column of the 0-based grid sums to
    // N(N-1)/2, which shifts to N(N+1)/2 in the 1-based domain.
    let puz = solved();
    let n = puz.dimension;
    let expected = (n * (n + 1) / 2) as u32;
    for line in 0..n {
        let row_sum: u32 = (0..n)
            .map(|j| u32::from(puz.grid.get(line, j).unwrap().value().unwrap()))
            .sum();
        let col_sum: u32 = (0..n)
            .map(|i| u32::from(puz.grid.get(i, line).unwrap().value().unwrap()))
            .sum();
        assert_eq!(row_sum, expected, "row {line}");
        assert_eq!(col_sum, expected, "column {line}");
    }
}

#[test]
fn test_solved_and_unsolved_agree() {
    // Both modes decode the same value stream; the unsolved grid is the
    // solved grid with some cells hidden, never altered.
    let sol = solved();
    let unsol = unsolved();
    let mut hidden = 0;
    for i in 0..9 {
        for j in 0..9 {
            match unsol.grid.get(i, j).unwrap() {
                Cell::Unknown => hidden += 1,
                known => assert_eq!(known, sol.grid.get(i, j).unwrap(), "cell ({i}, {j})"),
            }
        }
    }
    assert!(hidden > 0, "mask removed no cells");
}

#[test]
fn test_rotation_cycle() {
    for mut puz in [solved(), unsolved()] {
        let original = puz.flattened().unwrap();
        for turn in 1..=4 {
            puz.rotate90().unwrap();
            assert!(is_valid_board(&puz), "invalid after {turn} turns");
            if turn < 4 {
                assert_ne!(puz.flattened().unwrap(), original, "after {turn} turns");
            }
        }
        assert_eq!(puz.flattened().unwrap(), original);
    }
}

#[test]
fn test_unloaded_views() {
    let mut puz = Puzzle::new(9, VALUES.to_vec(), MASK.to_vec());
    assert!(puz.flattened().is_none());
    assert!(puz.symbols().is_none());
    assert!(puz.candidate_line().is_none());
    assert!(matches!(puz.rotate90(), Err(DecodeError::NotLoaded)));

    puz.load(false).unwrap();
    assert!(puz.flattened().is_some());
    assert!(puz.symbols().is_some());
    assert!(puz.candidate_line().is_some());
    assert!(puz.rotate90().is_ok());
}
