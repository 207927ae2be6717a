// tests/glyph_fixtures.rs

//! Every printable ASCII glyph against a hand-checked literal rendering.
//!
//! Rows are the binary rasterization of the single character: `#` for any
//! coverage, `.` for none. The last column of every row is the gutter.

use bioimage_annotate::font::glyph_table;
use bioimage_annotate::layout::layout_with;
use bioimage_annotate::rasterizer::rasterize;
use bioimage_annotate::Color;
use test_log::test;

#[rustfmt::skip]
const GLYPH_FIXTURES: &[(char, &[&str])] = &[
    (' ', &["..."]),
    ('!', &["#.", "#.", "#.", "#.", "#.", "..", "#.", "..", ".."]),
    ('"', &["#.#.", "#.#.", "#.#.", "....", "....", "....", "....", "....", "...."]),
    ('#', &[".#.#..", ".#.#..", "#####.", ".#.#..", "#####.", ".#.#..", ".#.#..", "......", "......"]),
    ('$', &["..#...", ".####.", "#.#...", ".###..", "..#.#.", "####..", "..#...", "......", "......"]),
    ('%', &["##....", "##..#.", "...#..", "..#...", ".#....", "#..##.", "...##.", "......", "......"]),
    ('&', &[".##...", "#..#..", "#.#...", ".#....", "#.#.#.", "#..#..", ".##.#.", "......", "......"]),
    ('\'', &["#.", "#.", "#.", "..", "..", "..", "..", "..", ".."]),
    ('(', &["..#.", ".#..", "#...", "#...", "#...", ".#..", "..#.", "....", "...."]),
    (')', &["#...", ".#..", "..#.", "..#.", "..#.", ".#..", "#...", "....", "...."]),
    ('*', &["..#...", "#.#.#.", ".###..", "#.#.#.", "..#...", "......", "......", "......"]),
    ('+', &["..#...", "..#...", "#####.", "..#...", "..#...", "......", "......", "......"]),
    (',', &[".#.", ".#.", "#.."]),
    ('-', &["#####.", "......", "......", "......", "......", "......"]),
    ('.', &["#.", "..", ".."]),
    ('/', &["....#.", "....#.", "...#..", "..#...", ".#....", "#.....", "#.....", "......", "......"]),
    ('0', &[".###..", "#...#.", "#..##.", "#.#.#.", "##..#.", "#...#.", ".###..", "......", "......"]),
    ('1', &["..#...", ".##...", "..#...", "..#...", "..#...", "..#...", ".###..", "......", "......"]),
    ('2', &[".###..", "#...#.", "....#.", "...#..", "..#...", ".#....", "#####.", "......", "......"]),
    ('3', &["#####.", "...#..", "..#...", "...#..", "....#.", "#...#.", ".###..", "......", "......"]),
    ('4', &["...#..", "..##..", ".#.#..", "#..#..", "#####.", "...#..", "...#..", "......", "......"]),
    ('5', &["#####.", "#.....", "####..", "....#.", "....#.", "#...#.", ".###..", "......", "......"]),
    ('6', &["..##..", ".#....", "#.....", "####..", "#...#.", "#...#.", ".###..", "......", "......"]),
    ('7', &["#####.", "....#.", "...#..", "..#...", ".#....", ".#....", ".#....", "......", "......"]),
    ('8', &[".###..", "#...#.", "#...#.", ".###..", "#...#.", "#...#.", ".###..", "......", "......"]),
    ('9', &[".###..", "#...#.", "#...#.", ".####.", "....#.", "...#..", ".##...", "......", "......"]),
    (':', &["##.", "##.", "...", "##.", "##.", "...", "...", "..."]),
    (';', &["##.", "##.", "...", "##.", "##.", ".#.", "#..", "..."]),
    ('<', &["...#.", "..#..", ".#...", "#....", ".#...", "..#..", "...#.", ".....", "....."]),
    ('=', &["#####.", "......", "#####.", "......", "......", "......", "......"]),
    ('>', &["#....", ".#...", "..#..", "...#.", "..#..", ".#...", "#....", ".....", "....."]),
    ('?', &[".###..", "#...#.", "....#.", "...#..", "..#...", "......", "..#...", "......", "......"]),
    ('@', &[".###..", "#...#.", "#.###.", "#.#.#.", "#.###.", "#.....", ".####.", "......", "......"]),
    ('A', &[".###..", "#...#.", "#...#.", "#####.", "#...#.", "#...#.", "#...#.", "......", "......"]),
    ('B', &["####..", "#...#.", "#...#.", "####..", "#...#.", "#...#.", "####..", "......", "......"]),
    ('C', &[".###..", "#...#.", "#.....", "#.....", "#.....", "#...#.", ".###..", "......", "......"]),
    ('D', &["####..", "#...#.", "#...#.", "#...#.", "#...#.", "#...#.", "####..", "......", "......"]),
    ('E', &["#####.", "#.....", "#.....", "####..", "#.....", "#.....", "#####.", "......", "......"]),
    ('F', &["#####.", "#.....", "#.....", "####..", "#.....", "#.....", "#.....", "......", "......"]),
    ('G', &[".###..", "#...#.", "#.....", "#.###.", "#...#.", "#...#.", ".####.", "......", "......"]),
    ('H', &["#...#.", "#...#.", "#...#.", "#####.", "#...#.", "#...#.", "#...#.", "......", "......"]),
    ('I', &["###.", ".#..", ".#..", ".#..", ".#..", ".#..", "###.", "....", "...."]),
    ('J', &["..###.", "...#..", "...#..", "...#..", "...#..", "#..#..", ".##...", "......", "......"]),
    ('K', &["#...#.", "#..#..", "#.#...", "##....", "#.#...", "#..#..", "#...#.", "......", "......"]),
    ('L', &["#.....", "#.....", "#.....", "#.....", "#.....", "#.....", "#####.", "......", "......"]),
    ('M', &["#...#.", "##.##.", "#.#.#.", "#.#.#.", "#...#.", "#...#.", "#...#.", "......", "......"]),
    ('N', &["#...#.", "#...#.", "##..#.", "#.#.#.", "#..##.", "#...#.", "#...#.", "......", "......"]),
    ('O', &[".###..", "#...#.", "#...#.", "#...#.", "#...#.", "#...#.", ".###..", "......", "......"]),
    ('P', &["####..", "#...#.", "#...#.", "####..", "#.....", "#.....", "#.....", "......", "......"]),
    ('Q', &[".###..", "#...#.", "#...#.", "#...#.", "#.#.#.", "#..#..", ".##.#.", "......", "......"]),
    ('R', &["####..", "#...#.", "#...#.", "####..", "#.#...", "#..#..", "#...#.", "......", "......"]),
    ('S', &[".####.", "#.....", "#.....", ".###..", "....#.", "....#.", "####..", "......", "......"]),
    ('T', &["#####.", "..#...", "..#...", "..#...", "..#...", "..#...", "..#...", "......", "......"]),
    ('U', &["#...#.", "#...#.", "#...#.", "#...#.", "#...#.", "#...#.", ".###..", "......", "......"]),
    ('V', &["#...#.", "#...#.", "#...#.", "#...#.", "#...#.", "##.##.", ".###..", "......", "......"]),
    ('W', &["#...#.", "#...#.", "#...#.", "#.#.#.", "#.#.#.", "#.#.#.", "##.##.", "......", "......"]),
    ('X', &["#...#.", "#...#.", ".#.#..", "..#...", ".#.#..", "#...#.", "#...#.", "......", "......"]),
    ('Y', &["#...#.", "#...#.", ".#.#..", "..#...", "..#...", "..#...", "..#...", "......", "......"]),
    ('Z', &["#####.", "....#.", "...#..", "..#...", ".#....", "#.....", "#####.", "......", "......"]),
    ('[', &["###.", "#...", "#...", "#...", "#...", "#...", "###.", "....", "...."]),
    ('\\', &["#.....", "#.....", ".#....", "..#...", "...#..", "....#.", "....#.", "......", "......"]),
    (']', &["###.", "..#.", "..#.", "..#.", "..#.", "..#.", "###.", "....", "...."]),
    ('^', &["..#...", ".#.#..", "#...#.", "......", "......", "......", "......", "......", "......"]),
    ('_', &["#####.", "......", "......"]),
    ('`', &["#..", ".#.", "...", "...", "...", "...", "...", "...", "..."]),
    ('a', &[".###..", "....#.", ".####.", "#...#.", ".####.", "......", "......"]),
    ('b', &["#.....", "#.....", "#.##..", "##..#.", "#...#.", "#...#.", "####..", "......", "......"]),
    ('c', &[".###..", "#.....", "#.....", "#...#.", ".###..", "......", "......"]),
    ('d', &["....#.", "....#.", ".##.#.", "#..##.", "#...#.", "#...#.", ".####.", "......", "......"]),
    ('e', &[".###..", "#...#.", "#####.", "#.....", ".###..", "......", "......"]),
    ('f', &["..##..", ".#..#.", ".#....", "###...", ".#....", ".#....", ".#....", "......", "......"]),
    ('g', &[".####.", "#...#.", "#...#.", "#...#.", ".####.", "....#.", ".###.."]),
    ('h', &["#.....", "#.....", "#.##..", "##..#.", "#...#.", "#...#.", "#...#.", "......", "......"]),
    ('i', &[".#..", "....", "##..", ".#..", ".#..", ".#..", "###.", "....", "...."]),
    ('j', &["...#.", ".....", "..##.", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    ('k', &["#....", "#....", "#..#.", "#.#..", "##...", "#.#..", "#..#.", ".....", "....."]),
    ('l', &["##..", ".#..", ".#..", ".#..", ".#..", ".#..", "###.", "....", "...."]),
    ('m', &["##.#..", "#.#.#.", "#.#.#.", "#...#.", "#...#.", "......", "......"]),
    ('n', &["#.##..", "##..#.", "#...#.", "#...#.", "#...#.", "......", "......"]),
    ('o', &[".###..", "#...#.", "#...#.", "#...#.", ".###..", "......", "......"]),
    ('p', &["####..", "#...#.", "#...#.", "#...#.", "####..", "#.....", "#....."]),
    ('q', &[".####.", "#...#.", "#...#.", "#...#.", ".####.", "....#.", "....#."]),
    ('r', &["#.##..", "##..#.", "#.....", "#.....", "#.....", "......", "......"]),
    ('s', &[".####.", "#.....", ".###..", "....#.", "####..", "......", "......"]),
    ('t', &[".#...", "####.", ".#...", ".#...", ".#...", "..##.", ".....", "....."]),
    ('u', &["#...#.", "#...#.", "#...#.", "#..##.", ".##.#.", "......", "......"]),
    ('v', &["#...#.", "#...#.", "#...#.", "##.##.", ".###..", "......", "......"]),
    ('w', &["#...#.", "#...#.", "#.#.#.", "#.#.#.", "##.##.", "......", "......"]),
    ('x', &["#...#.", ".#.#..", "..#...", ".#.#..", "#...#.", "......", "......"]),
    ('y', &["#...#.", "#...#.", "#...#.", "#...#.", ".####.", "....#.", ".###.."]),
    ('z', &["#####.", "...#..", "..#...", ".#....", "#####.", "......", "......"]),
    ('{', &["..#.", ".#..", ".#..", "#...", ".#..", ".#..", "..#.", "....", "...."]),
    ('|', &["#.", "#.", "#.", "#.", "#.", "#.", "#.", "#.", "#."]),
    ('}', &["#...", ".#..", ".#..", "..#.", ".#..", ".#..", "#...", "....", "...."]),
    ('~', &[".#....", "#.#.#.", "...#..", "......", "......", "......", "......"]),
];

/// Binary rasterization of a single character as `#`/`.` rows.
fn render(c: char) -> Vec<String> {
    let raster = layout_with(glyph_table(), &c.to_string(), 1).unwrap();
    let mut rows = vec![vec!['.'; raster.width()]; raster.height()];
    for fragment in rasterize(&raster, Color::WHITE, false) {
        rows[fragment.row][fragment.col] = '#';
    }
    rows.into_iter().map(|r| r.into_iter().collect()).collect()
}

#[test]
fn fixtures_cover_printable_ascii() {
    let chars: Vec<char> = GLYPH_FIXTURES.iter().map(|&(c, _)| c).collect();
    assert_eq!(chars, (' '..='~').collect::<Vec<_>>());
}

#[test]
fn every_glyph_matches_its_fixture() {
    for &(c, expected) in GLYPH_FIXTURES {
        assert_eq!(render(c), expected, "glyph {:?}", c);
    }
}

#[test]
fn glyph_heights_follow_the_baseline() {
    // Contract: capitals and digits are 9 rows tall including the descender rows
    for c in ('A'..='Z').chain('0'..='9') {
        let rows = GLYPH_FIXTURES.iter().find(|&&(f, _)| f == c).unwrap().1;
        assert_eq!(rows.len(), 9, "glyph {:?}", c);
        assert!(rows[7..].iter().all(|r| !r.contains('#')), "glyph {:?}", c);
    }
}
