// src/font/kerning.rs

//! Kerning pairs for the built-in font.
//!
//! An adjustment is added to the previous glyph's width when advancing the
//! layout cursor. `-1` swallows the right-hand gutter so diagonal strokes sit
//! flush against each other. Pairs not listed here advance by width alone.

pub(crate) const KERNING_PAIRS: &[((char, char), i32)] = &[
    (('A', 'T'), -1),
    (('A', 'V'), -1),
    (('A', 'W'), -1),
    (('A', 'Y'), -1),
    (('F', 'a'), -1),
    (('L', 'T'), -1),
    (('L', 'V'), -1),
    (('L', 'Y'), -1),
    (('P', 'a'), -1),
    (('T', 'A'), -1),
    (('T', 'a'), -1),
    (('T', 'e'), -1),
    (('T', 'o'), -1),
    (('V', 'A'), -1),
    (('V', 'a'), -1),
    (('V', 'o'), -1),
    (('W', 'A'), -1),
    (('W', 'a'), -1),
    (('W', 'o'), -1),
    (('Y', 'A'), -1),
    (('Y', 'a'), -1),
    (('Y', 'o'), -1),
    (('r', ','), -1),
    (('r', '.'), -1),
];
