//! Shape catalog - fixed library of piece masks
//!
//! Each shape is a 4x4 boolean mask in its spawn orientation. No rotation
//! variants are stored; orientations are computed on demand by transposing
//! the mask and reversing rows or columns (see [`rotated`]).

use crate::types::{RotateDir, ShapeId};

/// A piece orientation inside its 4x4 bounding frame.
pub type Mask4 = [[bool; 4]; 4];

/// One catalog entry: display name plus spawn-orientation mask.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub name: &'static str,
    pub mask: Mask4,
}

const fn mask(rows: [&str; 4]) -> Mask4 {
    let mut m = [[false; 4]; 4];
    let mut r = 0;
    while r < 4 {
        let bytes = rows[r].as_bytes();
        let mut c = 0;
        while c < 4 {
            m[r][c] = bytes[c] == b'#';
            c += 1;
        }
        r += 1;
    }
    m
}

/// All known shapes. The classic six-piece catalog is the prefix without the
/// tee; the full catalog is all seven.
pub const SHAPES: [Shape; 7] = [
    Shape {
        name: "square",
        mask: mask(["##..", "##..", "....", "...."]),
    },
    Shape {
        name: "l-left",
        mask: mask(["#...", "#...", "##..", "...."]),
    },
    Shape {
        name: "l-right",
        mask: mask([".#..", ".#..", "##..", "...."]),
    },
    Shape {
        name: "zigzag-left",
        mask: mask([".##.", "##..", "....", "...."]),
    },
    Shape {
        name: "zigzag-right",
        mask: mask(["##..", ".##.", "....", "...."]),
    },
    Shape {
        name: "straight",
        mask: mask(["#...", "#...", "#...", "#..."]),
    },
    Shape {
        name: "tee",
        mask: mask([".#..", "###.", "....", "...."]),
    },
];

/// Index of the vertical straight piece (used by scenario tests).
pub const STRAIGHT: ShapeId = 5;

/// Which slice of [`SHAPES`] a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Catalog {
    /// The six-piece catalog of the small terminal variant (no tee).
    ClassicSix,
    /// All seven pieces.
    #[default]
    FullSeven,
}

impl Catalog {
    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Catalog::ClassicSix => &SHAPES[..6],
            Catalog::FullSeven => &SHAPES,
        }
    }

    pub fn len(self) -> usize {
        self.shapes().len()
    }

    pub fn is_empty(self) -> bool {
        false
    }
}

fn transpose(m: &mut Mask4) {
    for i in 0..4 {
        for j in (i + 1)..4 {
            let tmp = m[i][j];
            m[i][j] = m[j][i];
            m[j][i] = tmp;
        }
    }
}

fn reverse_rows(m: &mut Mask4) {
    for row in m.iter_mut() {
        row.reverse();
    }
}

fn reverse_cols(m: &mut Mask4) {
    m.reverse();
}

/// Produce the mask rotated a quarter turn in the given direction:
/// transpose, then reverse columns (left) or rows (right).
pub fn rotated(m: &Mask4, dir: RotateDir) -> Mask4 {
    let mut out = *m;
    transpose(&mut out);
    match dir {
        RotateDir::Left => reverse_cols(&mut out),
        RotateDir::Right => reverse_rows(&mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_share_the_prefix() {
        let six = Catalog::ClassicSix.shapes();
        let seven = Catalog::FullSeven.shapes();
        assert_eq!(six.len(), 6);
        assert_eq!(seven.len(), 7);
        for (a, b) in six.iter().zip(seven) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.mask, b.mask);
        }
    }

    #[test]
    fn classic_catalog_has_no_tee() {
        assert!(Catalog::ClassicSix
            .shapes()
            .iter()
            .all(|s| s.name != "tee"));
        assert_eq!(Catalog::FullSeven.shapes()[6].name, "tee");
    }

    #[test]
    fn every_shape_has_four_cells() {
        for shape in &SHAPES {
            let count = shape
                .mask
                .iter()
                .flatten()
                .filter(|&&set| set)
                .count();
            assert_eq!(count, 4, "shape {}", shape.name);
        }
    }

    #[test]
    fn four_rotations_return_to_start() {
        for shape in &SHAPES {
            let mut m = shape.mask;
            for _ in 0..4 {
                m = rotated(&m, RotateDir::Right);
            }
            assert_eq!(m, shape.mask, "shape {}", shape.name);
        }
    }

    #[test]
    fn left_then_right_is_identity() {
        for shape in &SHAPES {
            let m = rotated(&rotated(&shape.mask, RotateDir::Left), RotateDir::Right);
            assert_eq!(m, shape.mask, "shape {}", shape.name);
        }
    }

    #[test]
    fn straight_rotates_to_horizontal() {
        let m = rotated(&SHAPES[STRAIGHT].mask, RotateDir::Right);
        // Vertical bar in column 0 becomes a horizontal bar in row 0.
        assert_eq!(m[0], [true, true, true, true]);
        assert!(m[1..].iter().flatten().all(|&set| !set));
    }
}
