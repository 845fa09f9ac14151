//! Fixed heights on a doubling scale from 1 to 16 rem.

use super::RemTable;

pub const HEIGHTS: RemTable = &[
    ("h1", &[("height", 1.0)]),
    ("h2", &[("height", 2.0)]),
    ("h3", &[("height", 4.0)]),
    ("h4", &[("height", 8.0)]),
    ("h5", &[("height", 16.0)]),
];

pub const MIN_HEIGHTS: RemTable = &[
    ("min-h1", &[("minHeight", 1.0)]),
    ("min-h2", &[("minHeight", 2.0)]),
    ("min-h3", &[("minHeight", 4.0)]),
    ("min-h4", &[("minHeight", 8.0)]),
    ("min-h5", &[("minHeight", 16.0)]),
];

pub const MAX_HEIGHTS: RemTable = &[
    ("max-h1", &[("maxHeight", 1.0)]),
    ("max-h2", &[("maxHeight", 2.0)]),
    ("max-h3", &[("maxHeight", 4.0)]),
    ("max-h4", &[("maxHeight", 8.0)]),
    ("max-h5", &[("maxHeight", 16.0)]),
];
