//! Fixed widths on a doubling scale from 1 to 16 rem.

use super::RemTable;

pub const WIDTHS: RemTable = &[
    ("w1", &[("width", 1.0)]),
    ("w2", &[("width", 2.0)]),
    ("w3", &[("width", 4.0)]),
    ("w4", &[("width", 8.0)]),
    ("w5", &[("width", 16.0)]),
];

pub const MIN_WIDTHS: RemTable = &[
    ("min-w1", &[("minWidth", 1.0)]),
    ("min-w2", &[("minWidth", 2.0)]),
    ("min-w3", &[("minWidth", 4.0)]),
    ("min-w4", &[("minWidth", 8.0)]),
    ("min-w5", &[("minWidth", 16.0)]),
];

pub const MAX_WIDTHS: RemTable = &[
    ("max-w1", &[("maxWidth", 1.0)]),
    ("max-w2", &[("maxWidth", 2.0)]),
    ("max-w3", &[("maxWidth", 4.0)]),
    ("max-w4", &[("maxWidth", 8.0)]),
    ("max-w5", &[("maxWidth", 16.0)]),
];
