//! Font size scale.

use super::RemTable;

pub const TYPE_SCALE: RemTable = &[
    ("f-headline", &[("fontSize", 6.0)]),
    ("f-subheadline", &[("fontSize", 5.0)]),
    ("f1", &[("fontSize", 3.0)]),
    ("f2", &[("fontSize", 2.25)]),
    ("f3", &[("fontSize", 1.5)]),
    ("f4", &[("fontSize", 1.25)]),
    ("f5", &[("fontSize", 1.0)]),
    ("f6", &[("fontSize", 0.875)]),
];
