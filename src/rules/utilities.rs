//! Positioning, overflow and display helpers.

use super::Scalar::{Num, Str};
use super::StaticTable;

pub const UTILITIES: StaticTable = &[
    ("absolute", &[("position", Str("absolute"))]),
    ("relative", &[("position", Str("relative"))]),
    (
        "absolute-fill",
        &[
            ("position", Str("absolute")),
            ("top", Num(0.0)),
            ("left", Num(0.0)),
            ("right", Num(0.0)),
            ("bottom", Num(0.0)),
        ],
    ),
    ("top-0", &[("top", Num(0.0))]),
    ("right-0", &[("right", Num(0.0))]),
    ("bottom-0", &[("bottom", Num(0.0))]),
    ("left-0", &[("left", Num(0.0))]),
    ("overflow-visible", &[("overflow", Str("visible"))]),
    ("overflow-hidden", &[("overflow", Str("hidden"))]),
    ("overflow-scroll", &[("overflow", Str("scroll"))]),
    ("dn", &[("display", Str("none"))]),
    ("dflex", &[("display", Str("flex"))]),
];
