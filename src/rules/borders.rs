//! Border styles, widths and radii.
//!
//! [`STYLES`] are pixel values and are copied verbatim. [`RADII`] are rem
//! multiples. The `br--*` groups square off one side of a rounded box by
//! zeroing the two opposite corners.

use super::Scalar::{Num, Str};
use super::{RemTable, StaticTable};

pub const STYLES: StaticTable = &[
    ("ba", &[("borderStyle", Str("solid")), ("borderWidth", Num(1.0))]),
    ("bt", &[("borderStyle", Str("solid")), ("borderTopWidth", Num(1.0))]),
    ("br", &[("borderStyle", Str("solid")), ("borderRightWidth", Num(1.0))]),
    ("bb", &[("borderStyle", Str("solid")), ("borderBottomWidth", Num(1.0))]),
    ("bl", &[("borderStyle", Str("solid")), ("borderLeftWidth", Num(1.0))]),
    ("bn", &[("borderWidth", Num(0.0))]),
    ("b--dotted", &[("borderStyle", Str("dotted"))]),
    ("b--dashed", &[("borderStyle", Str("dashed"))]),
    ("b--solid", &[("borderStyle", Str("solid"))]),
    ("bw0", &[("borderWidth", Num(0.0))]),
    ("bw1", &[("borderWidth", Num(1.0))]),
    ("bw2", &[("borderWidth", Num(2.0))]),
    ("bw3", &[("borderWidth", Num(4.0))]),
    ("bw4", &[("borderWidth", Num(8.0))]),
    ("bw5", &[("borderWidth", Num(16.0))]),
];

pub const RADII: RemTable = &[
    ("br0", &[("borderRadius", 0.0)]),
    ("br1", &[("borderRadius", 0.125)]),
    ("br2", &[("borderRadius", 0.25)]),
    ("br3", &[("borderRadius", 0.5)]),
    ("br4", &[("borderRadius", 1.0)]),
    ("br5", &[("borderRadius", 2.0)]),
    (
        "br--top",
        &[("borderBottomLeftRadius", 0.0), ("borderBottomRightRadius", 0.0)],
    ),
    (
        "br--right",
        &[("borderTopLeftRadius", 0.0), ("borderBottomLeftRadius", 0.0)],
    ),
    (
        "br--bottom",
        &[("borderTopLeftRadius", 0.0), ("borderTopRightRadius", 0.0)],
    ),
    (
        "br--left",
        &[("borderTopRightRadius", 0.0), ("borderBottomRightRadius", 0.0)],
    ),
];
