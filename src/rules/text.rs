//! Text alignment, style, transform and decoration.

use super::Scalar::Str;
use super::StaticTable;

pub const TEXT: StaticTable = &[
    ("tl", &[("textAlign", Str("left"))]),
    ("tc", &[("textAlign", Str("center"))]),
    ("tr", &[("textAlign", Str("right"))]),
    ("tj", &[("textAlign", Str("justify"))]),
    ("i", &[("fontStyle", Str("italic"))]),
    ("fs-normal", &[("fontStyle", Str("normal"))]),
    ("ttc", &[("textTransform", Str("capitalize"))]),
    ("ttl", &[("textTransform", Str("lowercase"))]),
    ("ttu", &[("textTransform", Str("uppercase"))]),
    ("ttn", &[("textTransform", Str("none"))]),
    ("strike", &[("textDecorationLine", Str("line-through"))]),
    ("underline", &[("textDecorationLine", Str("underline"))]),
    ("no-underline", &[("textDecorationLine", Str("none"))]),
];
