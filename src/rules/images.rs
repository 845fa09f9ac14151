//! Image resize modes.

use super::Scalar::Str;
use super::StaticTable;

pub const IMAGES: StaticTable = &[
    ("rm-contain", &[("resizeMode", Str("contain"))]),
    ("rm-cover", &[("resizeMode", Str("cover"))]),
    ("rm-stretch", &[("resizeMode", Str("stretch"))]),
    ("rm-center", &[("resizeMode", Str("center"))]),
    ("rm-repeat", &[("resizeMode", Str("repeat"))]),
];
