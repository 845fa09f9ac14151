use super::Scalar::Str;
use super::StaticTable;

pub const FONT_WEIGHTS: StaticTable = &[
    ("normal", &[("fontWeight", Str("normal"))]),
    ("b", &[("fontWeight", Str("bold"))]),
    ("fw1", &[("fontWeight", Str("100"))]),
    ("fw2", &[("fontWeight", Str("200"))]),
    ("fw3", &[("fontWeight", Str("300"))]),
    ("fw4", &[("fontWeight", Str("400"))]),
    ("fw5", &[("fontWeight", Str("500"))]),
    ("fw6", &[("fontWeight", Str("600"))]),
    ("fw7", &[("fontWeight", Str("700"))]),
    ("fw8", &[("fontWeight", Str("800"))]),
    ("fw9", &[("fontWeight", Str("900"))]),
];
