//! Flexbox direction, wrapping and alignment.

use super::Scalar::{Num, Str};
use super::StaticTable;

pub const FLEXBOX: StaticTable = &[
    ("flx-i", &[("flex", Num(1.0))]),
    ("flx-grow", &[("flexGrow", Num(1.0))]),
    ("flx-shrink", &[("flexShrink", Num(1.0))]),
    ("flx-row", &[("flexDirection", Str("row"))]),
    ("flx-row-reverse", &[("flexDirection", Str("row-reverse"))]),
    ("flx-col-reverse", &[("flexDirection", Str("column-reverse"))]),
    ("flx-wrap", &[("flexWrap", Str("wrap"))]),
    ("flx-nowrap", &[("flexWrap", Str("nowrap"))]),
    ("aifs", &[("alignItems", Str("flex-start"))]),
    ("aife", &[("alignItems", Str("flex-end"))]),
    ("aic", &[("alignItems", Str("center"))]),
    ("aib", &[("alignItems", Str("baseline"))]),
    ("ais", &[("alignItems", Str("stretch"))]),
    ("asfs", &[("alignSelf", Str("flex-start"))]),
    ("asfe", &[("alignSelf", Str("flex-end"))]),
    ("asc", &[("alignSelf", Str("center"))]),
    ("asb", &[("alignSelf", Str("baseline"))]),
    ("ass", &[("alignSelf", Str("stretch"))]),
    ("jcfs", &[("justifyContent", Str("flex-start"))]),
    ("jcfe", &[("justifyContent", Str("flex-end"))]),
    ("jcc", &[("justifyContent", Str("center"))]),
    ("jcsb", &[("justifyContent", Str("space-between"))]),
    ("jcsa", &[("justifyContent", Str("space-around"))]),
    ("acfs", &[("alignContent", Str("flex-start"))]),
    ("acfe", &[("alignContent", Str("flex-end"))]),
    ("acc", &[("alignContent", Str("center"))]),
    ("acsb", &[("alignContent", Str("space-between"))]),
    ("acsa", &[("alignContent", Str("space-around"))]),
    ("acs", &[("alignContent", Str("stretch"))]),
];
