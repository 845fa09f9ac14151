use super::Scalar::Num;
use super::StaticTable;

pub const OPACITY: StaticTable = &[
    ("o-100", &[("opacity", Num(1.0))]),
    ("o-90", &[("opacity", Num(0.9))]),
    ("o-80", &[("opacity", Num(0.8))]),
    ("o-70", &[("opacity", Num(0.7))]),
    ("o-60", &[("opacity", Num(0.6))]),
    ("o-50", &[("opacity", Num(0.5))]),
    ("o-40", &[("opacity", Num(0.4))]),
    ("o-30", &[("opacity", Num(0.3))]),
    ("o-20", &[("opacity", Num(0.2))]),
    ("o-10", &[("opacity", Num(0.1))]),
    ("o-05", &[("opacity", Num(0.05))]),
    ("o-025", &[("opacity", Num(0.025))]),
    ("o-0", &[("opacity", Num(0.0))]),
];
