//! Padding and margin scale.
//!
//! Steps 0-7 map to 0, 0.25, 0.5, 1, 2, 4, 8 and 16 rem. The `n*` groups are
//! negative margins for steps 1-7.

use super::RemTable;

pub const SPACING: RemTable = &[
    ("pa0", &[("padding", 0.0)]),
    ("pa1", &[("padding", 0.25)]),
    ("pa2", &[("padding", 0.5)]),
    ("pa3", &[("padding", 1.0)]),
    ("pa4", &[("padding", 2.0)]),
    ("pa5", &[("padding", 4.0)]),
    ("pa6", &[("padding", 8.0)]),
    ("pa7", &[("padding", 16.0)]),
    ("pl0", &[("paddingLeft", 0.0)]),
    ("pl1", &[("paddingLeft", 0.25)]),
    ("pl2", &[("paddingLeft", 0.5)]),
    ("pl3", &[("paddingLeft", 1.0)]),
    ("pl4", &[("paddingLeft", 2.0)]),
    ("pl5", &[("paddingLeft", 4.0)]),
    ("pl6", &[("paddingLeft", 8.0)]),
    ("pl7", &[("paddingLeft", 16.0)]),
    ("pr0", &[("paddingRight", 0.0)]),
    ("pr1", &[("paddingRight", 0.25)]),
    ("pr2", &[("paddingRight", 0.5)]),
    ("pr3", &[("paddingRight", 1.0)]),
    ("pr4", &[("paddingRight", 2.0)]),
    ("pr5", &[("paddingRight", 4.0)]),
    ("pr6", &[("paddingRight", 8.0)]),
    ("pr7", &[("paddingRight", 16.0)]),
    ("pt0", &[("paddingTop", 0.0)]),
    ("pt1", &[("paddingTop", 0.25)]),
    ("pt2", &[("paddingTop", 0.5)]),
    ("pt3", &[("paddingTop", 1.0)]),
    ("pt4", &[("paddingTop", 2.0)]),
    ("pt5", &[("paddingTop", 4.0)]),
    ("pt6", &[("paddingTop", 8.0)]),
    ("pt7", &[("paddingTop", 16.0)]),
    ("pb0", &[("paddingBottom", 0.0)]),
    ("pb1", &[("paddingBottom", 0.25)]),
    ("pb2", &[("paddingBottom", 0.5)]),
    ("pb3", &[("paddingBottom", 1.0)]),
    ("pb4", &[("paddingBottom", 2.0)]),
    ("pb5", &[("paddingBottom", 4.0)]),
    ("pb6", &[("paddingBottom", 8.0)]),
    ("pb7", &[("paddingBottom", 16.0)]),
    ("pv0", &[("paddingVertical", 0.0)]),
    ("pv1", &[("paddingVertical", 0.25)]),
    ("pv2", &[("paddingVertical", 0.5)]),
    ("pv3", &[("paddingVertical", 1.0)]),
    ("pv4", &[("paddingVertical", 2.0)]),
    ("pv5", &[("paddingVertical", 4.0)]),
    ("pv6", &[("paddingVertical", 8.0)]),
    ("pv7", &[("paddingVertical", 16.0)]),
    ("ph0", &[("paddingHorizontal", 0.0)]),
    ("ph1", &[("paddingHorizontal", 0.25)]),
    ("ph2", &[("paddingHorizontal", 0.5)]),
    ("ph3", &[("paddingHorizontal", 1.0)]),
    ("ph4", &[("paddingHorizontal", 2.0)]),
    ("ph5", &[("paddingHorizontal", 4.0)]),
    ("ph6", &[("paddingHorizontal", 8.0)]),
    ("ph7", &[("paddingHorizontal", 16.0)]),
    ("ma0", &[("margin", 0.0)]),
    ("ma1", &[("margin", 0.25)]),
    ("ma2", &[("margin", 0.5)]),
    ("ma3", &[("margin", 1.0)]),
    ("ma4", &[("margin", 2.0)]),
    ("ma5", &[("margin", 4.0)]),
    ("ma6", &[("margin", 8.0)]),
    ("ma7", &[("margin", 16.0)]),
    ("ml0", &[("marginLeft", 0.0)]),
    ("ml1", &[("marginLeft", 0.25)]),
    ("ml2", &[("marginLeft", 0.5)]),
    ("ml3", &[("marginLeft", 1.0)]),
    ("ml4", &[("marginLeft", 2.0)]),
    ("ml5", &[("marginLeft", 4.0)]),
    ("ml6", &[("marginLeft", 8.0)]),
    ("ml7", &[("marginLeft", 16.0)]),
    ("mr0", &[("marginRight", 0.0)]),
    ("mr1", &[("marginRight", 0.25)]),
    ("mr2", &[("marginRight", 0.5)]),
    ("mr3", &[("marginRight", 1.0)]),
    ("mr4", &[("marginRight", 2.0)]),
    ("mr5", &[("marginRight", 4.0)]),
    ("mr6", &[("marginRight", 8.0)]),
    ("mr7", &[("marginRight", 16.0)]),
    ("mt0", &[("marginTop", 0.0)]),
    ("mt1", &[("marginTop", 0.25)]),
    ("mt2", &[("marginTop", 0.5)]),
    ("mt3", &[("marginTop", 1.0)]),
    ("mt4", &[("marginTop", 2.0)]),
    ("mt5", &[("marginTop", 4.0)]),
    ("mt6", &[("marginTop", 8.0)]),
    ("mt7", &[("marginTop", 16.0)]),
    ("mb0", &[("marginBottom", 0.0)]),
    ("mb1", &[("marginBottom", 0.25)]),
    ("mb2", &[("marginBottom", 0.5)]),
    ("mb3", &[("marginBottom", 1.0)]),
    ("mb4", &[("marginBottom", 2.0)]),
    ("mb5", &[("marginBottom", 4.0)]),
    ("mb6", &[("marginBottom", 8.0)]),
    ("mb7", &[("marginBottom", 16.0)]),
    ("mv0", &[("marginVertical", 0.0)]),
    ("mv1", &[("marginVertical", 0.25)]),
    ("mv2", &[("marginVertical", 0.5)]),
    ("mv3", &[("marginVertical", 1.0)]),
    ("mv4", &[("marginVertical", 2.0)]),
    ("mv5", &[("marginVertical", 4.0)]),
    ("mv6", &[("marginVertical", 8.0)]),
    ("mv7", &[("marginVertical", 16.0)]),
    ("mh0", &[("marginHorizontal", 0.0)]),
    ("mh1", &[("marginHorizontal", 0.25)]),
    ("mh2", &[("marginHorizontal", 0.5)]),
    ("mh3", &[("marginHorizontal", 1.0)]),
    ("mh4", &[("marginHorizontal", 2.0)]),
    ("mh5", &[("marginHorizontal", 4.0)]),
    ("mh6", &[("marginHorizontal", 8.0)]),
    ("mh7", &[("marginHorizontal", 16.0)]),
    ("na1", &[("margin", -0.25)]),
    ("na2", &[("margin", -0.5)]),
    ("na3", &[("margin", -1.0)]),
    ("na4", &[("margin", -2.0)]),
    ("na5", &[("margin", -4.0)]),
    ("na6", &[("margin", -8.0)]),
    ("na7", &[("margin", -16.0)]),
    ("nl1", &[("marginLeft", -0.25)]),
    ("nl2", &[("marginLeft", -0.5)]),
    ("nl3", &[("marginLeft", -1.0)]),
    ("nl4", &[("marginLeft", -2.0)]),
    ("nl5", &[("marginLeft", -4.0)]),
    ("nl6", &[("marginLeft", -8.0)]),
    ("nl7", &[("marginLeft", -16.0)]),
    ("nr1", &[("marginRight", -0.25)]),
    ("nr2", &[("marginRight", -0.5)]),
    ("nr3", &[("marginRight", -1.0)]),
    ("nr4", &[("marginRight", -2.0)]),
    ("nr5", &[("marginRight", -4.0)]),
    ("nr6", &[("marginRight", -8.0)]),
    ("nr7", &[("marginRight", -16.0)]),
    ("nt1", &[("marginTop", -0.25)]),
    ("nt2", &[("marginTop", -0.5)]),
    ("nt3", &[("marginTop", -1.0)]),
    ("nt4", &[("marginTop", -2.0)]),
    ("nt5", &[("marginTop", -4.0)]),
    ("nt6", &[("marginTop", -8.0)]),
    ("nt7", &[("marginTop", -16.0)]),
    ("nb1", &[("marginBottom", -0.25)]),
    ("nb2", &[("marginBottom", -0.5)]),
    ("nb3", &[("marginBottom", -1.0)]),
    ("nb4", &[("marginBottom", -2.0)]),
    ("nb5", &[("marginBottom", -4.0)]),
    ("nb6", &[("marginBottom", -8.0)]),
    ("nb7", &[("marginBottom", -16.0)]),
    ("nv1", &[("marginVertical", -0.25)]),
    ("nv2", &[("marginVertical", -0.5)]),
    ("nv3", &[("marginVertical", -1.0)]),
    ("nv4", &[("marginVertical", -2.0)]),
    ("nv5", &[("marginVertical", -4.0)]),
    ("nv6", &[("marginVertical", -8.0)]),
    ("nv7", &[("marginVertical", -16.0)]),
    ("nh1", &[("marginHorizontal", -0.25)]),
    ("nh2", &[("marginHorizontal", -0.5)]),
    ("nh3", &[("marginHorizontal", -1.0)]),
    ("nh4", &[("marginHorizontal", -2.0)]),
    ("nh5", &[("marginHorizontal", -4.0)]),
    ("nh6", &[("marginHorizontal", -8.0)]),
    ("nh7", &[("marginHorizontal", -16.0)]),
];
