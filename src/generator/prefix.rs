// Built-in number-block prefixes per carrier. These are compiled-in
// constants; no crawling or external configuration is involved.

pub static MOBILE_PREFIXES: [&str; 20] = [
    "134", "135", "136", "137", "138", "139", "147", "150", "151", "152", "157", "158", "159",
    "178", "182", "183", "184", "187", "188", "198",
];

pub static UNICOM_PREFIXES: [&str; 11] = [
    "130", "131", "132", "145", "155", "156", "166", "175", "176", "185", "186",
];

pub static TELECOM_PREFIXES: [&str; 9] = [
    "133", "149", "153", "173", "177", "180", "181", "189", "199",
];

/// Flattens the carrier tables into one ordered list, Mobile first, then
/// Unicom, then Telecom. Output ordering depends on this order being stable.
pub fn all_prefixes() -> Vec<&'static str> {
    MOBILE_PREFIXES
        .iter()
        .chain(UNICOM_PREFIXES.iter())
        .chain(TELECOM_PREFIXES.iter())
        .copied()
        .collect()
}
