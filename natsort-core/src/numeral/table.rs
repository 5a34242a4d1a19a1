//! Unicode numeral code points (Unicode 14.0)
//!
//! Every code point other than ASCII `0`-`9` that carries a numeric value.
//! Consecutive code points of one kind whose values step by one share an
//! entry. Entries are sorted by `start` and never overlap.

use super::NumeralKind::{self, Decimal, Digit, Numeric};

/// Contiguous code points of one kind with values `first_value, first_value + 1, ...`
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumeralRange {
    pub start: u32,
    pub end: u32,
    pub kind: NumeralKind,
    pub first_value: f64,
}

const fn r(start: u32, end: u32, kind: NumeralKind, first_value: f64) -> NumeralRange {
    NumeralRange {
        start,
        end,
        kind,
        first_value,
    }
}

#[rustfmt::skip]
pub(crate) static NUMERALS: &[NumeralRange] = &[
    r(0x00B2, 0x00B3, Digit, 2.0),
    r(0x00B9, 0x00B9, Digit, 1.0),
    r(0x00BC, 0x00BC, Numeric, 0.25),
    r(0x00BD, 0x00BD, Numeric, 0.5),
    r(0x00BE, 0x00BE, Numeric, 0.75),
    r(0x0660, 0x0669, Decimal, 0.0),
    r(0x06F0, 0x06F9, Decimal, 0.0),
    r(0x07C0, 0x07C9, Decimal, 0.0),
    r(0x0966, 0x096F, Decimal, 0.0),
    r(0x09E6, 0x09EF, Decimal, 0.0),
    r(0x09F4, 0x09F4, Numeric, 0.0625),
    r(0x09F5, 0x09F5, Numeric, 0.125),
    r(0x09F6, 0x09F6, Numeric, 0.1875),
    r(0x09F7, 0x09F7, Numeric, 0.25),
    r(0x09F8, 0x09F8, Numeric, 0.75),
    r(0x09F9, 0x09F9, Numeric, 16.0),
    r(0x0A66, 0x0A6F, Decimal, 0.0),
    r(0x0AE6, 0x0AEF, Decimal, 0.0),
    r(0x0B66, 0x0B6F, Decimal, 0.0),
    r(0x0B72, 0x0B72, Numeric, 0.25),
    r(0x0B73, 0x0B73, Numeric, 0.5),
    r(0x0B74, 0x0B74, Numeric, 0.75),
    r(0x0B75, 0x0B75, Numeric, 0.0625),
    r(0x0B76, 0x0B76, Numeric, 0.125),
    r(0x0B77, 0x0B77, Numeric, 0.1875),
    r(0x0BE6, 0x0BEF, Decimal, 0.0),
    r(0x0BF0, 0x0BF0, Numeric, 10.0),
    r(0x0BF1, 0x0BF1, Numeric, 100.0),
    r(0x0BF2, 0x0BF2, Numeric, 1000.0),
    r(0x0C66, 0x0C6F, Decimal, 0.0),
    r(0x0C78, 0x0C7B, Numeric, 0.0),
    r(0x0C7C, 0x0C7E, Numeric, 1.0),
    r(0x0CE6, 0x0CEF, Decimal, 0.0),
    r(0x0D58, 0x0D58, Numeric, 0.00625),
    r(0x0D59, 0x0D59, Numeric, 0.025),
    r(0x0D5A, 0x0D5A, Numeric, 0.0375),
    r(0x0D5B, 0x0D5B, Numeric, 0.05),
    r(0x0D5C, 0x0D5C, Numeric, 0.1),
    r(0x0D5D, 0x0D5D, Numeric, 0.15),
    r(0x0D5E, 0x0D5E, Numeric, 0.2),
    r(0x0D66, 0x0D6F, Decimal, 0.0),
    r(0x0D70, 0x0D70, Numeric, 10.0),
    r(0x0D71, 0x0D71, Numeric, 100.0),
    r(0x0D72, 0x0D72, Numeric, 1000.0),
    r(0x0D73, 0x0D73, Numeric, 0.25),
    r(0x0D74, 0x0D74, Numeric, 0.5),
    r(0x0D75, 0x0D75, Numeric, 0.75),
    r(0x0D76, 0x0D76, Numeric, 0.0625),
    r(0x0D77, 0x0D77, Numeric, 0.125),
    r(0x0D78, 0x0D78, Numeric, 0.1875),
    r(0x0DE6, 0x0DEF, Decimal, 0.0),
    r(0x0E50, 0x0E59, Decimal, 0.0),
    r(0x0ED0, 0x0ED9, Decimal, 0.0),
    r(0x0F20, 0x0F29, Decimal, 0.0),
    r(0x0F2A, 0x0F2A, Numeric, 0.5),
    r(0x0F2B, 0x0F2B, Numeric, 1.5),
    r(0x0F2C, 0x0F2C, Numeric, 2.5),
    r(0x0F2D, 0x0F2D, Numeric, 3.5),
    r(0x0F2E, 0x0F2E, Numeric, 4.5),
    r(0x0F2F, 0x0F2F, Numeric, 5.5),
    r(0x0F30, 0x0F30, Numeric, 6.5),
    r(0x0F31, 0x0F31, Numeric, 7.5),
    r(0x0F32, 0x0F32, Numeric, 8.5),
    r(0x0F33, 0x0F33, Numeric, -0.5),
    r(0x1040, 0x1049, Decimal, 0.0),
    r(0x1090, 0x1099, Decimal, 0.0),
    r(0x1369, 0x1371, Digit, 1.0),
    r(0x1372, 0x1372, Numeric, 10.0),
    r(0x1373, 0x1373, Numeric, 20.0),
    r(0x1374, 0x1374, Numeric, 30.0),
    r(0x1375, 0x1375, Numeric, 40.0),
    r(0x1376, 0x1376, Numeric, 50.0),
    r(0x1377, 0x1377, Numeric, 60.0),
    r(0x1378, 0x1378, Numeric, 70.0),
    r(0x1379, 0x1379, Numeric, 80.0),
    r(0x137A, 0x137A, Numeric, 90.0),
    r(0x137B, 0x137B, Numeric, 100.0),
    r(0x137C, 0x137C, Numeric, 10000.0),
    r(0x16EE, 0x16F0, Numeric, 17.0),
    r(0x17E0, 0x17E9, Decimal, 0.0),
    r(0x17F0, 0x17F9, Numeric, 0.0),
    r(0x1810, 0x1819, Decimal, 0.0),
    r(0x1946, 0x194F, Decimal, 0.0),
    r(0x19D0, 0x19D9, Decimal, 0.0),
    r(0x19DA, 0x19DA, Digit, 1.0),
    r(0x1A80, 0x1A89, Decimal, 0.0),
    r(0x1A90, 0x1A99, Decimal, 0.0),
    r(0x1B50, 0x1B59, Decimal, 0.0),
    r(0x1BB0, 0x1BB9, Decimal, 0.0),
    r(0x1C40, 0x1C49, Decimal, 0.0),
    r(0x1C50, 0x1C59, Decimal, 0.0),
    r(0x2070, 0x2070, Digit, 0.0),
    r(0x2074, 0x2079, Digit, 4.0),
    r(0x2080, 0x2089, Digit, 0.0),
    r(0x2150, 0x2150, Numeric, 0.14285714285714285),
    r(0x2151, 0x2151, Numeric, 0.1111111111111111),
    r(0x2152, 0x2152, Numeric, 0.1),
    r(0x2153, 0x2153, Numeric, 0.3333333333333333),
    r(0x2154, 0x2154, Numeric, 0.6666666666666666),
    r(0x2155, 0x2155, Numeric, 0.2),
    r(0x2156, 0x2156, Numeric, 0.4),
    r(0x2157, 0x2157, Numeric, 0.6),
    r(0x2158, 0x2158, Numeric, 0.8),
    r(0x2159, 0x2159, Numeric, 0.16666666666666666),
    r(0x215A, 0x215A, Numeric, 0.8333333333333334),
    r(0x215B, 0x215B, Numeric, 0.125),
    r(0x215C, 0x215C, Numeric, 0.375),
    r(0x215D, 0x215D, Numeric, 0.625),
    r(0x215E, 0x215E, Numeric, 0.875),
    r(0x215F, 0x215F, Numeric, 1.0),
    r(0x2160, 0x216B, Numeric, 1.0),
    r(0x216C, 0x216C, Numeric, 50.0),
    r(0x216D, 0x216D, Numeric, 100.0),
    r(0x216E, 0x216E, Numeric, 500.0),
    r(0x216F, 0x216F, Numeric, 1000.0),
    r(0x2170, 0x217B, Numeric, 1.0),
    r(0x217C, 0x217C, Numeric, 50.0),
    r(0x217D, 0x217D, Numeric, 100.0),
    r(0x217E, 0x217E, Numeric, 500.0),
    r(0x217F, 0x217F, Numeric, 1000.0),
    r(0x2180, 0x2180, Numeric, 1000.0),
    r(0x2181, 0x2181, Numeric, 5000.0),
    r(0x2182, 0x2182, Numeric, 10000.0),
    r(0x2185, 0x2185, Numeric, 6.0),
    r(0x2186, 0x2186, Numeric, 50.0),
    r(0x2187, 0x2187, Numeric, 50000.0),
    r(0x2188, 0x2188, Numeric, 100000.0),
    r(0x2189, 0x2189, Numeric, 0.0),
    r(0x2460, 0x2468, Digit, 1.0),
    r(0x2469, 0x2473, Numeric, 10.0),
    r(0x2474, 0x247C, Digit, 1.0),
    r(0x247D, 0x2487, Numeric, 10.0),
    r(0x2488, 0x2490, Digit, 1.0),
    r(0x2491, 0x249B, Numeric, 10.0),
    r(0x24EA, 0x24EA, Digit, 0.0),
    r(0x24EB, 0x24F4, Numeric, 11.0),
    r(0x24F5, 0x24FD, Digit, 1.0),
    r(0x24FE, 0x24FE, Numeric, 10.0),
    r(0x24FF, 0x24FF, Digit, 0.0),
    r(0x2776, 0x277E, Digit, 1.0),
    r(0x277F, 0x277F, Numeric, 10.0),
    r(0x2780, 0x2788, Digit, 1.0),
    r(0x2789, 0x2789, Numeric, 10.0),
    r(0x278A, 0x2792, Digit, 1.0),
    r(0x2793, 0x2793, Numeric, 10.0),
    r(0x2CFD, 0x2CFD, Numeric, 0.5),
    r(0x3007, 0x3007, Numeric, 0.0),
    r(0x3021, 0x3029, Numeric, 1.0),
    r(0x3038, 0x3038, Numeric, 10.0),
    r(0x3039, 0x3039, Numeric, 20.0),
    r(0x303A, 0x303A, Numeric, 30.0),
    r(0x3192, 0x3195, Numeric, 1.0),
    r(0x3220, 0x3229, Numeric, 1.0),
    r(0x3248, 0x3248, Numeric, 10.0),
    r(0x3249, 0x3249, Numeric, 20.0),
    r(0x324A, 0x324A, Numeric, 30.0),
    r(0x324B, 0x324B, Numeric, 40.0),
    r(0x324C, 0x324C, Numeric, 50.0),
    r(0x324D, 0x324D, Numeric, 60.0),
    r(0x324E, 0x324E, Numeric, 70.0),
    r(0x324F, 0x324F, Numeric, 80.0),
    r(0x3251, 0x325F, Numeric, 21.0),
    r(0x3280, 0x3289, Numeric, 1.0),
    r(0x32B1, 0x32BF, Numeric, 36.0),
    r(0x3405, 0x3405, Numeric, 5.0),
    r(0x3483, 0x3483, Numeric, 2.0),
    r(0x382A, 0x382A, Numeric, 5.0),
    r(0x3B4D, 0x3B4D, Numeric, 7.0),
    r(0x4E00, 0x4E00, Numeric, 1.0),
    r(0x4E03, 0x4E03, Numeric, 7.0),
    r(0x4E07, 0x4E07, Numeric, 10000.0),
    r(0x4E09, 0x4E09, Numeric, 3.0),
    r(0x4E5D, 0x4E5D, Numeric, 9.0),
    r(0x4E8C, 0x4E8C, Numeric, 2.0),
    r(0x4E94, 0x4E94, Numeric, 5.0),
    r(0x4E96, 0x4E96, Numeric, 4.0),
    r(0x4EBF, 0x4EBF, Numeric, 100000000.0),
    r(0x4EC0, 0x4EC0, Numeric, 10.0),
    r(0x4EDF, 0x4EDF, Numeric, 1000.0),
    r(0x4EE8, 0x4EE8, Numeric, 3.0),
    r(0x4F0D, 0x4F0D, Numeric, 5.0),
    r(0x4F70, 0x4F70, Numeric, 100.0),
    r(0x5104, 0x5104, Numeric, 100000000.0),
    r(0x5146, 0x5146, Numeric, 1000000000000.0),
    r(0x5169, 0x5169, Numeric, 2.0),
    r(0x516B, 0x516B, Numeric, 8.0),
    r(0x516D, 0x516D, Numeric, 6.0),
    r(0x5341, 0x5341, Numeric, 10.0),
    r(0x5343, 0x5343, Numeric, 1000.0),
    r(0x5344, 0x5344, Numeric, 20.0),
    r(0x5345, 0x5345, Numeric, 30.0),
    r(0x534C, 0x534C, Numeric, 40.0),
    r(0x53C1, 0x53C1, Numeric, 3.0),
    r(0x53C2, 0x53C2, Numeric, 3.0),
    r(0x53C3, 0x53C3, Numeric, 3.0),
    r(0x53C4, 0x53C4, Numeric, 3.0),
    r(0x56DB, 0x56DB, Numeric, 4.0),
    r(0x58F1, 0x58F1, Numeric, 1.0),
    r(0x58F9, 0x58F9, Numeric, 1.0),
    r(0x5E7A, 0x5E7A, Numeric, 1.0),
    r(0x5EFE, 0x5EFE, Numeric, 9.0),
    r(0x5EFF, 0x5EFF, Numeric, 20.0),
    r(0x5F0C, 0x5F0E, Numeric, 1.0),
    r(0x5F10, 0x5F10, Numeric, 2.0),
    r(0x62FE, 0x62FE, Numeric, 10.0),
    r(0x634C, 0x634C, Numeric, 8.0),
    r(0x67D2, 0x67D2, Numeric, 7.0),
    r(0x6F06, 0x6F06, Numeric, 7.0),
    r(0x7396, 0x7396, Numeric, 9.0),
    r(0x767E, 0x767E, Numeric, 100.0),
    r(0x8086, 0x8086, Numeric, 4.0),
    r(0x842C, 0x842C, Numeric, 10000.0),
    r(0x8CAE, 0x8CAE, Numeric, 2.0),
    r(0x8CB3, 0x8CB3, Numeric, 2.0),
    r(0x8D30, 0x8D30, Numeric, 2.0),
    r(0x9621, 0x9621, Numeric, 1000.0),
    r(0x9646, 0x9646, Numeric, 6.0),
    r(0x964C, 0x964C, Numeric, 100.0),
    r(0x9678, 0x9678, Numeric, 6.0),
    r(0x96F6, 0x96F6, Numeric, 0.0),
    r(0xA620, 0xA629, Decimal, 0.0),
    r(0xA6E6, 0xA6EE, Numeric, 1.0),
    r(0xA6EF, 0xA6EF, Numeric, 0.0),
    r(0xA830, 0xA830, Numeric, 0.25),
    r(0xA831, 0xA831, Numeric, 0.5),
    r(0xA832, 0xA832, Numeric, 0.75),
    r(0xA833, 0xA833, Numeric, 0.0625),
    r(0xA834, 0xA834, Numeric, 0.125),
    r(0xA835, 0xA835, Numeric, 0.1875),
    r(0xA8D0, 0xA8D9, Decimal, 0.0),
    r(0xA900, 0xA909, Decimal, 0.0),
    r(0xA9D0, 0xA9D9, Decimal, 0.0),
    r(0xA9F0, 0xA9F9, Decimal, 0.0),
    r(0xAA50, 0xAA59, Decimal, 0.0),
    r(0xABF0, 0xABF9, Decimal, 0.0),
    r(0xF96B, 0xF96B, Numeric, 3.0),
    r(0xF973, 0xF973, Numeric, 10.0),
    r(0xF978, 0xF978, Numeric, 2.0),
    r(0xF9B2, 0xF9B2, Numeric, 0.0),
    r(0xF9D1, 0xF9D1, Numeric, 6.0),
    r(0xF9D3, 0xF9D3, Numeric, 6.0),
    r(0xF9FD, 0xF9FD, Numeric, 10.0),
    r(0xFF10, 0xFF19, Decimal, 0.0),
    r(0x10107, 0x10110, Numeric, 1.0),
    r(0x10111, 0x10111, Numeric, 20.0),
    r(0x10112, 0x10112, Numeric, 30.0),
    r(0x10113, 0x10113, Numeric, 40.0),
    r(0x10114, 0x10114, Numeric, 50.0),
    r(0x10115, 0x10115, Numeric, 60.0),
    r(0x10116, 0x10116, Numeric, 70.0),
    r(0x10117, 0x10117, Numeric, 80.0),
    r(0x10118, 0x10118, Numeric, 90.0),
    r(0x10119, 0x10119, Numeric, 100.0),
    r(0x1011A, 0x1011A, Numeric, 200.0),
    r(0x1011B, 0x1011B, Numeric, 300.0),
    r(0x1011C, 0x1011C, Numeric, 400.0),
    r(0x1011D, 0x1011D, Numeric, 500.0),
    r(0x1011E, 0x1011E, Numeric, 600.0),
    r(0x1011F, 0x1011F, Numeric, 700.0),
    r(0x10120, 0x10120, Numeric, 800.0),
    r(0x10121, 0x10121, Numeric, 900.0),
    r(0x10122, 0x10122, Numeric, 1000.0),
    r(0x10123, 0x10123, Numeric, 2000.0),
    r(0x10124, 0x10124, Numeric, 3000.0),
    r(0x10125, 0x10125, Numeric, 4000.0),
    r(0x10126, 0x10126, Numeric, 5000.0),
    r(0x10127, 0x10127, Numeric, 6000.0),
    r(0x10128, 0x10128, Numeric, 7000.0),
    r(0x10129, 0x10129, Numeric, 8000.0),
    r(0x1012A, 0x1012A, Numeric, 9000.0),
    r(0x1012B, 0x1012B, Numeric, 10000.0),
    r(0x1012C, 0x1012C, Numeric, 20000.0),
    r(0x1012D, 0x1012D, Numeric, 30000.0),
    r(0x1012E, 0x1012E, Numeric, 40000.0),
    r(0x1012F, 0x1012F, Numeric, 50000.0),
    r(0x10130, 0x10130, Numeric, 60000.0),
    r(0x10131, 0x10131, Numeric, 70000.0),
    r(0x10132, 0x10132, Numeric, 80000.0),
    r(0x10133, 0x10133, Numeric, 90000.0),
    r(0x10140, 0x10140, Numeric, 0.25),
    r(0x10141, 0x10141, Numeric, 0.5),
    r(0x10142, 0x10142, Numeric, 1.0),
    r(0x10143, 0x10143, Numeric, 5.0),
    r(0x10144, 0x10144, Numeric, 50.0),
    r(0x10145, 0x10145, Numeric, 500.0),
    r(0x10146, 0x10146, Numeric, 5000.0),
    r(0x10147, 0x10147, Numeric, 50000.0),
    r(0x10148, 0x10148, Numeric, 5.0),
    r(0x10149, 0x10149, Numeric, 10.0),
    r(0x1014A, 0x1014A, Numeric, 50.0),
    r(0x1014B, 0x1014B, Numeric, 100.0),
    r(0x1014C, 0x1014C, Numeric, 500.0),
    r(0x1014D, 0x1014D, Numeric, 1000.0),
    r(0x1014E, 0x1014E, Numeric, 5000.0),
    r(0x1014F, 0x1014F, Numeric, 5.0),
    r(0x10150, 0x10150, Numeric, 10.0),
    r(0x10151, 0x10151, Numeric, 50.0),
    r(0x10152, 0x10152, Numeric, 100.0),
    r(0x10153, 0x10153, Numeric, 500.0),
    r(0x10154, 0x10154, Numeric, 1000.0),
    r(0x10155, 0x10155, Numeric, 10000.0),
    r(0x10156, 0x10156, Numeric, 50000.0),
    r(0x10157, 0x10157, Numeric, 10.0),
    r(0x10158, 0x10158, Numeric, 1.0),
    r(0x10159, 0x10159, Numeric, 1.0),
    r(0x1015A, 0x1015B, Numeric, 1.0),
    r(0x1015C, 0x1015C, Numeric, 2.0),
    r(0x1015D, 0x1015D, Numeric, 2.0),
    r(0x1015E, 0x1015E, Numeric, 2.0),
    r(0x1015F, 0x1015F, Numeric, 5.0),
    r(0x10160, 0x10160, Numeric, 10.0),
    r(0x10161, 0x10161, Numeric, 10.0),
    r(0x10162, 0x10162, Numeric, 10.0),
    r(0x10163, 0x10163, Numeric, 10.0),
    r(0x10164, 0x10164, Numeric, 10.0),
    r(0x10165, 0x10165, Numeric, 30.0),
    r(0x10166, 0x10166, Numeric, 50.0),
    r(0x10167, 0x10167, Numeric, 50.0),
    r(0x10168, 0x10168, Numeric, 50.0),
    r(0x10169, 0x10169, Numeric, 50.0),
    r(0x1016A, 0x1016A, Numeric, 100.0),
    r(0x1016B, 0x1016B, Numeric, 300.0),
    r(0x1016C, 0x1016C, Numeric, 500.0),
    r(0x1016D, 0x1016D, Numeric, 500.0),
    r(0x1016E, 0x1016E, Numeric, 500.0),
    r(0x1016F, 0x1016F, Numeric, 500.0),
    r(0x10170, 0x10170, Numeric, 500.0),
    r(0x10171, 0x10171, Numeric, 1000.0),
    r(0x10172, 0x10172, Numeric, 5000.0),
    r(0x10173, 0x10173, Numeric, 5.0),
    r(0x10174, 0x10174, Numeric, 50.0),
    r(0x10175, 0x10175, Numeric, 0.5),
    r(0x10176, 0x10176, Numeric, 0.5),
    r(0x10177, 0x10177, Numeric, 0.6666666666666666),
    r(0x10178, 0x10178, Numeric, 0.75),
    r(0x1018A, 0x1018A, Numeric, 0.0),
    r(0x1018B, 0x1018B, Numeric, 0.25),
    r(0x102E1, 0x102EA, Numeric, 1.0),
    r(0x102EB, 0x102EB, Numeric, 20.0),
    r(0x102EC, 0x102EC, Numeric, 30.0),
    r(0x102ED, 0x102ED, Numeric, 40.0),
    r(0x102EE, 0x102EE, Numeric, 50.0),
    r(0x102EF, 0x102EF, Numeric, 60.0),
    r(0x102F0, 0x102F0, Numeric, 70.0),
    r(0x102F1, 0x102F1, Numeric, 80.0),
    r(0x102F2, 0x102F2, Numeric, 90.0),
    r(0x102F3, 0x102F3, Numeric, 100.0),
    r(0x102F4, 0x102F4, Numeric, 200.0),
    r(0x102F5, 0x102F5, Numeric, 300.0),
    r(0x102F6, 0x102F6, Numeric, 400.0),
    r(0x102F7, 0x102F7, Numeric, 500.0),
    r(0x102F8, 0x102F8, Numeric, 600.0),
    r(0x102F9, 0x102F9, Numeric, 700.0),
    r(0x102FA, 0x102FA, Numeric, 800.0),
    r(0x102FB, 0x102FB, Numeric, 900.0),
    r(0x10320, 0x10320, Numeric, 1.0),
    r(0x10321, 0x10321, Numeric, 5.0),
    r(0x10322, 0x10322, Numeric, 10.0),
    r(0x10323, 0x10323, Numeric, 50.0),
    r(0x10341, 0x10341, Numeric, 90.0),
    r(0x1034A, 0x1034A, Numeric, 900.0),
    r(0x103D1, 0x103D2, Numeric, 1.0),
    r(0x103D3, 0x103D3, Numeric, 10.0),
    r(0x103D4, 0x103D4, Numeric, 20.0),
    r(0x103D5, 0x103D5, Numeric, 100.0),
    r(0x104A0, 0x104A9, Decimal, 0.0),
    r(0x10858, 0x1085A, Numeric, 1.0),
    r(0x1085B, 0x1085B, Numeric, 10.0),
    r(0x1085C, 0x1085C, Numeric, 20.0),
    r(0x1085D, 0x1085D, Numeric, 100.0),
    r(0x1085E, 0x1085E, Numeric, 1000.0),
    r(0x1085F, 0x1085F, Numeric, 10000.0),
    r(0x10879, 0x1087D, Numeric, 1.0),
    r(0x1087E, 0x1087E, Numeric, 10.0),
    r(0x1087F, 0x1087F, Numeric, 20.0),
    r(0x108A7, 0x108AA, Numeric, 1.0),
    r(0x108AB, 0x108AC, Numeric, 4.0),
    r(0x108AD, 0x108AD, Numeric, 10.0),
    r(0x108AE, 0x108AE, Numeric, 20.0),
    r(0x108AF, 0x108AF, Numeric, 100.0),
    r(0x108FB, 0x108FB, Numeric, 1.0),
    r(0x108FC, 0x108FC, Numeric, 5.0),
    r(0x108FD, 0x108FD, Numeric, 10.0),
    r(0x108FE, 0x108FE, Numeric, 20.0),
    r(0x108FF, 0x108FF, Numeric, 100.0),
    r(0x10916, 0x10916, Numeric, 1.0),
    r(0x10917, 0x10917, Numeric, 10.0),
    r(0x10918, 0x10918, Numeric, 20.0),
    r(0x10919, 0x10919, Numeric, 100.0),
    r(0x1091A, 0x1091B, Numeric, 2.0),
    r(0x109BC, 0x109BC, Numeric, 0.9166666666666666),
    r(0x109BD, 0x109BD, Numeric, 0.5),
    r(0x109C0, 0x109C9, Numeric, 1.0),
    r(0x109CA, 0x109CA, Numeric, 20.0),
    r(0x109CB, 0x109CB, Numeric, 30.0),
    r(0x109CC, 0x109CC, Numeric, 40.0),
    r(0x109CD, 0x109CD, Numeric, 50.0),
    r(0x109CE, 0x109CE, Numeric, 60.0),
    r(0x109CF, 0x109CF, Numeric, 70.0),
    r(0x109D2, 0x109D2, Numeric, 100.0),
    r(0x109D3, 0x109D3, Numeric, 200.0),
    r(0x109D4, 0x109D4, Numeric, 300.0),
    r(0x109D5, 0x109D5, Numeric, 400.0),
    r(0x109D6, 0x109D6, Numeric, 500.0),
    r(0x109D7, 0x109D7, Numeric, 600.0),
    r(0x109D8, 0x109D8, Numeric, 700.0),
    r(0x109D9, 0x109D9, Numeric, 800.0),
    r(0x109DA, 0x109DA, Numeric, 900.0),
    r(0x109DB, 0x109DB, Numeric, 1000.0),
    r(0x109DC, 0x109DC, Numeric, 2000.0),
    r(0x109DD, 0x109DD, Numeric, 3000.0),
    r(0x109DE, 0x109DE, Numeric, 4000.0),
    r(0x109DF, 0x109DF, Numeric, 5000.0),
    r(0x109E0, 0x109E0, Numeric, 6000.0),
    r(0x109E1, 0x109E1, Numeric, 7000.0),
    r(0x109E2, 0x109E2, Numeric, 8000.0),
    r(0x109E3, 0x109E3, Numeric, 9000.0),
    r(0x109E4, 0x109E4, Numeric, 10000.0),
    r(0x109E5, 0x109E5, Numeric, 20000.0),
    r(0x109E6, 0x109E6, Numeric, 30000.0),
    r(0x109E7, 0x109E7, Numeric, 40000.0),
    r(0x109E8, 0x109E8, Numeric, 50000.0),
    r(0x109E9, 0x109E9, Numeric, 60000.0),
    r(0x109EA, 0x109EA, Numeric, 70000.0),
    r(0x109EB, 0x109EB, Numeric, 80000.0),
    r(0x109EC, 0x109EC, Numeric, 90000.0),
    r(0x109ED, 0x109ED, Numeric, 100000.0),
    r(0x109EE, 0x109EE, Numeric, 200000.0),
    r(0x109EF, 0x109EF, Numeric, 300000.0),
    r(0x109F0, 0x109F0, Numeric, 400000.0),
    r(0x109F1, 0x109F1, Numeric, 500000.0),
    r(0x109F2, 0x109F2, Numeric, 600000.0),
    r(0x109F3, 0x109F3, Numeric, 700000.0),
    r(0x109F4, 0x109F4, Numeric, 800000.0),
    r(0x109F5, 0x109F5, Numeric, 900000.0),
    r(0x109F6, 0x109F6, Numeric, 0.08333333333333333),
    r(0x109F7, 0x109F7, Numeric, 0.16666666666666666),
    r(0x109F8, 0x109F8, Numeric, 0.25),
    r(0x109F9, 0x109F9, Numeric, 0.3333333333333333),
    r(0x109FA, 0x109FA, Numeric, 0.4166666666666667),
    r(0x109FB, 0x109FB, Numeric, 0.5),
    r(0x109FC, 0x109FC, Numeric, 0.5833333333333334),
    r(0x109FD, 0x109FD, Numeric, 0.6666666666666666),
    r(0x109FE, 0x109FE, Numeric, 0.75),
    r(0x109FF, 0x109FF, Numeric, 0.8333333333333334),
    r(0x10A40, 0x10A43, Digit, 1.0),
    r(0x10A44, 0x10A44, Numeric, 10.0),
    r(0x10A45, 0x10A45, Numeric, 20.0),
    r(0x10A46, 0x10A46, Numeric, 100.0),
    r(0x10A47, 0x10A47, Numeric, 1000.0),
    r(0x10A48, 0x10A48, Numeric, 0.5),
    r(0x10A7D, 0x10A7D, Numeric, 1.0),
    r(0x10A7E, 0x10A7E, Numeric, 50.0),
    r(0x10A9D, 0x10A9D, Numeric, 1.0),
    r(0x10A9E, 0x10A9E, Numeric, 10.0),
    r(0x10A9F, 0x10A9F, Numeric, 20.0),
    r(0x10AEB, 0x10AEB, Numeric, 1.0),
    r(0x10AEC, 0x10AEC, Numeric, 5.0),
    r(0x10AED, 0x10AED, Numeric, 10.0),
    r(0x10AEE, 0x10AEE, Numeric, 20.0),
    r(0x10AEF, 0x10AEF, Numeric, 100.0),
    r(0x10B58, 0x10B5B, Numeric, 1.0),
    r(0x10B5C, 0x10B5C, Numeric, 10.0),
    r(0x10B5D, 0x10B5D, Numeric, 20.0),
    r(0x10B5E, 0x10B5E, Numeric, 100.0),
    r(0x10B5F, 0x10B5F, Numeric, 1000.0),
    r(0x10B78, 0x10B7B, Numeric, 1.0),
    r(0x10B7C, 0x10B7C, Numeric, 10.0),
    r(0x10B7D, 0x10B7D, Numeric, 20.0),
    r(0x10B7E, 0x10B7E, Numeric, 100.0),
    r(0x10B7F, 0x10B7F, Numeric, 1000.0),
    r(0x10BA9, 0x10BAC, Numeric, 1.0),
    r(0x10BAD, 0x10BAD, Numeric, 10.0),
    r(0x10BAE, 0x10BAE, Numeric, 20.0),
    r(0x10BAF, 0x10BAF, Numeric, 100.0),
    r(0x10CFA, 0x10CFA, Numeric, 1.0),
    r(0x10CFB, 0x10CFB, Numeric, 5.0),
    r(0x10CFC, 0x10CFC, Numeric, 10.0),
    r(0x10CFD, 0x10CFD, Numeric, 50.0),
    r(0x10CFE, 0x10CFE, Numeric, 100.0),
    r(0x10CFF, 0x10CFF, Numeric, 1000.0),
    r(0x10D30, 0x10D39, Decimal, 0.0),
    r(0x10E60, 0x10E68, Digit, 1.0),
    r(0x10E69, 0x10E69, Numeric, 10.0),
    r(0x10E6A, 0x10E6A, Numeric, 20.0),
    r(0x10E6B, 0x10E6B, Numeric, 30.0),
    r(0x10E6C, 0x10E6C, Numeric, 40.0),
    r(0x10E6D, 0x10E6D, Numeric, 50.0),
    r(0x10E6E, 0x10E6E, Numeric, 60.0),
    r(0x10E6F, 0x10E6F, Numeric, 70.0),
    r(0x10E70, 0x10E70, Numeric, 80.0),
    r(0x10E71, 0x10E71, Numeric, 90.0),
    r(0x10E72, 0x10E72, Numeric, 100.0),
    r(0x10E73, 0x10E73, Numeric, 200.0),
    r(0x10E74, 0x10E74, Numeric, 300.0),
    r(0x10E75, 0x10E75, Numeric, 400.0),
    r(0x10E76, 0x10E76, Numeric, 500.0),
    r(0x10E77, 0x10E77, Numeric, 600.0),
    r(0x10E78, 0x10E78, Numeric, 700.0),
    r(0x10E79, 0x10E79, Numeric, 800.0),
    r(0x10E7A, 0x10E7A, Numeric, 900.0),
    r(0x10E7B, 0x10E7B, Numeric, 0.5),
    r(0x10E7C, 0x10E7C, Numeric, 0.25),
    r(0x10E7D, 0x10E7D, Numeric, 0.3333333333333333),
    r(0x10E7E, 0x10E7E, Numeric, 0.6666666666666666),
    r(0x10F1D, 0x10F21, Numeric, 1.0),
    r(0x10F22, 0x10F22, Numeric, 10.0),
    r(0x10F23, 0x10F23, Numeric, 20.0),
    r(0x10F24, 0x10F24, Numeric, 30.0),
    r(0x10F25, 0x10F25, Numeric, 100.0),
    r(0x10F26, 0x10F26, Numeric, 0.5),
    r(0x10F51, 0x10F51, Numeric, 1.0),
    r(0x10F52, 0x10F52, Numeric, 10.0),
    r(0x10F53, 0x10F53, Numeric, 20.0),
    r(0x10F54, 0x10F54, Numeric, 100.0),
    r(0x10FC5, 0x10FC8, Numeric, 1.0),
    r(0x10FC9, 0x10FC9, Numeric, 10.0),
    r(0x10FCA, 0x10FCA, Numeric, 20.0),
    r(0x10FCB, 0x10FCB, Numeric, 100.0),
    r(0x11052, 0x1105A, Digit, 1.0),
    r(0x1105B, 0x1105B, Numeric, 10.0),
    r(0x1105C, 0x1105C, Numeric, 20.0),
    r(0x1105D, 0x1105D, Numeric, 30.0),
    r(0x1105E, 0x1105E, Numeric, 40.0),
    r(0x1105F, 0x1105F, Numeric, 50.0),
    r(0x11060, 0x11060, Numeric, 60.0),
    r(0x11061, 0x11061, Numeric, 70.0),
    r(0x11062, 0x11062, Numeric, 80.0),
    r(0x11063, 0x11063, Numeric, 90.0),
    r(0x11064, 0x11064, Numeric, 100.0),
    r(0x11065, 0x11065, Numeric, 1000.0),
    r(0x11066, 0x1106F, Decimal, 0.0),
    r(0x110F0, 0x110F9, Decimal, 0.0),
    r(0x11136, 0x1113F, Decimal, 0.0),
    r(0x111D0, 0x111D9, Decimal, 0.0),
    r(0x111E1, 0x111EA, Numeric, 1.0),
    r(0x111EB, 0x111EB, Numeric, 20.0),
    r(0x111EC, 0x111EC, Numeric, 30.0),
    r(0x111ED, 0x111ED, Numeric, 40.0),
    r(0x111EE, 0x111EE, Numeric, 50.0),
    r(0x111EF, 0x111EF, Numeric, 60.0),
    r(0x111F0, 0x111F0, Numeric, 70.0),
    r(0x111F1, 0x111F1, Numeric, 80.0),
    r(0x111F2, 0x111F2, Numeric, 90.0),
    r(0x111F3, 0x111F3, Numeric, 100.0),
    r(0x111F4, 0x111F4, Numeric, 1000.0),
    r(0x112F0, 0x112F9, Decimal, 0.0),
    r(0x11450, 0x11459, Decimal, 0.0),
    r(0x114D0, 0x114D9, Decimal, 0.0),
    r(0x11650, 0x11659, Decimal, 0.0),
    r(0x116C0, 0x116C9, Decimal, 0.0),
    r(0x11730, 0x11739, Decimal, 0.0),
    r(0x1173A, 0x1173A, Numeric, 10.0),
    r(0x1173B, 0x1173B, Numeric, 20.0),
    r(0x118E0, 0x118E9, Decimal, 0.0),
    r(0x118EA, 0x118EA, Numeric, 10.0),
    r(0x118EB, 0x118EB, Numeric, 20.0),
    r(0x118EC, 0x118EC, Numeric, 30.0),
    r(0x118ED, 0x118ED, Numeric, 40.0),
    r(0x118EE, 0x118EE, Numeric, 50.0),
    r(0x118EF, 0x118EF, Numeric, 60.0),
    r(0x118F0, 0x118F0, Numeric, 70.0),
    r(0x118F1, 0x118F1, Numeric, 80.0),
    r(0x118F2, 0x118F2, Numeric, 90.0),
    r(0x11950, 0x11959, Decimal, 0.0),
    r(0x11C50, 0x11C59, Decimal, 0.0),
    r(0x11C5A, 0x11C63, Numeric, 1.0),
    r(0x11C64, 0x11C64, Numeric, 20.0),
    r(0x11C65, 0x11C65, Numeric, 30.0),
    r(0x11C66, 0x11C66, Numeric, 40.0),
    r(0x11C67, 0x11C67, Numeric, 50.0),
    r(0x11C68, 0x11C68, Numeric, 60.0),
    r(0x11C69, 0x11C69, Numeric, 70.0),
    r(0x11C6A, 0x11C6A, Numeric, 80.0),
    r(0x11C6B, 0x11C6B, Numeric, 90.0),
    r(0x11C6C, 0x11C6C, Numeric, 100.0),
    r(0x11D50, 0x11D59, Decimal, 0.0),
    r(0x11DA0, 0x11DA9, Decimal, 0.0),
    r(0x11FC0, 0x11FC0, Numeric, 0.003125),
    r(0x11FC1, 0x11FC1, Numeric, 0.00625),
    r(0x11FC2, 0x11FC2, Numeric, 0.0125),
    r(0x11FC3, 0x11FC3, Numeric, 0.015625),
    r(0x11FC4, 0x11FC4, Numeric, 0.025),
    r(0x11FC5, 0x11FC5, Numeric, 0.03125),
    r(0x11FC6, 0x11FC6, Numeric, 0.0375),
    r(0x11FC7, 0x11FC7, Numeric, 0.046875),
    r(0x11FC8, 0x11FC8, Numeric, 0.05),
    r(0x11FC9, 0x11FC9, Numeric, 0.0625),
    r(0x11FCA, 0x11FCA, Numeric, 0.0625),
    r(0x11FCB, 0x11FCB, Numeric, 0.1),
    r(0x11FCC, 0x11FCC, Numeric, 0.125),
    r(0x11FCD, 0x11FCD, Numeric, 0.15),
    r(0x11FCE, 0x11FCE, Numeric, 0.1875),
    r(0x11FCF, 0x11FCF, Numeric, 0.2),
    r(0x11FD0, 0x11FD0, Numeric, 0.25),
    r(0x11FD1, 0x11FD1, Numeric, 0.5),
    r(0x11FD2, 0x11FD2, Numeric, 0.5),
    r(0x11FD3, 0x11FD3, Numeric, 0.75),
    r(0x11FD4, 0x11FD4, Numeric, 0.003125),
    r(0x12400, 0x12407, Numeric, 2.0),
    r(0x12408, 0x1240E, Numeric, 3.0),
    r(0x1240F, 0x12414, Numeric, 4.0),
    r(0x12415, 0x1241D, Numeric, 1.0),
    r(0x1241E, 0x12422, Numeric, 1.0),
    r(0x12423, 0x12424, Numeric, 2.0),
    r(0x12425, 0x1242B, Numeric, 3.0),
    r(0x1242C, 0x1242E, Numeric, 1.0),
    r(0x1242F, 0x12431, Numeric, 3.0),
    r(0x12432, 0x12432, Numeric, 216000.0),
    r(0x12433, 0x12433, Numeric, 432000.0),
    r(0x12434, 0x12436, Numeric, 1.0),
    r(0x12437, 0x12439, Numeric, 3.0),
    r(0x1243A, 0x1243A, Numeric, 3.0),
    r(0x1243B, 0x1243C, Numeric, 3.0),
    r(0x1243D, 0x1243D, Numeric, 4.0),
    r(0x1243E, 0x1243E, Numeric, 4.0),
    r(0x1243F, 0x1243F, Numeric, 4.0),
    r(0x12440, 0x12441, Numeric, 6.0),
    r(0x12442, 0x12442, Numeric, 7.0),
    r(0x12443, 0x12444, Numeric, 7.0),
    r(0x12445, 0x12446, Numeric, 8.0),
    r(0x12447, 0x12447, Numeric, 9.0),
    r(0x12448, 0x12448, Numeric, 9.0),
    r(0x12449, 0x12449, Numeric, 9.0),
    r(0x1244A, 0x1244E, Numeric, 2.0),
    r(0x1244F, 0x12452, Numeric, 1.0),
    r(0x12453, 0x12454, Numeric, 4.0),
    r(0x12455, 0x12455, Numeric, 5.0),
    r(0x12456, 0x12457, Numeric, 2.0),
    r(0x12458, 0x12459, Numeric, 1.0),
    r(0x1245A, 0x1245A, Numeric, 0.3333333333333333),
    r(0x1245B, 0x1245B, Numeric, 0.6666666666666666),
    r(0x1245C, 0x1245C, Numeric, 0.8333333333333334),
    r(0x1245D, 0x1245D, Numeric, 0.3333333333333333),
    r(0x1245E, 0x1245E, Numeric, 0.6666666666666666),
    r(0x1245F, 0x1245F, Numeric, 0.125),
    r(0x12460, 0x12460, Numeric, 0.25),
    r(0x12461, 0x12461, Numeric, 0.16666666666666666),
    r(0x12462, 0x12462, Numeric, 0.25),
    r(0x12463, 0x12463, Numeric, 0.25),
    r(0x12464, 0x12464, Numeric, 0.5),
    r(0x12465, 0x12465, Numeric, 0.3333333333333333),
    r(0x12466, 0x12466, Numeric, 0.6666666666666666),
    r(0x12467, 0x12467, Numeric, 40.0),
    r(0x12468, 0x12468, Numeric, 50.0),
    r(0x12469, 0x1246E, Numeric, 4.0),
    r(0x16A60, 0x16A69, Decimal, 0.0),
    r(0x16AC0, 0x16AC9, Decimal, 0.0),
    r(0x16B50, 0x16B59, Decimal, 0.0),
    r(0x16B5B, 0x16B5B, Numeric, 10.0),
    r(0x16B5C, 0x16B5C, Numeric, 100.0),
    r(0x16B5D, 0x16B5D, Numeric, 10000.0),
    r(0x16B5E, 0x16B5E, Numeric, 1000000.0),
    r(0x16B5F, 0x16B5F, Numeric, 100000000.0),
    r(0x16B60, 0x16B60, Numeric, 10000000000.0),
    r(0x16B61, 0x16B61, Numeric, 1000000000000.0),
    r(0x16E80, 0x16E93, Numeric, 0.0),
    r(0x16E94, 0x16E96, Numeric, 1.0),
    r(0x1D2E0, 0x1D2F3, Numeric, 0.0),
    r(0x1D360, 0x1D369, Numeric, 1.0),
    r(0x1D36A, 0x1D36A, Numeric, 20.0),
    r(0x1D36B, 0x1D36B, Numeric, 30.0),
    r(0x1D36C, 0x1D36C, Numeric, 40.0),
    r(0x1D36D, 0x1D36D, Numeric, 50.0),
    r(0x1D36E, 0x1D36E, Numeric, 60.0),
    r(0x1D36F, 0x1D36F, Numeric, 70.0),
    r(0x1D370, 0x1D370, Numeric, 80.0),
    r(0x1D371, 0x1D371, Numeric, 90.0),
    r(0x1D372, 0x1D376, Numeric, 1.0),
    r(0x1D377, 0x1D377, Numeric, 1.0),
    r(0x1D378, 0x1D378, Numeric, 5.0),
    r(0x1D7CE, 0x1D7D7, Decimal, 0.0),
    r(0x1D7D8, 0x1D7E1, Decimal, 0.0),
    r(0x1D7E2, 0x1D7EB, Decimal, 0.0),
    r(0x1D7EC, 0x1D7F5, Decimal, 0.0),
    r(0x1D7F6, 0x1D7FF, Decimal, 0.0),
    r(0x1E140, 0x1E149, Decimal, 0.0),
    r(0x1E2F0, 0x1E2F9, Decimal, 0.0),
    r(0x1E8C7, 0x1E8CF, Numeric, 1.0),
    r(0x1E950, 0x1E959, Decimal, 0.0),
    r(0x1EC71, 0x1EC7A, Numeric, 1.0),
    r(0x1EC7B, 0x1EC7B, Numeric, 20.0),
    r(0x1EC7C, 0x1EC7C, Numeric, 30.0),
    r(0x1EC7D, 0x1EC7D, Numeric, 40.0),
    r(0x1EC7E, 0x1EC7E, Numeric, 50.0),
    r(0x1EC7F, 0x1EC7F, Numeric, 60.0),
    r(0x1EC80, 0x1EC80, Numeric, 70.0),
    r(0x1EC81, 0x1EC81, Numeric, 80.0),
    r(0x1EC82, 0x1EC82, Numeric, 90.0),
    r(0x1EC83, 0x1EC83, Numeric, 100.0),
    r(0x1EC84, 0x1EC84, Numeric, 200.0),
    r(0x1EC85, 0x1EC85, Numeric, 300.0),
    r(0x1EC86, 0x1EC86, Numeric, 400.0),
    r(0x1EC87, 0x1EC87, Numeric, 500.0),
    r(0x1EC88, 0x1EC88, Numeric, 600.0),
    r(0x1EC89, 0x1EC89, Numeric, 700.0),
    r(0x1EC8A, 0x1EC8A, Numeric, 800.0),
    r(0x1EC8B, 0x1EC8B, Numeric, 900.0),
    r(0x1EC8C, 0x1EC8C, Numeric, 1000.0),
    r(0x1EC8D, 0x1EC8D, Numeric, 2000.0),
    r(0x1EC8E, 0x1EC8E, Numeric, 3000.0),
    r(0x1EC8F, 0x1EC8F, Numeric, 4000.0),
    r(0x1EC90, 0x1EC90, Numeric, 5000.0),
    r(0x1EC91, 0x1EC91, Numeric, 6000.0),
    r(0x1EC92, 0x1EC92, Numeric, 7000.0),
    r(0x1EC93, 0x1EC93, Numeric, 8000.0),
    r(0x1EC94, 0x1EC94, Numeric, 9000.0),
    r(0x1EC95, 0x1EC95, Numeric, 10000.0),
    r(0x1EC96, 0x1EC96, Numeric, 20000.0),
    r(0x1EC97, 0x1EC97, Numeric, 30000.0),
    r(0x1EC98, 0x1EC98, Numeric, 40000.0),
    r(0x1EC99, 0x1EC99, Numeric, 50000.0),
    r(0x1EC9A, 0x1EC9A, Numeric, 60000.0),
    r(0x1EC9B, 0x1EC9B, Numeric, 70000.0),
    r(0x1EC9C, 0x1EC9C, Numeric, 80000.0),
    r(0x1EC9D, 0x1EC9D, Numeric, 90000.0),
    r(0x1EC9E, 0x1EC9E, Numeric, 100000.0),
    r(0x1EC9F, 0x1EC9F, Numeric, 200000.0),
    r(0x1ECA0, 0x1ECA0, Numeric, 100000.0),
    r(0x1ECA1, 0x1ECA1, Numeric, 10000000.0),
    r(0x1ECA2, 0x1ECA2, Numeric, 20000000.0),
    r(0x1ECA3, 0x1ECAB, Numeric, 1.0),
    r(0x1ECAD, 0x1ECAD, Numeric, 0.25),
    r(0x1ECAE, 0x1ECAE, Numeric, 0.5),
    r(0x1ECAF, 0x1ECAF, Numeric, 0.75),
    r(0x1ECB1, 0x1ECB2, Numeric, 1.0),
    r(0x1ECB3, 0x1ECB3, Numeric, 10000.0),
    r(0x1ECB4, 0x1ECB4, Numeric, 100000.0),
    r(0x1ED01, 0x1ED0A, Numeric, 1.0),
    r(0x1ED0B, 0x1ED0B, Numeric, 20.0),
    r(0x1ED0C, 0x1ED0C, Numeric, 30.0),
    r(0x1ED0D, 0x1ED0D, Numeric, 40.0),
    r(0x1ED0E, 0x1ED0E, Numeric, 50.0),
    r(0x1ED0F, 0x1ED0F, Numeric, 60.0),
    r(0x1ED10, 0x1ED10, Numeric, 70.0),
    r(0x1ED11, 0x1ED11, Numeric, 80.0),
    r(0x1ED12, 0x1ED12, Numeric, 90.0),
    r(0x1ED13, 0x1ED13, Numeric, 100.0),
    r(0x1ED14, 0x1ED14, Numeric, 200.0),
    r(0x1ED15, 0x1ED15, Numeric, 300.0),
    r(0x1ED16, 0x1ED16, Numeric, 400.0),
    r(0x1ED17, 0x1ED17, Numeric, 500.0),
    r(0x1ED18, 0x1ED18, Numeric, 600.0),
    r(0x1ED19, 0x1ED19, Numeric, 700.0),
    r(0x1ED1A, 0x1ED1A, Numeric, 800.0),
    r(0x1ED1B, 0x1ED1B, Numeric, 900.0),
    r(0x1ED1C, 0x1ED1C, Numeric, 1000.0),
    r(0x1ED1D, 0x1ED1D, Numeric, 2000.0),
    r(0x1ED1E, 0x1ED1E, Numeric, 3000.0),
    r(0x1ED1F, 0x1ED1F, Numeric, 4000.0),
    r(0x1ED20, 0x1ED20, Numeric, 5000.0),
    r(0x1ED21, 0x1ED21, Numeric, 6000.0),
    r(0x1ED22, 0x1ED22, Numeric, 7000.0),
    r(0x1ED23, 0x1ED23, Numeric, 8000.0),
    r(0x1ED24, 0x1ED24, Numeric, 9000.0),
    r(0x1ED25, 0x1ED25, Numeric, 10000.0),
    r(0x1ED26, 0x1ED26, Numeric, 20000.0),
    r(0x1ED27, 0x1ED27, Numeric, 30000.0),
    r(0x1ED28, 0x1ED28, Numeric, 40000.0),
    r(0x1ED29, 0x1ED29, Numeric, 50000.0),
    r(0x1ED2A, 0x1ED2A, Numeric, 60000.0),
    r(0x1ED2B, 0x1ED2B, Numeric, 70000.0),
    r(0x1ED2C, 0x1ED2C, Numeric, 80000.0),
    r(0x1ED2D, 0x1ED2D, Numeric, 90000.0),
    r(0x1ED2F, 0x1ED37, Numeric, 2.0),
    r(0x1ED38, 0x1ED38, Numeric, 400.0),
    r(0x1ED39, 0x1ED39, Numeric, 600.0),
    r(0x1ED3A, 0x1ED3A, Numeric, 2000.0),
    r(0x1ED3B, 0x1ED3B, Numeric, 10000.0),
    r(0x1ED3C, 0x1ED3C, Numeric, 0.5),
    r(0x1ED3D, 0x1ED3D, Numeric, 0.16666666666666666),
    r(0x1F100, 0x1F100, Digit, 0.0),
    r(0x1F101, 0x1F10A, Digit, 0.0),
    r(0x1F10B, 0x1F10B, Numeric, 0.0),
    r(0x1F10C, 0x1F10C, Numeric, 0.0),
    r(0x1FBF0, 0x1FBF9, Decimal, 0.0),
    r(0x20001, 0x20001, Numeric, 7.0),
    r(0x20064, 0x20064, Numeric, 4.0),
    r(0x200E2, 0x200E2, Numeric, 4.0),
    r(0x20121, 0x20121, Numeric, 5.0),
    r(0x2092A, 0x2092A, Numeric, 1.0),
    r(0x20983, 0x20983, Numeric, 30.0),
    r(0x2098C, 0x2098C, Numeric, 40.0),
    r(0x2099C, 0x2099C, Numeric, 40.0),
    r(0x20AEA, 0x20AEA, Numeric, 6.0),
    r(0x20AFD, 0x20AFD, Numeric, 3.0),
    r(0x20B19, 0x20B19, Numeric, 3.0),
    r(0x22390, 0x22390, Numeric, 2.0),
    r(0x22998, 0x22998, Numeric, 3.0),
    r(0x23B1B, 0x23B1B, Numeric, 3.0),
    r(0x2626D, 0x2626D, Numeric, 4.0),
    r(0x2F890, 0x2F890, Numeric, 9.0),
];
