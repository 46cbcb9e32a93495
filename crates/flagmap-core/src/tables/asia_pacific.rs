// crates/flagmap-core/src/tables/asia_pacific.rs
use super::NameTable;
use once_cell::sync::Lazy;

pub(super) static AU: Lazy<NameTable> = Lazy::new(|| NameTable::new("AU", AU_STATES, &[]));
pub(super) static LK: Lazy<NameTable> = Lazy::new(|| NameTable::new("LK", LK_PROVINCES, &[]));
pub(super) static JP: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("JP", JP_PREFECTURES, MACRON_FOLDS));
pub(super) static KR: Lazy<NameTable> = Lazy::new(|| NameTable::new("KR", KR_PROVINCES, &[]));

// Hepburn long vowels: `tōkyō` -> `tokyo`.
const MACRON_FOLDS: &[(char, &str)] = &[('ō', "o"), ('ū', "u"), ('ā', "a"), ('ē', "e"), ('ī', "i")];

const AU_STATES: &[(&str, &str)] = &[
    ("new south wales", "NSW"),
    ("victoria", "VIC"),
    ("queensland", "QLD"),
    ("south australia", "SA"),
    ("western australia", "WA"),
    ("tasmania", "TAS"),
    ("northern territory", "NT"),
    ("australian capital territory", "ACT"),
    ("jervis bay territory", "ACT"),
];

const LK_PROVINCES: &[(&str, &str)] = &[
    ("western", "WP"),
    ("western province", "WP"),
    ("basnahira palata", "WP"),
    ("basnahira", "WP"),
    ("central", "CP"),
    ("central province", "CP"),
    ("madhyama palata", "CP"),
    ("madhyama", "CP"),
    ("southern", "SP"),
    ("southern province", "SP"),
    ("dakunu palata", "SP"),
    ("dakunu", "SP"),
    ("north western", "NW"),
    ("north western province", "NW"),
    ("northwestern", "NW"),
    ("north-western", "NW"),
    ("wayamba palata", "NW"),
    ("wayamba", "NW"),
    ("northern", "NP"),
    ("northern province", "NP"),
    ("uthuru palata", "NP"),
    ("uthuru", "NP"),
    ("eastern", "EP"),
    ("eastern province", "EP"),
    ("negenahira palata", "EP"),
    ("negenahira", "EP"),
    ("north central", "NC"),
    ("north central province", "NC"),
    ("northcentral", "NC"),
    ("north-central", "NC"),
    ("uturumeda palata", "NC"),
    ("uturumeda", "NC"),
    ("uva", "UV"),
    ("uva province", "UV"),
    ("uva palata", "UV"),
    ("sabaragamuwa", "SG"),
    ("sabaragamuwa province", "SG"),
    ("sabaragamuwa palata", "SG"),
];

// JIS X 0401 prefecture numbers, zero-padded.
const JP_PREFECTURES: &[(&str, &str)] = &[
    ("hokkaido", "01"),
    ("hokkai do", "01"),
    ("aomori", "02"),
    ("aomori ken", "02"),
    ("iwate", "03"),
    ("iwate ken", "03"),
    ("miyagi", "04"),
    ("miyagi ken", "04"),
    ("akita", "05"),
    ("akita ken", "05"),
    ("yamagata", "06"),
    ("yamagata ken", "06"),
    ("fukushima", "07"),
    ("fukushima ken", "07"),
    ("ibaraki", "08"),
    ("ibaraki ken", "08"),
    ("tochigi", "09"),
    ("tochigi ken", "09"),
    ("gunma", "10"),
    ("gunma ken", "10"),
    ("gumma", "10"),
    ("saitama", "11"),
    ("saitama ken", "11"),
    ("chiba", "12"),
    ("chiba ken", "12"),
    ("tokyo", "13"),
    ("tokyo to", "13"),
    ("tōkyō", "13"),
    ("kanagawa", "14"),
    ("kanagawa ken", "14"),
    ("niigata", "15"),
    ("niigata ken", "15"),
    ("toyama", "16"),
    ("toyama ken", "16"),
    ("ishikawa", "17"),
    ("ishikawa ken", "17"),
    ("fukui", "18"),
    ("fukui ken", "18"),
    ("yamanashi", "19"),
    ("yamanashi ken", "19"),
    ("nagano", "20"),
    ("nagano ken", "20"),
    ("gifu", "21"),
    ("gifu ken", "21"),
    ("shizuoka", "22"),
    ("shizuoka ken", "22"),
    ("aichi", "23"),
    ("aichi ken", "23"),
    ("mie", "24"),
    ("mie ken", "24"),
    ("shiga", "25"),
    ("shiga ken", "25"),
    ("kyoto", "26"),
    ("kyoto fu", "26"),
    ("kyōto", "26"),
    ("osaka", "27"),
    ("osaka fu", "27"),
    ("ōsaka", "27"),
    ("hyogo", "28"),
    ("hyogo ken", "28"),
    ("hyōgo", "28"),
    ("nara", "29"),
    ("nara ken", "29"),
    ("wakayama", "30"),
    ("wakayama ken", "30"),
    ("tottori", "31"),
    ("tottori ken", "31"),
    ("shimane", "32"),
    ("shimane ken", "32"),
    ("okayama", "33"),
    ("okayama ken", "33"),
    ("hiroshima", "34"),
    ("hiroshima ken", "34"),
    ("yamaguchi", "35"),
    ("yamaguchi ken", "35"),
    ("tokushima", "36"),
    ("tokushima ken", "36"),
    ("kagawa", "37"),
    ("kagawa ken", "37"),
    ("ehime", "38"),
    ("ehime ken", "38"),
    ("kochi", "39"),
    ("kochi ken", "39"),
    ("kōchi", "39"),
    ("fukuoka", "40"),
    ("fukuoka ken", "40"),
    ("saga", "41"),
    ("saga ken", "41"),
    ("nagasaki", "42"),
    ("nagasaki ken", "42"),
    ("kumamoto", "43"),
    ("kumamoto ken", "43"),
    ("oita", "44"),
    ("oita ken", "44"),
    ("ōita", "44"),
    ("miyazaki", "45"),
    ("miyazaki ken", "45"),
    ("kagoshima", "46"),
    ("kagoshima ken", "46"),
    ("okinawa", "47"),
    ("okinawa ken", "47"),
];

// Codes are the reference-data keys, which for Korea are romanized names.
const KR_PROVINCES: &[(&str, &str)] = &[
    ("seoul", "Seoul"),
    ("seoul-teukbyeolsi", "Seoul"),
    ("seoul teukbyeolsi", "Seoul"),
    ("sejong", "Sejong"),
    ("sejong-si", "Sejong"),
    ("sejong si", "Sejong"),
    ("busan", "Busan"),
    ("busan-gwangyeoksi", "Busan"),
    ("pusan", "Busan"),
    ("daegu", "Daegu"),
    ("daegu-gwangyeoksi", "Daegu"),
    ("taegu", "Daegu"),
    ("incheon", "Incheon"),
    ("incheon-gwangyeoksi", "Incheon"),
    ("inchon", "Incheon"),
    ("gwangju", "Gwangju"),
    ("gwangju-gwangyeoksi", "Gwangju"),
    ("kwangju", "Gwangju"),
    ("daejeon", "Daejeon"),
    ("daejeon-gwangyeoksi", "Daejeon"),
    ("taejon", "Daejeon"),
    ("ulsan", "Ulsan"),
    ("ulsan-gwangyeoksi", "Ulsan"),
    ("gyeonggi", "Gyeonggi-do"),
    ("gyeonggi-do", "Gyeonggi-do"),
    ("gyeonggi do", "Gyeonggi-do"),
    ("kyonggi-do", "Gyeonggi-do"),
    ("gangwon", "Gangwon-do"),
    ("gangwon-do", "Gangwon-do"),
    ("gangwon do", "Gangwon-do"),
    ("kangwon-do", "Gangwon-do"),
    ("chungcheongbuk", "Chungcheongbuk-do"),
    ("chungcheongbuk-do", "Chungcheongbuk-do"),
    ("north chungcheong", "Chungcheongbuk-do"),
    ("chungbuk", "Chungcheongbuk-do"),
    ("chungbuk-do", "Chungcheongbuk-do"),
    ("chungcheongnam", "Chungcheongnam-do"),
    ("chungcheongnam-do", "Chungcheongnam-do"),
    ("south chungcheong", "Chungcheongnam-do"),
    ("chungnam", "Chungcheongnam-do"),
    ("chungnam-do", "Chungcheongnam-do"),
    ("jeollabuk", "Jeollabuk-do"),
    ("jeollabuk-do", "Jeollabuk-do"),
    ("north jeolla", "Jeollabuk-do"),
    ("jeonbuk", "Jeollabuk-do"),
    ("jeonbuk-do", "Jeollabuk-do"),
    ("jeollanam", "Jeollanam-do"),
    ("jeollanam-do", "Jeollanam-do"),
    ("south jeolla", "Jeollanam-do"),
    ("jeonnam", "Jeollanam-do"),
    ("jeonnam-do", "Jeollanam-do"),
    ("gyeongsangbuk", "Gyeongsangbuk-do"),
    ("gyeongsangbuk-do", "Gyeongsangbuk-do"),
    ("north gyeongsang", "Gyeongsangbuk-do"),
    ("gyeongbuk", "Gyeongsangbuk-do"),
    ("gyeongbuk-do", "Gyeongsangbuk-do"),
    ("gyeongsangnam", "Gyeongsangnam-do"),
    ("gyeongsangnam-do", "Gyeongsangnam-do"),
    ("south gyeongsang", "Gyeongsangnam-do"),
    ("gyeongnam", "Gyeongsangnam-do"),
    ("gyeongnam-do", "Gyeongsangnam-do"),
    ("jeju", "Jeju-do"),
    ("jeju-do", "Jeju-do"),
    ("jeju do", "Jeju-do"),
    ("cheju", "Jeju-do"),
    ("cheju-do", "Jeju-do"),
];
