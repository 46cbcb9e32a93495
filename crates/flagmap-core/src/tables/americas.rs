// crates/flagmap-core/src/tables/americas.rs
use super::NameTable;
use once_cell::sync::Lazy;

pub(super) static US: Lazy<NameTable> = Lazy::new(|| NameTable::new("US", US_STATES, &[]));
pub(super) static CA: Lazy<NameTable> = Lazy::new(|| NameTable::new("CA", CA_PROVINCES, &[]));
pub(super) static BR: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("BR", BR_STATES, IBERIAN_FOLDS));
pub(super) static BO: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("BO", BO_DEPARTMENTS, IBERIAN_FOLDS));
pub(super) static CR: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("CR", CR_PROVINCES, IBERIAN_FOLDS));

const IBERIAN_FOLDS: &[(char, &str)] = &[
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('é', "e"),
    ('ê', "e"),
    ('í', "i"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ú', "u"),
    ('ç', "c"),
    ('ñ', "n"),
];

const US_STATES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
    ("puerto rico", "PR"),
];

const CA_PROVINCES: &[(&str, &str)] = &[
    ("alberta", "AB"),
    ("british columbia", "BC"),
    ("manitoba", "MB"),
    ("new brunswick", "NB"),
    ("newfoundland and labrador", "NL"),
    ("nova scotia", "NS"),
    ("ontario", "ON"),
    ("prince edward island", "PE"),
    ("quebec", "QC"),
    ("québec", "QC"),
    ("saskatchewan", "SK"),
    ("northwest territories", "NT"),
    ("nunavut", "NU"),
    ("yukon", "YT"),
    ("yukon territory", "YT"),
];

const BR_STATES: &[(&str, &str)] = &[
    ("acre", "AC"),
    ("alagoas", "AL"),
    ("amapá", "AP"),
    ("amapa", "AP"),
    ("amazonas", "AM"),
    ("bahia", "BA"),
    ("ceará", "CE"),
    ("ceara", "CE"),
    ("distrito federal", "DF"),
    ("federal district", "DF"),
    ("espírito santo", "ES"),
    ("espirito santo", "ES"),
    ("goiás", "GO"),
    ("goias", "GO"),
    ("maranhão", "MA"),
    ("maranhao", "MA"),
    ("mato grosso", "MT"),
    ("mato grosso do sul", "MS"),
    ("minas gerais", "MG"),
    ("pará", "PA"),
    ("para", "PA"),
    ("paraíba", "PB"),
    ("paraiba", "PB"),
    ("paraná", "PR"),
    ("parana", "PR"),
    ("pernambuco", "PE"),
    ("piauí", "PI"),
    ("piaui", "PI"),
    ("rio de janeiro", "RJ"),
    ("rio grande do norte", "RN"),
    ("rio grande do sul", "RS"),
    ("rondônia", "RO"),
    ("rondonia", "RO"),
    ("roraima", "RR"),
    ("santa catarina", "SC"),
    ("são paulo", "SP"),
    ("sao paulo", "SP"),
    ("sergipe", "SE"),
    ("tocantins", "TO"),
];

const BO_DEPARTMENTS: &[(&str, &str)] = &[
    ("beni", "BEN"),
    ("el beni", "BEN"),
    ("chuquisaca", "CHU"),
    ("cochabamba", "CBA"),
    ("la paz", "LPZ"),
    ("oruro", "ORU"),
    ("pando", "PAN"),
    ("potosí", "POT"),
    ("potosi", "POT"),
    ("santa cruz", "SCZ"),
    ("tarija", "TAR"),
];

// ISO 3166-2:CR subdivision suffixes.
const CR_PROVINCES: &[(&str, &str)] = &[
    ("alajuela", "A"),
    ("provincia alajuela", "A"),
    ("cartago", "C"),
    ("provincia cartago", "C"),
    ("guanacaste", "G"),
    ("provincia guanacaste", "G"),
    ("heredia", "H"),
    ("provincia heredia", "H"),
    ("limón", "L"),
    ("limon", "L"),
    ("provincia limón", "L"),
    ("provincia limon", "L"),
    ("puntarenas", "P"),
    ("provincia puntarenas", "P"),
    ("san josé", "SJ"),
    ("san jose", "SJ"),
    ("provincia san josé", "SJ"),
    ("provincia san jose", "SJ"),
];
