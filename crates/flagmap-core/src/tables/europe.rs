// crates/flagmap-core/src/tables/europe.rs
use super::NameTable;
use once_cell::sync::Lazy;

pub(super) static DE: Lazy<NameTable> = Lazy::new(|| NameTable::new("DE", DE_STATES, &[]));
pub(super) static GB: Lazy<NameTable> = Lazy::new(|| NameTable::new("GB", GB_COUNTRIES, &[]));
pub(super) static CH: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("CH", CH_CANTONS, FRENCH_FOLDS));
pub(super) static NL: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("NL", NL_PROVINCES, &[('â', "a")]));
pub(super) static BE: Lazy<NameTable> = Lazy::new(|| NameTable::new("BE", BE_REGIONS, &[]));
pub(super) static PL: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("PL", PL_VOIVODESHIPS, POLISH_FOLDS));
pub(super) static FR: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("FR", FR_REGIONS, FRENCH_FOLDS));
pub(super) static ES: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("ES", ES_COMMUNITIES, SPANISH_FOLDS));

const FRENCH_FOLDS: &[(char, &str)] = &[
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('â', "a"),
    ('à', "a"),
    ('î', "i"),
    ('ï', "i"),
    ('ô', "o"),
    ('û', "u"),
    ('ç', "c"),
];

const POLISH_FOLDS: &[(char, &str)] = &[
    ('ł', "l"),
    ('ś', "s"),
    ('ą', "a"),
    ('ę', "e"),
    ('ó', "o"),
    ('ż', "z"),
    ('ź', "z"),
    ('ć', "c"),
    ('ń', "n"),
];

const SPANISH_FOLDS: &[(char, &str)] = &[
    ('á', "a"),
    ('é', "e"),
    ('í', "i"),
    ('ó', "o"),
    ('ú', "u"),
    ('ñ', "n"),
];

const DE_STATES: &[(&str, &str)] = &[
    ("baden-württemberg", "BW"),
    ("baden-wuerttemberg", "BW"),
    ("baden württemberg", "BW"),
    ("bw", "BW"),
    ("bayern", "BY"),
    ("bavaria", "BY"),
    ("freistaat bayern", "BY"),
    ("by", "BY"),
    ("berlin", "BE"),
    ("be", "BE"),
    ("brandenburg", "BB"),
    ("bb", "BB"),
    ("bremen", "HB"),
    ("freie hansestadt bremen", "HB"),
    ("hb", "HB"),
    ("hamburg", "HH"),
    ("freie und hansestadt hamburg", "HH"),
    ("hh", "HH"),
    ("hessen", "HE"),
    ("hesse", "HE"),
    ("he", "HE"),
    ("mecklenburg-vorpommern", "MV"),
    ("mecklenburg vorpommern", "MV"),
    ("mecklenburg-western pomerania", "MV"),
    ("mv", "MV"),
    ("niedersachsen", "NI"),
    ("lower saxony", "NI"),
    ("ni", "NI"),
    ("nordrhein-westfalen", "NW"),
    ("north rhine-westphalia", "NW"),
    ("nordrhein westfalen", "NW"),
    ("nrw", "NW"),
    ("nw", "NW"),
    ("rheinland-pfalz", "RP"),
    ("rhineland-palatinate", "RP"),
    ("rheinland pfalz", "RP"),
    ("rp", "RP"),
    ("saarland", "SL"),
    ("sl", "SL"),
    ("sachsen", "SN"),
    ("saxony", "SN"),
    ("freistaat sachsen", "SN"),
    ("sn", "SN"),
    ("sachsen-anhalt", "ST"),
    ("saxony-anhalt", "ST"),
    ("sachsen anhalt", "ST"),
    ("st", "ST"),
    ("schleswig-holstein", "SH"),
    ("schleswig holstein", "SH"),
    ("sh", "SH"),
    ("thüringen", "TH"),
    ("thuringia", "TH"),
    ("thueringen", "TH"),
    ("freistaat thüringen", "TH"),
    ("th", "TH"),
];

const GB_COUNTRIES: &[(&str, &str)] = &[
    ("england", "ENG"),
    ("scotland", "SCT"),
    ("wales", "WLS"),
    ("northern ireland", "NIR"),
    ("cymru", "WLS"),
    ("alba", "SCT"),
];

const CH_CANTONS: &[(&str, &str)] = &[
    ("zürich", "ZH"),
    ("zurich", "ZH"),
    ("zh", "ZH"),
    ("bern", "BE"),
    ("berne", "BE"),
    ("be", "BE"),
    ("luzern", "LU"),
    ("lucerne", "LU"),
    ("lu", "LU"),
    ("uri", "UR"),
    ("ur", "UR"),
    ("schwyz", "SZ"),
    ("sz", "SZ"),
    ("obwalden", "OW"),
    ("ow", "OW"),
    ("nidwalden", "NW"),
    ("nw", "NW"),
    ("glarus", "GL"),
    ("gl", "GL"),
    ("zug", "ZG"),
    ("zg", "ZG"),
    ("fribourg", "FR"),
    ("freiburg", "FR"),
    ("fr", "FR"),
    ("solothurn", "SO"),
    ("so", "SO"),
    ("basel-stadt", "BS"),
    ("basel stadt", "BS"),
    ("bs", "BS"),
    ("basel-landschaft", "BL"),
    ("basel landschaft", "BL"),
    ("bl", "BL"),
    ("schaffhausen", "SH"),
    ("sh", "SH"),
    ("appenzell ausserrhoden", "AR"),
    ("ar", "AR"),
    ("appenzell innerrhoden", "AI"),
    ("ai", "AI"),
    ("st. gallen", "SG"),
    ("st gallen", "SG"),
    ("sankt gallen", "SG"),
    ("sg", "SG"),
    ("graubünden", "GR"),
    ("graubuenden", "GR"),
    ("grisons", "GR"),
    ("gr", "GR"),
    ("aargau", "AG"),
    ("ag", "AG"),
    ("thurgau", "TG"),
    ("tg", "TG"),
    ("ticino", "TI"),
    ("tessin", "TI"),
    ("ti", "TI"),
    ("vaud", "VD"),
    ("waadt", "VD"),
    ("vd", "VD"),
    ("valais", "VS"),
    ("wallis", "VS"),
    ("vs", "VS"),
    ("neuchâtel", "NE"),
    ("neuchatel", "NE"),
    ("neuenburg", "NE"),
    ("ne", "NE"),
    ("genève", "GE"),
    ("geneve", "GE"),
    ("geneva", "GE"),
    ("genf", "GE"),
    ("ge", "GE"),
    ("jura", "JU"),
    ("ju", "JU"),
];

const NL_PROVINCES: &[(&str, &str)] = &[
    ("drenthe", "DR"),
    ("dr", "DR"),
    ("flevoland", "FL"),
    ("fl", "FL"),
    ("friesland", "FR"),
    ("fryslân", "FR"),
    ("fryslan", "FR"),
    ("fr", "FR"),
    ("gelderland", "GE"),
    ("ge", "GE"),
    ("groningen", "GR"),
    ("gr", "GR"),
    ("limburg", "LI"),
    ("li", "LI"),
    ("noord-brabant", "NB"),
    ("north brabant", "NB"),
    ("noord brabant", "NB"),
    ("nb", "NB"),
    ("noord-holland", "NH"),
    ("north holland", "NH"),
    ("noord holland", "NH"),
    ("nh", "NH"),
    ("overijssel", "OV"),
    ("ov", "OV"),
    ("zuid-holland", "ZH"),
    ("south holland", "ZH"),
    ("zuid holland", "ZH"),
    ("zh", "ZH"),
    ("utrecht", "UT"),
    ("ut", "UT"),
    ("zeeland", "ZE"),
    ("ze", "ZE"),
];

const BE_REGIONS: &[(&str, &str)] = &[
    ("flanders", "VLG"),
    ("vlaanderen", "VLG"),
    ("flemish", "VLG"),
    ("flemish region", "VLG"),
    ("wallonia", "WAL"),
    ("wallonie", "WAL"),
    ("walloon", "WAL"),
    ("walloon region", "WAL"),
    ("brussels", "BRU"),
    ("bruxelles", "BRU"),
    ("brussel", "BRU"),
    ("brussels-capital", "BRU"),
];

const PL_VOIVODESHIPS: &[(&str, &str)] = &[
    ("dolnośląskie", "DS"),
    ("lower silesian", "DS"),
    ("lower silesia", "DS"),
    ("dolnoslaskie", "DS"),
    ("kujawsko-pomorskie", "KP"),
    ("kuyavian-pomeranian", "KP"),
    ("kujawsko pomorskie", "KP"),
    ("lubelskie", "LU"),
    ("lublin", "LU"),
    ("lubuskie", "LB"),
    ("lubusz", "LB"),
    ("łódzkie", "LD"),
    ("lodzkie", "LD"),
    ("łódź", "LD"),
    ("lodz", "LD"),
    ("małopolskie", "MA"),
    ("lesser poland", "MA"),
    ("malopolskie", "MA"),
    ("mazowieckie", "MZ"),
    ("masovian", "MZ"),
    ("masovia", "MZ"),
    ("opolskie", "OP"),
    ("opole", "OP"),
    ("podkarpackie", "PK"),
    ("subcarpathian", "PK"),
    ("subcarpathia", "PK"),
    ("podlaskie", "PD"),
    ("podlasie", "PD"),
    ("pomorskie", "PM"),
    ("pomeranian", "PM"),
    ("pomerania", "PM"),
    ("śląskie", "SL"),
    ("silesian", "SL"),
    ("silesia", "SL"),
    ("slaskie", "SL"),
    ("świętokrzyskie", "SK"),
    ("holy cross", "SK"),
    ("swietokrzyskie", "SK"),
    ("warmińsko-mazurskie", "WN"),
    ("warmian-masurian", "WN"),
    ("warminsko-mazurskie", "WN"),
    ("wielkopolskie", "WP"),
    ("greater poland", "WP"),
    ("zachodniopomorskie", "ZP"),
    ("west pomeranian", "ZP"),
    ("west pomerania", "ZP"),
];

// Post-2016 regions. Pre-2016 region names fold into their successor.
const FR_REGIONS: &[(&str, &str)] = &[
    ("île-de-france", "IDF"),
    ("ile-de-france", "IDF"),
    ("ile de france", "IDF"),
    ("bretagne", "BRE"),
    ("brittany", "BRE"),
    ("basse-normandie", "NOR"),
    ("haute-normandie", "NOR"),
    ("normandie", "NOR"),
    ("normandy", "NOR"),
    ("hauts-de-france", "HDF"),
    ("hauts de france", "HDF"),
    ("nord-pas-de-calais-picardie", "HDF"),
    ("grand est", "GES"),
    ("alsace-champagne-ardenne-lorraine", "GES"),
    ("centre-val de loire", "CVL"),
    ("centre-val de loire", "CVL"),
    ("centre", "CVL"),
    ("pays de la loire", "PDL"),
    ("bourgogne-franche-comté", "BFC"),
    ("bourgogne-franche-comte", "BFC"),
    ("languedoc-roussillon", "OCC"),
    ("midi-pyrénées", "OCC"),
    ("midi-pyrenees", "OCC"),
    ("occitanie", "OCC"),
    ("aquitaine", "NAQ"),
    ("limousin", "NAQ"),
    ("poitou-charentes", "NAQ"),
    ("nouvelle-aquitaine", "NAQ"),
    ("auvergne", "ARA"),
    ("rhône-alpes", "ARA"),
    ("rhone-alpes", "ARA"),
    ("auvergne-rhône-alpes", "ARA"),
    ("provence-alpes-côte d'azur", "PAC"),
    ("provence-alpes-cote d'azur", "PAC"),
    ("paca", "PAC"),
    ("corse", "COR"),
    ("corsica", "COR"),
];

// INSEE "code région" (COG 2016 onwards).
pub(super) const FR_INSEE: &[(&str, &str)] = &[
    ("11", "IDF"),
    ("24", "CVL"),
    ("27", "BFC"),
    ("28", "NOR"),
    ("32", "HDF"),
    ("44", "GES"),
    ("52", "PDL"),
    ("53", "BRE"),
    ("75", "NAQ"),
    ("76", "OCC"),
    ("84", "ARA"),
    ("93", "PAC"),
    ("94", "COR"),
];

// ISO 3166-2:ES autonomous communities and cities.
const ES_COMMUNITIES: &[(&str, &str)] = &[
    ("andalucía", "AN"),
    ("andalucia", "AN"),
    ("andalusia", "AN"),
    ("aragón", "AR"),
    ("aragon", "AR"),
    ("principado de asturias", "AS"),
    ("asturias", "AS"),
    ("illes balears", "IB"),
    ("islas baleares", "IB"),
    ("balearic islands", "IB"),
    ("baleares", "IB"),
    ("canarias", "CN"),
    ("islas canarias", "CN"),
    ("canary islands", "CN"),
    ("cantabria", "CB"),
    ("castilla y león", "CL"),
    ("castilla y leon", "CL"),
    ("castile and león", "CL"),
    ("castile and leon", "CL"),
    ("castilla-la mancha", "CM"),
    ("castilla la mancha", "CM"),
    ("castile-la mancha", "CM"),
    ("cataluña", "CT"),
    ("cataluna", "CT"),
    ("catalunya", "CT"),
    ("catalonia", "CT"),
    ("extremadura", "EX"),
    ("galicia", "GA"),
    ("comunidad de madrid", "MD"),
    ("madrid", "MD"),
    ("región de murcia", "MC"),
    ("region de murcia", "MC"),
    ("murcia", "MC"),
    ("comunidad foral de navarra", "NC"),
    ("navarra", "NC"),
    ("nafarroa", "NC"),
    ("navarre", "NC"),
    ("país vasco", "PV"),
    ("pais vasco", "PV"),
    ("euskadi", "PV"),
    ("basque country", "PV"),
    ("la rioja", "RI"),
    ("rioja", "RI"),
    ("comunitat valenciana", "VC"),
    ("comunidad valenciana", "VC"),
    ("valencian community", "VC"),
    ("valencia", "VC"),
    ("ceuta", "CE"),
    ("melilla", "ML"),
];

// INE "código de comunidad autónoma".
pub(super) const ES_INE: &[(&str, &str)] = &[
    ("01", "AN"),
    ("02", "AR"),
    ("03", "AS"),
    ("04", "IB"),
    ("05", "CN"),
    ("06", "CB"),
    ("07", "CL"),
    ("08", "CM"),
    ("09", "CT"),
    ("10", "VC"),
    ("11", "EX"),
    ("12", "GA"),
    ("13", "MD"),
    ("14", "MC"),
    ("15", "NC"),
    ("16", "PV"),
    ("17", "RI"),
    ("18", "CE"),
    ("19", "ML"),
];
