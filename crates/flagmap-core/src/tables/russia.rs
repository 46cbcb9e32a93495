// crates/flagmap-core/src/tables/russia.rs
use super::NameTable;
use once_cell::sync::Lazy;

// Cyrillic labels are kept as is; only `ё` folds.
pub(super) static RU: Lazy<NameTable> =
    Lazy::new(|| NameTable::new("RU", RU_SUBJECTS, &[('ё', "е")]));

/// Federal subjects, Cyrillic and English spellings.
const RU_SUBJECTS: &[(&str, &str)] = &[
    // Republics
    ("адыгея", "AD"),
    ("республика адыгея", "AD"),
    ("adygea", "AD"),
    ("republic of adygea", "AD"),
    ("алтай", "AL"),
    ("республика алтай", "AL"),
    ("altai republic", "AL"),
    ("altai", "AL"),
    ("башкортостан", "BA"),
    ("республика башкортостан", "BA"),
    ("bashkortostan", "BA"),
    ("бурятия", "BU"),
    ("республика бурятия", "BU"),
    ("buryatia", "BU"),
    ("чечня", "CE"),
    ("чеченская республика", "CE"),
    ("chechnya", "CE"),
    ("chechen republic", "CE"),
    ("чувашия", "CU"),
    ("чувашская республика", "CU"),
    ("chuvashia", "CU"),
    ("chuvash republic", "CU"),
    ("дагестан", "DA"),
    ("республика дагестан", "DA"),
    ("dagestan", "DA"),
    ("ингушетия", "IN"),
    ("республика ингушетия", "IN"),
    ("ingushetia", "IN"),
    ("кабардино-балкария", "KB"),
    ("кабардино-балкарская республика", "KB"),
    ("kabardino-balkaria", "KB"),
    ("калмыкия", "KL"),
    ("республика калмыкия", "KL"),
    ("kalmykia", "KL"),
    ("карачаево-черкесия", "KC"),
    ("карачаево-черкесская республика", "KC"),
    ("karachay-cherkessia", "KC"),
    ("карелия", "KR"),
    ("республика карелия", "KR"),
    ("karelia", "KR"),
    ("коми", "KO"),
    ("республика коми", "KO"),
    ("komi", "KO"),
    ("марий эл", "ME"),
    ("республика марий эл", "ME"),
    ("mari el", "ME"),
    ("мордовия", "MO"),
    ("республика мордовия", "MO"),
    ("mordovia", "MO"),
    ("саха", "SA"),
    ("республика саха", "SA"),
    ("якутия", "SA"),
    ("саха (якутия)", "SA"),
    ("sakha", "SA"),
    ("yakutia", "SA"),
    ("северная осетия", "SE"),
    ("республика северная осетия-алания", "SE"),
    ("северная осетия-алания", "SE"),
    ("north ossetia", "SE"),
    ("north ossetia-alania", "SE"),
    ("татарстан", "TA"),
    ("республика татарстан", "TA"),
    ("tatarstan", "TA"),
    ("тыва", "TY"),
    ("республика тыва", "TY"),
    ("тува", "TY"),
    ("tuva", "TY"),
    ("tyva", "TY"),
    ("удмуртия", "UD"),
    ("удмуртская республика", "UD"),
    ("udmurtia", "UD"),
    ("хакасия", "KK"),
    ("республика хакасия", "KK"),
    ("khakassia", "KK"),
    ("крым", "CR"),
    ("республика крым", "CR"),
    ("crimea", "CR"),
    ("донецкая", "DNR"),
    ("донецкая народная республика", "DNR"),
    ("donetsk", "DNR"),
    ("луганская", "LNR"),
    ("луганская народная республика", "LNR"),
    ("luhansk", "LNR"),
    ("lugansk", "LNR"),
    // Krais
    ("алтайский край", "ALT"),
    ("altai krai", "ALT"),
    ("камчатский край", "KAM"),
    ("kamchatka krai", "KAM"),
    ("kamchatka", "KAM"),
    ("хабаровский край", "KHA"),
    ("khabarovsk krai", "KHA"),
    ("khabarovsk", "KHA"),
    ("краснодарский край", "KDA"),
    ("krasnodar krai", "KDA"),
    ("krasnodar", "KDA"),
    ("красноярский край", "KYA"),
    ("krasnoyarsk krai", "KYA"),
    ("krasnoyarsk", "KYA"),
    ("пермский край", "PER"),
    ("perm krai", "PER"),
    ("perm", "PER"),
    ("приморский край", "PRI"),
    ("primorsky krai", "PRI"),
    ("primorye", "PRI"),
    ("ставропольский край", "STA"),
    ("stavropol krai", "STA"),
    ("stavropol", "STA"),
    ("забайкальский край", "ZAB"),
    ("zabaykalsky krai", "ZAB"),
    ("transbaikal", "ZAB"),
    // Oblasts
    ("амурская область", "AMU"),
    ("amur oblast", "AMU"),
    ("amur", "AMU"),
    ("архангельская область", "ARK"),
    ("arkhangelsk oblast", "ARK"),
    ("arkhangelsk", "ARK"),
    ("астраханская область", "AST"),
    ("astrakhan oblast", "AST"),
    ("astrakhan", "AST"),
    ("белгородская область", "BEL"),
    ("belgorod oblast", "BEL"),
    ("belgorod", "BEL"),
    ("брянская область", "BRY"),
    ("bryansk oblast", "BRY"),
    ("bryansk", "BRY"),
    ("челябинская область", "CHE"),
    ("chelyabinsk oblast", "CHE"),
    ("chelyabinsk", "CHE"),
    ("иркутская область", "IRK"),
    ("irkutsk oblast", "IRK"),
    ("irkutsk", "IRK"),
    ("ивановская область", "IVA"),
    ("ivanovo oblast", "IVA"),
    ("ivanovo", "IVA"),
    ("калининградская область", "KGD"),
    ("kaliningrad oblast", "KGD"),
    ("kaliningrad", "KGD"),
    ("калужская область", "KLU"),
    ("kaluga oblast", "KLU"),
    ("kaluga", "KLU"),
    ("кемеровская область", "KEM"),
    ("kemerovo oblast", "KEM"),
    ("kemerovo", "KEM"),
    ("кузбасс", "KEM"),
    ("kuzbass", "KEM"),
    ("кировская область", "KIR"),
    ("kirov oblast", "KIR"),
    ("kirov", "KIR"),
    ("костромская область", "KOS"),
    ("kostroma oblast", "KOS"),
    ("kostroma", "KOS"),
    ("курганская область", "KGN"),
    ("kurgan oblast", "KGN"),
    ("kurgan", "KGN"),
    ("курская область", "KRS"),
    ("kursk oblast", "KRS"),
    ("kursk", "KRS"),
    ("ленинградская область", "LEN"),
    ("leningrad oblast", "LEN"),
    ("липецкая область", "LIP"),
    ("lipetsk oblast", "LIP"),
    ("lipetsk", "LIP"),
    ("магаданская область", "MAG"),
    ("magadan oblast", "MAG"),
    ("magadan", "MAG"),
    ("московская область", "MOS"),
    ("moscow oblast", "MOS"),
    ("мурманская область", "MUR"),
    ("murmansk oblast", "MUR"),
    ("murmansk", "MUR"),
    ("нижегородская область", "NIZ"),
    ("nizhny novgorod oblast", "NIZ"),
    ("nizhegorod", "NIZ"),
    ("nizhny novgorod", "NIZ"),
    ("новгородская область", "NGR"),
    ("novgorod oblast", "NGR"),
    ("novgorod", "NGR"),
    ("новосибирская область", "NVS"),
    ("novosibirsk oblast", "NVS"),
    ("novosibirsk", "NVS"),
    ("омская область", "OMS"),
    ("omsk oblast", "OMS"),
    ("omsk", "OMS"),
    ("оренбургская область", "ORE"),
    ("orenburg oblast", "ORE"),
    ("orenburg", "ORE"),
    ("орловская область", "ORL"),
    ("oryol oblast", "ORL"),
    ("oryol", "ORL"),
    ("orel", "ORL"),
    ("пензенская область", "PNZ"),
    ("penza oblast", "PNZ"),
    ("penza", "PNZ"),
    ("псковская область", "PSK"),
    ("pskov oblast", "PSK"),
    ("pskov", "PSK"),
    ("ростовская область", "ROS"),
    ("rostov oblast", "ROS"),
    ("rostov", "ROS"),
    ("рязанская область", "RYA"),
    ("ryazan oblast", "RYA"),
    ("ryazan", "RYA"),
    ("сахалинская область", "SAK"),
    ("sakhalin oblast", "SAK"),
    ("sakhalin", "SAK"),
    ("самарская область", "SAM"),
    ("samara oblast", "SAM"),
    ("samara", "SAM"),
    ("саратовская область", "SAR"),
    ("saratov oblast", "SAR"),
    ("saratov", "SAR"),
    ("смоленская область", "SMO"),
    ("smolensk oblast", "SMO"),
    ("smolensk", "SMO"),
    ("свердловская область", "SVE"),
    ("sverdlovsk oblast", "SVE"),
    ("sverdlovsk", "SVE"),
    ("тамбовская область", "TAM"),
    ("tambov oblast", "TAM"),
    ("tambov", "TAM"),
    ("томская область", "TOM"),
    ("tomsk oblast", "TOM"),
    ("tomsk", "TOM"),
    ("тульская область", "TUL"),
    ("tula oblast", "TUL"),
    ("tula", "TUL"),
    ("тверская область", "TVE"),
    ("tver oblast", "TVE"),
    ("tver", "TVE"),
    ("тюменская область", "TYU"),
    ("tyumen oblast", "TYU"),
    ("tyumen", "TYU"),
    ("ульяновская область", "ULY"),
    ("ulyanovsk oblast", "ULY"),
    ("ulyanovsk", "ULY"),
    ("владимирская область", "VLA"),
    ("vladimir oblast", "VLA"),
    ("vladimir", "VLA"),
    ("волгоградская область", "VGG"),
    ("volgograd oblast", "VGG"),
    ("volgograd", "VGG"),
    ("вологодская область", "VLG"),
    ("vologda oblast", "VLG"),
    ("vologda", "VLG"),
    ("воронежская область", "VOR"),
    ("voronezh oblast", "VOR"),
    ("voronezh", "VOR"),
    ("ярославская область", "YAR"),
    ("yaroslavl oblast", "YAR"),
    ("yaroslavl", "YAR"),
    ("запорожская область", "ZPO"),
    ("zaporizhzhia oblast", "ZPO"),
    ("zaporizhzhia", "ZPO"),
    ("zaporozhye", "ZPO"),
    ("херсонская область", "KHE"),
    ("kherson oblast", "KHE"),
    ("kherson", "KHE"),
    // Federal Cities
    ("москва", "MOW"),
    ("город москва", "MOW"),
    ("moscow", "MOW"),
    ("санкт-петербург", "SPE"),
    ("город санкт-петербург", "SPE"),
    ("saint petersburg", "SPE"),
    ("st. petersburg", "SPE"),
    ("st petersburg", "SPE"),
    ("севастополь", "SEV"),
    ("город севастополь", "SEV"),
    ("sevastopol", "SEV"),
    // Autonomous Oblast
    ("еврейская автономная область", "YEV"),
    ("еврейская ао", "YEV"),
    ("jewish autonomous oblast", "YEV"),
    ("jewish ao", "YEV"),
    // Autonomous Okrugs
    ("чукотский автономный округ", "CHU"),
    ("чукотка", "CHU"),
    ("chukotka", "CHU"),
    ("chukotka autonomous okrug", "CHU"),
    ("ханты-мансийский автономный округ", "KHM"),
    ("ханты-мансийский ао", "KHM"),
    ("хмао", "KHM"),
    ("югра", "KHM"),
    ("khanty-mansi", "KHM"),
    ("khanty-mansiysk", "KHM"),
    ("yugra", "KHM"),
    ("ненецкий автономный округ", "NEN"),
    ("ненецкий ао", "NEN"),
    ("nenets", "NEN"),
    ("nenets autonomous okrug", "NEN"),
    ("ямало-ненецкий автономный округ", "YAN"),
    ("ямало-ненецкий ао", "YAN"),
    ("янао", "YAN"),
    ("yamalo-nenets", "YAN"),
    ("yamal-nenets", "YAN"),
];
