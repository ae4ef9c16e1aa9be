//! Compiled-in country catalog used to derive ISO3 codes, continents and
//! UN regions from the country names carried by the LSIB polygon dataset.
//!
//! The LSIB dataset spells several names its own way ("Congo, Dem Rep of
//! the", "Korea, South", "Western Sahara (disp)"), so lookups go through a
//! normalizer that lowercases, strips parentheticals and punctuation, and
//! the catalog carries those spellings as aliases.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const AFRICA: &str = "Africa";
pub const AMERICA: &str = "America";
pub const ASIA: &str = "Asia";
pub const EUROPE: &str = "Europe";
pub const OCEANIA: &str = "Oceania";
pub const ANTARCTICA: &str = "Antarctica";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub iso3: &'static str,
    pub name: &'static str,
    /// Alternate spellings, already in normalized form.
    pub aliases: &'static [&'static str],
    pub continent: &'static str,
    pub region: &'static str,
}

const fn c(
    iso3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    continent: &'static str,
    region: &'static str,
) -> CountryEntry {
    CountryEntry {
        iso3,
        name,
        aliases,
        continent,
        region,
    }
}

pub const CATALOG: &[CountryEntry] = &[
    // ── Africa ───────────────────────────────────────────────────────────
    c("DZA", "Algeria", &[], AFRICA, "Northern Africa"),
    c("EGY", "Egypt", &[], AFRICA, "Northern Africa"),
    c("LBY", "Libya", &[], AFRICA, "Northern Africa"),
    c("MAR", "Morocco", &[], AFRICA, "Northern Africa"),
    c("SDN", "Sudan", &[], AFRICA, "Northern Africa"),
    c("TUN", "Tunisia", &[], AFRICA, "Northern Africa"),
    c("ESH", "Western Sahara", &[], AFRICA, "Northern Africa"),
    c("BEN", "Benin", &[], AFRICA, "Western Africa"),
    c("BFA", "Burkina Faso", &[], AFRICA, "Western Africa"),
    c("CPV", "Cabo Verde", &["cape verde"], AFRICA, "Western Africa"),
    c(
        "CIV",
        "Cote d'Ivoire",
        &["ivory coast"],
        AFRICA,
        "Western Africa",
    ),
    c("GMB", "Gambia", &["gambia the", "the gambia"], AFRICA, "Western Africa"),
    c("GHA", "Ghana", &[], AFRICA, "Western Africa"),
    c("GIN", "Guinea", &[], AFRICA, "Western Africa"),
    c("GNB", "Guinea-Bissau", &[], AFRICA, "Western Africa"),
    c("LBR", "Liberia", &[], AFRICA, "Western Africa"),
    c("MLI", "Mali", &[], AFRICA, "Western Africa"),
    c("MRT", "Mauritania", &[], AFRICA, "Western Africa"),
    c("NER", "Niger", &[], AFRICA, "Western Africa"),
    c("NGA", "Nigeria", &[], AFRICA, "Western Africa"),
    c("SEN", "Senegal", &[], AFRICA, "Western Africa"),
    c("SLE", "Sierra Leone", &[], AFRICA, "Western Africa"),
    c("TGO", "Togo", &[], AFRICA, "Western Africa"),
    c("BDI", "Burundi", &[], AFRICA, "Eastern Africa"),
    c("COM", "Comoros", &[], AFRICA, "Eastern Africa"),
    c("DJI", "Djibouti", &[], AFRICA, "Eastern Africa"),
    c("ERI", "Eritrea", &[], AFRICA, "Eastern Africa"),
    c("ETH", "Ethiopia", &[], AFRICA, "Eastern Africa"),
    c("KEN", "Kenya", &[], AFRICA, "Eastern Africa"),
    c("MDG", "Madagascar", &[], AFRICA, "Eastern Africa"),
    c("MWI", "Malawi", &[], AFRICA, "Eastern Africa"),
    c("MUS", "Mauritius", &[], AFRICA, "Eastern Africa"),
    c("MOZ", "Mozambique", &[], AFRICA, "Eastern Africa"),
    c("RWA", "Rwanda", &[], AFRICA, "Eastern Africa"),
    c("SYC", "Seychelles", &[], AFRICA, "Eastern Africa"),
    c("SOM", "Somalia", &[], AFRICA, "Eastern Africa"),
    c("SSD", "South Sudan", &[], AFRICA, "Eastern Africa"),
    c(
        "TZA",
        "Tanzania",
        &["tanzania united rep of", "united republic of tanzania"],
        AFRICA,
        "Eastern Africa",
    ),
    c("UGA", "Uganda", &[], AFRICA, "Eastern Africa"),
    c("ZMB", "Zambia", &[], AFRICA, "Eastern Africa"),
    c("ZWE", "Zimbabwe", &[], AFRICA, "Eastern Africa"),
    c("AGO", "Angola", &[], AFRICA, "Middle Africa"),
    c("CMR", "Cameroon", &[], AFRICA, "Middle Africa"),
    c(
        "CAF",
        "Central African Republic",
        &["central african rep"],
        AFRICA,
        "Middle Africa",
    ),
    c("TCD", "Chad", &[], AFRICA, "Middle Africa"),
    c(
        "COG",
        "Republic of the Congo",
        &["congo rep of the", "congo brazzaville", "congo"],
        AFRICA,
        "Middle Africa",
    ),
    c(
        "COD",
        "Democratic Republic of the Congo",
        &["congo dem rep of the", "congo kinshasa", "dr congo", "zaire"],
        AFRICA,
        "Middle Africa",
    ),
    c("GNQ", "Equatorial Guinea", &[], AFRICA, "Middle Africa"),
    c("GAB", "Gabon", &[], AFRICA, "Middle Africa"),
    c(
        "STP",
        "Sao Tome and Principe",
        &["sao tome principe"],
        AFRICA,
        "Middle Africa",
    ),
    c("BWA", "Botswana", &[], AFRICA, "Southern Africa"),
    c("SWZ", "Eswatini", &["swaziland"], AFRICA, "Southern Africa"),
    c("LSO", "Lesotho", &[], AFRICA, "Southern Africa"),
    c("NAM", "Namibia", &[], AFRICA, "Southern Africa"),
    c("ZAF", "South Africa", &[], AFRICA, "Southern Africa"),
    // ── Europe ───────────────────────────────────────────────────────────
    c("ALB", "Albania", &[], EUROPE, "Southern Europe"),
    c("AND", "Andorra", &[], EUROPE, "Southern Europe"),
    c("AUT", "Austria", &[], EUROPE, "Western Europe"),
    c("BLR", "Belarus", &[], EUROPE, "Eastern Europe"),
    c("BEL", "Belgium", &[], EUROPE, "Western Europe"),
    c(
        "BIH",
        "Bosnia and Herzegovina",
        &["bosnia herzegovina"],
        EUROPE,
        "Southern Europe",
    ),
    c("BGR", "Bulgaria", &[], EUROPE, "Eastern Europe"),
    c("HRV", "Croatia", &[], EUROPE, "Southern Europe"),
    c("CYP", "Cyprus", &[], EUROPE, "Southern Europe"),
    c("CZE", "Czechia", &["czech republic"], EUROPE, "Eastern Europe"),
    c("DNK", "Denmark", &[], EUROPE, "Northern Europe"),
    c("EST", "Estonia", &[], EUROPE, "Northern Europe"),
    c("FIN", "Finland", &[], EUROPE, "Northern Europe"),
    c("FRA", "France", &[], EUROPE, "Western Europe"),
    c("DEU", "Germany", &[], EUROPE, "Western Europe"),
    c("GRC", "Greece", &[], EUROPE, "Southern Europe"),
    c("HUN", "Hungary", &[], EUROPE, "Eastern Europe"),
    c("ISL", "Iceland", &[], EUROPE, "Northern Europe"),
    c("IRL", "Ireland", &[], EUROPE, "Northern Europe"),
    c("ITA", "Italy", &[], EUROPE, "Southern Europe"),
    c("LVA", "Latvia", &[], EUROPE, "Northern Europe"),
    c("LIE", "Liechtenstein", &[], EUROPE, "Western Europe"),
    c("LTU", "Lithuania", &[], EUROPE, "Northern Europe"),
    c("LUX", "Luxembourg", &[], EUROPE, "Western Europe"),
    c("MLT", "Malta", &[], EUROPE, "Southern Europe"),
    c("MDA", "Moldova", &[], EUROPE, "Eastern Europe"),
    c("MCO", "Monaco", &[], EUROPE, "Western Europe"),
    c("MNE", "Montenegro", &[], EUROPE, "Southern Europe"),
    c("NLD", "Netherlands", &[], EUROPE, "Western Europe"),
    c(
        "MKD",
        "North Macedonia",
        &["macedonia"],
        EUROPE,
        "Southern Europe",
    ),
    c("NOR", "Norway", &[], EUROPE, "Northern Europe"),
    c("POL", "Poland", &[], EUROPE, "Eastern Europe"),
    c("PRT", "Portugal", &[], EUROPE, "Southern Europe"),
    c("ROU", "Romania", &[], EUROPE, "Eastern Europe"),
    c("RUS", "Russia", &["russian federation"], EUROPE, "Eastern Europe"),
    c("SMR", "San Marino", &[], EUROPE, "Southern Europe"),
    c("SRB", "Serbia", &[], EUROPE, "Southern Europe"),
    c("SVK", "Slovakia", &[], EUROPE, "Eastern Europe"),
    c("SVN", "Slovenia", &[], EUROPE, "Southern Europe"),
    c("ESP", "Spain", &[], EUROPE, "Southern Europe"),
    c("SWE", "Sweden", &[], EUROPE, "Northern Europe"),
    c("CHE", "Switzerland", &[], EUROPE, "Western Europe"),
    c("UKR", "Ukraine", &[], EUROPE, "Eastern Europe"),
    c(
        "GBR",
        "United Kingdom",
        &["great britain", "uk"],
        EUROPE,
        "Northern Europe",
    ),
    c("VAT", "Vatican City", &["holy see"], EUROPE, "Southern Europe"),
    // ── Asia ─────────────────────────────────────────────────────────────
    c("AFG", "Afghanistan", &[], ASIA, "Southern Asia"),
    c("ARM", "Armenia", &[], ASIA, "Western Asia"),
    c("AZE", "Azerbaijan", &[], ASIA, "Western Asia"),
    c("BHR", "Bahrain", &[], ASIA, "Western Asia"),
    c("BGD", "Bangladesh", &[], ASIA, "Southern Asia"),
    c("BTN", "Bhutan", &[], ASIA, "Southern Asia"),
    c("BRN", "Brunei", &[], ASIA, "South-Eastern Asia"),
    c("KHM", "Cambodia", &[], ASIA, "South-Eastern Asia"),
    c("CHN", "China", &[], ASIA, "Eastern Asia"),
    c("GEO", "Georgia", &[], ASIA, "Western Asia"),
    c("IND", "India", &[], ASIA, "Southern Asia"),
    c("IDN", "Indonesia", &[], ASIA, "South-Eastern Asia"),
    c("IRN", "Iran", &[], ASIA, "Southern Asia"),
    c("IRQ", "Iraq", &[], ASIA, "Western Asia"),
    c("ISR", "Israel", &[], ASIA, "Western Asia"),
    c("JPN", "Japan", &[], ASIA, "Eastern Asia"),
    c("JOR", "Jordan", &[], ASIA, "Western Asia"),
    c("KAZ", "Kazakhstan", &[], ASIA, "Central Asia"),
    c("KWT", "Kuwait", &[], ASIA, "Western Asia"),
    c("KGZ", "Kyrgyzstan", &[], ASIA, "Central Asia"),
    c("LAO", "Laos", &[], ASIA, "South-Eastern Asia"),
    c("LBN", "Lebanon", &[], ASIA, "Western Asia"),
    c("MYS", "Malaysia", &[], ASIA, "South-Eastern Asia"),
    c("MDV", "Maldives", &[], ASIA, "Southern Asia"),
    c("MNG", "Mongolia", &[], ASIA, "Eastern Asia"),
    c("MMR", "Myanmar", &["burma"], ASIA, "South-Eastern Asia"),
    c("NPL", "Nepal", &[], ASIA, "Southern Asia"),
    c(
        "PRK",
        "North Korea",
        &["korea north", "dem peoples rep of korea"],
        ASIA,
        "Eastern Asia",
    ),
    c("OMN", "Oman", &[], ASIA, "Western Asia"),
    c("PAK", "Pakistan", &[], ASIA, "Southern Asia"),
    c("PHL", "Philippines", &[], ASIA, "South-Eastern Asia"),
    c("QAT", "Qatar", &[], ASIA, "Western Asia"),
    c("SAU", "Saudi Arabia", &[], ASIA, "Western Asia"),
    c("SGP", "Singapore", &[], ASIA, "South-Eastern Asia"),
    c(
        "KOR",
        "South Korea",
        &["korea south", "republic of korea"],
        ASIA,
        "Eastern Asia",
    ),
    c("LKA", "Sri Lanka", &[], ASIA, "Southern Asia"),
    c("SYR", "Syria", &[], ASIA, "Western Asia"),
    c("TWN", "Taiwan", &[], ASIA, "Eastern Asia"),
    c("TJK", "Tajikistan", &[], ASIA, "Central Asia"),
    c("THA", "Thailand", &[], ASIA, "South-Eastern Asia"),
    c("TLS", "Timor-Leste", &["east timor"], ASIA, "South-Eastern Asia"),
    c("TUR", "Turkey", &["turkiye"], ASIA, "Western Asia"),
    c("TKM", "Turkmenistan", &[], ASIA, "Central Asia"),
    c(
        "ARE",
        "United Arab Emirates",
        &[],
        ASIA,
        "Western Asia",
    ),
    c("UZB", "Uzbekistan", &[], ASIA, "Central Asia"),
    c("VNM", "Vietnam", &[], ASIA, "South-Eastern Asia"),
    c("YEM", "Yemen", &[], ASIA, "Western Asia"),
    // ── America ──────────────────────────────────────────────────────────
    c("ATG", "Antigua and Barbuda", &["antigua barbuda"], AMERICA, "Caribbean"),
    c("ARG", "Argentina", &[], AMERICA, "South America"),
    c("BHS", "Bahamas", &["bahamas the", "the bahamas"], AMERICA, "Caribbean"),
    c("BRB", "Barbados", &[], AMERICA, "Caribbean"),
    c("BLZ", "Belize", &[], AMERICA, "Central America"),
    c("BOL", "Bolivia", &[], AMERICA, "South America"),
    c("BRA", "Brazil", &[], AMERICA, "South America"),
    c("CAN", "Canada", &[], AMERICA, "Northern America"),
    c("CHL", "Chile", &[], AMERICA, "South America"),
    c("COL", "Colombia", &[], AMERICA, "South America"),
    c("CRI", "Costa Rica", &[], AMERICA, "Central America"),
    c("CUB", "Cuba", &[], AMERICA, "Caribbean"),
    c("DMA", "Dominica", &[], AMERICA, "Caribbean"),
    c("DOM", "Dominican Republic", &[], AMERICA, "Caribbean"),
    c("ECU", "Ecuador", &[], AMERICA, "South America"),
    c("SLV", "El Salvador", &[], AMERICA, "Central America"),
    c("GRD", "Grenada", &[], AMERICA, "Caribbean"),
    c("GTM", "Guatemala", &[], AMERICA, "Central America"),
    c("GUY", "Guyana", &[], AMERICA, "South America"),
    c("HTI", "Haiti", &[], AMERICA, "Caribbean"),
    c("HND", "Honduras", &[], AMERICA, "Central America"),
    c("JAM", "Jamaica", &[], AMERICA, "Caribbean"),
    c("MEX", "Mexico", &[], AMERICA, "Central America"),
    c("NIC", "Nicaragua", &[], AMERICA, "Central America"),
    c("PAN", "Panama", &[], AMERICA, "Central America"),
    c("PRY", "Paraguay", &[], AMERICA, "South America"),
    c("PER", "Peru", &[], AMERICA, "South America"),
    c(
        "KNA",
        "Saint Kitts and Nevis",
        &["st kitts nevis"],
        AMERICA,
        "Caribbean",
    ),
    c("LCA", "Saint Lucia", &["st lucia"], AMERICA, "Caribbean"),
    c(
        "VCT",
        "Saint Vincent and the Grenadines",
        &["st vincent the grenadines"],
        AMERICA,
        "Caribbean",
    ),
    c("SUR", "Suriname", &[], AMERICA, "South America"),
    c(
        "TTO",
        "Trinidad and Tobago",
        &["trinidad tobago"],
        AMERICA,
        "Caribbean",
    ),
    c(
        "USA",
        "United States",
        &["united states of america", "us"],
        AMERICA,
        "Northern America",
    ),
    c("URY", "Uruguay", &[], AMERICA, "South America"),
    c("VEN", "Venezuela", &[], AMERICA, "South America"),
    // ── Oceania ──────────────────────────────────────────────────────────
    c("AUS", "Australia", &[], OCEANIA, "Australia and New Zealand"),
    c("FJI", "Fiji", &[], OCEANIA, "Melanesia"),
    c("KIR", "Kiribati", &[], OCEANIA, "Micronesia"),
    c(
        "MHL",
        "Marshall Islands",
        &[],
        OCEANIA,
        "Micronesia",
    ),
    c(
        "FSM",
        "Micronesia",
        &["micronesia fed states of", "federated states of micronesia"],
        OCEANIA,
        "Micronesia",
    ),
    c("NRU", "Nauru", &[], OCEANIA, "Micronesia"),
    c(
        "NZL",
        "New Zealand",
        &[],
        OCEANIA,
        "Australia and New Zealand",
    ),
    c("PLW", "Palau", &[], OCEANIA, "Micronesia"),
    c("PNG", "Papua New Guinea", &[], OCEANIA, "Melanesia"),
    c("WSM", "Samoa", &[], OCEANIA, "Polynesia"),
    c("SLB", "Solomon Islands", &[], OCEANIA, "Melanesia"),
    c("TON", "Tonga", &[], OCEANIA, "Polynesia"),
    c("TUV", "Tuvalu", &[], OCEANIA, "Polynesia"),
    c("VUT", "Vanuatu", &[], OCEANIA, "Melanesia"),
    // ── Antarctica ───────────────────────────────────────────────────────
    c("ATA", "Antarctica", &[], ANTARCTICA, "Antarctica"),
];

/// Lowercases, drops parenthetical qualifiers like "(disp)", and maps
/// punctuation to spaces so dataset spellings and catalog names compare
/// on equal terms.
pub fn normalize(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut depth = 0u32;
    for ch in name.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if ch.is_alphanumeric() {
                    cleaned.extend(ch.to_lowercase());
                } else {
                    cleaned.push(' ');
                }
            }
            _ => {}
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for (i, entry) in CATALOG.iter().enumerate() {
            map.entry(normalize(entry.name)).or_insert(i);
            map.entry(normalize(entry.iso3)).or_insert(i);
            for alias in entry.aliases {
                map.entry(normalize(alias)).or_insert(i);
            }
        }
        map
    })
}

/// Looks a country up by name as spelled in the source data.
pub fn lookup(name: &str) -> Option<&'static CountryEntry> {
    index().get(&normalize(name)).map(|&i| &CATALOG[i])
}
