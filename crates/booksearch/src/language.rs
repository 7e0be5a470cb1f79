//! Display names for the language codes found on search results.
//!
//! Open Library records languages as MARC codes, which match the ISO 639-2
//! bibliographic codes (`fre`, `ger`) apart from a handful of obsolete MARC-only
//! codes (`esp`, `scr`). The terminology variants (`fra`, `deu`) are accepted as well.

// Sorted by code for the binary search in `display_name`.
const LANGUAGES: &[(&str, &str)] = &[
    ("abk", "Abkhazian"),
    ("afr", "Afrikaans"),
    ("ajm", "Aljamía"),
    ("akk", "Akkadian"),
    ("alb", "Albanian"),
    ("amh", "Amharic"),
    ("ang", "Old English"),
    ("ara", "Arabic"),
    ("arc", "Aramaic"),
    ("arg", "Aragonese"),
    ("arm", "Armenian"),
    ("asm", "Assamese"),
    ("ast", "Asturian"),
    ("ava", "Avaric"),
    ("aym", "Aymara"),
    ("aze", "Azerbaijani"),
    ("bak", "Bashkir"),
    ("bal", "Baluchi"),
    ("bam", "Bambara"),
    ("baq", "Basque"),
    ("bel", "Belarusian"),
    ("ben", "Bengali"),
    ("bho", "Bhojpuri"),
    ("bis", "Bislama"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bre", "Breton"),
    ("bul", "Bulgarian"),
    ("bur", "Burmese"),
    ("cam", "Khmer"),
    ("cat", "Catalan"),
    ("ceb", "Cebuano"),
    ("ces", "Czech"),
    ("che", "Chechen"),
    ("chi", "Chinese"),
    ("chr", "Cherokee"),
    ("chu", "Church Slavic"),
    ("chv", "Chuvash"),
    ("cop", "Coptic"),
    ("cor", "Cornish"),
    ("cos", "Corsican"),
    ("cre", "Cree"),
    ("crp", "Creoles and pidgins"),
    ("csb", "Kashubian"),
    ("cym", "Welsh"),
    ("cze", "Czech"),
    ("dan", "Danish"),
    ("deu", "German"),
    ("div", "Divehi"),
    ("doi", "Dogri"),
    ("dsb", "Lower Sorbian"),
    ("dut", "Dutch"),
    ("egy", "Egyptian"),
    ("ell", "Greek"),
    ("eng", "English"),
    ("enm", "Middle English"),
    ("epo", "Esperanto"),
    ("esk", "Eskimo languages"),
    ("esp", "Esperanto"),
    ("est", "Estonian"),
    ("eth", "Ethiopic"),
    ("eus", "Basque"),
    ("fao", "Faroese"),
    ("far", "Faroese"),
    ("fas", "Persian"),
    ("fij", "Fijian"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("fre", "French"),
    ("fri", "Frisian"),
    ("frm", "Middle French"),
    ("fro", "Old French"),
    ("fry", "Western Frisian"),
    ("ful", "Fula"),
    ("fur", "Friulian"),
    ("gae", "Scottish Gaelic"),
    ("gag", "Gagauz"),
    ("gal", "Oromo"),
    ("geo", "Georgian"),
    ("ger", "German"),
    ("gez", "Geez"),
    ("gla", "Scottish Gaelic"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("glv", "Manx"),
    ("gmh", "Middle High German"),
    ("goh", "Old High German"),
    ("grc", "Ancient Greek"),
    ("gre", "Greek"),
    ("grn", "Guarani"),
    ("guj", "Gujarati"),
    ("hat", "Haitian Creole"),
    ("hau", "Hausa"),
    ("haw", "Hawaiian"),
    ("hbs", "Serbo-Croatian"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hrv", "Croatian"),
    ("hsb", "Upper Sorbian"),
    ("hun", "Hungarian"),
    ("hye", "Armenian"),
    ("ibo", "Igbo"),
    ("ice", "Icelandic"),
    ("ido", "Ido"),
    ("iku", "Inuktitut"),
    ("ina", "Interlingua"),
    ("ind", "Indonesian"),
    ("ine", "Indo-European languages"),
    ("int", "Interlingua"),
    ("iri", "Irish"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("jrb", "Judeo-Arabic"),
    ("kaa", "Kara-Kalpak"),
    ("kal", "Kalaallisut"),
    ("kan", "Kannada"),
    ("kas", "Kashmiri"),
    ("kat", "Georgian"),
    ("kaz", "Kazakh"),
    ("khm", "Khmer"),
    ("kin", "Kinyarwanda"),
    ("kir", "Kyrgyz"),
    ("kok", "Konkani"),
    ("kom", "Komi"),
    ("kon", "Kongo"),
    ("kor", "Korean"),
    ("kur", "Kurdish"),
    ("kus", "Kusaie"),
    ("lad", "Ladino"),
    ("lan", "Occitan"),
    ("lao", "Lao"),
    ("lap", "Sami"),
    ("lat", "Latin"),
    ("lav", "Latvian"),
    ("lin", "Lingala"),
    ("lit", "Lithuanian"),
    ("ltz", "Luxembourgish"),
    ("lug", "Ganda"),
    ("mac", "Macedonian"),
    ("mai", "Maithili"),
    ("mal", "Malayalam"),
    ("mao", "Maori"),
    ("mar", "Marathi"),
    ("max", "Manx"),
    ("may", "Malay"),
    ("mkd", "Macedonian"),
    ("mla", "Malagasy"),
    ("mlg", "Malagasy"),
    ("mlt", "Maltese"),
    ("mni", "Manipuri"),
    ("mol", "Moldavian"),
    ("mon", "Mongolian"),
    ("mri", "Maori"),
    ("msa", "Malay"),
    ("mul", "Multiple languages"),
    ("mya", "Burmese"),
    ("myn", "Mayan languages"),
    ("nah", "Nahuatl"),
    ("nap", "Neapolitan"),
    ("nav", "Navajo"),
    ("nep", "Nepali"),
    ("new", "Newari"),
    ("nld", "Dutch"),
    ("nno", "Norwegian Nynorsk"),
    ("nob", "Norwegian Bokmål"),
    ("non", "Old Norse"),
    ("nor", "Norwegian"),
    ("oci", "Occitan"),
    ("oji", "Ojibwa"),
    ("ori", "Odia"),
    ("orm", "Oromo"),
    ("oss", "Ossetian"),
    ("ota", "Ottoman Turkish"),
    ("pan", "Punjabi"),
    ("peo", "Old Persian"),
    ("per", "Persian"),
    ("pli", "Pali"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("pra", "Prakrit"),
    ("pro", "Old Provençal"),
    ("pus", "Pashto"),
    ("que", "Quechua"),
    ("raj", "Rajasthani"),
    ("roh", "Romansh"),
    ("rom", "Romany"),
    ("ron", "Romanian"),
    ("rum", "Romanian"),
    ("rus", "Russian"),
    ("sah", "Yakut"),
    ("san", "Sanskrit"),
    ("sat", "Santali"),
    ("scc", "Serbian"),
    ("scn", "Sicilian"),
    ("sco", "Scots"),
    ("scr", "Croatian"),
    ("sgn", "Sign languages"),
    ("sho", "Shona"),
    ("sin", "Sinhala"),
    ("slk", "Slovak"),
    ("slo", "Slovak"),
    ("slv", "Slovenian"),
    ("smi", "Sami"),
    ("smo", "Samoan"),
    ("sna", "Shona"),
    ("snd", "Sindhi"),
    ("snh", "Sinhala"),
    ("som", "Somali"),
    ("sot", "Southern Sotho"),
    ("spa", "Spanish"),
    ("sqi", "Albanian"),
    ("srd", "Sardinian"),
    ("srp", "Serbian"),
    ("sso", "Sotho"),
    ("ssw", "Swati"),
    ("sun", "Sundanese"),
    ("sux", "Sumerian"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("swz", "Swazi"),
    ("syr", "Syriac"),
    ("tag", "Tagalog"),
    ("taj", "Tajik"),
    ("tam", "Tamil"),
    ("tar", "Tatar"),
    ("tat", "Tatar"),
    ("tel", "Telugu"),
    ("tgk", "Tajik"),
    ("tgl", "Tagalog"),
    ("tha", "Thai"),
    ("tib", "Tibetan"),
    ("tir", "Tigrinya"),
    ("tlh", "Klingon"),
    ("ton", "Tongan"),
    ("tpi", "Tok Pisin"),
    ("tru", "Truk"),
    ("tsn", "Tswana"),
    ("tsw", "Tswana"),
    ("tuk", "Turkmen"),
    ("tur", "Turkish"),
    ("udm", "Udmurt"),
    ("uig", "Uyghur"),
    ("ukr", "Ukrainian"),
    ("und", "Undetermined"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("vie", "Vietnamese"),
    ("vol", "Volapük"),
    ("wel", "Welsh"),
    ("wen", "Sorbian languages"),
    ("wol", "Wolof"),
    ("xho", "Xhosa"),
    ("yid", "Yiddish"),
    ("yor", "Yoruba"),
    ("yue", "Cantonese"),
    ("zho", "Chinese"),
    ("zul", "Zulu"),
    ("zxx", "No linguistic content"),
];

/// Human readable name of the language `code`, if known.
///
/// ```
/// assert_eq!(Some("French"), booksearch::language::display_name("FRE"));
/// assert_eq!(None, booksearch::language::display_name("xx"));
/// ```
#[must_use]
pub fn display_name(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_lowercase();
    LANGUAGES
        .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
        .ok()
        .map(|i| LANGUAGES[i].1)
}

/// Display names of `codes` joined by `", "`.
///
/// Unknown codes are kept visible as `Unknown language [code]`.
#[must_use]
pub fn display_names<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            display_name(code).map_or_else(|| format!("Unknown language [{code}]"), str::to_owned)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
