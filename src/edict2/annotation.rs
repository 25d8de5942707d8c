use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// 注記 http://www.edrdg.org/jmdict/edict_doc.html
// 括弧内に現れる短いコードと 1 対 1 に対応する
macro_rules! annotations {
    ($($category:ident { $($variant:ident => $code:literal, $description:literal;)* })*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Annotation {
            $($($variant,)*)*
        }

        impl Annotation {
            pub const ALL: &'static [Annotation] = &[$($(Annotation::$variant,)*)*];

            pub fn code(self) -> &'static str {
                match self {
                    $($(Annotation::$variant => $code,)*)*
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $($(Annotation::$variant => $description,)*)*
                }
            }

            pub fn category(self) -> AnnotationCategory {
                match self {
                    $($(Annotation::$variant => AnnotationCategory::$category,)*)*
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationCategory {
    PartOfSpeech,
    Field,
    Misc,
    Common,
}

annotations! {
    PartOfSpeech {
        AdjI => "adj-i", "adjective (keiyoushi)";
        AdjIx => "adj-ix", "adjective (keiyoushi) - yoi/ii class";
        AdjNa => "adj-na", "adjectival nouns or quasi-adjectives (keiyodoshi)";
        AdjNo => "adj-no", "nouns which may take the genitive case particle `no'";
        AdjPn => "adj-pn", "pre-noun adjectival (rentaishi)";
        AdjT => "adj-t", "`taru' adjective";
        AdjF => "adj-f", "noun or verb acting prenominally (other than the above)";
        AdjKari => "adj-kari", "`kari' adjective (archaic)";
        AdjKu => "adj-ku", "`ku' adjective (archaic)";
        AdjShiku => "adj-shiku", "`shiku' adjective (archaic)";
        AdjNari => "adj-nari", "archaic/formal form of na-adjective";
        Adj => "adj", "former adjective classification (being removed)";
        Adv => "adv", "adverb (fukushi)";
        AdvN => "adv-n", "adverbial noun";
        AdvTo => "adv-to", "adverb taking the `to' particle";
        Aux => "aux", "auxiliary";
        AuxV => "aux-v", "auxiliary verb";
        AuxAdj => "aux-adj", "auxiliary adjective";
        Conj => "conj", "conjunction";
        CopDa => "cop-da", "copula";
        Ctr => "ctr", "counter";
        Exp => "exp", "expressions (phrases, clauses, etc.)";
        Int => "int", "interjection (kandoushi)";
        Iv => "iv", "irregular verb";
        N => "n", "noun (common) (futsuumeishi)";
        NAdv => "n-adv", "adverbial noun (fukushitekimeishi)";
        NPr => "n-pr", "proper noun";
        NPref => "n-pref", "noun, used as a prefix";
        NSuf => "n-suf", "noun, used as a suffix";
        NT => "n-t", "noun (temporal) (jisoumeishi)";
        Num => "num", "numeric";
        Pn => "pn", "pronoun";
        Pref => "pref", "prefix";
        Prt => "prt", "particle";
        Suf => "suf", "suffix";
        Unc => "unc", "unclassified";
        V1 => "v1", "Ichidan verb";
        V1S => "v1-s", "Ichidan verb - kureru special class";
        V2aS => "v2a-s", "Nidan verb with 'u' ending (archaic)";
        V4h => "v4h", "Yodan verb with `hu/fu' ending (archaic)";
        V4r => "v4r", "Yodan verb with `ru' ending (archaic)";
        V5 => "v5", "Godan verb (not completely classified)";
        V5aru => "v5aru", "Godan verb - -aru special class";
        V5b => "v5b", "Godan verb with `bu' ending";
        V5g => "v5g", "Godan verb with `gu' ending";
        V5k => "v5k", "Godan verb with `ku' ending";
        V5kS => "v5k-s", "Godan verb - iku/yuku special class";
        V5m => "v5m", "Godan verb with `mu' ending";
        V5n => "v5n", "Godan verb with `nu' ending";
        V5r => "v5r", "Godan verb with `ru' ending";
        V5rI => "v5r-i", "Godan verb with `ru' ending (irregular verb)";
        V5s => "v5s", "Godan verb with `su' ending";
        V5t => "v5t", "Godan verb with `tsu' ending";
        V5u => "v5u", "Godan verb with `u' ending";
        V5uS => "v5u-s", "Godan verb with `u' ending (special class)";
        V5uru => "v5uru", "Godan verb - uru old class verb (old form of Eru)";
        V5z => "v5z", "Godan verb with `zu' ending";
        Vz => "vz", "Ichidan verb - zuru verb (alternative form of -jiru verbs)";
        Vi => "vi", "intransitive verb";
        Vk => "vk", "kuru verb - special class";
        Vn => "vn", "irregular nu verb";
        Vr => "vr", "irregular ru verb, plain form ends with -ri";
        Vs => "vs", "noun or participle which takes the aux. verb suru";
        VsC => "vs-c", "su verb - precursor to the modern suru";
        VsI => "vs-i", "suru verb - irregular";
        VsS => "vs-s", "suru verb - special class";
        Vt => "vt", "transitive verb";
    }

    Field {
        Anat => "anat", "anatomical term";
        Archit => "archit", "architecture term";
        Astron => "astron", "astronomy, etc. term";
        Baseb => "baseb", "baseball term";
        Biol => "biol", "biology term";
        Bot => "bot", "botany term";
        Buddh => "Buddh", "Buddhist term";
        Bus => "bus", "business term";
        Chem => "chem", "chemistry term";
        Comp => "comp", "computer terminology";
        Econ => "econ", "economics term";
        Engr => "engr", "engineering term";
        Finc => "finc", "finance term";
        Food => "food", "food term";
        Geol => "geol", "geology, etc. term";
        Geom => "geom", "geometry term";
        Gram => "gram", "grammatical term";
        Law => "law", "law, etc. term";
        Ling => "ling", "linguistics terminology";
        MA => "MA", "martial arts term";
        Mahj => "mahj", "mahjong term";
        Math => "math", "mathematics";
        Med => "med", "medicine, etc. term";
        Mil => "mil", "military";
        Music => "music", "music term";
        Physics => "physics", "physics terminology";
        Shinto => "Shinto", "Shinto term";
        Shogi => "shogi", "shogi term";
        Sports => "sports", "sports term";
        Sumo => "sumo", "sumo term";
        Zool => "zool", "zoology term";
    }

    Misc {
        X => "X", "rude or X-rated term";
        Abbr => "abbr", "abbreviation";
        Arch => "arch", "archaism";
        Ateji => "ateji", "ateji (phonetic) reading";
        Chn => "chn", "children's language";
        Col => "col", "colloquialism";
        Derog => "derog", "derogatory term";
        EK => "eK", "exclusively kanji";
        Ek => "ek", "exclusively kana";
        Fam => "fam", "familiar language";
        Fem => "fem", "female term or language";
        Gikun => "gikun", "gikun (meaning as reading) or jukujikun (special kanji reading)";
        Hon => "hon", "honorific or respectful (sonkeigo) language";
        Hum => "hum", "humble (kenjougo) language";
        Ik => "ik", "word containing irregular kana usage";
        IK => "iK", "word containing irregular kanji usage";
        Id => "id", "idiomatic expression";
        Io => "io", "irregular okurigana usage";
        Joc => "joc", "jocular, humorous term";
        MSl => "m-sl", "manga slang";
        Male => "male", "male term or language";
        MaleSl => "male-sl", "male slang";
        OK => "oK", "word containing out-dated kanji";
        Obs => "obs", "obsolete term";
        Obsc => "obsc", "obscure term";
        Ok => "ok", "out-dated or obsolete kana usage";
        OnMim => "on-mim", "onomatopoeic or mimetic word";
        Poet => "poet", "poetical term";
        Pol => "pol", "polite (teineigo) language";
        Proverb => "proverb", "proverb";
        RK => "rK", "rarely-used kanji form";
        Rare => "rare", "rare (now replaced by \"obsc\")";
        Sens => "sens", "sensitive word";
        Sl => "sl", "slang";
        UK => "uK", "word usually written using kanji alone";
        Uk => "uk", "word usually written using kana alone";
        Vulg => "vulg", "vulgar expression or word";
        Yoji => "yoji", "yojijukugo (four-character compound)";
    }

    Common {
        Common => "P", "common word";
    }
}

static ANNOTATION_BY_CODE: Lazy<HashMap<&'static str, Annotation>> = Lazy::new(|| {
    Annotation::ALL
        .iter()
        .map(|&annotation| (annotation.code(), annotation))
        .collect()
});

impl Annotation {
    pub fn from_code(code: &str) -> Option<Self> {
        ANNOTATION_BY_CODE.get(code).copied()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// JSON ではコードそのもの ("vs-c" など) で表す
impl Serialize for Annotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Annotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Annotation::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("Unknown annotation code: {:?}", code)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn code_and_from_code_are_inverse() {
        for &annotation in Annotation::ALL {
            assert_eq!(Annotation::from_code(annotation.code()), Some(annotation));
        }
    }

    #[test]
    fn codes_are_distinct() {
        let codes: HashSet<_> = Annotation::ALL.iter().map(|a| a.code()).collect();
        assert_eq!(codes.len(), Annotation::ALL.len());
    }

    #[test]
    fn code_lookup() {
        assert_eq!(Annotation::VsC.code(), "vs-c");
        assert_eq!(Annotation::from_code("adj-no"), Some(Annotation::AdjNo));
        assert_eq!(Annotation::from_code("P"), Some(Annotation::Common));
        assert_eq!(Annotation::from_code("esp. "), None);
        assert_eq!(Annotation::from_code("UK"), None);
    }

    #[test]
    fn categories() {
        assert_eq!(Annotation::N.category(), AnnotationCategory::PartOfSpeech);
        assert_eq!(Annotation::Buddh.category(), AnnotationCategory::Field);
        assert_eq!(Annotation::Uk.category(), AnnotationCategory::Misc);
        assert_eq!(Annotation::Common.category(), AnnotationCategory::Common);

        assert_eq!(Annotation::N.description(), "noun (common) (futsuumeishi)");
        assert_eq!(Annotation::Common.description(), "common word");
        assert!(Annotation::ALL.iter().all(|a| !a.description().is_empty()));
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&vec![Annotation::N, Annotation::UK]).unwrap();
        assert_eq!(json, r#"["n","uK"]"#);

        let parsed: Vec<Annotation> = serde_json::from_str(r#"["adj-na","P"]"#).unwrap();
        assert_eq!(parsed, vec![Annotation::AdjNa, Annotation::Common]);

        assert!(serde_json::from_str::<Annotation>(r#""nope""#).is_err());
    }
}
