use serde::{Deserialize, Serialize};

use crate::utility::{contains_kanji, is_kana, parse_number};

static JOINER: &str = "・";

// "半挿・はんぞう・1" => 見出し・読み・語義番号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub form: String,
    pub reading: Option<String>,
    pub sense: Option<usize>,
}

// 見出し自体に "・" を含むこともある ("ジョン・スミス")
// 読みが付くのは漢字を含む見出しだけなので，それ以外は見出しの一部とみなす
pub fn parse_cross_reference(target: &str) -> CrossReference {
    let mut parts: Vec<&str> = target.split(JOINER).collect();

    let sense = match parts.as_slice() {
        [_, .., last] => parse_number(last).ok(),
        _ => None,
    };
    if sense.is_some() {
        parts.pop();
    }

    let has_reading = matches!(
        parts.as_slice(),
        [form, reading] if contains_kanji(form) && is_kana(reading)
    );
    let reading = if has_reading { parts.pop() } else { None };

    CrossReference {
        form: parts.join(JOINER),
        reading: reading.map(|r| r.to_owned()),
        sense,
    }
}
