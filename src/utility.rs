use anyhow::{bail, ensure, Result};

pub mod encoding;

// 相互参照の読みを見分けるための文字種別
// 仝々〆〇ヶ は漢字扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

impl CharType {
    pub fn of(c: char) -> Self {
        match c {
            '仝' | '々' | '〆' | '〇' | 'ヶ' => Self::Kanji,
            '\u{3040}'..='\u{309f}' => Self::Hiragana,
            // 長音符 "ー" を含む
            '\u{30a0}'..='\u{30ff}' | '\u{31f0}'..='\u{31ff}' => Self::Katakana,
            '\u{3400}'..='\u{4dbf}' | '\u{4e00}'..='\u{9fff}' | '\u{f900}'..='\u{faff}' => {
                Self::Kanji
            }
            _ => Self::Other,
        }
    }

    pub fn is_kana(self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana)
    }
}

pub fn is_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| CharType::of(c).is_kana())
}

pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(|c| CharType::of(c) == CharType::Kanji)
}

// 半角・全角の数字
pub fn parse_number(s: &str) -> Result<usize> {
    ensure!(!s.is_empty(), "Failed to parse empty string");

    let mut ret: usize = 0;
    for c in s.chars() {
        let zero = match c {
            '0'..='9' => '0',
            '０'..='９' => '０',
            _ => bail!("Failed to parse {:?}", s),
        } as usize;

        ret = match ret
            .checked_mul(10)
            .and_then(|r| r.checked_add(c as usize - zero))
        {
            Some(r) => r,
            None => bail!("Too large number: {:?}", s),
        };
    }
    Ok(ret)
}
