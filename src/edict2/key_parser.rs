use std::mem;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::edict2::error::KeyError;

// KANJI-1;KANJI-2 [KANA-1;KANA-2]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Kanji,
    AfterKanji,
    Kana,
    Finished,
}

impl KeyState {
    fn name(self) -> &'static str {
        match self {
            KeyState::Kanji => "kanji",
            KeyState::AfterKanji => "after-kanji",
            KeyState::Kana => "kana",
            KeyState::Finished => "finished",
        }
    }
}

#[derive(Default)]
struct KeyBuffer {
    kanji: Vec<String>,
    kana: Vec<String>,
    token: String,
}

impl KeyBuffer {
    fn flush_kanji(&mut self) {
        self.kanji.push(mem::take(&mut self.token));
    }

    fn flush_kana(&mut self) {
        self.kana.push(mem::take(&mut self.token));
    }
}

fn on_kanji(c: char, buffer: &mut KeyBuffer) -> Option<KeyState> {
    match c {
        ';' => {
            buffer.flush_kanji();
            Some(KeyState::Kanji)
        }
        ' ' => {
            buffer.flush_kanji();
            Some(KeyState::AfterKanji)
        }
        // 読みの前には空白が要る
        '[' | ']' => None,
        c => {
            buffer.token.push(c);
            Some(KeyState::Kanji)
        }
    }
}

fn on_after_kanji(c: char) -> Option<KeyState> {
    match c {
        ' ' => Some(KeyState::AfterKanji),
        '[' => Some(KeyState::Kana),
        _ => None,
    }
}

fn on_kana(c: char, buffer: &mut KeyBuffer) -> Option<KeyState> {
    match c {
        ';' => {
            buffer.flush_kana();
            Some(KeyState::Kana)
        }
        ']' => {
            buffer.flush_kana();
            Some(KeyState::Finished)
        }
        // 読みに空白は含まれない
        '[' | ' ' => None,
        c => {
            buffer.token.push(c);
            Some(KeyState::Kana)
        }
    }
}

fn on_finished(c: char) -> Option<KeyState> {
    match c {
        ' ' => Some(KeyState::Finished),
        _ => None,
    }
}

// 見出し部分 ("/" より前) を 漢字 と 読み に分ける
pub fn parse_key(key: &str) -> Result<(Vec<String>, Vec<String>), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut state = KeyState::Kanji;
    let mut buffer = KeyBuffer::default();

    for (position, c) in key.chars().enumerate() {
        let next = match state {
            KeyState::Kanji => on_kanji(c, &mut buffer),
            KeyState::AfterKanji => on_after_kanji(c),
            KeyState::Kana => on_kana(c, &mut buffer),
            KeyState::Finished => on_finished(c),
        };

        state = next.ok_or(KeyError::UnexpectedChar {
            found: c,
            position,
            state: state.name(),
        })?;
    }

    match state {
        // 読みなし
        KeyState::Kanji => buffer.flush_kanji(),
        KeyState::Finished => {}
        state => {
            return Err(KeyError::UnexpectedEnd {
                state: state.name(),
            })
        }
    }

    Ok((buffer.kanji, buffer.kana))
}

// "咖哩(ateji)" や "カレー(P)" の後ろの注記は扱わずに捨てる
pub fn normalize_key(key: &str) -> String {
    static REGEX_KEY_QUALIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\(.*$").unwrap());

    REGEX_KEY_QUALIFIER.replace(key, "").into_owned()
}
