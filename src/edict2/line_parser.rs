use crate::edict2::{
    annotation::Annotation,
    entry::Entry,
    error::LineError,
    gloss_parser::parse_gloss,
    key_parser::{normalize_key, parse_key},
};

static COMMON_MARKER: &str = "(P)";
static FIRST_SENSE_MARKER: &str = "(1)";
static RECORDING_MARKER: char = 'X';

// "(1)" より前の注記だけでは本文がなくエラーになるので，仮の本文を付けて解析する
static ENTRY_WIDE_PLACEHOLDER: &str = "entry-wide annotations";

// KANJI [KANA] /gloss/gloss/.../EntLnnnnnnnX/
pub fn parse_line(line: &str) -> Result<Entry, LineError> {
    let parts: Vec<&str> = line.split('/').collect();

    let parts = match parts.split_last() {
        Some((last, parts)) if last.is_empty() => parts,
        Some((last, _)) => return Err(LineError::MissingTrailingSeparator(last.to_string())),
        None => return Err(LineError::MissingFields(0)),
    };

    let (key, gloss_fields, sequence) = match parts {
        [key, gloss_fields @ .., sequence] if !gloss_fields.is_empty() => {
            (*key, gloss_fields, *sequence)
        }
        _ => return Err(LineError::MissingFields(parts.len())),
    };

    let (sequence, recording_available) = match sequence.strip_suffix(RECORDING_MARKER) {
        Some(sequence) => (sequence, true),
        None => (sequence, false),
    };

    let (kanji, kana) =
        parse_key(key.trim_end()).map_err(|source| LineError::MalformedKeyField {
            key: key.to_owned(),
            source,
        })?;

    let mut annotations = Vec::new();
    let mut gloss_fields = gloss_fields.to_vec();

    // 語義が複数あるときは "(1)" より前がエントリ全体の注記
    // "(1)" が 2 回以上現れる場合はどこで区切るか分からないので普通の語義として扱う
    if 1 < gloss_fields.len() && gloss_fields[0].matches(FIRST_SENSE_MARKER).count() == 1 {
        if let Some((head, first)) = gloss_fields[0].split_once(FIRST_SENSE_MARKER) {
            let entry_wide = parse_gloss(&format!("{}{}", head, ENTRY_WIDE_PLACEHOLDER))
                .map_err(|source| LineError::MalformedGlossField {
                    gloss: head.to_owned(),
                    source,
                })?;

            if !entry_wide.cross_references.is_empty() {
                return Err(LineError::UnexpectedCrossReferenceInGlobalScope(
                    entry_wide.cross_references,
                ));
            }

            annotations = entry_wide.annotations;
            gloss_fields[0] = first;
        }
    }

    let mut common = false;
    let mut glosses = Vec::new();
    for field in gloss_fields {
        // 語義ではなく "よく使われる語" の印
        if field == COMMON_MARKER {
            common = true;
            continue;
        }

        let gloss = parse_gloss(field).map_err(|source| LineError::MalformedGlossField {
            gloss: field.to_owned(),
            source,
        })?;
        glosses.push(gloss);
    }

    match glosses.as_mut_slice() {
        [] => return Err(LineError::NoDefinitions),
        // 語義が 1 つなら注記はエントリ全体のもの
        [only] => annotations.append(&mut only.annotations),
        _ => {}
    }

    if common && !annotations.contains(&Annotation::Common) {
        annotations.push(Annotation::Common);
    }

    Ok(Entry {
        kanji: kanji.iter().map(|k| normalize_key(k)).collect(),
        kana: kana.iter().map(|k| normalize_key(k)).collect(),
        annotations,
        glosses,
        sequence: sequence.to_owned(),
        recording_available,
    })
}
