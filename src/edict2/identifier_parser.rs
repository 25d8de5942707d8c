use crate::edict2::annotation::Annotation;

static CROSS_REFERENCE_PREFIX: &str = "See ";

// 括弧 "(...)" の中身の解釈
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    // "(1)" などの語義番号
    Ordinal,
    // "(See 剕)"
    CrossReference(String),
    // "(n)", "(uk)" など
    Annotation(Annotation),
    // 注記でないもの．本文に "(...)" として戻す
    FreeText(String),
}

pub fn parse_identifier(s: &str) -> Identifier {
    if s.parse::<i64>().is_ok() {
        return Identifier::Ordinal;
    }

    if let Some(target) = s.strip_prefix(CROSS_REFERENCE_PREFIX) {
        return Identifier::CrossReference(target.to_owned());
    }

    match Annotation::from_code(s) {
        Some(annotation) => Identifier::Annotation(annotation),
        None => Identifier::FreeText(s.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_identifiers() {
        assert_eq!(parse_identifier("42"), Identifier::Ordinal);
        assert_eq!(
            parse_identifier("See foo"),
            Identifier::CrossReference("foo".to_owned())
        );
        assert_eq!(
            parse_identifier("See あ・い"),
            Identifier::CrossReference("あ・い".to_owned())
        );
        assert_eq!(
            parse_identifier("n"),
            Identifier::Annotation(Annotation::N)
        );
        assert_eq!(
            parse_identifier("esp. "),
            Identifier::FreeText("esp. ".to_owned())
        );
    }

    #[test]
    fn prefix_must_match_exactly() {
        assert_eq!(
            parse_identifier("see foo"),
            Identifier::FreeText("see foo".to_owned())
        );
        assert_eq!(parse_identifier("See"), Identifier::FreeText("See".to_owned()));
        assert_eq!(parse_identifier("1a"), Identifier::FreeText("1a".to_owned()));
    }
}
