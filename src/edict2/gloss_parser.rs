use std::mem;

use crate::edict2::{
    entry::Gloss,
    error::GlossError,
    identifier_parser::{parse_identifier, Identifier},
};

// (tag) (tag,tag) (See xref) definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlossState {
    // 次の注記か本文を待つ
    Start,
    // "(" の中
    Tag,
    // ")" の直後．空白が来るはず
    Closed,
    // 本文．以降は全てそのまま取り込む
    Definition,
}

impl GlossState {
    fn name(self) -> &'static str {
        match self {
            GlossState::Start => "start",
            GlossState::Tag => "tag",
            GlossState::Closed => "closed",
            GlossState::Definition => "definition",
        }
    }
}

#[derive(Default)]
struct GlossBuffer {
    gloss: Gloss,
    tag: String,
}

fn on_start(c: char, buffer: &mut GlossBuffer) -> GlossState {
    match c {
        '(' => GlossState::Tag,
        c => {
            buffer.gloss.definition.push(c);
            GlossState::Definition
        }
    }
}

fn on_tag(c: char, buffer: &mut GlossBuffer) -> GlossState {
    match c {
        // "(n,vs)" のように注記がまとめられている場合
        // 注記でなければ相互参照や本文中のカンマなのでそのまま続ける
        ',' => {
            match parse_identifier(&buffer.tag) {
                Identifier::Annotation(annotation) => {
                    buffer.gloss.annotations.push(annotation);
                    buffer.tag.clear();
                }
                _ => buffer.tag.push(','),
            }
            GlossState::Tag
        }

        ')' => match parse_identifier(&mem::take(&mut buffer.tag)) {
            Identifier::Ordinal => GlossState::Closed,
            Identifier::CrossReference(target) => {
                buffer.gloss.cross_references.push(target);
                GlossState::Closed
            }
            Identifier::Annotation(annotation) => {
                buffer.gloss.annotations.push(annotation);
                GlossState::Closed
            }
            Identifier::FreeText(text) => {
                let definition = &mut buffer.gloss.definition;
                definition.push('(');
                definition.push_str(&text);
                definition.push(')');
                GlossState::Definition
            }
        },

        c => {
            buffer.tag.push(c);
            GlossState::Tag
        }
    }
}

fn on_closed(c: char, position: usize) -> Result<GlossState, GlossError> {
    match c {
        ' ' => Ok(GlossState::Start),
        found => Err(GlossError::UnexpectedAfterTag { found, position }),
    }
}

fn on_definition(c: char, buffer: &mut GlossBuffer) -> GlossState {
    buffer.gloss.definition.push(c);
    GlossState::Definition
}

pub fn parse_gloss(gloss: &str) -> Result<Gloss, GlossError> {
    let mut state = GlossState::Start;
    let mut buffer = GlossBuffer::default();

    for (position, c) in gloss.trim().chars().enumerate() {
        state = match state {
            GlossState::Start => on_start(c, &mut buffer),
            GlossState::Tag => on_tag(c, &mut buffer),
            GlossState::Closed => on_closed(c, position)?,
            GlossState::Definition => on_definition(c, &mut buffer),
        };
    }

    match state {
        GlossState::Definition => Ok(buffer.gloss),
        GlossState::Tag => Err(GlossError::UnterminatedTag { tag: buffer.tag }),
        state => Err(GlossError::NoDefinition {
            state: state.name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edict2::annotation::Annotation;

    fn gloss(definition: &str, annotations: &[Annotation], cross_references: &[&str]) -> Gloss {
        Gloss {
            definition: definition.to_owned(),
            annotations: annotations.to_vec(),
            cross_references: cross_references.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn parses_tags_and_definition() {
        assert_eq!(parse_gloss("(n) foo").unwrap(), gloss("foo", &[Annotation::N], &[]));
        assert_eq!(parse_gloss("foo").unwrap(), gloss("foo", &[], &[]));
        assert_eq!(
            parse_gloss("(See foobar) foo").unwrap(),
            gloss("foo", &[], &["foobar"])
        );
        assert_eq!(
            parse_gloss("(n) (See foobar) foo").unwrap(),
            gloss("foo", &[Annotation::N], &["foobar"])
        );
    }

    #[test]
    fn drops_ordinals_and_keeps_tag_order() {
        assert_eq!(
            parse_gloss("(1) (abbr) (uK) (See foobar) foo").unwrap(),
            gloss("foo", &[Annotation::Abbr, Annotation::UK], &["foobar"])
        );
    }

    #[test]
    fn parses_grouped_tags() {
        assert_eq!(
            parse_gloss("(n,adj-no) foo").unwrap(),
            gloss("foo", &[Annotation::N, Annotation::AdjNo], &[])
        );
        assert_eq!(
            parse_gloss("(adj-na,n,vs) bar").unwrap(),
            gloss(
                "bar",
                &[Annotation::AdjNa, Annotation::N, Annotation::Vs],
                &[]
            )
        );
    }

    #[test]
    fn comma_inside_cross_reference_is_kept() {
        assert_eq!(
            parse_gloss("(See 一,二) foo").unwrap(),
            gloss("foo", &[], &["一,二"])
        );
    }

    #[test]
    fn free_text_falls_back_to_definition() {
        assert_eq!(
            parse_gloss("(1) (esp. ) wide-mouthed ceramic vessel").unwrap(),
            gloss("(esp. ) wide-mouthed ceramic vessel", &[], &[])
        );

        // 本文が始まった後の括弧は注記として扱わない
        assert_eq!(
            parse_gloss("(n,vs) (obsc) (嘈囃 is sometimes read むねやけ) (See 胸焼け) heartburn")
                .unwrap(),
            gloss(
                "(嘈囃 is sometimes read むねやけ) (See 胸焼け) heartburn",
                &[Annotation::N, Annotation::Vs, Annotation::Obsc],
                &[]
            )
        );
        assert_eq!(
            parse_gloss("cutting off the leg (form of punishment)").unwrap(),
            gloss("cutting off the leg (form of punishment)", &[], &[])
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_gloss(" (uk) curry ").unwrap(),
            gloss("curry", &[Annotation::Uk], &[])
        );
    }

    #[test]
    fn rejects_tags_without_definition() {
        assert_eq!(
            parse_gloss("(n) (uk)"),
            Err(GlossError::NoDefinition { state: "closed" })
        );
        assert_eq!(
            parse_gloss(""),
            Err(GlossError::NoDefinition { state: "start" })
        );
    }

    #[test]
    fn rejects_unterminated_tag() {
        assert_eq!(
            parse_gloss("(n) (uk foo"),
            Err(GlossError::UnterminatedTag {
                tag: "uk foo".to_owned()
            })
        );
    }

    #[test]
    fn rejects_missing_space_after_tag() {
        assert_eq!(
            parse_gloss("(n)foo"),
            Err(GlossError::UnexpectedAfterTag {
                found: 'f',
                position: 3
            })
        );
    }
}
