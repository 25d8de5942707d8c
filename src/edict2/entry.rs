use serde::{Deserialize, Serialize};

use crate::edict2::{
    annotation::Annotation,
    cross_reference::{parse_cross_reference, CrossReference},
};

// 語義 1 つ分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gloss {
    pub definition: String,            // 英訳
    pub annotations: Vec<Annotation>,  // この語義のみの注記
    pub cross_references: Vec<String>, // 関連する見出し ("See ...")
}

impl Gloss {
    pub fn cross_reference_targets(&self) -> impl Iterator<Item = CrossReference> + '_ {
        self.cross_references
            .iter()
            .map(|target| parse_cross_reference(target))
    }
}

// 1 行分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub kanji: Vec<String>,           // 見出し (重複はそのまま)
    pub kana: Vec<String>,            // 読み (ないこともある)
    pub annotations: Vec<Annotation>, // エントリ全体の注記
    pub glosses: Vec<Gloss>,          // 語義 (1 つ以上)
    pub sequence: String,             // "EntL..."
    pub recording_available: bool,    // 末尾の "X"
}

impl Entry {
    pub fn is_common(&self) -> bool {
        self.annotations.contains(&Annotation::Common)
    }

    // エントリ全体の注記と語義の注記を合わせたもの
    pub fn annotations_for(&self, gloss_index: usize) -> Vec<Annotation> {
        let mut annotations = self.annotations.clone();
        if let Some(gloss) = self.glosses.get(gloss_index) {
            annotations.extend(gloss.annotations.iter().copied());
        }
        annotations
    }
}
