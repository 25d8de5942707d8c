// EDICT2 http://www.edrdg.org/jmdict/edict_doc.html の 1 行 1 エントリ形式の解析
//
//   KANJI-1;KANJI-2 [KANA-1;KANA-2] /(general information) (See xxxx) gloss/gloss/.../EntLnnnnnnnnX/
//
// 正式な文法はなく，記号の意味が重なっている：
// - 括弧は 注記 (品詞など)・相互参照・本文の一部 の 3 通りに使われる
// - カンマは注記の区切り "(n,vs)" にも本文中にも現れる
// - セミコロンは見出しの区切りだが相互参照の中にも現れる
//
// フォーマットから外れたものは基本的にエラーとするが，
// 区切りの '/' を本文中に含む行など既知の不正な行は行番号で飛ばせるようにする

pub mod annotation;
pub mod cross_reference;
pub mod entry;
pub mod error;
pub mod gloss_parser;
pub mod identifier_parser;
pub mod key_parser;
pub mod line_parser;
pub mod parser;
