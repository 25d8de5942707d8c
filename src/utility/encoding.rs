use anyhow::{bail, ensure, Context, Result};

// 配布されている edict2 は EUC-JP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Auto,
    Utf8,
    EucJp,
}

impl Encoding {
    pub fn of(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "euc-jp" | "eucjp" => Ok(Self::EucJp),
            _ => bail!("Unknown encoding: {}", name),
        }
    }
}

pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        // UTF-8 として読めなければ EUC-JP とみなす
        Encoding::Auto => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(_) => decode(bytes, Encoding::EucJp),
        },

        Encoding::Utf8 => String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8"),

        Encoding::EucJp => {
            let (text, had_errors) = encoding_rs::EUC_JP.decode_without_bom_handling(bytes);
            ensure!(!had_errors, "Input is not valid EUC-JP");
            Ok(text.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "[げつ]" の EUC-JP
    const EUC_JP_BYTES: &[u8] = &[0x5b, 0xa4, 0xb2, 0xa4, 0xc4, 0x5d];

    #[test]
    fn decodes_utf8() {
        let text = "刖 [げつ]";
        assert_eq!(decode(text.as_bytes(), Encoding::Auto).unwrap(), text);
        assert_eq!(decode(text.as_bytes(), Encoding::Utf8).unwrap(), text);
    }

    #[test]
    fn decodes_euc_jp() {
        assert_eq!(decode(EUC_JP_BYTES, Encoding::Auto).unwrap(), "[げつ]");
        assert_eq!(decode(EUC_JP_BYTES, Encoding::EucJp).unwrap(), "[げつ]");
        assert!(decode(EUC_JP_BYTES, Encoding::Utf8).is_err());

        let (encoded, _, _) = encoding_rs::EUC_JP.encode("漢字 [かんじ] /(n) kanji/");
        assert_eq!(
            decode(&encoded, Encoding::Auto).unwrap(),
            "漢字 [かんじ] /(n) kanji/"
        );
    }

    #[test]
    fn encoding_names() {
        assert_eq!(Encoding::of("EUC-JP").unwrap(), Encoding::EucJp);
        assert_eq!(Encoding::of("utf8").unwrap(), Encoding::Utf8);
        assert!(Encoding::of("shift_jis").is_err());
    }
}
