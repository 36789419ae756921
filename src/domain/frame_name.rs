use std::cmp::Ordering;
use std::fmt;

// --- エラー定義 ---

/// フレームのファイル名を解釈できなかった場合のエラー。
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FrameNameError {
    /// 拡張子が一致しない。
    #[error("ファイル名 '{name}' は拡張子 '{extension}' で終わっていません。")]
    ExtensionMismatch { name: String, extension: String },

    /// 拡張子を除いた部分が整数として読めない。
    #[error("ファイル名 '{name}' の '{stem}' を整数として解釈できません。")]
    NotANumber { name: String, stem: String },
}

// --- 構造体定義 ---

/// 桁数に上限のない整数のソートキー。
///
/// 先頭の0は取り除いて保持するため、`007` と `7`、`-0` と `0` は等しくなる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    negative: bool,
    // 先頭の0を除いた10進数字列。0 の場合は空文字列
    digits: String,
}

impl SortKey {
    /// 省略可能な符号 (`+` / `-`) と1桁以上のASCII数字からなる文字列を解析する。
    fn parse(stem: &str) -> Option<Self> {
        let (negative, digits) = match stem.as_bytes().first()? {
            b'-' => (true, &stem[1..]),
            b'+' => (false, &stem[1..]),
            _ => (false, stem),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = digits.trim_start_matches('0').to_string();
        Some(Self {
            negative: negative && !digits.is_empty(),
            digits,
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// `<整数><拡張子>` 形式のフレームファイル名。
///
/// 拡張子を除いた部分の整数値がソートキーになる。連番の欠けや重複、値の範囲は検証しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameName {
    name: String,
    sort_key: SortKey,
}

impl FrameName {
    /// ファイル名を解析する。拡張子の一致判定は大文字小文字を区別する。
    pub fn parse(name: &str, extension: &str) -> Result<Self, FrameNameError> {
        let stem = name
            .strip_suffix(extension)
            .ok_or_else(|| FrameNameError::ExtensionMismatch {
                name: name.to_string(),
                extension: extension.to_string(),
            })?;

        let sort_key = SortKey::parse(stem).ok_or_else(|| FrameNameError::NotANumber {
            name: name.to_string(),
            stem: stem.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            sort_key,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
