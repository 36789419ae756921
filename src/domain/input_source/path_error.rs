use std::fmt;

// 入力ディレクトリに関するエラー型を定義
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
        }
    }
}

impl std::error::Error for PathError {}
