use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 連番フレームを格納した入力ディレクトリ
#[derive(Debug)]
pub struct DirectoryPath {
    path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、存在するディレクトリであることを検証する
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ直下のエントリを列挙するイテレータを返す。
    ///
    /// サブディレクトリの中までは降りない。シンボリックリンクはリンク先の種類で判定される。
    pub fn entries(&self) -> walkdir::IntoIter {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
