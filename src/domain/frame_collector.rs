//! 入力ディレクトリから連番フレームのパスを集め、番号順に並べるモジュール。

use crate::domain::frame_name::{FrameName, FrameNameError};
use crate::domain::input_source::directory_path::DirectoryPath;
use std::path::{Path, PathBuf};
use tracing::debug;

// --- エラー定義 ---

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("ディレクトリの走査に失敗しました")]
    Walk(#[from] walkdir::Error),

    #[error("フレームのファイル名が不正です")]
    InvalidFrameName(#[from] FrameNameError),
}

// --- 構造体定義 ---

/// 番号の昇順に並んだフレームファイルのパス一覧。
#[derive(Debug, Default, PartialEq)]
pub struct OrderedFramePaths {
    paths: Vec<PathBuf>,
}

impl OrderedFramePaths {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

/// ディレクトリ直下のフレームファイルを番号順に並べて返します。
///
/// 拡張子で絞り込んだ後にソートキーを計算するため、`readme.txt` のような
/// 対象外のファイル名は数値でなくても無視されます。一方、拡張子が一致するのに
/// 数値として読めないファイル（`cover.jpg` など）はエラーになります。
///
/// 同じ番号のフレームはディレクトリの列挙順を保ちます。
pub fn collect_frame_paths(
    dir: &DirectoryPath,
    extension: &str,
) -> Result<OrderedFramePaths, CollectError> {
    let mut frames: Vec<(FrameName, PathBuf)> = Vec::new();

    for entry_result in dir.entries() {
        let entry = match entry_result {
            Ok(entry) => entry,
            // リンク切れなどで読めないエントリは、対象の拡張子を持つ場合だけエラーにする
            Err(err) if err.depth() > 0 && !has_extension(err.path(), extension) => {
                debug!(error = %err, "対象外のエントリを読めなかったためスキップします");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "ファイルではないためスキップします");
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "UTF-8でないファイル名をスキップします");
            continue;
        };
        if !name.ends_with(extension) {
            debug!(name, "拡張子が一致しないためスキップします");
            continue;
        }

        let frame_name = FrameName::parse(name, extension)?;
        frames.push((frame_name, entry.into_path()));
    }

    frames.sort_by(|(a, _), (b, _)| a.sort_key().cmp(b.sort_key()));

    Ok(OrderedFramePaths {
        paths: frames.into_iter().map(|(_, path)| path).collect(),
    })
}

fn has_extension(path: Option<&Path>, extension: &str) -> bool {
    path.and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("Failed to create file");
    }

    fn file_names(paths: &OrderedFramePaths) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    /// "2.jpg" が "10.jpg" より前に来ること
    #[test]
    fn sorts_numerically_regardless_of_creation_order() {
        let dir = tempdir().unwrap();
        for name in ["10.jpg", "2.jpg", "1.jpg", "100.jpg", "9.jpg"] {
            touch(dir.path(), name);
        }

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();

        assert_eq!(
            file_names(&paths),
            vec!["1.jpg", "2.jpg", "9.jpg", "10.jpg", "100.jpg"]
        );
    }

    #[test]
    fn returns_full_paths_inside_source_directory() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "3.jpg");

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap().into_paths();

        assert_eq!(paths, vec![dir.path().join("3.jpg")]);
    }

    /// 対象外のファイルやサブディレクトリは結果に含まれず、エラーにもならない
    #[test]
    fn excludes_other_extensions_and_subdirectories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "1.jpg");
        touch(dir.path(), "2.png");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "3.JPG");
        fs::create_dir(dir.path().join("tmp")).unwrap();
        fs::create_dir(dir.path().join("4.jpg")).unwrap();

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();

        assert_eq!(file_names(&paths), vec!["1.jpg"]);
    }

    #[test]
    fn matching_file_with_non_numeric_name_is_fatal() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "1.jpg");
        touch(dir.path(), "cover.jpg");

        let source = DirectoryPath::new(dir.path()).unwrap();
        let err = collect_frame_paths(&source, ".jpg").unwrap_err();

        match err {
            CollectError::InvalidFrameName(FrameNameError::NotANumber { name, .. }) => {
                assert_eq!(name, "cover.jpg")
            }
            other => panic!("予期せぬエラーが返されました: {:?}", other),
        }
    }

    #[test]
    fn keeps_duplicates_and_gaps() {
        let dir = tempdir().unwrap();
        for name in ["5.jpg", "05.jpg", "1.jpg", "-2.jpg"] {
            touch(dir.path(), name);
        }

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();
        let names = file_names(&paths);

        assert_eq!(paths.len(), 4);
        assert_eq!(&names[..2], &["-2.jpg", "1.jpg"]);
        // 5 と 05 は同じキーなので順序は列挙順に依存する
        let mut tail = names[2..].to_vec();
        tail.sort();
        assert_eq!(tail, vec!["05.jpg", "5.jpg"]);
    }

    #[test]
    fn sorts_numbers_beyond_i64() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "99999999999999999999.jpg");
        touch(dir.path(), "5.jpg");

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();

        assert_eq!(file_names(&paths), vec!["5.jpg", "99999999999999999999.jpg"]);
    }

    /// リンク切れのシンボリックリンクは、対象外の名前なら無視される
    #[cfg(unix)]
    #[test]
    fn dangling_symlink_with_other_extension_is_skipped() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        touch(dir.path(), "1.jpg");
        symlink(dir.path().join("gone"), dir.path().join("notes.txt")).unwrap();

        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();

        assert_eq!(file_names(&paths), vec!["1.jpg"]);
    }

    /// 対象の拡張子を持つリンク切れはフレームを読めないのでエラーになる
    #[cfg(unix)]
    #[test]
    fn dangling_symlink_with_frame_extension_is_fatal() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        touch(dir.path(), "1.jpg");
        symlink(dir.path().join("gone.jpg"), dir.path().join("2.jpg")).unwrap();

        let source = DirectoryPath::new(dir.path()).unwrap();
        let err = collect_frame_paths(&source, ".jpg").unwrap_err();

        assert!(matches!(err, CollectError::Walk(_)));
    }

    #[test]
    fn empty_directory_yields_no_paths() {
        let dir = tempdir().unwrap();
        let source = DirectoryPath::new(dir.path()).unwrap();
        let paths = collect_frame_paths(&source, ".jpg").unwrap();
        assert!(paths.is_empty());
    }
}
