//! GIF生成処理全体で共有する設定値を定義するモジュール。
//!
//! 入力ディレクトリや出力パスなどの値はここで一度だけ組み立てられ、
//! 各処理へ明示的に渡されます。

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- 既定値 ---

/// 連番JPEGが置かれている既定の入力ディレクトリ。
pub const DEFAULT_SOURCE_DIRECTORY: &str = "./share/dst/";
/// 既定の出力GIFファイルのパス。
pub const DEFAULT_OUTPUT_PATH: &str = "./share/graphics/dst_gif.gif";
/// フレームとして扱うファイルの拡張子（大文字小文字を区別する）。
pub const DEFAULT_FRAME_EXTENSION: &str = ".jpg";
/// 1フレームあたりの既定の表示時間（秒）。
pub const DEFAULT_FRAME_DURATION_SECONDS: f64 = 0.3;

// --- エラー定義 ---

/// 設定値の検証時に発生するエラー。
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("フレームの拡張子が空です。")]
    EmptyExtension,

    #[error("フレームの表示時間 {0} 秒は不正です。正の有限値を指定してください。")]
    InvalidDuration(f64),
}

// --- 構造体定義 ---

/// 検証済みのGIF生成設定。
#[derive(Debug, Clone, PartialEq)]
pub struct GifConfig {
    source_directory: PathBuf,
    output_path: PathBuf,
    frame_extension: String,
    frame_duration: Duration,
    repeat_forever: bool,
}

impl GifConfig {
    /// 新しい `GifConfig` を作成します。
    ///
    /// # 引数
    /// * `frame_duration_seconds`: 各フレームの表示時間（秒）。正の有限値である必要があります。
    ///
    /// # 戻り値
    /// * `Err(ConfigError)`: 拡張子が空、または表示時間が不正な場合。
    pub fn new(
        source_directory: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        frame_extension: impl Into<String>,
        frame_duration_seconds: f64,
    ) -> Result<Self, ConfigError> {
        let frame_extension = frame_extension.into();
        if frame_extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        if !frame_duration_seconds.is_finite() || frame_duration_seconds <= 0.0 {
            return Err(ConfigError::InvalidDuration(frame_duration_seconds));
        }
        // 0.3 のような値が 299.999ms にならないようマイクロ秒で丸める
        let frame_duration =
            Duration::from_micros((frame_duration_seconds * 1_000_000.0).round() as u64);
        if frame_duration.is_zero() {
            return Err(ConfigError::InvalidDuration(frame_duration_seconds));
        }

        Ok(Self {
            source_directory: source_directory.into(),
            output_path: output_path.into(),
            frame_extension,
            frame_duration,
            repeat_forever: false,
        })
    }

    /// GIFを無限ループさせるかどうかを設定します。
    pub fn with_repeat_forever(mut self, repeat_forever: bool) -> Self {
        self.repeat_forever = repeat_forever;
        self
    }

    // --- ゲッターメソッド ---

    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
    pub fn frame_extension(&self) -> &str {
        &self.frame_extension
    }
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
    pub fn repeat_forever(&self) -> bool {
        self.repeat_forever
    }
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            frame_extension: DEFAULT_FRAME_EXTENSION.to_string(),
            frame_duration: Duration::from_millis(300),
            repeat_forever: false,
        }
    }
}

impl fmt::Display for GifConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (*{}) -> {} [{}ms/フレーム]",
            self.source_directory.display(),
            self.frame_extension,
            self.output_path.display(),
            self.frame_duration.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_conventional_constants() {
        let config = GifConfig::default();
        assert_eq!(config.source_directory(), Path::new("./share/dst/"));
        assert_eq!(config.output_path(), Path::new("./share/graphics/dst_gif.gif"));
        assert_eq!(config.frame_extension(), ".jpg");
        assert_eq!(config.frame_duration(), Duration::from_millis(300));
        assert!(!config.repeat_forever());
    }

    /// 既定値の定数から `new` で組み立てた設定が `Default` と一致すること
    #[test]
    fn new_with_default_constants_equals_default() {
        let config = GifConfig::new(
            DEFAULT_SOURCE_DIRECTORY,
            DEFAULT_OUTPUT_PATH,
            DEFAULT_FRAME_EXTENSION,
            DEFAULT_FRAME_DURATION_SECONDS,
        )
        .unwrap();
        assert_eq!(config, GifConfig::default());
    }

    #[test]
    fn new_rejects_empty_extension() {
        let res = GifConfig::new("in", "out.gif", "", 0.3);
        assert_eq!(res, Err(ConfigError::EmptyExtension));
    }

    #[test]
    fn new_rejects_non_positive_or_non_finite_duration() {
        for secs in [0.0, -1.0, f64::INFINITY] {
            let res = GifConfig::new("in", "out.gif", ".jpg", secs);
            assert_eq!(res, Err(ConfigError::InvalidDuration(secs)));
        }
        assert!(matches!(
            GifConfig::new("in", "out.gif", ".jpg", f64::NAN),
            Err(ConfigError::InvalidDuration(_))
        ));
    }

    #[test]
    fn with_repeat_forever_sets_flag() {
        let config = GifConfig::default().with_repeat_forever(true);
        assert!(config.repeat_forever());
    }
}
