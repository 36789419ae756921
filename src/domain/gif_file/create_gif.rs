// --- 依存モジュール ---

use crate::config::GifConfig;
use crate::domain::frame_list::FrameList;

// image クレートの GIF エンコーダを利用してアニメーションGIFを生成します。
// Frame は1コマ分の画像と表示時間を、Delay はその表示時間を表します。
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// GIFの生成やファイル保存時に発生する可能性のあるエラー。
#[derive(Debug, thiserror::Error)]
pub enum GifError {
    /// フレームのエンコード中にエラーが発生した場合。
    #[error("フレーム No.{} のエンコードに失敗しました", .index + 1)]
    Encode {
        index: usize,
        #[source]
        source: image::ImageError,
    },

    /// ループ設定の書き込みに失敗した場合。
    #[error("ループ設定の書き込みに失敗しました")]
    Repeat(#[source] image::ImageError),

    /// 生成したGIFをディスクに保存できなかった場合。
    /// 出力先の親ディレクトリが存在しない場合もこれに該当します。
    #[error("GIFファイル '{}' の保存に失敗しました", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// エンコード時に使う設定。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GifOptions {
    /// 全フレーム共通の表示時間。
    pub frame_duration: Duration,
    /// true なら無限ループ指定を書き込む。false ならエンコーダの既定に従う。
    pub repeat_forever: bool,
}

impl From<&GifConfig> for GifOptions {
    fn from(config: &GifConfig) -> Self {
        Self {
            frame_duration: config.frame_duration(),
            repeat_forever: config.repeat_forever(),
        }
    }
}

/// メモリ上に生成されたアニメーションGIFとそのメタデータを保持する構造体。
pub struct GifFile {
    /// 書き込まれたフレームの枚数。
    pub frame_count: usize,
    /// 各フレームに設定された表示時間。
    pub frame_duration: Duration,
    /// メモリ上にレンダリングされたGIFのバイト列。
    pub gif_data: Vec<u8>,
}

impl GifFile {
    /// `FrameList` の各フレームを順番に並べたアニメーションGIFをメモリ上に生成します。
    ///
    /// すべてのフレームに `options.frame_duration` の表示時間を設定します。
    /// パレットや処分方法などその他のパラメータはエンコーダの既定値のままです。
    ///
    /// # 戻り値
    /// - `Err(GifError)`: フレームのエンコードに失敗した場合。
    pub fn create_file(frame_list: FrameList, options: &GifOptions) -> Result<Self, GifError> {
        let frame_count = frame_list.len();
        let delay = Delay::from_saturating_duration(options.frame_duration);

        let mut gif_bytes: Vec<u8> = Vec::new();
        {
            // エンコーダは drop 時にトレーラーを書き込むため、スコープを閉じてからバイト列を使う
            let mut encoder = GifEncoder::new(&mut gif_bytes);
            if options.repeat_forever {
                encoder.set_repeat(Repeat::Infinite).map_err(GifError::Repeat)?;
            }

            for (index, frame) in frame_list.into_iter().enumerate() {
                debug!(index, source = %frame.source().display(), "フレームをエンコードします");
                let frame = Frame::from_parts(frame.into_image(), 0, 0, delay);
                encoder
                    .encode_frame(frame)
                    .map_err(|source| GifError::Encode { index, source })?;
            }
        }

        Ok(Self {
            frame_count,
            frame_duration: options.frame_duration,
            gif_data: gif_bytes,
        })
    }

    /// `self.gif_data` を指定されたパスに書き込みます。既存のファイルは上書きされます。
    ///
    /// 親ディレクトリは作成しません。
    pub fn save_to_path(&self, path: &Path) -> Result<(), GifError> {
        fs::write(path, &self.gif_data).map_err(|source| GifError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}
