// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::debug;

// --- 構造体定義 ---

/// デコード済みの1フレーム。
#[derive(Debug)]
pub struct DecodedFrame {
    source: PathBuf,
    image: RgbaImage,
}

impl DecodedFrame {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// GIFに書き出す順序で並んだ、デコード済みフレームのコンテナ。
///
/// `new` / `decode_paths` を通じてのみインスタンス化でき、フレームが1枚以上
/// あることが保証されます。
#[derive(Debug)]
pub struct FrameList {
    frames: Vec<DecodedFrame>,
}

// --- エラー定義 ---

/// `FrameList` の生成時に発生する可能性のあるエラー。
#[derive(Debug, thiserror::Error)]
pub enum FrameDecodeError {
    /// 対象となるフレームが1枚もない場合に返されるエラー。
    #[error("フレームが空です。対象となる画像が1つも見つかりませんでした。")]
    EmptyData,

    /// 画像ファイルを開けない、またはデコードできない場合に返されるエラー。
    #[error("画像 '{}' のデコードに失敗しました", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

// --- 実装ブロック ---

impl FrameList {
    /// デコード済みフレームから `FrameList` を作成します。
    ///
    /// # 戻り値
    /// * `Err(FrameDecodeError::EmptyData)`: フレームが1枚もない場合。
    pub fn new(frames: Vec<DecodedFrame>) -> Result<Self, FrameDecodeError> {
        if frames.is_empty() {
            return Err(FrameDecodeError::EmptyData);
        }

        Ok(Self { frames })
    }

    /// 与えられた順序のままパスを1つずつデコードし、`FrameList` を作成します。
    ///
    /// `extension` で終わらないパスは開かずに読み飛ばします。
    /// デコードしたファイルのパスは処理のたびに標準出力へ表示されます。
    ///
    /// # 戻り値
    /// * `Err(FrameDecodeError::Decode)`: 対象ファイルのいずれかがデコードできなかった場合。
    /// * `Err(FrameDecodeError::EmptyData)`: 対象ファイルが1つもなかった場合。
    pub fn decode_paths<I, P>(paths: I, extension: &str) -> Result<Self, FrameDecodeError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut frames = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let matches_extension = path
                .file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| name.ends_with(extension));
            if !matches_extension {
                debug!(path = %path.display(), "拡張子が一致しないためデコードしません");
                continue;
            }

            println!("{}", path.display());
            frames.push(Self::decode_frame(path)?);
        }

        Self::new(frames)
    }

    /// 画像ファイル1つをRGBA8のバッファとしてデコードするヘルパー関数。
    fn decode_frame(path: &Path) -> Result<DecodedFrame, FrameDecodeError> {
        let image = image::open(path).map_err(|source| FrameDecodeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(DecodedFrame {
            source: path.to_path_buf(),
            image: image.into_rgba8(),
        })
    }

    // --- 便利メソッド ---

    /// 保持しているフレームの枚数を返します。
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// 常に false（空の `FrameList` は作成できないため）。
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[DecodedFrame] {
        &self.frames
    }
}

impl IntoIterator for FrameList {
    type Item = DecodedFrame;
    type IntoIter = std::vec::IntoIter<DecodedFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

// --- テストモジュール ---
