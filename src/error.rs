use crate::config::ConfigError;
use crate::domain::frame_collector::CollectError;
use crate::domain::frame_list::FrameDecodeError;
use crate::domain::gif_file::create_gif::GifError;
use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("設定エラー")]
    Config(#[from] ConfigError),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("フレームの収集エラー")]
    Collect(#[from] CollectError),

    #[error("フレームのデコードエラー")]
    Decode(#[from] FrameDecodeError),

    #[error("GIF生成エラー")]
    Gif(#[from] GifError),
}
