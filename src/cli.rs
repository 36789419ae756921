use clap::Parser;
use jpg2gif::config::{
    DEFAULT_FRAME_DURATION_SECONDS, DEFAULT_FRAME_EXTENSION, DEFAULT_OUTPUT_PATH,
    DEFAULT_SOURCE_DIRECTORY,
};
use std::path::PathBuf;

/// 連番のJPEGフレーム（1.jpg, 2.jpg, ...）を番号順に並べ、アニメーションGIFを作成するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// `<整数><拡張子>` 形式のフレームが置かれた入力フォルダのパス
    #[arg(short = 'i', long, default_value = DEFAULT_SOURCE_DIRECTORY)]
    pub source_dir: PathBuf,

    /// 出力するGIFファイルのパス (親フォルダは作成済みである必要があります)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// フレームとして扱うファイルの拡張子 (大文字小文字を区別します)
    #[arg(short, long, default_value = DEFAULT_FRAME_EXTENSION)]
    pub extension: String,

    /// 1フレームあたりの表示時間 (秒)
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DURATION_SECONDS)]
    pub duration: f64,

    /// GIFを無限ループさせる
    #[arg(long)]
    pub loop_forever: bool,
}
