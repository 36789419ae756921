//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 「フレーム収集 → デコード → GIF生成 → 保存」の処理フローを実装します。

use crate::cli::Args;
use jpg2gif::config::GifConfig;
use jpg2gif::domain::{collect_frame_paths, DirectoryPath, FrameList, GifFile, GifOptions};
use jpg2gif::error::AppError;
use tracing::{debug, info};

// --- public な main 関数 ---

/// コマンドライン引数から設定を組み立て、GIFを生成します。
///
/// # 戻り値
/// * `Ok(())`: GIFの保存まで正常に完了した場合。
/// * `Err(AppError)`: 途中のいずれかの段階で失敗した場合。失敗時点で処理を打ち切ります。
pub fn run(args: Args) -> Result<(), AppError> {
    let config = GifConfig::new(args.source_dir, args.output, args.extension, args.duration)?
        .with_repeat_forever(args.loop_forever);

    let frame_count = create_gif(&config)?;
    info!(
        frames = frame_count,
        output = %config.output_path().display(),
        "GIFを作成しました"
    );
    Ok(())
}

/// 設定に従ってフレームを集め、1つのアニメーションGIFとして保存します。
///
/// 書き込んだフレーム数を返します。
pub fn create_gif(config: &GifConfig) -> Result<usize, AppError> {
    info!("処理を開始します: {}", config);

    // 1. 入力ディレクトリの検証とフレームの収集
    let source_dir = DirectoryPath::new(config.source_directory())?;
    let frame_paths = collect_frame_paths(&source_dir, config.frame_extension())?;
    debug!(count = frame_paths.len(), "フレームのパスを収集しました");

    // 2. 番号順にデコード
    let frame_list = FrameList::decode_paths(frame_paths.iter(), config.frame_extension())?;
    debug!(frames = frame_list.len(), "フレームをデコードしました");

    // 3. GIFを生成して保存
    let gif_file = GifFile::create_file(frame_list, &GifOptions::from(config))?;
    gif_file.save_to_path(config.output_path())?;

    Ok(gif_file.frame_count)
}
