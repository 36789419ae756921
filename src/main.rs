mod cli;
mod workflow;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // 診断ログは標準エラーへ（`RUST_LOG=debug` で詳細を表示）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    match workflow::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // エラーの原因を順にたどって表示する
            eprintln!("エラー: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  原因: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
