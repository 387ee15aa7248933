use clap::Parser;
use richmenu_stitcher::domain::canvas::{CanvasSize, RICH_MENU_COMPACT};
use richmenu_stitcher::workflow::{self, DEFAULT_OUTPUT};
use std::path::PathBuf;

/// 画像を横一列に並べて、リッチメニュー用の1枚のPNGに結合するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 左から順に並べる画像ファイルのパス (省略時は既定の3枚)
    pub sources: Vec<PathBuf>,

    /// 出力するPNGファイルのパス
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 出力画像の幅 (px)
    #[arg(long, default_value_t = RICH_MENU_COMPACT.width())]
    pub width: u32,

    /// 出力画像の高さ (px)
    #[arg(long, default_value_t = RICH_MENU_COMPACT.height())]
    pub height: u32,

    /// 詳細なログを出力する
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// 警告とエラーのみ出力する
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    fn resolved_sources(&self) -> Vec<PathBuf> {
        if self.sources.is_empty() {
            workflow::default_sources()
        } else {
            self.sources.clone()
        }
    }
}

/// 引数を解釈して結合を実行し、成否を返します。
pub fn run(args: Args) -> bool {
    configure_logs(&args);

    let size = match CanvasSize::new(args.width, args.height) {
        Ok(size) => size,
        Err(e) => {
            log::error!("エラー: {}", e);
            return false;
        }
    };

    workflow::stitch(&args.resolved_sources(), size, &args.output)
}

fn configure_logs(args: &Args) {
    use simplelog::*;

    let min_loglevel = if args.quiet {
        LevelFilter::Warn
    } else if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    let cfg = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    if let Err(e) = TermLogger::init(min_loglevel, cfg, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("ロガーの初期化に失敗しました: {}", e);
    }
}
