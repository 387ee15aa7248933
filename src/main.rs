use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    if cli::run(args) {
        println!("画像結合成功！");
        ExitCode::SUCCESS
    } else {
        println!("画像結合失敗");
        ExitCode::FAILURE
    }
}
