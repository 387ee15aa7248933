//! 画像結合のメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（バイナリ側の `cli`）とドメイン層（`domain`）を仲介し、
//! 「検証 → 読み込み → リサイズ → 貼り付け → エンコード → 保存」の流れを実装します。

use crate::domain::canvas::{Canvas, CanvasSize};
use crate::domain::slot_layout::horizontal_slots;
use crate::domain::source_image::{SourceImage, SourcePath};
use crate::error::AppError;
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 引数で画像を指定しなかった場合に使う、左から順の3枚。
pub const DEFAULT_SOURCES: [&str; 3] = [
    "richmenu-buttons/1.png", // マイページ
    "richmenu-buttons/2.png", // フィードバック
    "richmenu-buttons/3.png", // 使い方
];

/// 出力ファイル名の既定値（カレントディレクトリに作成）。
pub const DEFAULT_OUTPUT: &str = "richmenu-3buttons-combined.png";

/// 結合が成功したときの結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchReport {
    pub output_path: PathBuf,
    pub size: CanvasSize,
    /// 保存したファイルのバイト数。
    pub file_size: u64,
}

impl StitchReport {
    /// ファイルサイズ (KB, 切り捨て)。
    pub fn size_kb(&self) -> u64 {
        self.file_size / 1024
    }
}

// --- public な関数 ---

/// 画像を結合し、成否だけを返します。
///
/// エラーはすべてここで捕捉してログに出力し、呼び出し元には `false` を返します。
/// リトライはしません。
pub fn stitch(sources: &[PathBuf], size: CanvasSize, output_path: &Path) -> bool {
    match try_stitch(sources, size, output_path) {
        Ok(report) => {
            info!("結合完了!");
            info!("ファイルサイズ: {}KB", report.size_kb());
            info!("保存先: {}", report.output_path.display());
            true
        }
        Err(e) => {
            error!("エラー: {}", e);
            false
        }
    }
}

/// 画像を横一列に結合して `output_path` に PNG として保存します。
///
/// # 引数
/// * `sources`: 左から順に並べる画像ファイルのパス。1枚以上。
/// * `size`: 出力キャンバスの寸法。
/// * `output_path`: 出力先。既存のファイルは上書きされます。
///
/// # 戻り値
/// * `Ok(StitchReport)`: 保存に成功した場合。
/// * `Err(AppError)`: 画像が見つからない、デコードできない、保存できない場合など。
///   この場合、出力先のファイルには一切手を加えません。
pub fn try_stitch(
    sources: &[PathBuf],
    size: CanvasSize,
    output_path: &Path,
) -> Result<StitchReport, AppError> {
    if sources.is_empty() {
        return Err(AppError::NoSources);
    }

    info!("{}ボタンリッチメニュー画像結合開始", sources.len());
    info!("サイズ: {}", size);

    // 1. スロットの計算
    let slots = horizontal_slots(size.width(), sources.len())?;
    info!("ボタン幅: {}px", slots[0].width);

    // 2. すべての入力パスを先に検証する（デコード前に欠けているファイルを検出）
    let source_paths = SourcePath::validate_all(sources)?;

    // 3. キャンバスに順番に貼り付ける
    let mut canvas = Canvas::new(size)?;
    info!("画像読み込み・配置中...");
    for (source, slot) in source_paths.iter().zip(&slots) {
        let image = SourceImage::load(source)?;
        let (w, h) = image.dimensions();
        debug!("{}: {}x{}", source, w, h);
        info!(
            "画像{} ({}): x={}, width={}",
            slot.index + 1,
            source.file_name(),
            slot.x,
            slot.width
        );
        canvas.paste(&image, slot)?;
        // image はここで解放される
    }

    // 4. PNGにエンコードして保存
    let png = canvas.encode_png()?;
    png.save_to_path(output_path)?;

    let file_size = fs::metadata(output_path)?.len();
    Ok(StitchReport {
        output_path: output_path.to_path_buf(),
        size: png.size(),
        file_size,
    })
}

/// 既定の入力画像パスを返します。
pub fn default_sources() -> Vec<PathBuf> {
    DEFAULT_SOURCES.iter().map(PathBuf::from).collect()
}
