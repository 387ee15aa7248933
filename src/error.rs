use crate::domain::canvas::{CanvasError, PngError};
use crate::domain::slot_layout::LayoutError;
use crate::domain::source_image::{DecodeError, PathError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("結合する画像が1枚も指定されていません")]
    NoSources,

    #[error("画像が見つかりません: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// パスは存在するが、ディレクトリである・読み込めないなどの理由で使えない。
    #[error("{0}")]
    SourceUnreadable(#[source] PathError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    EncodeOrWrite(#[from] PngError),

    #[error("レイアウト計算エラー: {0}")]
    Layout(#[from] LayoutError),

    #[error("キャンバスエラー: {0}")]
    Canvas(#[from] CanvasError),

    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::NotFound(path) => AppError::SourceNotFound(path),
            other => AppError::SourceUnreadable(other),
        }
    }
}
