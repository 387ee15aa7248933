use std::fmt;
use std::path::PathBuf;

// エラー型を定義
#[derive(Debug)]
pub enum PathError {
    /// ソース画像のパスが存在しない。
    NotFound(PathBuf),
    /// パスは存在するが通常のファイルではない。
    NotAFile(PathBuf),
    IoError(std::io::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound(p) => write!(f, "画像が見つかりません: {}", p.display()),
            PathError::NotAFile(p) => write!(f, "ファイルではありません: {}", p.display()),
            PathError::IoError(e) => write!(f, "I/Oエラー: {}", e),
        }
    }
}

impl std::error::Error for PathError {}
