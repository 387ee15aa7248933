use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// 構造体としてSourcePathを定義
#[derive(Debug, Clone)]
pub struct SourcePath {
    path: PathBuf,
}

impl SourcePath {
    // コンストラクタ: パスを受け取り、存在するファイルであることを検証する
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(PathError::NotAFile(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// すべてのパスを順番に検証します。最初に見つかった不正なパスでエラーを返します。
    ///
    /// デコードを始める前に呼ぶことで、1枚目を読み込んだ後に3枚目が
    /// 無いと分かる、という無駄を避けます。
    pub fn validate_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Self>, PathError> {
        paths.iter().map(Self::new).collect()
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ログ表示用のファイル名。取得できなければパス全体を返す。
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    // ファイルの中身をバイト列で読み込む
    pub fn read_bytes(&self) -> Result<Vec<u8>, PathError> {
        fs::read(&self.path).map_err(PathError::IoError)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
