use super::canvas::CanvasSize;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// PNGのエンコードやファイル保存時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq, Eq)]
pub enum PngError {
    /// キャンバスを PNG のバイト列へ変換できなかった場合。
    Encode(String),
    /// 書き込み権限がない、ディスクが一杯、パスが不正など、保存に失敗した場合。
    Save { path: PathBuf, reason: String },
}

/// メモリ上にエンコードされた PNG データ。
pub struct PngFile {
    data: Vec<u8>,
    size: CanvasSize,
}

impl PngFile {
    pub(super) fn new(data: Vec<u8>, size: CanvasSize) -> Self {
        Self { data, size }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// PNG のバイト列を `path` に保存します。既存のファイルは上書きされます。
    ///
    /// 同じディレクトリに一時ファイルを作って書き込み、最後にリネームで置き換えるため、
    /// 途中で失敗しても既存のファイルは壊れません。
    ///
    /// 既存ファイルのパーミッションは引き継ぎます。読み取り専用のファイルは上書きせず、
    /// エラーを返します。新規作成時は通常のファイル作成と同じく umask に従います。
    pub fn save_to_path(&self, path: &Path) -> Result<(), PngError> {
        let save_error = |e: io::Error| PngError::Save {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let existing = match fs::metadata(path) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(save_error(e)),
        };
        if existing.as_ref().is_some_and(|perms| perms.readonly()) {
            return Err(save_error(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "読み取り専用のファイルは上書きできません",
            )));
        }

        // "out.png" のような相対パスでは parent() が空文字になる
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = create_temp_file(dir).map_err(save_error)?;
        if let Some(perms) = existing {
            fs::set_permissions(tmp.path(), perms).map_err(save_error)?;
        }
        tmp.write_all(&self.data).map_err(save_error)?;
        tmp.as_file().sync_all().map_err(save_error)?;
        tmp.persist(path).map_err(|e| save_error(e.error))?;
        Ok(())
    }
}

/// 出力先と同じディレクトリに一時ファイルを作成します。
///
/// Unix では `File::create` と同じ 0666 を指定し、umask を適用させます
/// (`NamedTempFile` の既定は 0600)。
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".richmenu-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

impl fmt::Display for PngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PngError::Encode(reason) => write!(f, "PNGのエンコードに失敗しました: {}", reason),
            PngError::Save { path, reason } => write!(
                f,
                "PNGファイル {} の保存に失敗しました: {}",
                path.display(),
                reason
            ),
        }
    }
}

impl std::error::Error for PngError {}
