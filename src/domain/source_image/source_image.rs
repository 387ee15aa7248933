use super::source_path::SourcePath;
use image::{DynamicImage, GenericImageView, RgbImage};
use std::fmt;
use std::path::{Path, PathBuf};

/// デコード済みのソース画像。
///
/// 読み込み後は変更せず、貼り付け用にはリサイズした別のバッファを生成します。
/// キャンバスへ貼り付けた後は不要になるため、ループの1回分だけ保持される想定です。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
}

/// ソース画像の読み込み・デコードに失敗した場合のエラー。
///
/// `path` には問題のあったファイル、`reason` には元のエラー内容が入ります。
#[derive(Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub path: PathBuf,
    pub reason: String,
}

impl SourceImage {
    /// 検証済みのパスからファイルを読み込み、画像としてデコードします。
    ///
    /// フォーマットは拡張子ではなくファイル先頭のバイト列から判定します。
    pub fn load(source: &SourcePath) -> Result<Self, DecodeError> {
        let bytes = source.read_bytes().map_err(|e| DecodeError {
            path: source.as_path().to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(source.as_path(), &bytes)
    }

    /// メモリ上のバイト列から画像をデコードします。`path` はエラー表示用です。
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, DecodeError> {
        let image = image::load_from_memory(bytes).map_err(|e| DecodeError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { image })
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 縦横比を無視して `(width, height)` ちょうどに引き伸ばし、RGB8 に変換します。
    ///
    /// リサンプリングは Lanczos3。アルファチャンネルは合成せずに捨てます。
    pub fn resized_rgb(&self, width: u32, height: u32) -> RgbImage {
        self.image
            .resize_exact(width, height, image::imageops::FilterType::Lanczos3)
            .to_rgb8()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "画像 {} のデコードに失敗しました: {}",
            self.path.display(),
            self.reason
        )
    }
}

impl std::error::Error for DecodeError {}
