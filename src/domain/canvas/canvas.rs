// --- 依存モジュール ---

use super::png_file::{PngError, PngFile};
use crate::domain::slot_layout::Slot;
use crate::domain::source_image::SourceImage;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, GenericImage, ImageEncoder, RgbImage};
use std::fmt;

/// PNG が1辺に許す最大ピクセル数 (2^31 - 1)。
pub const PNG_MAX_DIMENSION: u32 = i32::MAX as u32;

/// リッチメニュー（コンパクト）画像の規定サイズ 2500x843。
pub const RICH_MENU_COMPACT: CanvasSize = CanvasSize {
    width: 2500,
    height: 843,
};

/// 出力キャンバスの寸法。
///
/// 幅・高さともに 1 以上 `PNG_MAX_DIMENSION` 以下で、RGB バッファのバイト数が
/// `usize` に収まることを保証します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

/// キャンバスの生成や貼り付け時に発生するエラー。
#[derive(Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// 幅または高さが 0。
    ZeroSize { width: u32, height: u32 },
    /// PNG の上限を超える、またはバッファを確保できない大きさ。
    TooLarge { width: u32, height: u32 },
    /// スロットがキャンバスの範囲外にはみ出している。
    SlotOutOfBounds { slot: Slot, canvas_width: u32 },
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroSize { width, height });
        }
        if width > PNG_MAX_DIMENSION || height > PNG_MAX_DIMENSION {
            return Err(CanvasError::TooLarge { width, height });
        }
        let size = Self { width, height };
        size.buffer_len().ok_or(CanvasError::TooLarge { width, height })?;
        Ok(size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB8 バッファのバイト数。`usize` に収まらなければ `None`。
    fn buffer_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(3)
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}px", self.width, self.height)
    }
}

/// 白背景で初期化された RGB のキャンバス。
///
/// 各ソース画像はスロットの大きさへ引き伸ばされてから、不透明のまま上書きで貼り付けられます。
pub struct Canvas {
    size: CanvasSize,
    buffer: RgbImage,
}

impl Canvas {
    /// 白で塗りつぶしたキャンバスを確保します。
    ///
    /// メモリを確保できない場合は panic せずに `CanvasError::TooLarge` を返します。
    pub fn new(size: CanvasSize) -> Result<Self, CanvasError> {
        let too_large = || CanvasError::TooLarge {
            width: size.width,
            height: size.height,
        };
        let len = size.buffer_len().ok_or_else(too_large)?;

        let mut raw: Vec<u8> = Vec::new();
        raw.try_reserve_exact(len).map_err(|_| too_large())?;
        raw.resize(len, 255);

        let buffer = RgbImage::from_raw(size.width, size.height, raw).ok_or_else(too_large)?;
        Ok(Self { size, buffer })
    }

    /// ソース画像を `(slot.width, キャンバス高さ)` にリサイズし、`(slot.x, 0)` に貼り付けます。
    pub fn paste(&mut self, image: &SourceImage, slot: &Slot) -> Result<(), CanvasError> {
        let canvas_width = self.size.width;
        let out_of_bounds = || CanvasError::SlotOutOfBounds {
            slot: *slot,
            canvas_width,
        };
        let fits = slot
            .x
            .checked_add(slot.width)
            .is_some_and(|end| end <= canvas_width);
        if slot.width == 0 || !fits {
            return Err(out_of_bounds());
        }

        let resized = image.resized_rgb(slot.width, self.size.height);
        self.buffer
            .copy_from(&resized, slot.x, 0)
            .map_err(|_| out_of_bounds())
    }

    /// キャンバスを PNG としてメモリ上にエンコードします。
    ///
    /// 圧縮率優先（Best + Adaptive フィルタ）。タイムスタンプ等は書き込まないため、
    /// 同じ内容からは常に同じバイト列が得られます。
    pub fn encode_png(&self) -> Result<PngFile, PngError> {
        let mut data: Vec<u8> = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut data, CompressionType::Best, FilterType::Adaptive);
        encoder
            .write_image(
                self.buffer.as_raw(),
                self.size.width,
                self.size.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| PngError::Encode(e.to_string()))?;

        Ok(PngFile::new(data, self.size))
    }
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::ZeroSize { width, height } => write!(
                f,
                "キャンバスの幅と高さは 1 以上にしてください (指定: {}x{})。",
                width, height
            ),
            CanvasError::TooLarge { width, height } => write!(
                f,
                "キャンバス {}x{} は大きすぎます (1辺 {}px まで)。",
                width, height, PNG_MAX_DIMENSION
            ),
            CanvasError::SlotOutOfBounds { slot, canvas_width } => write!(
                f,
                "スロット {} (x={}, width={}) がキャンバス幅 {}px を超えています。",
                slot.index + 1,
                slot.x,
                slot.width,
                canvas_width
            ),
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::path::Path;

    fn solid_source(width: u32, height: u32, color: [u8; 3]) -> SourceImage {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .expect("PNGのエンコードに失敗");
        SourceImage::from_bytes(Path::new("solid.png"), &bytes).unwrap()
    }

    #[test]
    fn canvas_size_rejects_zero() {
        assert_eq!(
            CanvasSize::new(0, 843),
            Err(CanvasError::ZeroSize {
                width: 0,
                height: 843
            })
        );
        assert!(CanvasSize::new(2500, 0).is_err());
        assert_eq!(CanvasSize::new(2500, 843).unwrap(), RICH_MENU_COMPACT);
    }

    #[test]
    fn canvas_size_rejects_dimensions_beyond_png_limit() {
        assert_eq!(
            CanvasSize::new(u32::MAX, u32::MAX),
            Err(CanvasError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
        assert!(matches!(
            CanvasSize::new(PNG_MAX_DIMENSION + 1, 1),
            Err(CanvasError::TooLarge { .. })
        ));
        assert!(matches!(
            CanvasSize::new(1, PNG_MAX_DIMENSION + 1),
            Err(CanvasError::TooLarge { .. })
        ));
        assert!(CanvasSize::new(PNG_MAX_DIMENSION, 1).is_ok());
    }

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::new(CanvasSize::new(5, 3).unwrap()).unwrap();
        assert_eq!(canvas.buffer.dimensions(), (5, 3));
        assert!(canvas.buffer.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn paste_fills_only_its_slot() {
        let mut canvas = Canvas::new(CanvasSize::new(30, 10).unwrap()).unwrap();
        let slot = Slot {
            index: 1,
            x: 10,
            width: 10,
        };
        canvas.paste(&solid_source(3, 7, [0, 0, 255]), &slot).unwrap();

        let buf = &canvas.buffer;
        assert_eq!(buf.get_pixel(9, 5).0, [255, 255, 255]);
        assert_eq!(buf.get_pixel(10, 0).0, [0, 0, 255]);
        assert_eq!(buf.get_pixel(19, 9).0, [0, 0, 255]);
        assert_eq!(buf.get_pixel(20, 5).0, [255, 255, 255]);
    }

    #[test]
    fn paste_outside_canvas_is_rejected() {
        let mut canvas = Canvas::new(CanvasSize::new(30, 10).unwrap()).unwrap();
        let slot = Slot {
            index: 2,
            x: 25,
            width: 10,
        };
        let err = canvas
            .paste(&solid_source(2, 2, [1, 2, 3]), &slot)
            .unwrap_err();
        assert_eq!(
            err,
            CanvasError::SlotOutOfBounds {
                slot,
                canvas_width: 30
            }
        );
    }

    #[test]
    fn encode_png_round_trips_dimensions() {
        let canvas = Canvas::new(RICH_MENU_COMPACT).unwrap();
        let png = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(png.data()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2500, 843));
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn encode_png_is_deterministic() {
        let mut canvas = Canvas::new(CanvasSize::new(64, 16).unwrap()).unwrap();
        canvas
            .paste(
                &solid_source(4, 4, [12, 34, 56]),
                &Slot {
                    index: 0,
                    x: 0,
                    width: 32,
                },
            )
            .unwrap();
        let a = canvas.encode_png().unwrap();
        let b = canvas.encode_png().unwrap();
        assert_eq!(a.data(), b.data());
    }
}
