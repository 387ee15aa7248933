use std::fmt;

/// キャンバスを横方向に分割した1区画（スロット）。
///
/// 各ソース画像はちょうど1つのスロットに割り当てられます。
/// スロットは計算で求める値であり、保存はしません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub x: u32,
    pub width: u32,
}

/// スロット計算時の検証エラー。
#[derive(Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// スロット数が 0。
    NoSlots,
    /// スロット数がキャンバス幅を超えており、幅 0 のスロットができてしまう。
    TooManySlots { count: usize, canvas_width: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoSlots => write!(f, "スロット数が 0 です。"),
            LayoutError::TooManySlots {
                count,
                canvas_width,
            } => write!(
                f,
                "スロット数 {} がキャンバス幅 {}px を超えています。",
                count, canvas_width
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// キャンバス幅を `count` 個のスロットに横方向で分割します。
///
/// 基本幅は `canvas_width / count`（切り捨て）で、最後のスロットだけが
/// 切り捨てで余った幅を吸収します。これによりスロットは隙間も重なりもなく
/// キャンバス全体を覆います。
///
/// 例: 幅 2500 を 3 分割すると `[833, 833, 834]`、x は `[0, 833, 1666]`。
pub fn horizontal_slots(canvas_width: u32, count: usize) -> Result<Vec<Slot>, LayoutError> {
    if count == 0 {
        return Err(LayoutError::NoSlots);
    }
    if count as u64 > canvas_width as u64 {
        return Err(LayoutError::TooManySlots {
            count,
            canvas_width,
        });
    }

    // count <= canvas_width なので u32 に収まる
    let n = count as u32;
    let base_width = canvas_width / n;
    let last_width = canvas_width - base_width * (n - 1);

    Ok((0..n)
        .map(|i| Slot {
            index: i as usize,
            x: i * base_width,
            width: if i == n - 1 { last_width } else { base_width },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_slots_over_rich_menu_width() {
        let slots = horizontal_slots(2500, 3).unwrap();
        let widths: Vec<u32> = slots.iter().map(|s| s.width).collect();
        let offsets: Vec<u32> = slots.iter().map(|s| s.x).collect();
        assert_eq!(widths, vec![833, 833, 834]);
        assert_eq!(offsets, vec![0, 833, 1666]);
    }

    #[test]
    fn single_slot_covers_whole_canvas() {
        let slots = horizontal_slots(2500, 1).unwrap();
        assert_eq!(
            slots,
            vec![Slot {
                index: 0,
                x: 0,
                width: 2500
            }]
        );
    }

    /// 任意の組み合わせで、幅の合計がキャンバス幅と一致し、隙間なく並ぶことを確認します。
    #[test]
    fn slots_always_tile_the_canvas() {
        for canvas_width in [1u32, 2, 7, 100, 843, 1000, 2500, 2501] {
            for count in 1..=12usize {
                if count as u32 > canvas_width {
                    continue;
                }
                let slots = horizontal_slots(canvas_width, count).unwrap();
                assert_eq!(slots.len(), count);

                let total: u32 = slots.iter().map(|s| s.width).sum();
                assert_eq!(total, canvas_width, "w={} n={}", canvas_width, count);

                let mut expected_x = 0;
                for slot in &slots {
                    assert_eq!(slot.x, expected_x);
                    assert!(slot.width > 0);
                    expected_x += slot.width;
                }

                // 最後以外は基本幅、最後は余りを吸収
                let base = canvas_width / count as u32;
                for slot in &slots[..count - 1] {
                    assert_eq!(slot.width, base);
                }
                assert_eq!(
                    slots[count - 1].width,
                    base + canvas_width % count as u32
                );
            }
        }
    }

    #[test]
    fn zero_slots_is_rejected() {
        assert_eq!(horizontal_slots(2500, 0), Err(LayoutError::NoSlots));
    }

    #[test]
    fn more_slots_than_pixels_is_rejected() {
        assert_eq!(
            horizontal_slots(2, 3),
            Err(LayoutError::TooManySlots {
                count: 3,
                canvas_width: 2
            })
        );
    }
}
