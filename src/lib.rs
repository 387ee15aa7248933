//! 複数の画像を横一列に並べ、リッチメニュー用の1枚の PNG にまとめるライブラリ。
//!
//! キャンバス幅を画像の枚数で均等に分割し（最後の区画が端数を吸収）、
//! 各画像を区画いっぱいに引き伸ばして白背景のキャンバスへ貼り付けます。

pub mod domain;
pub mod error;
pub mod workflow;
