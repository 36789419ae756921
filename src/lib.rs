//! 連番のJPEGフレームを1つのアニメーションGIFにまとめるライブラリ。

pub mod config;
pub mod domain;
pub mod error;
