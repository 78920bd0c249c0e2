//! 수직형 기액 분리 용기 사이징. 계산 엔진은 라이브러리로 두고 CLI는 얇게 감싼다.

pub mod app;
pub mod calc;
pub mod config;
pub mod datasheet;
pub mod i18n;
pub mod input;
pub mod material_db;
pub mod pipe_db;
pub mod quantity;
pub mod report;
pub mod separator;
pub mod ui_cli;
pub mod units;

pub use calc::{Calc, ConfigGap, Indeterminate};
pub use input::SizingInput;
pub use separator::{size_vessel, SizingResult};
