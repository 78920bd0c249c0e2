//! 입력 스냅샷과 보고서 표시에 쓰는 단위 정의 및 변환 모듈 모음.
//!
//! 계산 엔진 내부 기준 단위는 °C, kg/cm²(g), m, m², m³ 이다.

pub mod area;
pub mod length;
pub mod pressure;
pub mod temperature;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{celsius_to_fahrenheit, convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
