use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(value_c),
    }
}

/// 허용응력 표(°F 기준) 조회에 쓰는 환산식.
pub fn celsius_to_fahrenheit(value_c: f64) -> f64 {
    value_c * 1.8 + 32.0
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
