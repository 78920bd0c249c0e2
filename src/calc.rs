//! 계산 결과 타입. 각 출력 필드는 값 또는 "산출 불가" 사유를 가진다.
//!
//! 한 필드가 실패해도 계산 패스 전체가 중단되지 않는다. 의존 필드는 `?`로 상위
//! 사유를 그대로 물려받고, 독립적인 분기는 계속 계산된다.

use thiserror::Error;

/// 수식이 구현되지 않은 구성을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigGap {
    /// 수평형 용기
    HorizontalVessel,
    /// 3상(액-액) 분리
    ThreePhase,
}

impl std::fmt::Display for ConfigGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigGap::HorizontalVessel => write!(f, "수평형 용기"),
            ConfigGap::ThreePhase => write!(f, "3상 분리"),
        }
    }
}

/// 필드를 산출할 수 없는 이유.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Indeterminate {
    /// 필요한 입력이 비어 있음
    #[error("입력 없음: {0}")]
    Missing(&'static str),
    /// 숫자로 해석할 수 없는 입력
    #[error("숫자가 아님: {field} = {raw:?}")]
    NotNumeric { field: &'static str, raw: String },
    /// 물리적으로 허용되지 않는 입력 범위
    #[error("허용 범위 밖: {field} ({reason})")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
    /// 0으로 나누기, 음수 제곱근 등 수식 정의역 위반
    #[error("정의역 위반: {0}")]
    Domain(&'static str),
    /// 재질/배관 테이블에 항목이 없음
    #[error("테이블 항목 없음: {0}")]
    MissingTableEntry(String),
    /// 해당 구성에 대한 수식이 구현되지 않음
    #[error("미구현 구성: {0}")]
    NotImplemented(ConfigGap),
}

impl Indeterminate {
    /// 잘못된 입력이 아니라 구성 미지원으로 인한 실패인지 확인한다.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Indeterminate::NotImplemented(_))
    }
}

/// 필드 단위 계산 결과.
pub type Calc<T> = Result<T, Indeterminate>;

/// 0 또는 비유한 값으로 나누는 것을 막는다.
pub fn divide(numerator: f64, denominator: f64, what: &'static str) -> Calc<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(Indeterminate::Domain(what));
    }
    finite(numerator / denominator, what)
}

/// 음수 제곱근을 막는다.
pub fn sqrt(value: f64, what: &'static str) -> Calc<f64> {
    if value < 0.0 {
        return Err(Indeterminate::Domain(what));
    }
    finite(value.sqrt(), what)
}

/// 거듭제곱 결과가 NaN/무한대이면 산출 불가로 처리한다.
pub fn powf(base: f64, exp: f64, what: &'static str) -> Calc<f64> {
    finite(base.powf(exp), what)
}

fn finite(value: f64, what: &'static str) -> Calc<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Indeterminate::Domain(what))
    }
}
