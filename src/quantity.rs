use crate::calc::{Calc, Indeterminate};

/// 절대 영도(°C).
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// 입력으로 다루는 물리량 종류와 각 종류의 검증 규칙을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 온도(°C). 절대 영도 이상이어야 한다.
    Temperature,
    /// 게이지 압력(kg/cm²). 진공 운전은 다루지 않는다.
    Pressure,
    Density,
    MassFlow,
    Viscosity,
    SurfaceTension,
    MolecularWeight,
    Length,
    /// 음수가 허용되는 길이 (예: 구형 하부의 바닥~LSAL 거리)
    SignedLength,
    Area,
    Volume,
    /// 체류 시간(분)
    Time,
    /// 0~1 범위의 비율 (carry-over, 이음 효율)
    Fraction,
    /// 양수여야 하는 무차원 계수 (안전율)
    Factor,
}

/// 물리량 종류별 범위를 검사하고 통과한 값을 그대로 돌려준다.
///
/// 내부 기준: 온도=°C, 압력=kg/cm²(g), 밀도=kg/m³, 질량유량=kg/h, 길이=m,
/// 면적=m², 체적=m³, 시간=min.
pub fn validate(kind: QuantityKind, field: &'static str, value: f64) -> Calc<f64> {
    if !value.is_finite() {
        return Err(Indeterminate::OutOfRange {
            field,
            reason: "유한한 값이어야 함",
        });
    }
    let ok = match kind {
        QuantityKind::Temperature => value >= ABSOLUTE_ZERO_C,
        QuantityKind::SignedLength => true,
        QuantityKind::Fraction => (0.0..=1.0).contains(&value),
        QuantityKind::Factor => value > 0.0,
        _ => value >= 0.0,
    };
    if ok {
        Ok(value)
    } else {
        Err(Indeterminate::OutOfRange {
            field,
            reason: reason_for(kind),
        })
    }
}

fn reason_for(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Temperature => "절대 영도 미만",
        QuantityKind::Fraction => "0~1 범위를 벗어남",
        QuantityKind::Factor => "0보다 커야 함",
        _ => "음수",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_below_absolute_zero_rejected() {
        assert!(validate(QuantityKind::Temperature, "t", -300.0).is_err());
        assert!(validate(QuantityKind::Temperature, "t", -40.0).is_ok());
    }

    #[test]
    fn negative_density_rejected() {
        let err = validate(QuantityKind::Density, "vapor_density", -1.0).unwrap_err();
        assert_eq!(
            err,
            Indeterminate::OutOfRange {
                field: "vapor_density",
                reason: "음수"
            }
        );
    }

    #[test]
    fn fraction_bounds() {
        assert!(validate(QuantityKind::Fraction, "carry_over", 1.2).is_err());
        assert!(validate(QuantityKind::Fraction, "carry_over", 0.008).is_ok());
        assert!(validate(QuantityKind::SignedLength, "h0", -0.39).is_ok());
        assert!(validate(QuantityKind::Density, "rho", f64::NAN).is_err());
    }
}
