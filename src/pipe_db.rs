//! 노즐 내경 조회용 배관 테이블 (호칭경[in] × 스케줄 → 내경[m]).
//! ASME B36.10M/B36.19M 기준 근사치이며 일부 조합은 존재하지 않는다.
use crate::calc::{Calc, Indeterminate};

#[derive(Debug)]
pub struct PipeSize {
    /// 호칭경 표기 (예: "1.5", "8")
    pub nominal: &'static str,
    /// (스케줄, 내경[m])
    pub schedules: &'static [(&'static str, f64)],
}

fn find_nominal(nominal: &str) -> Option<&'static PipeSize> {
    let nominal = nominal.trim();
    PIPES.iter().find(|p| p.nominal == nominal)
}

/// 해당 호칭경에 존재하는 스케줄 목록. 호칭경이 없으면 빈 목록.
pub fn schedules_for(nominal: &str) -> Vec<&'static str> {
    find_nominal(nominal)
        .map(|p| p.schedules.iter().map(|(s, _)| *s).collect())
        .unwrap_or_default()
}

/// 호칭경/스케줄 조합의 내경[m]을 조회한다. 스케줄 표기는 대소문자를 구분하지 않는다.
pub fn internal_diameter(nominal: &str, schedule: &str) -> Calc<f64> {
    let schedule = schedule.trim();
    find_nominal(nominal)
        .and_then(|p| {
            p.schedules
                .iter()
                .find(|(s, _)| s.eq_ignore_ascii_case(schedule))
                .map(|(_, id)| *id)
        })
        .ok_or_else(|| {
            Indeterminate::MissingTableEntry(format!("배관 DN {nominal}\" Sch {schedule}"))
        })
}

const PIPES: &[PipeSize] = &[
    PipeSize {
        nominal: "1.5",
        schedules: &[
            ("5S", 0.045),
            ("10S", 0.0427),
            ("STD", 0.0409),
            ("40", 0.0409),
            ("XS", 0.0381),
            ("80", 0.0381),
            ("160", 0.034),
            ("XXS", 0.028),
        ],
    },
    PipeSize {
        nominal: "2",
        schedules: &[
            ("5S", 0.057),
            ("10S", 0.0548),
            ("STD", 0.0525),
            ("40", 0.0525),
            ("XS", 0.0493),
            ("80", 0.0493),
            ("160", 0.0428),
            ("XXS", 0.038),
        ],
    },
    PipeSize {
        nominal: "3",
        schedules: &[
            ("5S", 0.0847),
            ("10S", 0.0828),
            ("STD", 0.0779),
            ("40", 0.0779),
            ("XS", 0.0737),
            ("80", 0.0737),
            ("160", 0.0666),
            ("XXS", 0.058),
        ],
    },
    PipeSize {
        nominal: "4",
        schedules: &[
            ("5S", 0.11),
            ("10S", 0.108),
            ("STD", 0.102),
            ("40", 0.102),
            ("XS", 0.0972),
            ("80", 0.0972),
            ("120", 0.092),
            ("160", 0.0873),
            ("XXS", 0.08),
        ],
    },
    PipeSize {
        nominal: "6",
        schedules: &[
            ("5S", 0.163),
            ("10S", 0.161),
            ("STD", 0.154),
            ("40", 0.154),
            ("XS", 0.146),
            ("80", 0.146),
            ("120", 0.14),
            ("160", 0.132),
            ("XXS", 0.124),
        ],
    },
    PipeSize {
        nominal: "8",
        schedules: &[
            ("5S", 0.214),
            ("10S", 0.212),
            ("20", 0.206),
            ("30", 0.205),
            ("STD", 0.203),
            ("40", 0.203),
            ("60", 0.198),
            ("XS", 0.194),
            ("80", 0.194),
            ("100", 0.189),
            ("120", 0.183),
            ("140", 0.178),
            ("160", 0.173),
            ("XXS", 0.175),
        ],
    },
    PipeSize {
        nominal: "10",
        schedules: &[
            ("5S", 0.266),
            ("10S", 0.265),
            ("20", 0.26),
            ("30", 0.257),
            ("STD", 0.255),
            ("40", 0.255),
            ("60", 0.248),
            ("XS", 0.248),
            ("80", 0.243),
            ("100", 0.237),
            ("120", 0.23),
            ("140", 0.222),
            ("160", 0.216),
            ("XXS", 0.222),
        ],
    },
    PipeSize {
        nominal: "12",
        schedules: &[
            ("5S", 0.316),
            ("10S", 0.315),
            ("20", 0.311),
            ("30", 0.307),
            ("STD", 0.305),
            ("40", 0.303),
            ("60", 0.295),
            ("XS", 0.298),
            ("80", 0.289),
            ("100", 0.281),
            ("120", 0.273),
            ("140", 0.267),
            ("160", 0.257),
            ("XXS", 0.237),
        ],
    },
    PipeSize {
        nominal: "14",
        schedules: &[
            ("5S", 0.348),
            ("10S", 0.346),
            ("10", 0.343),
            ("20", 0.34),
            ("30", 0.337),
            ("STD", 0.337),
            ("40", 0.333),
            ("60", 0.325),
            ("XS", 0.33),
            ("80", 0.318),
            ("100", 0.308),
            ("120", 0.3),
            ("140", 0.292),
            ("160", 0.284),
        ],
    },
    PipeSize {
        nominal: "16",
        schedules: &[
            ("5S", 0.398),
            ("10S", 0.398),
            ("10", 0.394),
            ("20", 0.391),
            ("30", 0.387),
            ("STD", 0.387),
            ("40", 0.381),
            ("60", 0.373),
            ("XS", 0.381),
            ("80", 0.364),
            ("100", 0.354),
            ("120", 0.344),
            ("140", 0.333),
            ("160", 0.325),
        ],
    },
    PipeSize {
        nominal: "18",
        schedules: &[
            ("5S", 0.449),
            ("10S", 0.448),
            ("10", 0.445),
            ("20", 0.441),
            ("30", 0.435),
            ("STD", 0.438),
            ("40", 0.429),
            ("60", 0.419),
            ("XS", 0.432),
            ("80", 0.41),
            ("100", 0.398),
            ("120", 0.387),
            ("140", 0.378),
            ("160", 0.367),
        ],
    },
    PipeSize {
        nominal: "20",
        schedules: &[
            ("5S", 0.498),
            ("10S", 0.497),
            ("10", 0.495),
            ("20", 0.489),
            ("30", 0.483),
            ("STD", 0.489),
            ("40", 0.478),
            ("60", 0.467),
            ("XS", 0.483),
            ("80", 0.456),
            ("100", 0.443),
            ("120", 0.432),
            ("140", 0.419),
            ("160", 0.408),
        ],
    },
    PipeSize {
        nominal: "24",
        schedules: &[
            ("5S", 0.599),
            ("10S", 0.597),
            ("10", 0.597),
            ("20", 0.591),
            ("30", 0.581),
            ("STD", 0.581),
            ("40", 0.575),
            ("60", 0.56),
            ("XS", 0.584),
            ("80", 0.548),
            ("100", 0.532),
            ("120", 0.518),
            ("140", 0.505),
            ("160", 0.491),
        ],
    },
    PipeSize {
        nominal: "26",
        schedules: &[("10", 0.645), ("20", 0.635), ("STD", 0.641), ("XS", 0.635)],
    },
    PipeSize {
        nominal: "28",
        schedules: &[
            ("10", 0.695),
            ("20", 0.686),
            ("30", 0.679),
            ("STD", 0.692),
            ("XS", 0.686),
        ],
    },
    PipeSize {
        nominal: "30",
        schedules: &[
            ("5S", 0.749),
            ("10S", 0.746),
            ("10", 0.746),
            ("20", 0.737),
            ("30", 0.73),
            ("STD", 0.743),
            ("XS", 0.737),
        ],
    },
    PipeSize {
        nominal: "32",
        schedules: &[
            ("10", 0.797),
            ("20", 0.784),
            ("30", 0.781),
            ("STD", 0.794),
            ("40", 0.778),
            ("XS", 0.787),
        ],
    },
    PipeSize {
        nominal: "34",
        schedules: &[
            ("10", 0.848),
            ("20", 0.838),
            ("30", 0.832),
            ("STD", 0.845),
            ("40", 0.829),
            ("XS", 0.838),
        ],
    },
    PipeSize {
        nominal: "36",
        schedules: &[
            ("10", 0.899),
            ("20", 0.889),
            ("30", 0.883),
            ("STD", 0.895),
            ("40", 0.876),
            ("XS", 0.889),
        ],
    },
    PipeSize {
        nominal: "42",
        schedules: &[("STD", 1.048), ("XS", 1.041)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_on_schedule() {
        assert_eq!(internal_diameter("8", "std"), Ok(0.203));
        assert_eq!(internal_diameter("1.5", "40"), Ok(0.0409));
    }

    #[test]
    fn missing_combination_is_table_miss() {
        assert!(matches!(
            internal_diameter("26", "5S"),
            Err(Indeterminate::MissingTableEntry(_))
        ));
        assert!(internal_diameter("5", "40").is_err());
    }

    #[test]
    fn schedules_listing() {
        assert_eq!(schedules_for("42"), vec!["STD", "XS"]);
        assert!(schedules_for("7").is_empty());
    }
}
