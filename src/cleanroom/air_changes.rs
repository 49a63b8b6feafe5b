//! 등급/표준별 권장 시간당 환기 횟수 표와 조회를 제공한다.
//! 값은 GMP 가이드라인 요약이며 설계 시 해당 규정 원문으로 확인해야 한다.

/// 환기 횟수 기준을 정한 규정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmpStandard {
    /// EU GMP Annex 1
    Eugmp,
    /// WHO GMP
    Who,
    /// 호주 TGA
    Tga,
}

impl GmpStandard {
    /// 대소문자를 무시하고 규정 이름을 해석한다. ("EU GMP", "eugmp" 모두 허용)
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase();
        match key.as_str() {
            "EUGMP" => Some(GmpStandard::Eugmp),
            "WHO" => Some(GmpStandard::Who),
            "TGA" => Some(GmpStandard::Tga),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GmpStandard::Eugmp => "EUGMP",
            GmpStandard::Who => "WHO",
            GmpStandard::Tga => "TGA",
        }
    }
}

/// 권장 환기 횟수 표기.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirChangeRate {
    /// 단일 값 (회/h)
    Fixed(u32),
    /// 범위 (하한, 상한) 회/h
    Range(u32, u32),
    /// 환기 횟수 대신 ULPA 층류 공급
    Ulpa,
}

impl AirChangeRate {
    /// 실 입력에 넣을 수 있는 숫자 값. 범위는 하한을 쓰고 ULPA는 None.
    pub fn design_value(&self) -> Option<f64> {
        match self {
            AirChangeRate::Fixed(n) => Some(f64::from(*n)),
            AirChangeRate::Range(low, _) => Some(f64::from(*low)),
            AirChangeRate::Ulpa => None,
        }
    }
}

impl std::fmt::Display for AirChangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AirChangeRate::Fixed(n) => write!(f, "{n}"),
            AirChangeRate::Range(low, high) => write!(f, "{low}-{high}"),
            AirChangeRate::Ulpa => write!(f, "ULPA"),
        }
    }
}

/// 등급 하나에 대한 규정별 권장값.
#[derive(Debug)]
pub struct ClassAirChanges {
    pub classification: &'static str,
    pub eugmp: Option<AirChangeRate>,
    pub who: Option<AirChangeRate>,
    pub tga: Option<AirChangeRate>,
}

impl ClassAirChanges {
    pub fn rate(&self, standard: GmpStandard) -> Option<AirChangeRate> {
        match standard {
            GmpStandard::Eugmp => self.eugmp,
            GmpStandard::Who => self.who,
            GmpStandard::Tga => self.tga,
        }
    }
}

const fn all(
    classification: &'static str,
    eugmp: AirChangeRate,
    who: AirChangeRate,
    tga: AirChangeRate,
) -> ClassAirChanges {
    ClassAirChanges {
        classification,
        eugmp: Some(eugmp),
        who: Some(who),
        tga: Some(tga),
    }
}

const fn tga_only(classification: &'static str, tga: AirChangeRate) -> ClassAirChanges {
    ClassAirChanges {
        classification,
        eugmp: None,
        who: None,
        tga: Some(tga),
    }
}

use AirChangeRate::{Fixed, Range, Ulpa};

static CLASSES: &[ClassAirChanges] = &[
    all(
        "Grade D (ISO 7 at Rest & ISO 8 in Oper.)",
        Range(20, 25),
        Fixed(20),
        Fixed(20),
    ),
    all(
        "Grade C (ISO 7 at Rest & ISO 7 in Oper.)",
        Range(40, 50),
        Fixed(40),
        Fixed(40),
    ),
    all(
        "Grade B (ISO 5 at Rest & ISO 7 in Oper.)",
        Range(60, 80),
        Fixed(60),
        Fixed(60),
    ),
    all("Grade A (ISO 5 at Rest & ISO 5 in Oper.)", Ulpa, Ulpa, Ulpa),
    tga_only("3500 K", Fixed(20)),
    tga_only("350 J", Fixed(40)),
    tga_only("35 G or H", Fixed(60)),
    tga_only("3.5 E or F", Ulpa),
];

/// 등록된 전체 등급 목록
pub fn classes() -> &'static [ClassAirChanges] {
    CLASSES
}

/// 등급 이름으로 조회한다. 대소문자는 무시한다.
pub fn find_class(classification: &str) -> Option<&'static ClassAirChanges> {
    CLASSES
        .iter()
        .find(|c| c.classification.eq_ignore_ascii_case(classification.trim()))
}

/// 등급과 규정으로 권장 환기 횟수를 찾는다.
///
/// 규정에 해당하는 값이 없거나 규정 이름을 모르면 같은 등급의 EUGMP 값으로 대신한다.
/// 등급 자체가 없으면 None (화면에는 "N/A").
pub fn air_changes_for(classification: &str, standard: &str) -> Option<AirChangeRate> {
    let class = find_class(classification)?;
    GmpStandard::parse(standard)
        .and_then(|s| class.rate(s))
        .or(class.eugmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_c_by_standard() {
        let grade_c = "Grade C (ISO 7 at Rest & ISO 7 in Oper.)";
        assert_eq!(air_changes_for(grade_c, "WHO"), Some(Fixed(40)));
        assert_eq!(air_changes_for(grade_c, "EUGMP"), Some(Range(40, 50)));
        assert_eq!(air_changes_for(grade_c, "EUGMP").unwrap().to_string(), "40-50");
    }

    #[test]
    fn unknown_standard_falls_back_to_eugmp() {
        let grade_d = "Grade D (ISO 7 at Rest & ISO 8 in Oper.)";
        assert_eq!(air_changes_for(grade_d, "FDA"), Some(Range(20, 25)));
    }

    #[test]
    fn tga_only_class_without_eugmp_is_none_for_other_standards() {
        assert_eq!(air_changes_for("350 J", "TGA"), Some(Fixed(40)));
        assert_eq!(air_changes_for("350 J", "WHO"), None);
        assert_eq!(air_changes_for("ISO 9", "WHO"), None);
    }

    #[test]
    fn design_value_uses_lower_bound() {
        assert_eq!(Range(60, 80).design_value(), Some(60.0));
        assert_eq!(Ulpa.design_value(), None);
        assert_eq!(GmpStandard::parse("eu gmp"), Some(GmpStandard::Eugmp));
    }
}
