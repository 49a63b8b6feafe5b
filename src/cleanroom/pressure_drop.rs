use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 정압 산정에 들어가는 압력손실 항목 하나 (필터, 코일, 덕트 등).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDropItem {
    pub name: String,
    /// 화면에서 입력받은 초기 압력손실 문자열. 앞부분 정수만 쓴다.
    pub initial_value: String,
    #[serde(default)]
    pub selected: bool,
}

/// 필터 선택 상태와 압력손실 항목을 묶은 입력 문서.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureDropSheet {
    /// 필터 이름 → 선택 여부
    pub filters: BTreeMap<String, bool>,
    pub items: Vec<PressureDropItem>,
}

impl PressureDropSheet {
    pub fn static_pressure(&self) -> f64 {
        static_pressure(&self.items)
    }

    pub fn filtration_stages(&self) -> usize {
        filtration_stages(self.filters.values().copied())
    }
}

/// 10진 정수 접두부를 읽는다. 앞 공백과 부호를 허용하고 숫자가 아닌 문자에서 멈춘다.
/// ("12 Pa" → 12, "  -3x" → -3, "abc" → None)
///
/// 값은 f64로 돌려준다. i64 범위를 넘는 자릿수도 버리지 않고 가장 가까운 f64가 된다.
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|v| sign * v)
}

/// 선택된 항목의 초기 압력손실 합. 읽을 수 없는 값은 0으로 본다.
///
/// f64로 누적하므로 넘침으로 멈추지 않는다. 아주 큰 값끼리는 정밀도만 잃는다.
pub fn static_pressure(items: &[PressureDropItem]) -> f64 {
    items
        .iter()
        .filter(|item| item.selected)
        .map(|item| parse_int_prefix(&item.initial_value).unwrap_or(0.0))
        .sum()
}

/// 선택된 필터 수 = 여과 단수
pub fn filtration_stages<I>(selected: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    selected.into_iter().filter(|s| *s).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str, selected: bool) -> PressureDropItem {
        PressureDropItem {
            name: "x".into(),
            initial_value: value.into(),
            selected,
        }
    }

    #[test]
    fn sums_selected_items_only() {
        let items = [
            item("10", true),
            item("25 Pa", true),
            item("99", false),
            item("n/a", true),
        ];
        assert_eq!(static_pressure(&items), 35.0);
    }

    #[test]
    fn int_prefix_parsing() {
        assert_eq!(parse_int_prefix("  -3x"), Some(-3.0));
        assert_eq!(parse_int_prefix("7.9"), Some(7.0));
        assert_eq!(parse_int_prefix("+"), None);
        assert_eq!(parse_int_prefix(""), None);
    }

    #[test]
    fn long_digit_runs_are_kept() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(1e20));
        assert_eq!(static_pressure(&[item("99999999999999999999 Pa", true)]), 1e20);
    }

    #[test]
    fn sum_past_i64_range_does_not_overflow() {
        let items = [item("9223372036854775807", true), item("1", true)];
        assert_eq!(static_pressure(&items), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn counts_selected_filters() {
        assert_eq!(filtration_stages([true, false, true]), 2);
    }
}
