use super::{is_set, RoomInput};

/// 계산 전에 통합 측에서 선택적으로 수행하는 실 입력 완결성 검사 오류.
///
/// 계산 엔진 자체는 이 검사를 하지 않는다. 누락 값은 엔진에서 기본값으로 채워진다.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomValidationError {
    /// 실이 하나도 없음
    NoRooms,
    /// 필수 필드가 빠진 실이 있음
    Incomplete(Vec<IncompleteRoom>),
}

/// 필수 필드가 빠진 실 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct IncompleteRoom {
    /// 1부터 시작하는 입력 순번
    pub s_no: usize,
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for RoomValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomValidationError::NoRooms => write!(f, "설정된 실이 없습니다."),
            RoomValidationError::Incomplete(rooms) => {
                write!(f, "필수 항목이 비어 있는 실이 있습니다:")?;
                for room in rooms {
                    write!(f, " [#{} {}]", room.s_no, room.missing.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RoomValidationError {}

/// 실 목록이 비어 있지 않은지만 확인한다.
pub fn require_rooms(inputs: &[RoomInput]) -> Result<(), RoomValidationError> {
    if inputs.is_empty() {
        Err(RoomValidationError::NoRooms)
    } else {
        Ok(())
    }
}

fn missing_fields(input: &RoomInput) -> Vec<&'static str> {
    let has_text = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    let has_num = |v: Option<f64>| v.is_some_and(is_set);

    let mut missing = Vec::new();
    if !has_text(&input.room_name) {
        missing.push("room_name");
    }
    if !has_num(input.length_m) {
        missing.push("length_m");
    }
    if !has_num(input.width_m) {
        missing.push("width_m");
    }
    if !has_num(input.height_ft) {
        missing.push("height_ft");
    }
    if !has_text(&input.standard) {
        missing.push("standard");
    }
    missing
}

/// 실 이름, 길이, 폭, 높이, 표준이 모두 입력되었는지 검사한다.
pub fn validate_rooms(inputs: &[RoomInput]) -> Result<(), RoomValidationError> {
    require_rooms(inputs)?;
    let incomplete: Vec<IncompleteRoom> = inputs
        .iter()
        .enumerate()
        .filter_map(|(idx, input)| {
            let missing = missing_fields(input);
            (!missing.is_empty()).then_some(IncompleteRoom {
                s_no: idx + 1,
                missing,
            })
        })
        .collect();
    if incomplete.is_empty() {
        Ok(())
    } else {
        Err(RoomValidationError::Incomplete(incomplete))
    }
}
