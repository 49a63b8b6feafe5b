use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::cleanroom::{self, GmpStandard, PressureDropSheet};
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::conversion;
use crate::hvac::{psychrometrics, CalculationResults, HvacCalculator};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::room::{self, Room};

/// 클린룸 HVAC 부하 계산 도구
#[derive(Debug, Parser)]
#[command(name = "cleanroom_hvac_toolbox", version, about)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 출력 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    /// 로그를 JSON 한 줄 형식으로 출력
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 실 입력 파일로 부하를 계산하고 실별 결과와 합계를 출력한다
    Calc(RoomsArgs),
    /// 정규화된 실 목록을 CSV로 저장한다
    Export(ExportArgs),
    /// 등급/규정별 권장 환기 횟수를 조회한다
    AirChanges(AirChangesArgs),
    /// 선택된 압력손실 항목으로 정압과 여과 단수를 구한다
    StaticPressure(StaticPressureArgs),
    /// HVAC 단위를 변환한다
    Convert(ConvertArgs),
    /// 건구온도와 상대습도로 이슬점·수분량·밀도를 구한다
    Psychro(PsychroArgs),
}

#[derive(Debug, Args)]
pub struct RoomsArgs {
    /// `[[rooms]]` 테이블로 구성된 TOML 파일
    #[arg(long)]
    pub rooms: PathBuf,
    /// 실 이름/길이/폭/높이/표준이 빠진 실이 있으면 계산하지 않는다
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: RoomsArgs,
    /// 저장할 CSV 경로
    #[arg(long, default_value = "hvac-calculations.csv")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct AirChangesArgs {
    #[arg(long)]
    pub classification: String,
    /// EUGMP / WHO / TGA
    #[arg(long, default_value = "EUGMP")]
    pub standard: String,
}

#[derive(Debug, Args)]
pub struct StaticPressureArgs {
    /// `[filters]` 테이블과 `[[items]]` 배열로 구성된 TOML 파일
    #[arg(long)]
    pub items: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(long, value_enum)]
    pub kind: QuantityKind,
    #[arg(long, allow_negative_numbers = true)]
    pub value: f64,
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
}

#[derive(Debug, Args)]
pub struct PsychroArgs {
    /// 건구 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub temp_c: f64,
    /// 상대습도 [%]
    #[arg(long)]
    pub rh: f64,
}

fn load_checked_rooms(args: &RoomsArgs) -> Result<Vec<room::RoomInput>, AppError> {
    let inputs = room::load_rooms(&args.rooms)?;
    if args.strict {
        room::validate_rooms(&inputs)?;
    } else {
        room::require_rooms(&inputs)?;
    }
    Ok(inputs)
}

fn calculator_for(inputs: &[room::RoomInput], cfg: &Config) -> HvacCalculator {
    HvacCalculator::with_settings(inputs, &cfg.room_defaults, cfg.constants.clone())
}

/// 부하 계산 명령을 처리한다.
pub fn handle_calc(tr: &Translator, cfg: &Config, args: &RoomsArgs) -> Result<(), AppError> {
    let inputs = load_checked_rooms(args)?;
    let results = calculator_for(&inputs, cfg).calculate_all();
    print_results(tr, &results);
    Ok(())
}

/// CSV 내보내기 명령을 처리한다.
pub fn handle_export(tr: &Translator, cfg: &Config, args: &ExportArgs) -> Result<(), AppError> {
    let inputs = load_checked_rooms(&args.input)?;
    let csv = calculator_for(&inputs, cfg).export_csv();
    write_file(&args.out, &csv)?;
    println!("{} {}", tr.t(keys::EXPORT_DONE), args.out.display());
    Ok(())
}

/// 환기 횟수 조회 명령을 처리한다.
pub fn handle_air_changes(tr: &Translator, args: &AirChangesArgs) -> Result<(), AppError> {
    let rate = cleanroom::air_changes_for(&args.classification, &args.standard);
    let shown = rate
        .map(|r| r.to_string())
        .unwrap_or_else(|| tr.t(keys::AIR_CHANGES_NOT_FOUND).to_string());
    let standard = GmpStandard::parse(&args.standard)
        .map_or(args.standard.as_str(), |s| s.as_str());
    println!("{} {shown} ({standard})", tr.t(keys::AIR_CHANGES_RESULT));
    Ok(())
}

/// 정압 합산 명령을 처리한다.
pub fn handle_static_pressure(
    tr: &Translator,
    args: &StaticPressureArgs,
) -> Result<(), AppError> {
    let content = fs::read_to_string(&args.items)?;
    let sheet: PressureDropSheet = toml::from_str(&content).map_err(AppError::InputParse)?;
    println!("{} {}", tr.t(keys::STATIC_PRESSURE_RESULT), sheet.static_pressure());
    println!("{} {}", tr.t(keys::FILTRATION_STAGES_RESULT), sheet.filtration_stages());
    Ok(())
}

/// 단위 변환 명령을 처리한다.
pub fn handle_convert(tr: &Translator, args: &ConvertArgs) -> Result<(), AppError> {
    let result = conversion::convert(args.kind, args.value, &args.from, &args.to)?;
    println!("{} {result} {}", tr.t(keys::CONVERSION_RESULT), args.to.trim());
    Ok(())
}

/// 습공기 상태 명령을 처리한다.
pub fn handle_psychro(tr: &Translator, cfg: &Config, args: &PsychroArgs) -> Result<(), AppError> {
    let state = psychrometrics::air_state(args.temp_c, args.rh, &cfg.constants);
    println!(
        "{} {:.2} °C / {:.2} °F, {:.1} %RH",
        tr.t(keys::PSYCHRO_DRY_BULB),
        state.dry_bulb_c,
        state.dry_bulb_f,
        state.relative_humidity_pct
    );
    println!("{} {:.2}", tr.t(keys::PSYCHRO_DEW_POINT), state.dew_point_c);
    println!("{} {:.2}", tr.t(keys::PSYCHRO_GRAINS), state.grains_per_lb);
    println!("{} {:.5}", tr.t(keys::PSYCHRO_DENSITY), state.density_lb_per_ft3);
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "file written");
    Ok(())
}

fn print_room(room: &Room) {
    println!(
        "{:<3} {:<10} {:<20} {:>9.2} {:>10.1} {:>7.0} {:>8.0} {:>8.0} {:>9.3} {:>10.2} {:>9.2} {:>9.3}",
        room.s_no,
        room.ahu_no,
        room.room_name,
        room.area_m2,
        room.volume_cft,
        room.room_cfm,
        room.fresh_air_cfm,
        room.ahu_cfm,
        room.room_ac_load_tr,
        room.chilled_water_gpm,
        room.design_pipe_in,
        room.power_consumption_kw
    );
}

fn print_results(tr: &Translator, results: &CalculationResults) {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_TABLE_HEADER));
    for room in &results.room_breakdown {
        print_room(room);
    }
    println!("{}", tr.t(keys::TOTALS_HEADING));
    println!("{} {:.2}", tr.t(keys::TOTAL_AREA), results.total_area_m2);
    println!("{} {:.1}", tr.t(keys::TOTAL_VOLUME), results.total_volume_cft);
    println!("{} {:.0}", tr.t(keys::TOTAL_CFM), results.total_cfm);
    println!("{} {:.3}", tr.t(keys::TOTAL_AC_LOAD), results.total_ac_load_tr);
    println!(
        "{} {:.2}",
        tr.t(keys::TOTAL_CHILLED_WATER),
        results.total_chilled_water_gpm
    );
    println!("{} {:.3}", tr.t(keys::TOTAL_POWER), results.total_power_kw);
}
