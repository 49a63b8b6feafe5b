/// 단위 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum QuantityKind {
    Temperature,
    Airflow,
    WaterFlow,
    HeatRate,
    Power,
    Length,
    Area,
    Volume,
}
