use thiserror::Error;

use crate::timestamp::Timestamp;

/// タイムスタンプのパースに失敗した時のエラー。
#[derive(Debug, Error)]
pub enum TimestampError {
    /// `YYYY-MM-DD HH:MM`の形になっていない。
    #[error("time data '{input}' does not match format 'YYYY-MM-DD HH:MM'")]
    Malformed { input: String },

    /// 形は正しいが、存在しない日付や時刻を表している。
    #[error("time data '{input}' is not a valid date and time: {source}")]
    OutOfRange {
        input: String,
        source: chrono::ParseError,
    },

    /// 西暦1年より前の年を表している。
    #[error("time data '{input}' is not a valid date and time: year must be 1 or later")]
    YearOutOfRange { input: String },
}

/// 経過時間の計算に失敗した時のエラー。
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] TimestampError),

    #[error("Start time must be before end time")]
    Order { start: Timestamp, end: Timestamp },
}
