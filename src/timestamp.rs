use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::TimestampError;

/// 入出力に使うタイムスタンプのフォーマット。
const FORMAT: &str = "%Y-%m-%d %H:%M";

/// 分単位の精度を持つタイムゾーンなしの日時。
///
/// 文字列のパースか、現在時刻からのみ作られ、作成後に変更されることはない。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// `YYYY-MM-DD HH:MM`形式の文字列をパースする。
    ///
    /// 桁数と区切り文字は固定で、ゼロ埋めされていない値や前後の空白は受け付けない。
    /// 年は西暦1年以降に限る。
    ///
    /// # Arguments
    ///
    /// * `s` - パースする文字列
    ///
    /// # Examples
    ///
    /// ```
    /// let start = Timestamp::parse("2025-09-01 14:30").unwrap();
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        if !has_shape(s) {
            return Err(TimestampError::Malformed {
                input: s.to_string(),
            });
        }

        let datetime = NaiveDateTime::parse_from_str(s, FORMAT).map_err(|source| {
            TimestampError::OutOfRange {
                input: s.to_string(),
                source,
            }
        })?;
        if datetime.year() < 1 {
            return Err(TimestampError::YearOutOfRange {
                input: s.to_string(),
            });
        }

        Ok(Self(datetime))
    }

    /// 日時から秒以下を切り捨てて`Timestamp`を作る。
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        let truncated = datetime
            .with_second(0)
            .and_then(|datetime| datetime.with_nanosecond(0))
            .unwrap_or(datetime);

        Self(truncated)
    }

    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

/// `DDDD-DD-DD DD:DD`の形になっているかを確認する。
fn has_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
