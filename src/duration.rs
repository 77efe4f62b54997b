use std::fmt;

use log::{debug, info};

use crate::datetime::Clock;
use crate::error::CalcError;
use crate::timestamp::Timestamp;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// 終了時刻の指定。
///
/// 省略時の現在時刻は呼び出し側で明示的に選ぶ。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndTime {
    At(Timestamp),
    Now,
}

impl EndTime {
    /// 入力文字列から終了時刻の指定を作る。`None`は現在時刻を表す。
    pub fn parse(s: Option<&str>) -> Result<Self, CalcError> {
        match s {
            Some(s) => Ok(Self::At(Timestamp::parse(s)?)),
            None => Ok(Self::Now),
        }
    }

    /// 実際の終了時刻を決める。
    pub fn resolve<C: Clock>(&self, clock: &C) -> Timestamp {
        match self {
            Self::At(timestamp) => *timestamp,
            Self::Now => clock.now(),
        }
    }
}

/// 経過時間を日、時間、分に分解したもの。
///
/// `hours`は0..=23、`minutes`は0..=59に収まり、それ以上は上位の単位に繰り上がる。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationBreakdown {
    days: u64,
    hours: u32,
    minutes: u32,
}

impl DurationBreakdown {
    /// 合計分数から分解する。
    pub fn from_minutes(total_minutes: u64) -> Self {
        let remainder = total_minutes % MINUTES_PER_DAY;

        Self {
            days: total_minutes / MINUTES_PER_DAY,
            hours: (remainder / MINUTES_PER_HOUR) as u32,
            minutes: (remainder % MINUTES_PER_HOUR) as u32,
        }
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// 合計の分数を返す。
    pub fn total_minutes(&self) -> u64 {
        self.days * MINUTES_PER_DAY
            + u64::from(self.hours) * MINUTES_PER_HOUR
            + u64::from(self.minutes)
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

/// 開始時刻から終了時刻までの経過時間を計算する。
///
/// タイムゾーンを考慮しない単純な引き算で、秒以下は切り捨てる。
/// 開始時刻が終了時刻より後の場合は入れ替えずにエラーを返す。
///
/// # Arguments
///
/// * `start` - 開始時刻
/// * `end` - 終了時刻
pub fn elapsed(start: Timestamp, end: Timestamp) -> Result<DurationBreakdown, CalcError> {
    if start > end {
        return Err(CalcError::Order { start, end });
    }

    let total_minutes = (*end.as_datetime() - *start.as_datetime())
        .num_minutes()
        .unsigned_abs();

    Ok(DurationBreakdown::from_minutes(total_minutes))
}

/// 入力から経過時間を計算する。
pub struct Calculator<'a, C: Clock> {
    clock: &'a C,
}

impl<'a, C: Clock> Calculator<'a, C> {
    /// 新しい`Calculator`を返す。
    ///
    /// # Arguments
    ///
    /// * `clock` - 終了時刻を省略した時に使う現在時刻の取得元
    pub fn new(clock: &'a C) -> Self {
        Self { clock }
    }

    /// パース済みの時刻から経過時間を計算する。
    pub fn calculate(
        &self,
        start: Timestamp,
        end: EndTime,
    ) -> Result<DurationBreakdown, CalcError> {
        let end = end.resolve(self.clock);
        debug!("Start at: {}, End at: {}", start, end);

        let outcome = elapsed(start, end);
        if let Err(CalcError::Order { start, end }) = &outcome {
            info!("Start at {} is after end at {}", start, end);
        }

        outcome
    }

    /// 文字列の時刻から経過時間を計算する。
    ///
    /// 開始時刻、終了時刻の順にパースし、終了時刻が`None`の場合は現在時刻を使う。
    ///
    /// # Examples
    ///
    /// ```
    /// let calculator = Calculator::new(&SystemClock);
    /// let breakdown = calculator
    ///     .calculate_input("2025-09-01 14:30", Some("2025-09-07 22:00"))
    ///     .unwrap();
    /// ```
    pub fn calculate_input(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<DurationBreakdown, CalcError> {
        let start = Timestamp::parse(start)?;
        let end = EndTime::parse(end)?;

        self.calculate(start, end)
    }
}
