use chrono::Local;

use crate::timestamp::Timestamp;

/// 現在時刻を取得するためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// 現在時刻を分単位で返す。
    fn now(&self) -> Timestamp;
}

/// ホストのローカル時刻を返す`Clock`。
///
/// タイムゾーンは落とし、壁時計の時刻として扱う。秒以下は切り捨てる。
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Local::now().naive_local())
    }
}
