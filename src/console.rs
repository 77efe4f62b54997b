use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

use crate::duration::DurationBreakdown;
use crate::error::CalcError;

/// 計算結果に付ける見出し。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    /// 開始時刻から現在時刻まで。
    Since { start: String },
    /// 開始時刻から終了時刻まで。
    Between { start: String, end: String },
    /// 対話入力の結果。
    Difference,
}

impl Label {
    /// 終了時刻の有無に応じた見出しを返す。
    pub fn new(start: &str, end: Option<&str>) -> Self {
        match end {
            Some(end) => Self::Between {
                start: start.to_string(),
                end: end.to_string(),
            },
            None => Self::Since {
                start: start.to_string(),
            },
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Since { start } => write!(f, "Time since {}", start),
            Self::Between { start, end } => write!(f, "Time between {} and {}", start, end),
            Self::Difference => write!(f, "Time difference"),
        }
    }
}

/// Consoleに計算結果を表示するためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait ConsolePresenter {
    /// 計算結果を表示する。
    ///
    /// # Arguments
    ///
    /// * `label` - 結果の見出し
    /// * `breakdown` - 表示する経過時間
    fn show_breakdown(&mut self, label: &Label, breakdown: &DurationBreakdown) -> Result<()>;

    /// 計算に失敗した理由を表示する。
    fn show_error(&mut self, error: &CalcError) -> Result<()>;

    /// 案内のメッセージを1行表示する。
    fn show_message(&mut self, message: &str) -> Result<()>;

    /// 改行せずに入力を促す。
    fn prompt(&mut self, message: &str) -> Result<()>;
}

/// 計算結果か失敗した理由のどちらかを表示する。
pub fn present<P: ConsolePresenter>(
    presenter: &mut P,
    label: &Label,
    outcome: &Result<DurationBreakdown, CalcError>,
) -> Result<()> {
    match outcome {
        Ok(breakdown) => presenter.show_breakdown(label, breakdown),
        Err(error) => presenter.show_error(error),
    }
}

/// 計算結果を1行のテキストで表示する。
pub struct ConsoleText<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleText<'a, W> {
    /// 新しい`ConsoleText`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> ConsolePresenter for ConsoleText<'a, W> {
    fn show_breakdown(&mut self, label: &Label, breakdown: &DurationBreakdown) -> Result<()> {
        writeln!(self.writer, "{}: {}", label, breakdown)
            .with_context(|| format!("Failed to write result: {:?}", breakdown))
    }

    fn show_error(&mut self, error: &CalcError) -> Result<()> {
        writeln!(self.writer, "Error: {}", error)
            .with_context(|| format!("Failed to write error: {:?}", error))
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message).context("Failed to write message")
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", message).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")
    }
}
