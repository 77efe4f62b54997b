use std::io::BufRead;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::console::{present, ConsolePresenter, Label};
use crate::datetime::Clock;
use crate::duration::Calculator;

/// 対話入力で時刻を受け取り、経過時間を表示するサブコマンド。
pub struct InteractiveCommand<'a, C: Clock> {
    calculator: Calculator<'a, C>,
}

impl<'a, C: Clock> InteractiveCommand<'a, C> {
    /// 新しい`InteractiveCommand`を返す。
    pub fn new(clock: &'a C) -> Self {
        Self {
            calculator: Calculator::new(clock),
        }
    }

    /// `interactive`サブコマンドの処理を行う。
    ///
    /// 開始時刻と終了時刻を1行ずつ読み込む。終了時刻が空白のみの場合は現在時刻を使う。
    /// 入力が終端に達した場合は空行として扱う。
    ///
    /// # Arguments
    ///
    /// * `reader` - 時刻を読み込む入力
    /// * `presenter` - 案内と結果の表示先
    pub fn run<R: BufRead, P: ConsolePresenter>(
        &self,
        reader: &mut R,
        presenter: &mut P,
    ) -> Result<()> {
        presenter.show_message("\nEnter your own times (format: YYYY-MM-DD HH:MM)")?;

        presenter.prompt("Enter start time: ")?;
        let start = read_line(reader).context("Failed to read start time")?;
        presenter.prompt("Enter end time (press Enter for current time): ")?;
        let end = read_line(reader).context("Failed to read end time")?;
        info!("Interactive: start = {:?}, end = {:?}", start, end);

        let end = if end.trim().is_empty() {
            None
        } else {
            Some(end.as_str())
        };
        let outcome = self.calculator.calculate_input(&start, end);
        present(presenter, &Label::Difference, &outcome)
    }
}

/// 1行読み込み、末尾の改行を取り除いて返す。
///
/// UTF-8として不正なバイトは置換文字に置き換え、時刻のパースで不正な入力として扱う。
fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let read = reader
        .read_until(b'\n', &mut buf)
        .context("Failed to read line from input")?;
    if read == 0 {
        debug!("Reached end of input");
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
}
