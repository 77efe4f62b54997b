use anyhow::{Context, Result};
use log::info;

use crate::console::{present, ConsolePresenter, Label};
use crate::datetime::Clock;
use crate::duration::Calculator;

/// デモで計算する開始時刻と終了時刻の組み合わせ。
///
/// 終了時刻が`None`の場合は現在時刻までを計算する。最後の組は順序が逆でエラーになる。
const DEMO_CASES: [(&str, Option<&str>); 3] = [
    ("2025-09-01 14:30", None),
    ("2025-09-01 14:30", Some("2025-09-07 22:00")),
    ("2025-09-07 22:00", Some("2025-09-01 14:30")),
];

/// 組み込みの例を順に計算して表示するサブコマンド。
pub struct DemoCommand<'a, C: Clock> {
    calculator: Calculator<'a, C>,
}

impl<'a, C: Clock> DemoCommand<'a, C> {
    /// 新しい`DemoCommand`を返す。
    ///
    /// # Arguments
    /// * `clock` - 終了時刻を省略した例で使う現在時刻の取得元
    pub fn new(clock: &'a C) -> Self {
        Self {
            calculator: Calculator::new(clock),
        }
    }

    /// `demo`サブコマンドの処理を行う。
    ///
    /// 計算に失敗した例はエラーを表示して次の例に進む。
    pub fn run<P: ConsolePresenter>(&self, presenter: &mut P) -> Result<()> {
        for (start, end) in DEMO_CASES {
            info!("Demo: start = {}, end = {:?}", start, end);
            let outcome = self.calculator.calculate_input(start, end);
            present(presenter, &Label::new(start, end), &outcome)
                .with_context(|| format!("Failed to show demo result for {}", start))?;
        }

        Ok(())
    }
}
