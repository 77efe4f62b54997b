use anyhow::Result;
use log::info;

use crate::console::{present, ConsolePresenter, Label};
use crate::datetime::Clock;
use crate::duration::Calculator;

/// 指定した時刻の間の経過時間を1回だけ計算するためのサブコマンド。
///
/// 時刻のパースは計算時に行い、不正な時刻は他の計算と同じくエラーとして表示する。
#[derive(Debug, clap::Args)]
pub struct CalcArgs {
    #[clap(
        short = 's',
        long = "start",
        help = "Sets the start time in the format YYYY-MM-DD HH:MM"
    )]
    start: String,

    #[clap(
        short = 'e',
        long = "end",
        help = "Sets the end time in the format YYYY-MM-DD HH:MM (defaults to now)"
    )]
    end: Option<String>,
}

pub struct CalcCommand<'a, C: Clock> {
    calculator: Calculator<'a, C>,
}

impl<'a, C: Clock> CalcCommand<'a, C> {
    /// 新しい`CalcCommand`を返す。
    pub fn new(clock: &'a C) -> Self {
        Self {
            calculator: Calculator::new(clock),
        }
    }

    /// `calc`サブコマンドの処理を行う。
    ///
    /// 終了時刻が指定されていない場合は、現在時刻までの経過時間を表示する。
    pub fn run<P: ConsolePresenter>(&self, calc: CalcArgs, presenter: &mut P) -> Result<()> {
        info!("Calc: start = {:?}, end = {:?}", calc.start, calc.end);
        let end = calc.end.as_deref();

        let outcome = self.calculator.calculate_input(&calc.start, end);
        present(presenter, &Label::new(&calc.start, end), &outcome)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{CalcArgs, CalcCommand};
    use crate::console::ConsoleText;
    use crate::datetime::MockClock;
    use crate::timestamp::Timestamp;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        calc: CalcArgs,
    }

    fn parse_args(args: &[&str]) -> CalcArgs {
        TestArgs::try_parse_from(std::iter::once("calc").chain(args.iter().copied()))
            .unwrap()
            .calc
    }

    /// 正常系と異常系のテスト。
    #[rstest]
    #[case::between(
        &["--start", "2025-09-01 14:30", "--end", "2025-09-07 22:00"],
        "Time between 2025-09-01 14:30 and 2025-09-07 22:00: 6 days, 7 hours, 30 minutes\n",
    )]
    #[case::short_options(
        &["-s", "2025-09-01 00:00", "-e", "2025-09-02 00:00"],
        "Time between 2025-09-01 00:00 and 2025-09-02 00:00: 1 days, 0 hours, 0 minutes\n",
    )]
    #[case::order_error(
        &["--start", "2025-09-07 22:00", "--end", "2025-09-01 14:30"],
        "Error: Start time must be before end time\n",
    )]
    fn test_calc_command(#[case] args: &[&str], #[case] expected: &str) {
        let mut clock = MockClock::new();
        clock.expect_now().times(0);
        let mut writer = Vec::new();
        let mut presenter = ConsoleText::new(&mut writer);

        let command = CalcCommand::new(&clock);
        command.run(parse_args(args), &mut presenter).unwrap();

        assert_eq!(String::from_utf8(writer).unwrap(), expected);
    }

    /// 終了時刻を省略した場合は現在時刻までを計算することを確認する。
    #[test]
    fn test_calc_command_no_end() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(1)
            .return_const(Timestamp::parse("2025-09-07 22:00").unwrap());
        let mut writer = Vec::new();
        let mut presenter = ConsoleText::new(&mut writer);

        let command = CalcCommand::new(&clock);
        command
            .run(parse_args(&["--start", "2025-09-01 14:30"]), &mut presenter)
            .unwrap();

        assert_eq!(
            String::from_utf8(writer).unwrap(),
            "Time since 2025-09-01 14:30: 6 days, 7 hours, 30 minutes\n"
        );
    }

    /// 不正な時刻はエラーを1行表示し、現在時刻を取得しないことを確認する。
    #[rstest]
    #[case::invalid_month(
        &["--start", "2025-13-01 14:30"],
        "Error: time data '2025-13-01 14:30' is not a valid date and time: ",
    )]
    #[case::malformed_end(
        &["--start", "2025-09-01 14:30", "--end", "now"],
        "Error: time data 'now' does not match format 'YYYY-MM-DD HH:MM'\n",
    )]
    fn test_calc_command_parse_error(#[case] args: &[&str], #[case] expected_prefix: &str) {
        let mut clock = MockClock::new();
        clock.expect_now().times(0);
        let mut writer = Vec::new();
        let mut presenter = ConsoleText::new(&mut writer);

        let command = CalcCommand::new(&clock);
        let result = command.run(parse_args(args), &mut presenter);

        assert!(result.is_ok());
        let output = String::from_utf8(writer).unwrap();
        assert!(output.starts_with(expected_prefix), "output: {}", output);
        assert_eq!(output.lines().count(), 1);
    }

    /// 開始時刻がない場合は引数のパース時にエラーになることを確認する。
    #[test]
    fn test_calc_args_missing_start() {
        let result = TestArgs::try_parse_from(["calc", "--end", "2025-09-01 14:30"]);

        assert!(result.is_err());
    }
}
