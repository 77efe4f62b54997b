use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// `-v`の回数からログレベルを決める。
pub fn level_from_verbosity(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 標準エラー出力にログを出すロガーを設定する。
///
/// 標準出力は計算結果と入力の案内に使うため、ログは混ぜない。
pub fn init(verbosity: u64) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_from_verbosity(verbosity))
        .chain(std::io::stderr())
        .apply()
        .context("Failed to initialize logger")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use rstest::rstest;

    use super::level_from_verbosity;

    #[rstest]
    #[case::quiet(0, LevelFilter::Warn)]
    #[case::verbose(1, LevelFilter::Info)]
    #[case::debug(2, LevelFilter::Debug)]
    #[case::trace(5, LevelFilter::Trace)]
    fn test_level_from_verbosity(#[case] verbosity: u64, #[case] expected: LevelFilter) {
        assert_eq!(level_from_verbosity(verbosity), expected);
    }
}
