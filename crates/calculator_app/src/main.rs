// 计算器演示程序：调用 calculator 库完成一次加法和一次除法，并把结果打印到控制台。
// 程序没有命令行参数，也没有配置文件；标准输出只用于程序结果，日志统一写到标准错误。

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use calculator::Calculator;
// `crossterm` 用来给横幅加颜色；`IsTty` 用于判断输出是否是终端。
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// 演示用的两组固定操作数。
const DEMO_ADD: (i64, i64) = (5, 3);
const DEMO_DIVIDE: (i64, i64) = (10, 2);

// 初始化日志。默认只显示 warn 及以上级别，设置了 `RUST_LOG` 环境变量时以它为准。
// 只有标准错误是终端时才输出 ANSI 颜色，重定向到文件或管道时保持纯文本。
fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

// 写出一行横幅。`styled` 为真时加粗并显示为绿色。
fn banner<W: Write>(out: &mut W, text: &str, styled: bool) -> io::Result<()> {
    if styled {
        writeln!(out, "{}", text.bold().green())
    } else {
        writeln!(out, "{}", text)
    }
}

// 程序的主要逻辑。结果写入 `out`，这样测试时可以用 `Vec<u8>` 代替标准输出。
fn run<W: Write>(out: &mut W, styled: bool, add: (i64, i64), divide: (i64, i64)) -> Result<()> {
    banner(out, "🚀 Запуск тестового Rust приложения", styled)?;

    let calc = Calculator::new();

    let (a, b) = add;
    let sum = calc.add(a, b);
    writeln!(out, "Результат сложения {} + {} = {}", a, b, sum)?;

    // `divide` 返回 `Result`。除数为零时 `?` 会把错误交给 `main` 处理。
    let (a, b) = divide;
    let quotient = calc.divide(a, b)?;
    writeln!(out, "Результат деления {} / {} = {:.1}", a, b, quotient)?;

    banner(out, "✅ Приложение успешно запущено!", styled)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("{:#}", e);
    }
    info!("calculator demo started");

    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();

    match run(&mut out, styled, DEMO_ADD, DEMO_DIVIDE) {
        Ok(()) => {
            debug!("calculator demo finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // 唯一的致命路径：把错误打印到标准错误，并以非零状态码退出。
            eprintln!("Ошибка: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_output() {
        let mut out = Vec::new();
        run(&mut out, false, DEMO_ADD, DEMO_DIVIDE).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "🚀 Запуск тестового Rust приложения\n\
             Результат сложения 5 + 3 = 8\n\
             Результат деления 10 / 2 = 5.0\n\
             ✅ Приложение успешно запущено!\n"
        );
    }

    #[test]
    fn quotient_has_one_decimal_place() {
        let mut out = Vec::new();
        run(&mut out, false, (-2, -3), (5, 2)).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Результат сложения -2 + -3 = -5\n"));
        assert!(out.contains("Результат деления 5 / 2 = 2.5\n"));
    }

    #[test]
    fn zero_divisor_stops_before_completion_banner() {
        let mut out = Vec::new();
        let err = run(&mut out, false, DEMO_ADD, (5, 0)).unwrap_err();
        assert_eq!(format!("{:#}", err), "деление на ноль невозможно");

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Результат сложения 5 + 3 = 8"));
        assert!(!out.contains("Результат деления"));
        assert!(!out.contains("успешно"));
    }

    #[test]
    fn styled_banner_keeps_text() {
        let mut out = Vec::new();
        banner(&mut out, "🚀 Запуск", true).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("🚀 Запуск"));
    }
}
