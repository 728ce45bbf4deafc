use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use marksafe::core::{render_fragment, MarksafeError, MarksafeOptions};
use marksafe::builders::{render_to_json, render_to_string};
use marksafe::env::{core as env_vars, EnvVar};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputEncoding {
    /// JSON 编码的渲染树
    Json,
    /// HTML 字符串
    Html,
}

#[derive(Parser)]
#[command(
    name = "marksafe",
    version,
    about = "Convert markdown-derived HTML fragments into safe, render-ready element trees"
)]
struct Cli {
    /// HTML 片段文件路径，"-" 表示从标准输入读取
    input: String,

    /// 输出文件路径，缺省写到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 输出编码
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputEncoding,

    /// 包装容器的 class 值
    #[arg(long, default_value = "markdown-content")]
    container_class: String,

    /// 输入已经由上游白名单过滤，跳过第一道过滤
    #[arg(long)]
    assume_sanitized: bool,

    /// 递归深度上限，缺省读取 MARKSAFE_MAX_DEPTH
    #[arg(long)]
    max_depth: Option<usize>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn print_error_message(text: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{text}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{text}");
    }
}

fn read_input(input: &str) -> Result<String, MarksafeError> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(output: Option<&PathBuf>, data: &str) -> Result<(), MarksafeError> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), MarksafeError> {
    let options = MarksafeOptions {
        container_class: Some(cli.container_class.clone()),
        max_depth: cli
            .max_depth
            .unwrap_or_else(|| env_vars::MaxDepth::get_or_default(marksafe::DEFAULT_MAX_DEPTH)),
        assume_sanitized: cli.assume_sanitized,
        ..MarksafeOptions::default()
    };

    let html = read_input(&cli.input)?;
    let tree = render_fragment(&html, &options);

    let encoded = match cli.format {
        OutputEncoding::Json => render_to_json(&tree)?,
        OutputEncoding::Html => render_to_string(&tree),
    };

    write_output(cli.output.as_ref(), &encoded)
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        env_vars::Log::get_or_default(tracing::Level::WARN)
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run(&cli) {
        print_error_message(&format!("Error: {error}"));
        process::exit(1);
    }
}
