// src/args.rs
use crate::options::{Flavor, OutputFormat, ReportFormat};
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdkit",
    version,
    about = "Markdown ファイルを HTML に変換するツール",
    after_help = "TARGET を省略すると各 x.md の隣に x.html を書き出します。`-` は標準出力です。"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Markdown ファイル、または Markdown ファイルを含むディレクトリ
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub source: PathBuf,

    /// 出力ファイル、出力ディレクトリ、または `-`（標準出力）
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub target: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "html", help_heading = "出力")]
    pub format: OutputFormat,

    /// Markdown の方言
    #[arg(long, value_enum, default_value = "standard", help_heading = "出力")]
    pub flavor: Flavor,

    /// `--flavor extended` の短縮形
    #[arg(long, help_heading = "出力")]
    pub extended: bool,

    /// HTML を完全な文書として出力
    #[arg(long, help_heading = "出力")]
    pub standalone: bool,

    /// 変換結果の報告形式
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub report: ReportFormat,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// サブディレクトリも走査
    #[arg(short, long, help_heading = "走査/入力")]
    pub recursive: bool,

    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// 除外するパスパターン（glob, 複数可）
    #[arg(long, value_delimiter = ',', help_heading = "走査/入力")]
    pub exclude: Vec<String>,

    /// 並列スレッド数（省略時は CPU 数）
    #[arg(short, long, help_heading = "走査/入力")]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 最初のエラーで中断
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 既存の出力ファイルを上書き
    #[arg(short, long, help_heading = "動作")]
    pub force: bool,

    /// ログを詳しくする（-v, -vv, -vvv）
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, conflicts_with = "verbose", help_heading = "動作")]
    pub quiet: bool,
}

impl Args {
    /// `TARGET` が `-` なら標準出力
    #[must_use]
    pub fn to_stdout(&self) -> bool {
        self.target.as_deref().is_some_and(|t| t.as_os_str() == "-")
    }
}
