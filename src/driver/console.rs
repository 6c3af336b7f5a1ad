//! Console Output
//!
//! 進捗メッセージは out へ、失敗ブロックは err へ書き出す

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use serde_json::{Map, Value};

use crate::domain::errors::FlowError;

/// コンソール出力先
///
/// テストでは `Vec<u8>` を渡して出力を検査する
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// 空行を挟んでステップ見出しを書く
    pub fn step(&mut self, number: usize, text: impl Display) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}. {}", number, text)
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "✓ {}", text)
    }

    /// 失敗ブロックを書く
    pub fn failure(&mut self, error: &FlowError) -> io::Result<()> {
        for line in failure_lines(error) {
            writeln!(self.err, "{}", line)?;
        }
        self.err.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// 失敗ブロックの各行
///
/// エラー内容（サーバーのボディを優先）、ステータス、ヘッダーの順
pub fn failure_lines(error: &FlowError) -> Vec<String> {
    let failure = error.api_failure();
    let status = failure
        .and_then(|f| f.status)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    let headers = failure
        .filter(|f| !f.headers.is_empty())
        .map(|f| render_headers(&f.headers))
        .unwrap_or_else(|| "none".to_string());

    vec![
        "❌ Test failed:".to_string(),
        format!("Error: {}", error.detail()),
        format!("Status: {}", status),
        format!("Headers: {}", headers),
    ]
}

fn render_headers(headers: &[(String, String)]) -> String {
    let map: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    Value::Object(map).to_string()
}
