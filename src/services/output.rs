use crate::domain::models::JsonOut;
use serde::Serialize;

/// Wraps `data` in the `{"ok": true, "data": ...}` envelope every command
/// emits under `--json`.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// List output: JSON envelope, or one tab-separated row per item.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(data)
    } else {
        for d in data {
            println!("{}", row(d));
        }
        Ok(())
    }
}

/// Single-item output where the text form spans multiple lines, which is
/// what recommend/show/chart/benchmark all need: the closure prints the
/// human-readable block, the JSON path reuses the envelope.
pub fn print_report<T: Serialize>(json: bool, data: T, text: impl Fn(&T)) -> anyhow::Result<()> {
    if json {
        print_json(data)
    } else {
        text(&data);
        Ok(())
    }
}
