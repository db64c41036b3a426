use crate::category::CategoryResult;

const SEPARATOR_GROUPS: usize = 8;

/// `*---- ---- ... ----*`
pub fn separator() -> String {
    format!("*{}*", vec!["----"; SEPARATOR_GROUPS].join(" "))
}

/// Rounds halves toward +inf, so `-12.5` becomes `-12`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Percentage rounded to `digits` places, padded so the integer part
/// takes three columns.
pub fn percent(probability: f64, digits: i32) -> String {
    let base = 10f64.powi(digits);
    let mut rounded = round_half_up(probability * 100.0 * base) / base;
    if rounded == 0.0 {
        // Drops the sign of -0.
        rounded = 0.0;
    }
    let integer_digits = (round_half_up(rounded) as i64).to_string().len();
    let pad = " ".repeat(3usize.saturating_sub(integer_digits));
    format!("{pad}{rounded}%")
}

pub fn row(name: &str, probability: f64, width: usize) -> String {
    format!("* {name: >width$}: {p}", p = percent(probability, 4))
}

/// Full text block, rows in the order given.
pub fn render(deck_size: u64, results: &[CategoryResult]) -> String {
    let width = results.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut lines = vec![format!("Total: {deck_size}"), separator()];
    lines.extend(results.iter().map(|r| row(r.name, r.probability, width)));
    lines.push(separator());
    lines.join("\n")
}

/// Side-by-side rows for the engine and an enumeration of the same deck.
pub fn render_comparison(engine: &[CategoryResult], enumerated: &[CategoryResult]) -> String {
    let width = engine.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut lines = vec![separator()];
    for (e, x) in engine.iter().zip(enumerated) {
        lines.push(format!(
            "* {name: >width$}: {formula} | {counted} | {delta}",
            name = e.name,
            formula = percent(e.probability, 4),
            counted = percent(x.probability, 4),
            delta = percent(e.probability - x.probability, 4),
        ));
    }
    lines.push(separator());
    lines.join("\n")
}
