/// Renders the head of some input as a fixed width, escaped `|...|` column for trace output.
pub fn formatter_str(c: &str) -> String {
    let end = c
        .char_indices()
        .nth(33)
        .map(|(i, _)| i)
        .unwrap_or(c.len());
    let s = c[..end].escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(33).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}
