use std::fs;

/// Reads a comma-separated table into raw rows. Splitting keeps trailing
/// empty cells, so a row ending in a comma still carries a final cell for
/// the availability rules to see. Blank lines are dropped.
pub fn read_table(path: &str) -> Result<Vec<Vec<String>>, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    Ok(parse_rows(&text))
}

fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_trailing_empty_cells() {
        let rows = parse_rows("Name,Mon,Tue\nAlice,Y,\n");
        assert_eq!(rows[1], vec!["Alice", "Y", ""]);
    }

    #[test]
    fn strips_carriage_returns_and_blank_lines() {
        let rows = parse_rows("Name,Mon\r\n\r\nAlice,Y\r\n");
        assert_eq!(rows, vec![vec!["Name", "Mon"], vec!["Alice", "Y"]]);
    }
}
