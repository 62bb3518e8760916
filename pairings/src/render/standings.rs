//! Pairings table for the current round.
//!
//! The table collapses into one card per pairing below 600px; each cell
//! repeats its column name in `data-label` for that layout.

use super::escape::escape_html;
use std::fmt::Write;

/// Column headers, also used as the mobile card labels
pub const COLUMNS: [&str; 3] = ["Stół", "Gracz 1", "Gracz 2"];

/// One rendered line of the pairings table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    /// Table label
    pub table: String,
    /// First player's display name
    pub player1: String,
    /// Second player's display name
    pub player2: String,
}

impl StandingsRow {
    /// Create a new row
    pub fn new(table: &str, player1: &str, player2: &str) -> Self {
        Self {
            table: table.to_string(),
            player1: player1.to_string(),
            player2: player2.to_string(),
        }
    }

    fn cells(&self) -> [&str; 3] {
        [self.table.as_str(), self.player1.as_str(), self.player2.as_str()]
    }
}

const STYLE: &str = r#"  <style>
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      margin: 0;
      padding: 0;
      background: #f9f9f9;
      color: #333;
    }
    header {
      background: #004466;
      color: white;
      padding: 20px;
      text-align: center;
    }
    h1 {
      font-size: 1.8em;
      margin: 0;
    }
    main {
      padding: 20px;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 10px;
    }
    th, td {
      border: 1px solid #ddd;
      padding: 12px 8px;
      text-align: left;
      font-size: 1em;
    }
    th {
      background: #eeeeee;
    }
    tr:nth-child(even) {
      background: #fafafa;
    }
    @media (max-width: 600px) {
      table, thead, tbody, th, td, tr {
        display: block;
      }
      thead {
        display: none;
      }
      tr {
        margin-bottom: 15px;
        background: white;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 8px;
      }
      td {
        padding: 8px 10px;
        text-align: right;
        position: relative;
      }
      td::before {
        content: attr(data-label);
        position: absolute;
        left: 10px;
        top: 8px;
        font-weight: bold;
        text-align: left;
      }
    }
  </style>
"#;

/// Render the pairings page.
///
/// Every piece of text is escaped, so names containing markup cannot break
/// the table. The output depends only on the arguments.
pub fn render_standings(tournament_name: &str, rows: &[StandingsRow]) -> String {
    let name = escape_html(tournament_name);
    let mut out = String::with_capacity(STYLE.len() + 512 + rows.len() * 160);

    out.push_str("<!DOCTYPE html>\n<html lang=\"pl\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    let _ = writeln!(out, "  <title>{name}</title>");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "  <header><h1>{name}</h1></header>");
    out.push_str("  <main>\n    <table>\n      <thead>\n        <tr>");
    for column in COLUMNS {
        let _ = write!(out, "<th>{column}</th>");
    }
    out.push_str("</tr>\n      </thead>\n      <tbody>\n");

    for row in rows {
        out.push_str("        <tr>\n");
        for (label, value) in COLUMNS.iter().zip(row.cells()) {
            let _ = writeln!(
                out,
                "          <td data-label=\"{label}\">{}</td>",
                escape_html(value)
            );
        }
        out.push_str("        </tr>\n");
    }

    out.push_str("      </tbody>\n    </table>\n  </main>\n</body>\n</html>\n");
    out
}
