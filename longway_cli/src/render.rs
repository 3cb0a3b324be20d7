// ASCII rendering of an act.
//
// Each map row takes one text line, with one connector line between rows.
// Nodes sit at `col * COL_SPACING`; `C` marks a challenge, `B` the boss.
// An edge is drawn as a single glyph halfway between its endpoints: `|`
// straight down, `/` or `\` when it leans, `X` where two leaning edges cross.
//
// With `boss_on_top` the rows are printed in reverse (the boss at the top,
// entry at the bottom) and the lean glyphs flip to match.

use longway_map::navigation::display_rows;
use longway_map::{Act, Node, Row};

/// Horizontal distance between neighbouring columns.
const COL_SPACING: usize = 4;

fn glyph(node: &Node) -> char {
    if node.is_boss() { 'B' } else { 'C' }
}

/// Two edges leaning opposite ways through one cell cross.
fn merge(existing: char, incoming: char) -> char {
    match (existing, incoming) {
        ('/', '\\') | ('\\', '/') | ('X', _) => 'X',
        _ => incoming,
    }
}

/// Render an act as a block of text, one line per grid row.
pub fn render_act(act: &Act, boss_on_top: bool) -> String {
    let rows = act.rows.len();
    if rows == 0 {
        return format!("Act {}\n", act.index);
    }
    let height = rows * 2 - 1;
    let max_cols = act.rows.iter().map(Vec::len).max().unwrap_or(0);
    let width = max_cols.saturating_sub(1) * COL_SPACING + 1;
    let mut grid = vec![vec![' '; width]; height];

    let ordered: Vec<(usize, &Row)> = if boss_on_top {
        display_rows(act).collect()
    } else {
        act.rows.iter().enumerate().collect()
    };

    for (line, (r, row)) in ordered.into_iter().enumerate() {
        let y = line * 2;
        for node in row {
            let x = node.col * COL_SPACING;
            grid[y][x] = glyph(node);
            if r + 1 == rows {
                continue;
            }
            let conn_y = if boss_on_top { y - 1 } else { y + 1 };
            for &target in &node.edges {
                let tx = target * COL_SPACING;
                let (conn_x, ch) = if tx > x {
                    (x + (tx - x) / 2, if boss_on_top { '/' } else { '\\' })
                } else if tx < x {
                    (x - (x - tx) / 2, if boss_on_top { '\\' } else { '/' })
                } else {
                    (x, '|')
                };
                grid[conn_y][conn_x] = merge(grid[conn_y][conn_x], ch);
            }
        }
    }

    let mut out = format!("Act {}\n", act.index);
    for line in grid {
        let text: String = line.into_iter().collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}
