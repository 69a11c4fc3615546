use crate::domain::annotation::AnnotatedGrid;
use crate::domain::fit_search::FitResult;
use crate::domain::grid::OccupancyGrid;

const SLOT_COLUMN: &str = "slot";
const COLUMN_GAP: &str = "  ";

/// Renders the plain layout of a grid with the open/occupied legend.
pub fn render_layout(grid: &OccupancyGrid) -> String {
    let mut out = render_rows(&AnnotatedGrid::from(grid));
    out.push_str("\no = open\nx = occupied\n");
    out
}

/// Renders an annotated layout with the full legend, including the offered seatings.
pub fn render_annotated(annotated: &AnnotatedGrid) -> String {
    let mut out = render_rows(annotated);
    out.push_str("\no = open\nx = occupied\n* = your option\n- = joined tables option\n");
    out
}

/// One line per result, e.g. `T2(4) - 1` or `T4(6) - 1 and T5(4) - 1 could seat 10 people`.
pub fn render_result(result: &FitResult) -> String {
    match result {
        FitResult::Single { table, timeslot } => format!("{} - {}", table, timeslot),
        FitResult::Pair { first, second, timeslot, combined_capacity } => {
            format!("{} - {} and {} - {} could seat {} people", first, timeslot, second, timeslot, combined_capacity)
        }
    }
}

fn render_rows(annotated: &AnnotatedGrid) -> String {
    let widths: Vec<usize> = annotated.tables.iter().map(|id| id.as_str().len()).collect();

    let mut lines = Vec::with_capacity(annotated.rows.len() + 1);

    let mut header = SLOT_COLUMN.to_string();
    for id in &annotated.tables {
        header.push_str(COLUMN_GAP);
        header.push_str(id.as_str());
    }
    lines.push(header);

    for row in &annotated.rows {
        let mut line = format!("{:<width$}", row.timeslot, width = SLOT_COLUMN.len());
        for (mark, width) in row.cells.iter().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&format!("{:<width$}", mark.symbol(), width = *width));
        }
        lines.push(line.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::annotate;
    use crate::domain::grid::SlotState::{Occupied as X, Open as O};
    use crate::domain::utils::id::TableId;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(&["T1(2)", "T2(4)", "T10(6)"], vec![(1, vec![X, O, O]), (2, vec![O, O, X])]).unwrap()
    }

    #[test]
    fn test_render_layout_aligns_columns() {
        let expected = "\
slot  T1(2)  T2(4)  T10(6)
1     x      o      o
2     o      o      x

o = open
x = occupied
";
        assert_eq!(render_layout(&grid()), expected);
    }

    #[test]
    fn test_render_annotated_uses_markers() {
        let grid = grid();
        let results = vec![
            FitResult::Single { table: TableId::new("T10(6)"), timeslot: 1 },
            FitResult::Pair { first: TableId::new("T1(2)"), second: TableId::new("T2(4)"), timeslot: 2, combined_capacity: 6 },
        ];
        let rendered = render_annotated(&annotate(&grid, &results).unwrap());

        assert!(rendered.contains("1     x      o      *\n"), "{}", rendered);
        assert!(rendered.contains("2     -      -      x\n"), "{}", rendered);
        assert!(rendered.ends_with("* = your option\n- = joined tables option\n"));
    }

    #[test]
    fn test_render_result() {
        let single = FitResult::Single { table: TableId::new("T2(4)"), timeslot: 1 };
        let pair = FitResult::Pair { first: TableId::new("T4(6)"), second: TableId::new("T5(4)"), timeslot: 6, combined_capacity: 10 };

        assert_eq!(render_result(&single), "T2(4) - 1");
        assert_eq!(render_result(&pair), "T4(6) - 6 and T5(4) - 6 could seat 10 people");
    }
}
