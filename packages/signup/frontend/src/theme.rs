//! Global stylesheet for the grid containers used by the view tree.

use dominator::stylesheet;

pub const CENTERED_MESSAGE: &str = "centered-message";

const GRID_COLUMNS: u32 = 12;

// a trailing column hugs the right edge unless marked `end`; both selectors
// have the same specificity, so `end` has to come last
const TRAILING_COLUMN_FLOATS: [(&str, &str); 2] = [
    (".columns + .columns:last-child", "right"),
    (".columns + .columns.end", "left"),
];

pub fn init() {
    stylesheet!("html, body", {
        .style("margin", "0")
        .style("height", "100%")
        .style("font-family", "\"Helvetica Neue\", Helvetica, Arial, sans-serif")
    });

    stylesheet!(".centered-message", {
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("justify-content", "center")
        .style("min-height", "100vh")
    });

    stylesheet!(".row", {
        .style("width", "100%")
        .style("max-width", "62.5rem")
        .style("margin", "0 auto")
    });

    stylesheet!(".row::after", {
        .style("content", "\"\"")
        .style("display", "table")
        .style("clear", "both")
    });

    stylesheet!(".columns", {
        .style("box-sizing", "border-box")
        .style("float", "left")
        .style("padding-left", "0.9375rem")
        .style("padding-right", "0.9375rem")
    });

    for (selector, float) in TRAILING_COLUMN_FLOATS {
        stylesheet!(selector, {
            .style("float", float)
        });
    }

    for n in 1..=GRID_COLUMNS {
        let width = grid_percent(n);

        stylesheet!(&*format!(".small-{n}"), {
            .style("width", &width)
        });

        if n < GRID_COLUMNS {
            stylesheet!(&*format!(".small-offset-{n}"), {
                .style("margin-left", &width)
            });
        }
    }
}

fn grid_percent(span: u32) -> String {
    format!("{:.5}%", f64::from(span) * 100.0 / f64::from(GRID_COLUMNS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_percent() {
        assert_eq!(grid_percent(6), "50.00000%");
        assert_eq!(grid_percent(3), "25.00000%");
        assert_eq!(grid_percent(12), "100.00000%");
    }

    #[test]
    fn test_end_column_overrides_trailing_float() {
        let last = TRAILING_COLUMN_FLOATS.last().unwrap();
        assert!(last.0.ends_with(".end"));
        assert_eq!(last.1, "left");

        let trailing = TRAILING_COLUMN_FLOATS
            .iter()
            .find(|(selector, _)| selector.ends_with(":last-child"))
            .unwrap();
        assert_eq!(trailing.1, "right");
    }
}
