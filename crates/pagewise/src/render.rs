use colored::Colorize;
use pagewise_core::PaginatorView;

/// One position in a rendered trigger bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Page { number: usize, current: bool },
    Gap,
}

/// Turn the trigger sequence into slots, marking skipped page runs as gaps
pub fn slots(view: &PaginatorView) -> Vec<Slot> {
    let mut result = Vec::with_capacity(view.triggers.len() + 2);
    let mut previous: Option<usize> = None;

    for &number in &view.triggers {
        if previous.is_some_and(|p| number > p + 1) {
            result.push(Slot::Gap);
        }
        result.push(Slot::Page {
            number,
            current: number == view.current_page,
        });
        previous = Some(number);
    }

    result
}

/// Trigger bar without colors, e.g. `< 1 … 8 [9] 10 … 18 >`
pub fn plain_bar(view: &PaginatorView) -> String {
    let mut parts = vec![if view.has_previous { "<" } else { "-" }.to_string()];

    parts.extend(slots(view).into_iter().map(|slot| match slot {
        Slot::Page {
            number,
            current: true,
        } => format!("[{number}]"),
        Slot::Page { number, .. } => number.to_string(),
        Slot::Gap => "…".to_string(),
    }));

    parts.push(if view.has_next { ">" } else { "-" }.to_string());
    parts.join(" ")
}

/// Trigger bar for the terminal; disabled controls are dimmed
pub fn colored_bar(view: &PaginatorView) -> String {
    let prev = if view.has_previous {
        "‹ prev".green().to_string()
    } else {
        "‹ prev".bright_black().to_string()
    };
    let next = if view.has_next {
        "next ›".green().to_string()
    } else {
        "next ›".bright_black().to_string()
    };

    let pages: Vec<String> = slots(view)
        .into_iter()
        .map(|slot| match slot {
            Slot::Page {
                number,
                current: true,
            } => format!("[{number}]").bright_cyan().bold().to_string(),
            Slot::Page { number, .. } => number.to_string().white().to_string(),
            Slot::Gap => "…".bright_black().to_string(),
        })
        .collect();

    format!("{prev}  {}  {next}", pages.join(" "))
}
