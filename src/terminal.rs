use rpncalc::{format_duration, format_hex, Calculator, Number};

/// How a value is rendered for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Plain,
    Eng,
    Hex,
    Time,
}

/// Execute a single line of input, printing the value it yields
pub(crate) fn execute_line(
    calc: &mut Calculator,
    input: &str,
    print_output: bool,
) -> Result<Option<Number>, String> {
    let result = calc.evaluate(input).map_err(|e| e.to_string())?;

    if print_output {
        if let Some(value) = &result {
            println!("{}", value);
        }
    }

    Ok(result)
}

/// Render one value in the given view
pub(crate) fn render(calc: &Calculator, value: &Number, view: View) -> Result<String, String> {
    match view {
        View::Plain => Ok(value.to_string()),
        View::Eng => Ok(calc.eng().format(value.to_f64())),
        View::Hex => format_hex(value).ok_or_else(|| format!("Not an integer: {}", value)),
        View::Time => Ok(format_duration(value.to_f64())),
    }
}

/// Render the top of the stack, or `None` if the stack is empty
pub(crate) fn render_top(calc: &Calculator, view: View) -> Option<Result<String, String>> {
    let top = calc.top().ok()?;
    Some(render(calc, top, view))
}

/// Print the top of the stack in `view`; nothing if the stack is empty
pub(crate) fn print_top(calc: &Calculator, view: View) {
    match render_top(calc, view) {
        Some(Ok(text)) => println!("{}", text),
        Some(Err(e)) => eprintln!("Error: {}", e),
        None => {}
    }
}

/// Print the whole stack, bottom first
pub(crate) fn print_stack(calc: &Calculator) {
    for value in calc.stack() {
        println!("{}", value);
    }
}

/// Short stack preview for the prompt hint: long values are truncated
pub(crate) fn stack_preview(calc: &Calculator) -> Option<String> {
    if calc.depth() == 0 {
        return None;
    }
    let items: Vec<String> = calc
        .stack()
        .iter()
        .map(|v| {
            let s = v.to_string();
            if s.chars().count() > 20 {
                format!("{}...", s.chars().take(17).collect::<String>())
            } else {
                s
            }
        })
        .collect();
    Some(format!("  [{}]", items.join(" ")))
}
