//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    title: &'static str,
    accent: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    title: "\x1b[1;38;2;120;190;230m",
    accent: "\x1b[38;2;80;130;180m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    title: "",
    accent: "",
    subtitle: "",
    reset: "",
};

/// Prints the Vigilo banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let tt = c.title;
    let ac = c.accent;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{tt}__     ___       _ _       {r}
{tt}\ \   / (_) __ _(_) | ___  {r}
{tt} \ \ / /| |/ _` | | |/ _ \ {r}
{tt}  \ V / | | (_| | | | (_) |{r}
{tt}   \_/  |_|\__, |_|_|\___/ {r}
{ac}           |___/           {r}
{st}ask your database anything{r}
"#
    );
}
