//! Terminal harness that stands in for the GUI adapter layer: it maps typed
//! commands onto the gesture tables and drives a spinner (or the toggle)
//! exactly the way a host toolkit would.

use std::{
    cell::RefCell,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    rc::Rc,
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossbeam_channel::Receiver;
use culture::Culture;
use serde::Deserialize;
use shared::{
    events::ControlEvent,
    input::{
        operation_for_key, operation_for_pointer, Key, PointerButton, SpinnerPart,
        INTEGER_KEY_BINDINGS, NUMERIC_KEY_BINDINGS,
    },
};
use spinner::{
    CaretPolicy, IntegerSpinner, NumericOptions, NumericSpinner, SpinnerOptions, TextSurface,
};
use toggle::{ColorScheme, ToggleSwitch};
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    /// Culture tag for formatting and parsing, e.g. en-US, de-DE, hi-IN.
    #[arg(long, default_value = "en-US")]
    culture: String,
    #[arg(long, value_enum, default_value_t = Variant::Integer)]
    variant: Variant,
    /// Optional TOML file with control defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Integer,
    Decimal,
    Toggle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ControlDefaults {
    integer: SpinnerOptions,
    decimal: NumericOptions,
    toggle: ColorScheme,
}

fn load_defaults(path: Option<&Path>) -> Result<ControlDefaults> {
    let Some(path) = path else {
        return Ok(ControlDefaults::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading control defaults from {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Shared line buffer standing in for the host's text box, with the
/// single-step undo history the controllers request.
#[derive(Default)]
struct BufferState {
    text: String,
    previous: Option<String>,
    undo_depth: usize,
}

#[derive(Clone, Default)]
struct ConsoleSurface(Rc<RefCell<BufferState>>);

impl ConsoleSurface {
    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }
}

impl TextSurface for ConsoleSurface {
    fn show_text(&mut self, text: &str, _caret: CaretPolicy) {
        let mut state = self.0.borrow_mut();
        if state.undo_depth > 0 {
            state.previous = Some(state.text.clone());
        }
        state.text = text.to_string();
    }

    fn select_all(&mut self) {
        println!("(selection) all text selected");
    }

    fn set_undo_depth(&mut self, depth: usize) {
        self.0.borrow_mut().undo_depth = depth;
    }

    fn undo(&mut self) {
        let mut state = self.0.borrow_mut();
        if let Some(previous) = state.previous.take() {
            state.text = previous;
        }
    }
}

enum Control {
    Integer(IntegerSpinner),
    Decimal(NumericSpinner),
    Toggle(ToggleSwitch),
}

fn key_for_command(command: &str) -> Option<Key> {
    match command {
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "pageup" => Some(Key::PageUp),
        "pagedown" => Some(Key::PageDown),
        "enter" => Some(Key::Enter),
        "esc" | "escape" => Some(Key::Escape),
        _ => None,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let culture = Culture::from_str(&cli.culture).context("unsupported culture tag")?;
    let defaults = load_defaults(cli.config.as_deref())?;

    let surface = ConsoleSurface::default();
    let (mut control, events) = build_control(&cli, defaults, culture, &surface);
    info!(variant = ?cli.variant, culture = %cli.culture, "control ready");

    print_state(&control, &surface);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        dispatch(&mut control, line);
        drain_events(&events);
        print_state(&control, &surface);
    }

    Ok(())
}

fn build_control(
    cli: &Cli,
    defaults: ControlDefaults,
    culture: Culture,
    surface: &ConsoleSurface,
) -> (Control, Receiver<ControlEvent>) {
    match cli.variant {
        Variant::Integer => {
            let mut control = IntegerSpinner::with_options(defaults.integer, culture);
            let events = control.subscribe();
            control.attach_surface(Box::new(surface.clone()));
            (Control::Integer(control), events)
        }
        Variant::Decimal => {
            let mut control = NumericSpinner::with_options(defaults.decimal, culture);
            let events = control.subscribe();
            control.attach_surface(Box::new(surface.clone()));
            (Control::Decimal(control), events)
        }
        Variant::Toggle => {
            let mut control = ToggleSwitch::new(defaults.toggle);
            let events = control.subscribe();
            (Control::Toggle(control), events)
        }
    }
}

fn dispatch(control: &mut Control, line: &str) {
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match control {
        Control::Integer(spinner) => {
            if let Some(key) = key_for_command(command) {
                match operation_for_key(INTEGER_KEY_BINDINGS, key) {
                    Some(operation) => spinner.apply(operation),
                    None => println!("key {key:?} is unbound for this variant"),
                }
                return;
            }
            match command {
                "text" => spinner.text_edited(argument),
                "min" => spinner.set_min_value(argument.parse().unwrap_or(0)),
                "max" => spinner.set_max_value(argument.parse().unwrap_or(0)),
                "minor" => spinner.set_minor_step(argument.parse().unwrap_or(1)),
                "major" => spinner.set_major_step(argument.parse().unwrap_or(10)),
                "sep" => spinner.set_has_thousand_separator(argument == "on"),
                "undo-enable" => spinner.set_can_undo(argument != "off"),
                "jump" => apply_jump(argument, |op| spinner.apply(op)),
                "release" => spinner.pointer_released(),
                _ => print_help(),
            }
        }
        Control::Decimal(spinner) => {
            if let Some(key) = key_for_command(command) {
                match operation_for_key(NUMERIC_KEY_BINDINGS, key) {
                    Some(operation) => spinner.apply(operation),
                    None => println!("key {key:?} is unbound for this variant"),
                }
                return;
            }
            match command {
                "text" => spinner.text_edited(argument),
                "blur" => spinner.focus_lost(),
                "min" => spinner.set_min_value(parse_decimal_argument(argument)),
                "max" => spinner.set_max_value(parse_decimal_argument(argument)),
                "minor" => spinner.set_minor_step(parse_decimal_argument(argument)),
                "major" => spinner.set_major_step(parse_decimal_argument(argument)),
                "places" => spinner.set_decimal_places(argument.parse().unwrap_or(0)),
                "sep" => spinner.set_has_thousand_separator(argument == "on"),
                "undo-enable" => spinner.set_can_undo(argument != "off"),
                "jump" => apply_jump(argument, |op| spinner.apply(op)),
                "release" => spinner.pointer_released(),
                _ => print_help(),
            }
        }
        Control::Toggle(toggle) => match command {
            "enter" => toggle.pointer_entered(),
            "leave" => toggle.pointer_left(),
            "press" => toggle.pointer_pressed(),
            "release" => toggle.pointer_released(),
            "check" => toggle.set_checked(argument != "off"),
            "enable" => toggle.set_enabled(argument != "off"),
            _ => print_help(),
        },
    }
}

/// Secondary-press gestures on the step affordances jump to a bound.
fn apply_jump(argument: &str, mut apply: impl FnMut(shared::input::SpinOperation)) {
    let part = match argument {
        "max" => SpinnerPart::IncreaseButton,
        "min" => SpinnerPart::DecreaseButton,
        _ => {
            println!("usage: jump max|min");
            return;
        }
    };
    if let Some(operation) = operation_for_pointer(part, PointerButton::Secondary) {
        apply(operation);
    }
}

fn parse_decimal_argument(argument: &str) -> rust_decimal::Decimal {
    rust_decimal::Decimal::from_str(argument).unwrap_or_default()
}

fn drain_events(events: &Receiver<ControlEvent>) {
    for event in events.try_iter() {
        println!("event: {event:?}");
    }
}

fn print_state(control: &Control, surface: &ConsoleSurface) {
    match control {
        Control::Integer(spinner) => println!(
            "display=\"{}\" value={} [{}..{}] increase={} decrease={}",
            surface.text(),
            spinner.value(),
            spinner.min_value(),
            spinner.max_value(),
            spinner.can_increase(),
            spinner.can_decrease(),
        ),
        Control::Decimal(spinner) => println!(
            "display=\"{}\" value={} places={} increase={} decrease={}",
            surface.text(),
            spinner.value(),
            spinner.decimal_places(),
            spinner.can_increase(),
            spinner.can_decrease(),
        ),
        Control::Toggle(toggle) => {
            let color = toggle.color();
            println!(
                "checked={} color=({:.2}, {:.2}, {:.2}, {:.2})",
                toggle.is_checked(),
                color.r,
                color.g,
                color.b,
                color.a
            );
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  up|down|pageup|pagedown|enter|esc   key gesture");
    println!("  text <raw>      report a text edit");
    println!("  blur            report focus loss (decimal)");
    println!("  min|max <n>     set a bound");
    println!("  minor|major <n> set a step");
    println!("  places <n>      set decimal places (decimal)");
    println!("  sep on|off      thousand separators");
    println!("  undo-enable on|off");
    println!("  jump max|min    secondary press on a step button");
    println!("  release         pointer release");
    println!("  press|release|enter|leave|check|enable (toggle)");
    println!("  quit");
}
