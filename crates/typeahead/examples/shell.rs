//! A minimal line-oriented shell that drives the typeahead state machine.
//!
//! Type a few letters and the current hint and dropdown state are printed
//! after each input. Commands: `tab` accepts the hint, `down`/`up` navigate
//! the dropdown, `esc` dismisses, `quit` exits. Anything else replaces the
//! input value.
//!
//! Run with logging to watch the widget's state transitions:
//!
//! ```sh
//! RUST_LOG=typeahead=trace cargo run --example shell
//! ```

use std::io::{self, BufRead, Write};

use typeahead::prelude::*;

fn print_state(widget: &Typeahead) {
    print!("value: {:?}", widget.value());
    if let Some(remainder) = widget.hint_remainder() {
        print!("  hint: {:?}", remainder);
    }
    if widget.is_dropdown_visible() {
        let options = widget.options();
        print!("  options: [");
        for index in 0..options.len() {
            let marker = if widget.selected_index() == index as i32 {
                ">"
            } else {
                " "
            };
            if let Some(display) = options.display_value(index) {
                print!("{marker}{display}");
            }
        }
        print!(" ]");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let words = vec![
        "ezequiel".to_string(),
        "ezra".to_string(),
        "esther".to_string(),
        "miriam".to_string(),
    ];

    let mut widget = Typeahead::new()
        .with_placeholder("Type a name…")
        .with_hint_provider(PrefixHint::new(words.clone()))
        .with_options(StringListModel::new(words));

    widget.completed.connect(|full| {
        println!("-> completed: {full}");
    });
    widget.option_highlighted.connect(|text| {
        println!("-> highlighted: {text}");
    });

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" => break,
            "tab" => {
                let mut event = KeyPressEvent::new(Key::Tab, KeyboardModifiers::NONE);
                widget.handle_key_press(&mut event);
            }
            "down" => {
                let mut event = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
                widget.handle_key_press(&mut event);
            }
            "up" => {
                let mut event = KeyPressEvent::new(Key::ArrowUp, KeyboardModifiers::NONE);
                widget.handle_key_press(&mut event);
            }
            "esc" => {
                let mut event = KeyPressEvent::new(Key::Escape, KeyboardModifiers::NONE);
                widget.handle_key_press(&mut event);
            }
            text => {
                widget.handle_text_change(&TextChangeEvent::new(text));
            }
        }
        print_state(&widget);
        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
