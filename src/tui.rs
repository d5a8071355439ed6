// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Placeholder full-screen interface. It only knows how to quit.

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use std::io::{self, Write};

pub const GREETING: &str = "Hello, World!\nPressione 'q' para sair.";

/// Holds the terminal in raw mode on the alternate screen until dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// `q` or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    // raw mode: no implicit carriage return, so place each line explicitly
    for (row, line) in GREETING.lines().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

pub fn run() -> Result<()> {
    let _guard = TerminalGuard::enter().context("Failed to prepare terminal")?;
    let mut out = io::stdout();
    draw(&mut out)?;
    loop {
        match event::read()? {
            Event::Key(key) if is_quit(&key) => break,
            Event::Resize(..) => draw(&mut out)?,
            _ => {}
        }
    }
    tracing::debug!("tui closed");
    Ok(())
}
