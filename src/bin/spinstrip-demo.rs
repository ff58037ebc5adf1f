//! Interactive terminal demo.
//!
//! Renders the prize strip as a one-line viewport with a pointer at its
//! center, and spins it on demand:
//!
//! - `space` starts a randomized spin to a random prize
//! - `1`..`6` spin to that prize exactly
//! - `s` stops a running spin immediately
//! - `q` / `Esc` quits

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};
use rand::Rng;

use spinstrip::{FnFeedback, PrizeCell, PrizeQuery, RotateTo, Roulette};

const PRIZES: [&str; 6] = ["Apple", "Pear", "Plum", "Cherry", "Melon", "Grape"];

/// One terminal column per 4 length units.
const SCALE: f64 = 0.25;

fn build_wheel(winner: Rc<RefCell<Option<String>>>) -> Roulette<String> {
    let cells = PRIZES
        .iter()
        .map(|name| PrizeCell::new((*name).to_string(), 100.0, 1.0));

    Roulette::builder()
        .prizes(cells)
        .viewport_width(480.0)
        .feedback(FnFeedback::new(|| {
            // Terminal bell on every slot passing the pointer.
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }))
        .on_stop(move |ev| *winner.borrow_mut() = Some(ev.content.clone()))
        .build()
        .expect("static prize list is non-empty")
}

/// Paint the visible window of the strip plus the pointer line.
fn draw(wheel: &Roulette<String>, status: &str) -> io::Result<()> {
    let cols = (wheel.viewport_width() * SCALE).round() as usize;
    let mut strip: Vec<u8> = vec![b' '; cols];

    let block = wheel.prize_width() + wheel.spacing();
    for (slot, prize) in wheel.prizes().enumerate() {
        let left = slot as f64 * block + wheel.first_block().offset;
        let lo = (left * SCALE).round() as isize;
        let hi = ((left + wheel.prize_width()) * SCALE).round() as isize;

        let label = format!("[{:^width$}]", prize.content, width = (hi - lo).max(2) as usize - 2);
        for (i, byte) in label.bytes().enumerate() {
            let col = lo + i as isize;
            if (0..cols as isize).contains(&col) {
                strip[col as usize] = byte;
            }
        }
    }

    let mut pointer = vec![b' '; cols];
    let center = (wheel.center() * SCALE).round() as usize;
    if center < cols {
        pointer[center] = b'v';
    }

    let mut out = io::stdout();
    execute!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    write!(out, "{}\r\n", String::from_utf8_lossy(&pointer))?;
    write!(out, "{}\r\n", String::from_utf8_lossy(&strip))?;
    write!(out, "\r\nselected: {}\r\n", wheel.selected_prize().content)?;
    write!(out, "{status}\r\n")?;
    write!(out, "\r\nspace: spin  1-6: spin to prize  s: stop  q: quit\r\n")?;
    out.flush()
}

fn main() -> io::Result<()> {
    let winner = Rc::new(RefCell::new(None));
    let mut wheel = build_wheel(Rc::clone(&winner));

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let frame = Duration::from_secs_f64(1.0 / 40.0);
    let mut status = String::from("ready");
    let mut rng = rand::thread_rng();

    let result = loop {
        if let Err(err) = draw(&wheel, &status) {
            break Err(err);
        }

        wheel.step();
        if let Some(name) = winner.borrow_mut().take() {
            status = format!("winner: {name}");
        }

        match event::poll(frame) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                    KeyCode::Char('s') => wheel.stop(),
                    KeyCode::Char(' ') => {
                        let target = rng.gen_range(0..PRIZES.len());
                        status = match wheel.rotate_to(PrizeQuery::index(target), RotateTo::laps(2))
                        {
                            Ok(()) => String::from("spinning..."),
                            Err(err) => format!("cannot spin: {err}"),
                        };
                    }
                    KeyCode::Char(c @ '1'..='6') => {
                        let target = c as usize - '1' as usize;
                        status = match wheel.rotate_to(PrizeQuery::index(target), RotateTo::laps(2))
                        {
                            Ok(()) => format!("spinning to {}...", PRIZES[target]),
                            Err(err) => format!("cannot spin: {err}"),
                        };
                    }
                    _ => {}
                },
                Ok(_) => {}
                Err(err) => break Err(err),
            },
            Ok(false) => {}
            Err(err) => break Err(err),
        }
    };

    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
