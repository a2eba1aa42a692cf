// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io;

use drawpoker_core::{
    poker::{Card, Credits, Paytable, Rules, Suit},
    session::{Config, Phase, Session},
};

/// Runs the terminal game loop.
pub fn run(config: Config) -> Result<()> {
    let mut session = Session::new(&config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = game_loop(&mut stdout, &mut session);

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res?;

    println!("Final credits {}", session.credits());
    Ok(())
}

/// Writes the paytable with one row for each paying hand.
pub fn write_paytable(w: &mut impl io::Write, paytable: &Paytable, rules: Rules) -> Result<()> {
    for line in paytable_lines(paytable, rules) {
        writeln!(w, "{line}")?;
    }

    Ok(())
}

fn paytable_lines(paytable: &Paytable, rules: Rules) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<16}{:>6}{:>6}{:>6}{:>6}{:>6}",
        "Hand", 1, 2, 3, 4, 5
    )];

    lines.extend(paytable.rows(rules).into_iter().map(|(label, payouts)| {
        let columns = payouts
            .iter()
            .map(|p| format!("{p:>6}"))
            .collect::<String>();
        format!("{label:<16}{columns}")
    }));

    lines
}

fn game_loop(w: &mut impl io::Write, session: &mut Session) -> Result<()> {
    let mut message = "Press ENTER to deal".to_string();

    loop {
        print_screen(w, session, &message)?;

        // Ignore key releases on platforms that report them.
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Enter | KeyCode::Char(' ') => match session.phase() {
                Phase::Betting => {
                    message = match session.deal() {
                        Ok(_) => "Hold cards with 1-5, ENTER to draw".to_string(),
                        Err(e) => e.to_string(),
                    };
                }
                Phase::Holding => {
                    let result = session.draw()?;
                    message = if result.winnings > Credits::ZERO {
                        format!(
                            "{}! You win {} credits",
                            result.value.category(),
                            result.winnings
                        )
                    } else {
                        format!("{}, press ENTER to deal", result.value.category())
                    };

                    if !session.can_deal() {
                        message = "Not enough credits for the wager, press - or q".to_string();
                    }
                }
            },
            KeyCode::Char(c @ '1'..='5') if session.phase() == Phase::Holding => {
                session.toggle_hold(c as usize - '1' as usize)?;
            }
            KeyCode::Char('+') | KeyCode::Right => {
                if session.set_wager(session.wager().next()).is_ok() {
                    message = format!("Wager {}", session.wager());
                }
            }
            KeyCode::Char('-') | KeyCode::Left => {
                if session.set_wager(session.wager().prev()).is_ok() {
                    message = format!("Wager {}", session.wager());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_screen(w: &mut impl io::Write, session: &Session, message: &str) -> Result<()> {
    execute!(w, Clear(ClearType::All))?;

    let mut row = 0;
    for line in paytable_lines(session.paytable(), session.rules()) {
        queue!(
            w,
            cursor::MoveTo(0, row),
            style::PrintStyledContent(line.as_str().dark_yellow())
        )?;
        row += 1;
    }

    row += 1;
    let hand_row = row;
    for pos in 0..5u16 {
        let col = pos * 6 + 2;
        let card = session.hand().map(|cards| cards[pos as usize]);
        print_card(w, card, col, hand_row)?;

        let label = if session.phase() == Phase::Holding && session.held()[pos as usize] {
            "HELD".to_string()
        } else {
            format!(" {} ", pos + 1)
        };

        queue!(
            w,
            cursor::MoveTo(col - 1, hand_row + 1),
            style::PrintStyledContent(label.as_str().cyan())
        )?;
    }

    row = hand_row + 3;
    let status = format!(
        "Credits {:<10} Wager {}  Rules: {}{}",
        session.credits().to_string(),
        session.wager(),
        if session.rules().jacks_or_better {
            "jacks or better"
        } else {
            "any pair"
        },
        if session.rules().ace_low_straight {
            ", wheel"
        } else {
            ""
        }
    );
    queue!(
        w,
        cursor::MoveTo(0, row),
        style::PrintStyledContent(status.as_str().dark_green()),
        cursor::MoveTo(0, row + 2),
        style::PrintStyledContent(message.bold()),
        cursor::MoveTo(0, row + 4),
        style::PrintStyledContent("ENTER deal/draw  1-5 hold  +/- wager  q quit".dark_grey())
    )?;

    w.flush()?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, card: Option<Card>, col: u16, row: u16) -> Result<()> {
    let Some(card) = card else {
        queue!(
            w,
            cursor::MoveTo(col, row),
            style::PrintStyledContent("▒▒".dark_blue())
        )?;
        return Ok(());
    };

    let text = card.to_string();
    let styled = match card.suit() {
        Suit::Hearts | Suit::Diamonds => text.as_str().red(),
        Suit::Clubs | Suit::Spades => text.as_str().white(),
    };

    queue!(
        w,
        cursor::MoveTo(col, row),
        style::PrintStyledContent(styled.bold())
    )?;

    Ok(())
}
