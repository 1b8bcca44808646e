//! Terminal presentation of the month grid.
//!
//! Strictly a consumer of `grid` and `context`: it computes nothing
//! date-related itself, it only renders what the core hands back and maps
//! key presses onto the state transitions.

use std::io::Write;

use chrono::{Datelike, Duration, Local, NaiveDate};
use termion::{clear, color, cursor, style};

use crate::cmds::Cmd;
use crate::config::Config;
use crate::context::Context;
use crate::error::Result;
use crate::events::{Dispatcher, Event};
use crate::grid::{self, DayCell};

const GRID_WIDTH: usize = 28; // 7 columns, 4 cells each

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config) -> Self {
        App::with_context(config, Context::new())
    }

    pub fn with_context(config: &'a Config, context: Context) -> Self {
        App {
            config,
            context,
            quit: false,
        }
    }

    pub fn run<W: Write>(mut self, dispatcher: Dispatcher, out: &mut W) -> Result<()> {
        while !self.quit {
            self.draw(out)?;

            match dispatcher.next() {
                Ok(Event::Input(key)) => {
                    let cmd = self
                        .config
                        .key_map
                        .get(&key)
                        .copied()
                        .unwrap_or(Cmd::Noop);
                    self.apply(cmd);
                }
                // A tick only refreshes the "today" highlight.
                Ok(Event::Tick) => {}
                Err(_) => break,
            }
        }

        Ok(())
    }

    fn apply(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Noop => {}
            Cmd::NextMonth => self.context.advance_month(1),
            Cmd::PrevMonth => self.context.advance_month(-1),
            Cmd::NextDay => self.move_selection(1),
            Cmd::PrevDay => self.move_selection(-1),
            Cmd::NextWeek => self.move_selection(7),
            Cmd::PrevWeek => self.move_selection(-7),
            Cmd::Today => self.context.reset_to_today(),
            Cmd::Exit => self.quit = true,
        }
    }

    /// Moves the selection by whole days, clamped to the viewed month so
    /// only days present in the current grid can be selected. A selection
    /// left behind in another month snaps to day 1 first.
    fn move_selection(&mut self, days: i64) {
        let selected = self.context.selected_date();
        let viewed = (
            self.context.viewed_year(),
            self.context.viewed_month_number(),
        );

        let candidate = if (selected.year(), selected.month()) == viewed {
            selected + Duration::days(days)
        } else if let Some(first) = NaiveDate::from_ymd_opt(viewed.0, viewed.1, 1) {
            first
        } else {
            return;
        };

        if (candidate.year(), candidate.month()) == viewed {
            self.context.select_date(candidate);
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let year = self.context.viewed_year();
        let month = self.context.viewed_month_number();
        let offset = self.config.first_weekday_offset();

        let cells = grid::month_grid(year, month, offset)?;
        let labels = grid::rotate_weekday_labels(&self.config.weekday_labels, offset as i32)?;
        let today = Local::now().date_naive();
        let selected = self.context.selected_date();

        write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;
        write!(
            out,
            "{:^width$}",
            grid::year_display_name(year),
            width = GRID_WIDTH
        )?;

        write!(
            out,
            "{}<{:^width$}>",
            cursor::Goto(1, 2),
            grid::month_display_name(month)?,
            width = GRID_WIDTH - 2
        )?;

        write!(out, "{}{}", cursor::Goto(1, 3), color::Fg(color::Yellow))?;
        for label in &labels {
            write!(out, "{:>4}", label)?;
        }
        write!(out, "{}", color::Fg(color::Reset))?;

        let mut row_count = 0;
        for (row, chunk) in cells.chunks(7).enumerate() {
            write!(out, "{}", cursor::Goto(1, 4 + row as u16))?;
            for cell in chunk {
                match cell {
                    DayCell::Empty => write!(out, "    ")?,
                    DayCell::Day(date) => {
                        let num = format!("{:>4}", date.day());
                        if grid::is_same_day(date, &selected) {
                            write!(out, "{}{}{}", style::Invert, num, style::NoInvert)?;
                        } else if grid::is_same_day(date, &today) {
                            write!(
                                out,
                                "{}{}{}",
                                color::Fg(color::Blue),
                                num,
                                color::Fg(color::Reset)
                            )?;
                        } else {
                            write!(out, "{}", num)?;
                        }
                    }
                }
            }
            row_count += 1;
        }

        write!(
            out,
            "{}Selected: {}",
            cursor::Goto(1, 5 + row_count),
            selected.format("%-d %B %Y")
        )?;
        write!(
            out,
            "{}p/n: month  t: today  q: quit",
            cursor::Goto(1, 6 + row_count)
        )?;

        out.flush()?;
        Ok(())
    }

    /// One-shot plain-text render for non-interactive use. The selected
    /// day is bracketed, today is starred.
    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let year = self.context.viewed_year();
        let month = self.context.viewed_month_number();
        let offset = self.config.first_weekday_offset();

        let cells = grid::month_grid(year, month, offset)?;
        let labels = grid::rotate_weekday_labels(&self.config.weekday_labels, offset as i32)?;
        let today = Local::now().date_naive();
        let selected = self.context.selected_date();

        writeln!(
            out,
            "{:^width$}",
            format!(
                "{} {}",
                grid::month_display_name(month)?,
                grid::year_display_name(year)
            ),
            width = GRID_WIDTH
        )?;

        let mut header = String::new();
        for label in &labels {
            header.push_str(&format!("{:>4}", label));
        }
        writeln!(out, "{}", header)?;

        for chunk in cells.chunks(7) {
            let mut line = String::new();
            for cell in chunk {
                match cell {
                    DayCell::Empty => line.push_str("    "),
                    DayCell::Day(date) => {
                        if grid::is_same_day(date, &selected) {
                            line.push_str(&format!("{:>4}", format!("[{}]", date.day())));
                        } else if grid::is_same_day(date, &today) {
                            line.push_str(&format!("{:>3}*", date.day()));
                        } else {
                            line.push_str(&format!("{:>4}", date.day()));
                        }
                    }
                }
            }
            writeln!(out, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
