//! Interactive play loop over any line source and sink.

use std::io::{self, BufRead, Write};

use gridblast_engine::Game;
use gridblast_search::SequenceSearch;

use crate::input::{parse_command, Command};
use crate::render;

pub struct Session<'a> {
    pub game: Game,
    /// Suggestions are skipped when `None`.
    pub hints: Option<&'a SequenceSearch>,
}

impl Session<'_> {
    /// Run until the game ends, the player quits, or input runs out.
    /// Returns the final score.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<u32> {
        let mut line = String::new();

        loop {
            let state = self.game.state();
            write!(out, "\n{}", render::board(&state.grid, state.score))?;
            write!(out, "{}", render::pieces(&state.slots))?;

            if let Some(search) = self.hints {
                let found = search.search(&state.grid, &state.slots);
                write!(out, "{}", render::suggestion(found.as_ref().map(|f| &f.sequence)))?;
            }

            if self.game.is_over() {
                writeln!(out, "\n{}", "=".repeat(20))?;
                writeln!(out, "     GAME OVER")?;
                writeln!(out, "No more valid moves available.")?;
                writeln!(out, "Final Score: {}", state.score)?;
                writeln!(out, "{}", "=".repeat(20))?;
                log::info!(
                    "game over after {} rounds, {} pieces, {} lines",
                    state.rounds,
                    state.pieces_placed,
                    state.lines_cleared
                );
                break;
            }

            write!(out, "\nEnter your move (piece row col), or 'q' to quit: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    writeln!(out, "Quitting game. Thanks for playing!")?;
                    break;
                }
                Ok(Command::Place { piece, row, col }) => {
                    match self.game.play(piece, row, col) {
                        Ok(report) => {
                            if report.lines > 0 {
                                writeln!(
                                    out,
                                    "\n*** Cleared {} line(s)! +{} points ***",
                                    report.lines, report.points
                                )?;
                            }
                            if report.new_round {
                                writeln!(out, "\nAll pieces placed! Generating new pieces...")?;
                            }
                        }
                        Err(e) => writeln!(out, "\n!!! Invalid move: {e}. Please try again. !!!")?,
                    }
                }
                Err(e) => writeln!(out, "\n!!! Invalid input: {e}. !!!")?,
            }
        }

        Ok(self.game.state().score)
    }
}
