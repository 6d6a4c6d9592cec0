use std::io::{self, BufRead, Write};

use crate::{
    direction::INVALID_DIRECTION_MESSAGE, ActuationSequencer, DirectionPolicy, FlapRenderer,
    InterruptState, SorterError,
};

pub const PROMPT: &str = "Enter direction (1=Left, 2=Center, 3=Right, q=Quit): ";
pub const NON_INTEGER_MESSAGE: &str = "Please enter a valid integer (1, 2, or 3).";
pub const TERMINATED_MESSAGE: &str = "Program terminated.";

/// One parsed line of operator input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Sort(i64),
}

/// Parse a line typed at the prompt.
///
/// Surrounding whitespace is ignored, and single underscores may group
/// digits (`1_000`). An integer too large for `i64` is still an integer, so
/// it is saturated and later rejected as a direction rather than reported as
/// non-integer input.
pub fn parse_line(line: &str) -> Result<Command, SorterError> {
    let token = line.trim();
    if token.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let Some(digits) = integer_digits(body) else {
        return Err(SorterError::NonIntegerInput(token.to_string()));
    };

    let sign = if negative { "-" } else { "" };
    let code = format!("{sign}{digits}")
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Ok(Command::Sort(code))
}

/// ASCII digits of an unsigned integer literal with `_` separators removed
fn integer_digits(body: &str) -> Option<String> {
    let mut digits = String::with_capacity(body.len());
    for group in body.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// Write the closing line of a session.
///
/// After an interrupt the cursor may still sit on the prompt line, so the
/// message starts on a fresh one.
pub fn write_farewell<W: Write>(out: &mut W, interrupted: bool) -> io::Result<()> {
    if interrupted {
        writeln!(out)?;
    }
    writeln!(out, "{}", TERMINATED_MESSAGE)?;
    out.flush()
}

/// Counts of what happened during a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub sorted: usize,
    pub rejected: usize,
    pub interrupted: bool,
}

/// Line-oriented operator prompt
pub struct OperatorConsole<I: BufRead, O: Write> {
    input: I,
    output: O,
    policy: DirectionPolicy,
    interrupt: InterruptState,
}

impl<I: BufRead, O: Write> OperatorConsole<I, O> {
    pub fn new(input: I, output: O, policy: DirectionPolicy) -> Self {
        OperatorConsole {
            input,
            output,
            policy,
            interrupt: InterruptState::new(),
        }
    }

    /// Share interrupt state with a Ctrl-C handler
    pub fn with_interrupt(mut self, interrupt: InterruptState) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Prompt until the operator quits, input ends or an interrupt arrives
    /// during a move.
    ///
    /// Bad input (including bytes that are not UTF-8) is reported and the
    /// prompt repeats. Failures from the sequencer or the console streams end
    /// the session.
    pub fn run<R: FlapRenderer>(
        &mut self,
        sequencer: &mut ActuationSequencer<R>,
    ) -> Result<SessionSummary, SorterError> {
        let mut summary = SessionSummary::default();
        let mut raw = Vec::new();

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                // end of input, finish the prompt line before the farewell
                writeln!(self.output)?;
                log::debug!("operator input closed");
                break;
            }

            let parsed = match std::str::from_utf8(&raw) {
                Ok(line) => parse_line(line),
                Err(_) => Err(SorterError::NonIntegerInput(
                    String::from_utf8_lossy(&raw).trim().to_string(),
                )),
            };
            let code = match parsed {
                Ok(Command::Quit) => break,
                Ok(Command::Sort(code)) => code,
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(self.output, "{}", NON_INTEGER_MESSAGE)?;
                    summary.rejected += 1;
                    continue;
                }
            };

            match self.policy.resolve(code) {
                Ok((direction, pair)) => {
                    writeln!(self.output, "{}", direction.status_line())?;
                    self.output.flush()?;
                    if pair.is_neutral() {
                        log::debug!("{} keeps both flaps at neutral", direction);
                    }

                    self.interrupt.begin_move();
                    let moved = sequencer.apply(pair);
                    let stop = self.interrupt.end_move();
                    moved?;
                    summary.sorted += 1;

                    if stop {
                        log::info!("interrupted, flaps recentered");
                        summary.interrupted = true;
                        break;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    log::debug!("{}", e);
                    writeln!(self.output, "{}", INVALID_DIRECTION_MESSAGE)?;
                    summary.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        write_farewell(&mut self.output, summary.interrupted)?;
        log::info!(
            "session finished: {} sorted, {} rejected",
            summary.sorted,
            summary.rejected
        );
        Ok(summary)
    }
}
