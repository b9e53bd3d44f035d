use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::info;

use eartrainer::interval::{Scale, interval_label};
use eartrainer::quiz::{self, QUESTION_OCTAVES, Question, Session};
use eartrainer::synth::{SampleBuffer, SynthConfig};

use crate::audio::AudioOutput;

/// What the player pressed at the answer prompt
enum Input {
    Degree(usize),
    Replay,
    Quit,
}

/// Run an interactive quiz of `rounds` questions (unbounded when `None`).
pub fn run(output: &AudioOutput, config: &SynthConfig, scale: &Scale, rounds: Option<u32>) -> Result<()> {
    let cadence = quiz::cadence(config).context("rendering cadence")?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("alternate screen")?;

    print_banner(&mut stdout, scale);
    let mut session = Session::default();
    let result = quiz_loop(output, config, scale, rounds, &cadence, &mut stdout, &mut session);

    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(asked = session.asked, correct = session.correct, "quiz finished");
    println!("{}", session.summary());
    result
}

fn quiz_loop(
    output: &AudioOutput,
    config: &SynthConfig,
    scale: &Scale,
    rounds: Option<u32>,
    cadence: &[SampleBuffer],
    stdout: &mut io::Stdout,
    session: &mut Session,
) -> Result<()> {
    let mut rng = rand::rng();

    while rounds.is_none_or(|r| session.asked < r) {
        let question = Question::random(&mut rng, scale, QUESTION_OCTAVES)?;
        let note = question.render(config)?;

        line(stdout, &format!("Question {}: listen...", session.asked + 1));
        play_question(output, cadence, &note)?;

        line(stdout, &format!("Which degree? (1-{}, r = replay, Esc = quit)", scale.len()));
        let answer = loop {
            match read_input(scale.len())? {
                Input::Degree(d) => break d,
                Input::Replay => play_question(output, cadence, &note)?,
                Input::Quit => return Ok(()),
            }
        };

        let result = question.check(answer);
        session.record(&result);
        line(stdout, &format!("You said {}. {}", interval_label(scale[answer]), result.message()));
        line(stdout, "");
    }
    Ok(())
}

fn play_question(output: &AudioOutput, cadence: &[SampleBuffer], note: &SampleBuffer) -> Result<()> {
    output.play_all(cadence)?;
    output.play(note)?;
    Ok(())
}

fn read_input(degrees: usize) -> Result<Input> {
    loop {
        let ev = event::read().context("event read error")?;
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = ev
        else {
            continue;
        };

        match code {
            KeyCode::Esc => return Ok(Input::Quit),
            KeyCode::Char('r') => return Ok(Input::Replay),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let digit = digit as usize;
                    if (1..=degrees).contains(&digit) {
                        return Ok(Input::Degree(digit - 1));
                    }
                }
            }
            _ => {}
        }
    }
}

fn print_banner(stdout: &mut io::Stdout, scale: &Scale) {
    line(stdout, "\x1b[2J\x1b[Heartrainer - scale degree quiz");
    line(stdout, "─────────────────────────────────────────");
    line(stdout, "A I-IV-V-I cadence sets the key, then one note plays.");
    line(stdout, "Name its scale degree:");
    for (i, &interval) in scale.iter().enumerate() {
        line(stdout, &format!("  {}  {}", i + 1, interval_label(interval)));
    }
    line(stdout, "");
}

/// Raw mode needs explicit carriage returns.
fn line(stdout: &mut io::Stdout, text: &str) {
    let _ = write!(stdout, "{}\r\n", text);
    let _ = stdout.flush();
}
