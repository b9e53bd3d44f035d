mod audio;
mod repl;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use eartrainer::chord::triad;
use eartrainer::interval::{MAJOR_SCALE, MINOR_SCALE};
use eartrainer::note::Pitch;
use eartrainer::parser::parse_pitch;
use eartrainer::quiz;
use eartrainer::synth::{DEFAULT_SAMPLE_RATE, SynthConfig, cycle_length};

use crate::audio::AudioOutput;

#[derive(Parser)]
#[command(name = "eartrainer", about = "Scale-degree ear training in the terminal")]
#[command(version)]
struct Cli {
    /// Length of each note and chord in milliseconds
    #[arg(long, global = true, default_value_t = 1000)]
    duration_ms: u64,

    /// Synthesis sample rate in Hz (defaults to the output device's rate)
    #[arg(long, global = true)]
    sample_rate: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hear a cadence, then name the scale degree of a random note
    Quiz {
        /// Stop after this many questions
        #[arg(long)]
        rounds: Option<u32>,

        /// Ask degrees of the minor scale instead of the major scale
        #[arg(long)]
        minor: bool,
    },

    /// Play a single pitch, e.g. `A4` or `C#5`
    Note {
        #[arg(value_parser = parse_pitch)]
        pitch: Pitch,
    },

    /// Play the major triad built on a pitch
    Chord {
        #[arg(value_parser = parse_pitch)]
        root: Pitch,
    },

    /// Print the label, linear index and frequency of a pitch
    Info {
        #[arg(value_parser = parse_pitch)]
        pitch: Pitch,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let note_length = Duration::from_millis(cli.duration_ms);

    match cli.command {
        Command::Info { pitch } => {
            let sample_rate = cli.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE);
            print_info(pitch, sample_rate)
        }
        Command::Note { pitch } => {
            let (output, config) = open_output(cli.sample_rate, note_length)?;
            println!("Playing {} ({:.2} Hz)", pitch, pitch.frequency());
            let buffer = quiz::render_note(pitch, &config)?;
            output.play(&buffer)?;
            Ok(())
        }
        Command::Chord { root } => {
            let (output, config) = open_output(cli.sample_rate, note_length)?;
            let pitches = triad()
                .absolute(root)
                .with_context(|| format!("building triad on {}", root))?;
            let desc: Vec<String> = pitches.iter().map(Pitch::label).collect();
            println!("Playing chord [{}]", desc.join(" "));
            let buffer = quiz::render_chord(&pitches, &config)?;
            output.play(&buffer)?;
            Ok(())
        }
        Command::Quiz { rounds, minor } => {
            let (output, config) = open_output(cli.sample_rate, note_length)?;
            let scale = if minor { &MINOR_SCALE } else { &MAJOR_SCALE };
            repl::run(&output, &config, scale, rounds)
        }
    }
}

fn open_output(sample_rate: Option<u32>, note_length: Duration) -> Result<(AudioOutput, SynthConfig)> {
    let output = AudioOutput::open().context("opening audio output")?;
    // a rate other than the device's would shift every pitch
    let rate = sample_rate.unwrap_or_else(|| output.sample_rate());
    if rate != output.sample_rate() {
        tracing::warn!(
            requested = rate,
            device = output.sample_rate(),
            "sample rate differs from the device; pitches will be transposed"
        );
    }
    let config = SynthConfig::new(rate, note_length);
    debug!(?config, "synth config");
    Ok((output, config))
}

fn print_info(pitch: Pitch, sample_rate: u32) -> Result<()> {
    let frequency = pitch.frequency();
    let cycle = cycle_length(frequency, sample_rate)?;
    println!("Pitch:        {}", pitch);
    println!("Linear index: {}", pitch.linear_index());
    println!("Frequency:    {:.3} Hz", frequency);
    println!(
        "Cycle:        {} samples at {} Hz (plays at {:.3} Hz)",
        cycle,
        sample_rate,
        sample_rate as f64 / cycle as f64
    );
    Ok(())
}
