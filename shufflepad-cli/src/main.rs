#![deny(missing_docs)]
//! A command-line interface for the shuffle-pad cipher.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use shufflepad_core::cipher::PadCipher;
use shufflepad_core::pad::Pad;
use shufflepad_core::seed::SeedSource;
use shufflepad_core::storage;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a pad from the current time\nshufflepad-cli generate --output ./my_pad.json\n\n# Generate a reproducible pad from a fixed instant\nshufflepad-cli generate --output ./my_pad.json --timestamp 2023-01-01T12:00:00Z\n\n# Encode a message file\nshufflepad-cli encode ./message.txt --pad ./my_pad.json\n\n# Decode, checking the pad against the sidecar first\nshufflepad-cli decode --input ./message.txt.enc --output ./message.txt --pad ./my_pad.json --metadata ./message.txt.enc.metadata.json\n\n# Run the built-in round-trip demonstration\nshufflepad-cli demo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new pad file
    Generate {
        /// The path to save the pad file
        #[arg(short, long)]
        output: PathBuf,

        /// UTC instant (RFC 3339) to derive the seed from. Defaults to the current time.
        #[arg(long, value_name = "RFC3339")]
        timestamp: Option<String>,
    },
    /// Encode a text file using a pad
    Encode {
        /// Path to the input file to encode
        #[arg()]
        input: PathBuf,

        /// Path to the pad file
        #[arg(short, long)]
        pad: PathBuf,

        /// Path for the encoded output. If omitted, uses the input filename with a .enc extension.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Decode an encoded file using a pad
    Decode {
        /// Path to the encoded input file
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the pad file
        #[arg(short, long)]
        pad: PathBuf,

        /// Path for the decoded output
        #[arg(short, long)]
        output: PathBuf,

        /// Path to the metadata sidecar. When given, the pad fingerprint is checked before decoding.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Run the built-in round-trip demonstration
    Demo {
        /// UTC instant (RFC 3339) to derive the seed from. Defaults to the current time.
        #[arg(long, value_name = "RFC3339")]
        timestamp: Option<String>,
    },
}

/// Metadata stored alongside an encoded file to guard decoding.
#[derive(serde::Serialize, serde::Deserialize)]
struct EncodeMetadata {
    pad_fingerprint: String,
    length: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { output, timestamp } => generate(output, timestamp.as_deref()),
        Commands::Encode { input, pad, output } => encode(input, pad, output.as_deref()),
        Commands::Decode {
            input,
            pad,
            output,
            metadata,
        } => decode(input, pad, output, metadata.as_deref()),
        Commands::Demo { timestamp } => demo(timestamp.as_deref()),
    }
}

fn seed_source_from(timestamp: &str) -> SeedSource {
    match timestamp.parse::<DateTime<Utc>>() {
        Ok(instant) => SeedSource::from(instant),
        Err(e) => {
            error!("Invalid --timestamp '{timestamp}': {e}");
            std::process::exit(1);
        }
    }
}

fn load_pad(path: &Path) -> Pad {
    storage::load_pad(path).unwrap_or_else(|e| {
        error!("Failed to load pad from '{}': {e}", path.display());
        std::process::exit(1);
    })
}

fn generate(output: &Path, timestamp: Option<&str>) {
    let mut cipher = PadCipher::new();
    if let Some(timestamp) = timestamp {
        cipher.set_seed_source(seed_source_from(timestamp));
    }

    info!("Generating a new pad at '{}'.", output.display());
    let pad = cipher.generate();
    if let Err(e) = storage::save_pad(output, pad) {
        error!("Failed to save pad file: {e}");
        std::process::exit(1);
    }

    println!("{}", pad.fingerprint());
    info!("Successfully generated pad file.");
}

fn encode(input: &Path, pad_path: &Path, output: Option<&Path>) {
    let message = fs::read_to_string(input).unwrap_or_else(|e| {
        error!("Failed to read input file '{}': {e}", input.display());
        std::process::exit(1);
    });

    let pad = load_pad(pad_path);
    let cipher = PadCipher::with_pad(pad);
    let encoded = cipher.encode(&message).unwrap_or_else(|e| {
        error!("Failed to encode: {e}");
        std::process::exit(1);
    });

    let output = output.map_or_else(
        || {
            let mut new_path = input.as_os_str().to_owned();
            new_path.push(".enc");
            PathBuf::from(new_path)
        },
        Path::to_path_buf,
    );

    if let Err(e) = fs::write(&output, &encoded) {
        error!("Failed to write encoded file: {e}");
        std::process::exit(1);
    }

    let metadata = EncodeMetadata {
        pad_fingerprint: cipher.pad().map(Pad::fingerprint).unwrap_or_default(),
        length: encoded.len(),
    };
    let metadata_path = format!("{}.metadata.json", output.display());
    let metadata_str = serde_json::to_string_pretty(&metadata).unwrap_or_else(|e| {
        error!("Failed to serialize metadata: {e}");
        std::process::exit(1);
    });
    if let Err(e) = fs::write(&metadata_path, metadata_str) {
        error!("Failed to write metadata file: {e}");
        std::process::exit(1);
    }

    println!(
        "Successfully encoded '{}' to '{}'",
        input.display(),
        output.display()
    );
    println!("Decoding metadata saved to '{metadata_path}'");
}

fn decode(input: &Path, pad_path: &Path, output: &Path, metadata: Option<&Path>) {
    let encoded = fs::read_to_string(input).unwrap_or_else(|e| {
        error!("Failed to read encoded file '{}': {e}", input.display());
        std::process::exit(1);
    });

    let pad = load_pad(pad_path);

    if let Some(metadata_path) = metadata {
        let metadata_str = fs::read_to_string(metadata_path).unwrap_or_else(|e| {
            error!("Failed to read metadata file: {e}");
            std::process::exit(1);
        });
        let meta: EncodeMetadata = serde_json::from_str(&metadata_str).unwrap_or_else(|e| {
            error!("Failed to parse metadata file: {e}");
            std::process::exit(1);
        });

        if meta.pad_fingerprint != pad.fingerprint() {
            error!(
                "Pad fingerprint does not match the metadata. Decoding with the wrong pad would produce garbage. Aborting."
            );
            std::process::exit(1);
        }
        if meta.length != encoded.len() {
            warn!(
                "Encoded file is {} bytes but metadata recorded {}.",
                encoded.len(),
                meta.length
            );
        }
    }

    let cipher = PadCipher::with_pad(pad);
    let decoded = cipher.decode(&encoded).unwrap_or_else(|e| {
        error!("Failed to decode: {e}");
        std::process::exit(1);
    });

    if let Err(e) = fs::write(output, &decoded) {
        error!("Failed to write decoded file: {e}");
        std::process::exit(1);
    }

    println!(
        "Successfully decoded '{}' to '{}'",
        input.display(),
        output.display()
    );
}

fn demo(timestamp: Option<&str>) {
    let mut cipher = PadCipher::new();
    if let Some(timestamp) = timestamp {
        cipher.set_seed_source(seed_source_from(timestamp));
    }

    let message = "Meet at the old mill at dawn. Bring the second lantern.";
    let pad = cipher.generate().clone();

    let encoded = cipher.encode(message).unwrap_or_else(|e| {
        error!("Failed to encode demo message: {e}");
        std::process::exit(1);
    });
    let decoded = cipher.decode(&encoded).unwrap_or_else(|e| {
        error!("Failed to decode demo message: {e}");
        std::process::exit(1);
    });

    println!();
    println!("{encoded}");
    println!("{:=<65}", "");
    println!("{decoded}");
    println!("{:=<65}", "");
    println!("== Different instance with the pad passed in ...");
    println!();

    let receiver = PadCipher::with_pad(pad);
    let redecoded = receiver.decode(&encoded).unwrap_or_else(|e| {
        error!("Failed to decode with the second instance: {e}");
        std::process::exit(1);
    });
    println!("{redecoded}");
    println!();

    if decoded == message && redecoded == message {
        info!("Round trip verified on both instances.");
    } else {
        error!("Round trip mismatch: decoded output does not equal the original message.");
        std::process::exit(1);
    }
}
