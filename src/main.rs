use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gbfix::header;
use gbfix::tools::parse::parse_byte;
use gbfix::LicenseeCode;
use gbfix::Outcome;
use gbfix::UpdateRequest;
use gbfix::Warning;

#[derive(Parser)]
#[command(
    name = "gbfix",
    version,
    about = "Inspect and fix Game Boy ROM headers",
    long_about = "Shows the cartridge header of a Game Boy ROM image, optionally updates its fields and always keeps the header checksum valid when it writes."
)]
struct Cli {
    /// ROM image to operate on
    file: PathBuf,

    /// Set the ROM title (16 bytes, 11 on CGB headers)
    #[arg(short, long)]
    title: Option<String>,

    /// Set the manufacturer code (4 bytes, only read on CGB headers)
    #[arg(short, long)]
    manufacturer: Option<String>,

    /// Set the CGB flags byte
    #[arg(short, long, value_parser = parse_byte)]
    cgb_flags: Option<u8>,

    /// Set an old-style licensee code
    #[arg(short, long, value_parser = parse_byte, conflicts_with = "new_licensee")]
    licensee: Option<u8>,

    /// Set a new-style licensee code
    #[arg(short = 'L', long, value_parser = parse_byte)]
    new_licensee: Option<u8>,

    /// Set the SGB flag (0x03 enables Super Game Boy functions)
    #[arg(short, long, value_parser = parse_byte)]
    sgb_flag: Option<u8>,

    /// Set the cartridge type
    #[arg(short = 'C', long, value_parser = parse_byte)]
    cart_type: Option<u8>,

    /// Set the ROM size code (32kB << code)
    #[arg(long, value_parser = parse_byte, conflicts_with = "fit_rom_size")]
    rom_size: Option<u8>,

    /// Derive the ROM size code from the file length
    #[arg(long)]
    fit_rom_size: bool,

    /// Set the RAM size code
    #[arg(short = 'R', long, value_parser = parse_byte)]
    ram_size: Option<u8>,

    /// Set the region (0 Japan, 1 international)
    #[arg(short, long, value_parser = parse_byte)]
    region: Option<u8>,

    /// Set the ROM version
    #[arg(long, value_parser = parse_byte)]
    rom_version: Option<u8>,

    /// Don't write anything, only show what would change
    #[arg(short, long)]
    dry_run: bool,

    /// Don't print the header before updating it
    #[arg(long)]
    no_rom_info: bool,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, value_name = "LEVEL", default_value = "error")]
    log_level: String,
}

impl Cli {
    fn request(&self) -> UpdateRequest {
        let mut request = UpdateRequest::new();
        if let Some(ref t) = self.title {
            request = request.title(t.as_str());
        }
        if let Some(ref m) = self.manufacturer {
            request = request.manufacturer(m.as_str());
        }
        if let Some(v) = self.cgb_flags {
            request = request.cgb_flags(v);
        }
        if let Some(v) = self.licensee {
            request = request.licensee(LicenseeCode::old(v));
        }
        if let Some(v) = self.new_licensee {
            request = request.licensee(LicenseeCode::new(v));
        }
        if let Some(v) = self.sgb_flag {
            request = request.sgb_flag(v);
        }
        if let Some(v) = self.cart_type {
            request = request.cart_type(v);
        }
        if let Some(v) = self.rom_size {
            request = request.rom_size(v);
        }
        if self.fit_rom_size {
            request = request.fit_rom_size();
        }
        if let Some(v) = self.ram_size {
            request = request.ram_size(v);
        }
        if let Some(v) = self.region {
            request = request.region(v);
        }
        if let Some(v) = self.rom_version {
            request = request.rom_version(v);
        }
        request
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

fn print_digest(outcome: &Outcome) {
    let d = &outcome.digest;
    println!(
        "Image:\t\t\t{} bytes, CRC32 0x{:08X}, computed global checksum 0x{:04X} (stored 0x{:04X})",
        d.len,
        d.crc32,
        d.global_checksum,
        header::global_checksum(&outcome.original)
    );
}

// warnings go to stderr whatever the log filter says
fn warning_lines(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(|w| format!("Warning: {}", w)).collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let request = cli.request();
    let outcome = gbfix::update_file(&cli.file, &request, cli.dry_run)
        .with_context(|| format!("could not process \"{}\"", cli.file.display()))?;

    if !cli.no_rom_info {
        println!("Using file: \"{}\"", cli.file.display());
        print!("{}", outcome.original_report());
        print_digest(&outcome);
    }

    for line in warning_lines(&outcome.warnings) {
        eprintln!("{}", line);
    }

    if outcome.changed() && cli.dry_run {
        println!("\nUpdated ROM header:");
        print!("{}", outcome.report());
    }
    if cli.dry_run && !request.is_empty() {
        println!("\nDry run: nothing was written.");
    }

    Ok(())
}
