use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vcard_qr::render::{
    DEFAULT_SIZE_PX, RenderOptions, parse_hex_color, render_ascii, render_svg, save_image,
};
use vcard_qr::store::{ContactInput, ContactRecord, ContactStore, JsonFileStore};
use vcard_qr::{Contact, ECLevel, EncodeOptions, MaskPattern, QrSymbol, encode_with};

const DEFAULT_STORE: &str = "qr_history.json";

#[derive(Parser)]
#[command(name = "qrtool", version, about = "vCard QR code generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text or contact fields and write a PNG or SVG
    Encode {
        #[command(flatten)]
        payload: Payload,
        #[command(flatten)]
        encoding: Encoding,
        /// Output file; `.svg` writes vector output, anything else goes through `image`
        #[arg(long)]
        out: PathBuf,
        /// Target image size in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE_PX)]
        size: u32,
        #[arg(long, default_value = "#000000")]
        dark: String,
        #[arg(long, default_value = "#ffffff")]
        light: String,
        /// Also record the contact in the history under this name
        #[arg(long, conflicts_with = "text")]
        save: Option<String>,
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },
    /// Print the symbol to the terminal with its version, mask and penalty
    Show {
        #[command(flatten)]
        payload: Payload,
        #[command(flatten)]
        encoding: Encoding,
    },
    /// Saved-code history
    History {
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved codes, newest first
    List,
    /// Delete a saved code by id
    Delete { id: u64 },
}

#[derive(Args)]
struct Payload {
    /// Raw text to encode instead of a vCard
    #[arg(long, conflicts_with_all = CONTACT_FIELDS)]
    text: Option<String>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    job_title: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    zip: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    website: Option<String>,
}

const CONTACT_FIELDS: [&str; 12] = [
    "first_name",
    "last_name",
    "phone",
    "email",
    "company",
    "job_title",
    "street",
    "city",
    "state",
    "zip",
    "country",
    "website",
];

impl Payload {
    fn contact(&self) -> Contact {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        Contact {
            first_name: field(&self.first_name),
            last_name: field(&self.last_name),
            phone: field(&self.phone),
            email: field(&self.email),
            company: field(&self.company),
            job_title: field(&self.job_title),
            street: field(&self.street),
            city: field(&self.city),
            state: field(&self.state),
            zip: field(&self.zip),
            country: field(&self.country),
            website: field(&self.website),
        }
    }

    fn bytes(&self) -> Vec<u8> {
        match &self.text {
            Some(text) => text.clone().into_bytes(),
            None => self.contact().to_vcard().into_bytes(),
        }
    }
}

#[derive(Args)]
struct Encoding {
    /// Error correction level (L, M, Q, H)
    #[arg(long, default_value = "M")]
    ec: ECLevel,
    /// Force a mask id (0-7) instead of choosing the lowest penalty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..8))]
    mask: Option<u8>,
    /// Raise the EC level when it does not grow the symbol
    #[arg(long)]
    boost: bool,
}

impl Encoding {
    fn options(&self) -> EncodeOptions {
        let mut options = EncodeOptions::new(self.ec).with_boost_ec_level(self.boost);
        if let Some(mask) = self.mask.and_then(MaskPattern::from_bits) {
            options = options.with_mask(mask);
        }
        options
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            payload,
            encoding,
            out,
            size,
            dark,
            light,
            save,
            store,
        } => encode_cmd(&payload, &encoding, &out, size, &dark, &light, save, &store),
        Command::Show { payload, encoding } => show_cmd(&payload, &encoding),
        Command::History { store, action } => history_cmd(&store, action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn encode_payload(payload: &Payload, encoding: &Encoding) -> Result<QrSymbol, String> {
    encode_with(&payload.bytes(), &encoding.options()).map_err(|e| e.to_string())
}

#[allow(clippy::too_many_arguments)]
fn encode_cmd(
    payload: &Payload,
    encoding: &Encoding,
    out: &Path,
    size: u32,
    dark: &str,
    light: &str,
    save: Option<String>,
    store: &Path,
) -> Result<(), String> {
    let symbol = encode_payload(payload, encoding)?;
    let dark_rgb = parse_hex_color(dark).map_err(|e| e.to_string())?;
    let light_rgb = parse_hex_color(light).map_err(|e| e.to_string())?;
    let options = RenderOptions::fit(&symbol, size).with_colors(dark_rgb, light_rgb);

    let is_svg = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let svg = render_svg(&symbol, &options).map_err(|e| e.to_string())?;
        std::fs::write(out, svg).map_err(|e| e.to_string())?;
    } else {
        save_image(&symbol, &options, out).map_err(|e| e.to_string())?;
    }
    println!(
        "Wrote {} (version={}, ec={}, mask={}, penalty={})",
        out.display(),
        symbol.version(),
        symbol.ec_level(),
        symbol.mask().id(),
        symbol.penalty()
    );

    if let Some(name) = save {
        let mut history = JsonFileStore::new(store);
        let record = save_record(&mut history, name, payload, dark, light)?;
        println!("Saved as #{} in {}", record.id, store.display());
    }
    Ok(())
}

/// Record the contact behind an encoded payload; raw text has no contact to save
fn save_record<S: ContactStore>(
    history: &mut S,
    name: String,
    payload: &Payload,
    dark: &str,
    light: &str,
) -> Result<ContactRecord, String> {
    if payload.text.is_some() {
        return Err("--save needs contact fields, not --text".to_string());
    }
    let input = ContactInput::new(name, payload.contact()).with_colors(dark, light);
    history.create(input).map_err(|e| e.to_string())
}

fn show_cmd(payload: &Payload, encoding: &Encoding) -> Result<(), String> {
    let symbol = encode_payload(payload, encoding)?;
    print!("{}", render_ascii(&symbol, 2));
    println!(
        "version={} size={} ec={} mask={} penalty={}",
        symbol.version(),
        symbol.size(),
        symbol.ec_level(),
        symbol.mask().id(),
        symbol.penalty()
    );
    Ok(())
}

fn history_cmd(store: &Path, action: HistoryAction) -> Result<(), String> {
    let mut history = JsonFileStore::new(store);
    match action {
        HistoryAction::List => {
            let records = history.list().map_err(|e| e.to_string())?;
            if records.is_empty() {
                println!("No QR codes saved yet");
            }
            for record in records {
                println!(
                    "#{:<4} {:<24} {:<24} {:<24} Created: {}",
                    record.id,
                    record.name,
                    record.contact.full_name(),
                    record.contact.company,
                    record.created_date()
                );
            }
        }
        HistoryAction::Delete { id } => {
            if history.delete(id).map_err(|e| e.to_string())? {
                println!("Deleted #{id}");
            } else {
                return Err(format!("no saved QR code with id {id}"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vcard_qr::store::MemoryStore;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("qrtool").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_save_with_raw_text_rejected() {
        let err = parse(&["encode", "--text", "FN:Real Person", "--save", "Real", "--out", "a.png"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(parse(&["encode", "--text", "hi", "--city", "Paris", "--out", "a.png"]).is_err());
    }

    #[test]
    fn test_saved_vcard_matches_encoded_payload() {
        let cli = parse(&[
            "encode",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--street",
            "12 St James's Square",
            "--city",
            "London",
            "--country",
            "UK",
            "--save",
            "Ada",
            "--out",
            "ada.png",
        ])
        .unwrap();
        let Command::Encode { payload, save, .. } = cli.command else {
            panic!("expected encode");
        };
        let mut history = MemoryStore::new();
        let record = save_record(&mut history, save.unwrap(), &payload, "#000000", "#ffffff").unwrap();
        assert_eq!(record.vcard.as_bytes(), payload.bytes().as_slice());
        assert!(record.vcard.contains("ADR:;;12 St James's Square;London;;;UK"));
    }

    #[test]
    fn test_save_record_refuses_text_payload() {
        let payload = Payload {
            text: Some("FN:Real Person".into()),
            first_name: None,
            last_name: None,
            phone: None,
            email: None,
            company: None,
            job_title: None,
            street: None,
            city: None,
            state: None,
            zip: None,
            country: None,
            website: None,
        };
        let mut history = MemoryStore::new();
        assert!(save_record(&mut history, "Real".into(), &payload, "#000", "#fff").is_err());
        assert!(history.is_empty());
    }
}
