//! ShotForge Studio CLI
//!
//! Usage:
//!   shotforge analyze lyrics.txt --title "Night Drive"
//!   shotforge export shots.json --format csv -o shots.csv
//!   shotforge artist add "Nova Rae" --genres synthpop,darkwave
//!   shotforge artist use nova_rae
//!   shotforge generate "rooftop finale at dawn" -n 12
//!   shotforge prompts --category style

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sf_bank::ArtistBank;
use sf_composer::{
    AnalyzeRequest, GenerateRequest, OpenAiProvider, PromptLibrary, analyze_song_dna,
    generate_shots,
};
use sf_core::{ArtistProfile, ShotData, SongDna};
use sf_dna::StructuralAnalysis;
use sf_export::{ExportConfig, ExportFormat, ShotSeparator, TemplateVars, export_shots};

#[derive(Parser)]
#[command(name = "shotforge", about = "ShotForge Studio command line", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze song lyrics into song DNA
    Analyze {
        /// Lyrics file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Song title
        #[arg(long)]
        title: Option<String>,
        /// Artist name (defaults to the active artist)
        #[arg(long)]
        artist: Option<String>,
        /// Skip the model call; heuristics only
        #[arg(long)]
        offline: bool,
        /// Print the DNA as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Export a shot list file to a delivery format
    Export {
        /// Shot list JSON; reads stdin when omitted
        file: Option<PathBuf>,
        /// Output format: text, numbered, json, csv
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Template prepended to every shot
        #[arg(long, default_value = "")]
        prefix: String,
        /// Template appended to every shot
        #[arg(long, default_value = "")]
        suffix: String,
        /// Shot separator for text formats: double, single
        #[arg(long, default_value = "double")]
        separator: String,
        /// Append chapter/section/style annotations
        #[arg(long)]
        metadata: bool,
        /// Artist supplying template variables (defaults to the active artist)
        #[arg(long)]
        artist: Option<String>,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage the artist bank
    Artist {
        #[command(subcommand)]
        command: ArtistCommands,
    },
    /// Generate a shot list from a creative brief
    Generate {
        /// The creative brief
        concept: String,
        /// Number of shots to request
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,
        /// Director style applied to shots that specify none
        #[arg(long)]
        style: Option<String>,
        /// Artist context (defaults to the active artist)
        #[arg(long)]
        artist: Option<String>,
        /// Print the shots as JSON instead of a numbered list
        #[arg(long)]
        json: bool,
        /// Write the shots as JSON to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List prompt library templates
    Prompts {
        /// Only this category (style, camera, treatment)
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum ArtistCommands {
    /// List stored artists
    List,
    /// Show one artist (or the active one)
    Show {
        /// Artist id, tag, or name; defaults to the active artist
        name: Option<String>,
    },
    /// Add or update an artist
    Add {
        /// Display name (or import with --file)
        name: Option<String>,
        /// Import a full profile from a JSON file
        #[arg(long, conflicts_with = "name")]
        file: Option<PathBuf>,
        /// Comma-separated genres
        #[arg(long, value_delimiter = ',')]
        genres: Vec<String>,
        /// Vocal style
        #[arg(long)]
        vocal: Option<String>,
        /// Visual look
        #[arg(long)]
        look: Option<String>,
        /// Writing persona
        #[arg(long)]
        persona: Option<String>,
    },
    /// Remove an artist
    Remove {
        /// Artist id, tag, or name
        name: String,
    },
    /// Select the active artist
    Use {
        /// Artist id, tag, or name
        name: String,
    },
    /// Clear the active selection
    ClearActive,
    /// Drop duplicate artists (same tag, first wins)
    Dedupe,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            title,
            artist,
            offline,
            json,
        } => cmd_analyze(file, title, artist, offline, json).await,
        Commands::Export {
            file,
            format,
            prefix,
            suffix,
            separator,
            metadata,
            artist,
            output,
        } => cmd_export(file, &format, prefix, suffix, &separator, metadata, artist, output),
        Commands::Artist { command } => cmd_artist(command),
        Commands::Generate {
            concept,
            count,
            style,
            artist,
            json,
            output,
        } => cmd_generate(concept, count, style, artist, json, output).await,
        Commands::Prompts { category } => cmd_prompts(category),
    }
}

/// Read a file, or stdin when no path is given
fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

/// Provider from the environment, honoring the optional base URL and
/// model overrides
fn build_provider() -> Result<OpenAiProvider> {
    let mut provider = OpenAiProvider::from_env()
        .context("provider configuration (set OPENAI_API_KEY, or use --offline where available)")?;
    if let Ok(base) = std::env::var("OPENAI_BASE_URL") {
        provider = provider.with_base_url(base);
    }
    if let Ok(model) = std::env::var("OPENAI_MODEL") {
        provider = provider.with_model(model);
    }
    Ok(provider)
}

/// Resolve an artist by name/tag/id, or fall back to the active one
fn resolve_artist(bank: &ArtistBank, name: Option<&str>) -> Option<ArtistProfile> {
    match name {
        Some(name) => bank.get(name),
        None => bank.active(),
    }
}

async fn cmd_analyze(
    file: Option<PathBuf>,
    title: Option<String>,
    artist: Option<String>,
    offline: bool,
    json: bool,
) -> Result<()> {
    let lyrics = read_input(file.as_ref())?;
    let bank = ArtistBank::open_default()?;
    let artist_name = artist.or_else(|| bank.active().map(|a| a.name));

    let mut request = AnalyzeRequest::new(lyrics);
    request.title = title;
    request.artist = artist_name;

    let dna = if offline {
        analyze_song_dna(&request, None).await
    } else {
        let provider = build_provider()?;
        analyze_song_dna(&request, Some(&provider)).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dna)?);
    } else {
        print_sections(&sf_dna::analyze(&request.lyrics));
        print_dna(&dna);
    }
    Ok(())
}

fn print_sections(structural: &StructuralAnalysis) {
    if structural.sections.is_empty() {
        return;
    }
    println!("Structure:");
    for section in &structural.sections {
        println!("  {}  ({} lines)", section.label, section.lines.len());
    }
}

fn print_dna(dna: &SongDna) {
    if let Some(title) = &dna.title {
        println!("Title:       {title}");
    }
    if let Some(artist) = &dna.artist {
        println!("Artist:      {artist}");
    }
    println!("Mode:        {:?} (confidence {:.2})", dna.mode, dna.confidence);
    println!("Sections:    {}", dna.section_count);
    println!("Lines:       {}", dna.line_count);
    if !dna.rhyme_scheme.is_empty() {
        println!("Scheme:      {}", dna.rhyme_scheme);
    }
    if !dna.syllables.is_empty() {
        println!(
            "Syllables:   avg {:.1} (min {}, max {})",
            dna.syllables.average, dna.syllables.min, dna.syllables.max
        );
    }
    if !dna.themes.is_empty() {
        println!("Themes:      {}", dna.themes.join(", "));
    }
    if let Some(mood) = &dna.mood {
        println!("Mood:        {mood}");
    }
}

/// Accept either a bare shot array or an object with a `shots` field
fn parse_shots_input(raw: &str) -> Result<Vec<ShotData>> {
    if let Ok(shots) = serde_json::from_str::<Vec<ShotData>>(raw) {
        return Ok(shots);
    }
    let value: serde_json::Value = serde_json::from_str(raw).context("shot list is not JSON")?;
    let shots = value
        .get("shots")
        .cloned()
        .context("expected a shot array or an object with a \"shots\" field")?;
    serde_json::from_value(shots).context("malformed shot entries")
}

fn parse_separator(separator: &str) -> Result<ShotSeparator> {
    match separator {
        "double" | "double_newline" => Ok(ShotSeparator::DoubleNewline),
        "single" | "single_newline" => Ok(ShotSeparator::SingleNewline),
        other => bail!("unknown separator {other:?} (expected: double, single)"),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_export(
    file: Option<PathBuf>,
    format: &str,
    prefix: String,
    suffix: String,
    separator: &str,
    metadata: bool,
    artist: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let shots = parse_shots_input(&read_input(file.as_ref())?)?;
    let format: ExportFormat = format.parse()?;

    let config = ExportConfig::for_format(format)
        .with_prefix(prefix)
        .with_suffix(suffix)
        .with_separator(parse_separator(separator)?)
        .with_metadata(metadata);

    let bank = ArtistBank::open_default()?;
    let vars = match resolve_artist(&bank, artist.as_deref()) {
        Some(profile) => TemplateVars::from_artist(&profile),
        None => {
            if let Some(name) = &artist {
                bail!("unknown artist: {name}");
            }
            TemplateVars::new()
        }
    };

    let rendered = export_shots(&shots, &config, &vars)?;
    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_artist(command: ArtistCommands) -> Result<()> {
    let bank = ArtistBank::open_default()?;

    match command {
        ArtistCommands::List => {
            let artists = bank.all();
            if artists.is_empty() {
                println!("No artists stored.");
                return Ok(());
            }
            let active_id = bank.active().map(|a| a.id);
            for artist in artists {
                let marker = if active_id.as_deref() == Some(artist.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {}  ({})", artist.name, artist.tag);
            }
        }
        ArtistCommands::Show { name } => {
            let Some(artist) = resolve_artist(&bank, name.as_deref()) else {
                bail!("no matching artist (and no active selection)");
            };
            print_artist(&artist);
        }
        ArtistCommands::Add {
            name,
            file,
            genres,
            vocal,
            look,
            persona,
        } => {
            let mut profile = match (file, name) {
                (Some(path), _) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str::<ArtistProfile>(&raw)
                        .with_context(|| format!("malformed profile in {}", path.display()))?
                }
                (None, Some(name)) => match bank.get(&name) {
                    Some(existing) => existing,
                    None => ArtistProfile::new(&name),
                },
                (None, None) => bail!("artist add needs a name or --file"),
            };
            if !genres.is_empty() {
                profile.genres = genres;
            }
            if vocal.is_some() {
                profile.vocal_style = vocal;
            }
            if look.is_some() {
                profile.visual_look = look;
            }
            if persona.is_some() {
                profile.writing_persona = persona;
            }
            bank.upsert(profile.clone())?;
            let saved = bank.get(&profile.id).unwrap_or(profile);
            println!("Saved {} ({})", saved.name, saved.tag);
        }
        ArtistCommands::Remove { name } => {
            if bank.remove(&name)? {
                println!("Removed {name}");
            } else {
                bail!("unknown artist: {name}");
            }
        }
        ArtistCommands::Use { name } => {
            let artist = bank.set_active(&name)?;
            println!("Active artist: {} ({})", artist.name, artist.tag);
        }
        ArtistCommands::ClearActive => {
            bank.clear_active()?;
            println!("Active artist cleared.");
        }
        ArtistCommands::Dedupe => {
            let dropped = bank.dedupe()?;
            println!("Dropped {dropped} duplicate(s).");
        }
    }
    Ok(())
}

fn print_artist(artist: &ArtistProfile) {
    println!("Name:     {}", artist.name);
    println!("Tag:      {}", artist.tag);
    println!("Id:       {}", artist.id);
    if !artist.genres.is_empty() {
        println!("Genres:   {}", artist.genres.join(", "));
    }
    if let Some(vocal) = &artist.vocal_style {
        println!("Vocal:    {vocal}");
    }
    if let Some(look) = &artist.visual_look {
        println!("Look:     {look}");
    }
    if let Some(persona) = &artist.writing_persona {
        println!("Persona:  {persona}");
    }
    if let Some(notes) = &artist.notes {
        println!("Notes:    {notes}");
    }
}

async fn cmd_generate(
    concept: String,
    count: usize,
    style: Option<String>,
    artist: Option<String>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    if count == 0 {
        bail!("shot count must be at least 1");
    }
    let provider = build_provider()?;
    let bank = ArtistBank::open_default()?;

    let mut request = GenerateRequest::new(concept, count);
    if let Some(profile) = resolve_artist(&bank, artist.as_deref()) {
        request = request.with_artist(profile);
    } else if let Some(name) = &artist {
        bail!("unknown artist: {name}");
    }
    if let Some(style) = style {
        request = request.with_director_style(style);
    }

    let shots = generate_shots(&request, &provider).await?;
    if let Some(path) = output {
        let rendered = serde_json::to_string_pretty(&shots)?;
        std::fs::write(&path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} shots to {}", shots.len(), path.display());
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&shots)?);
    } else {
        for shot in &shots {
            println!("{}. {}", shot.number, shot.description);
            if let Some(section) = &shot.section {
                println!("   [{section}]");
            }
        }
    }
    Ok(())
}

fn cmd_prompts(category: Option<String>) -> Result<()> {
    let library = PromptLibrary::global();
    let templates = match category {
        Some(category) => library.by_category(&category),
        None => library.all(),
    };
    if templates.is_empty() {
        println!("No templates.");
        return Ok(());
    }
    for template in templates {
        println!("[{}] {} — {}", template.category, template.id, template.name);
        println!("    {}", template.text);
    }
    Ok(())
}
