use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use bannerforge::config::compact::JsonMap;
use bannerforge::geometry::gradient::GradientKind;
use bannerforge::{Overrides, PresetLibrary, Services, StageError};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "bannerforge", version, about = "Procedural banner generator")]
struct Cli {
    /// Log debug output, including every pipeline stage.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one banner, or every preset with `--all-presets`.
    Render(RenderArgs),
    /// List available presets.
    Presets {
        /// Extra directory of `*.json` presets.
        #[arg(long)]
        presets_dir: Option<PathBuf>,
    },
    /// List generator names per family.
    List,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    subtitle: Option<String>,
    /// Raster or SVG icon.
    #[arg(long)]
    icon: Option<String>,
    /// Output image path; the extension picks the format.
    #[arg(long)]
    out: Option<String>,
    /// JSON config document applied over the preset.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    preset: Option<String>,
    #[arg(long)]
    presets_dir: Option<PathBuf>,

    /// `start:end:type`
    #[arg(long)]
    bg: Option<String>,
    /// `color:shadow`
    #[arg(long)]
    text: Option<String>,
    /// `type:color:opacity:freq:amp`
    #[arg(long)]
    pattern: Option<String>,
    /// `type:color:opacity`
    #[arg(long)]
    shape: Option<String>,
    /// `type:opacity`
    #[arg(long)]
    texture: Option<String>,
    /// `type[,type...]:intensity`
    #[arg(long)]
    effect: Option<String>,
    #[arg(long)]
    overlay: Option<String>,

    #[arg(long)]
    accent: Option<String>,
    /// low, medium or high.
    #[arg(long)]
    intensity: Option<String>,
    /// low, medium or high.
    #[arg(long)]
    contrast: Option<String>,
    /// small, medium or large.
    #[arg(long)]
    size: Option<String>,
    /// Radius for all four corners.
    #[arg(long)]
    rounded: Option<u32>,
    #[arg(long)]
    padding: Option<u32>,

    #[arg(long)]
    supersampling: Option<u32>,
    /// Disable automatic color adjustments.
    #[arg(long)]
    test_mode: bool,

    /// Render every preset into `--out-dir`.
    #[arg(long, requires = "out_dir")]
    all_presets: bool,
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl RenderArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            preset: self.preset.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            icon: self.icon.clone(),
            output: self.out.clone(),
            bg: self.bg.clone(),
            text: self.text.clone(),
            pattern: self.pattern.clone(),
            shape: self.shape.clone(),
            texture: self.texture.clone(),
            effect: self.effect.clone(),
            overlay: self.overlay.clone(),
            accent: self.accent.clone(),
            intensity: self.intensity.clone(),
            contrast: self.contrast.clone(),
            size: self.size.clone(),
            rounded: self.rounded,
            padding: self.padding,
            supersampling: self.supersampling,
            test_mode: self.test_mode,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets { presets_dir } => cmd_presets(presets_dir.as_deref()),
        Command::List => {
            cmd_list();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<StageError>() {
                Some(stage_err) => report_stage_error(stage_err),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_stage_error(err: &StageError) {
    eprintln!("{err}");
    eprintln!("config:");
    eprintln!("{}", err.config_dump());
}

fn load_presets(dir: Option<&Path>) -> anyhow::Result<PresetLibrary> {
    let lib = PresetLibrary::builtin().context("load built-in presets")?;
    match dir {
        Some(dir) => lib
            .with_dir(dir)
            .with_context(|| format!("load presets from '{}'", dir.display())),
        None => Ok(lib),
    }
}

fn read_config_doc(path: &Path) -> anyhow::Result<JsonMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    match serde_json::from_str(&text).with_context(|| "parse config JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("config '{}' must be a JSON object", path.display()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let presets = load_presets(args.presets_dir.as_deref())?;
    let base = args.config.as_deref().map(read_config_doc).transpose()?;
    let services = Services::system();

    if args.all_presets {
        let out_dir = args
            .out_dir
            .clone()
            .context("--all-presets needs --out-dir")?;
        return render_all(&args, &presets, base, &services, &out_dir);
    }

    let config = args
        .overrides()
        .resolve(&presets, base)
        .context("resolve config")?;
    let path = bannerforge::render_to_file(&config, &services)?;
    println!("{}", path.display());
    Ok(())
}

fn render_all(
    args: &RenderArgs,
    presets: &PresetLibrary,
    base: Option<JsonMap>,
    services: &Services,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let names: Vec<String> = presets.names().map(str::to_owned).collect();
    let failures: Vec<String> = names
        .par_iter()
        .filter_map(|name| {
            let mut overrides = args.overrides();
            overrides.preset = Some(name.clone());
            let out = out_dir.join(format!("{name}.png"));
            overrides.output = Some(out.to_string_lossy().into_owned());
            let config = match overrides.resolve(presets, base.clone()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("error: preset '{name}': {e}");
                    return Some(name.clone());
                }
            };
            match bannerforge::render_to_file(&config, services) {
                Ok(path) => {
                    println!("{}", path.display());
                    None
                }
                Err(e) => {
                    report_stage_error(&e);
                    Some(name.clone())
                }
            }
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} preset(s) failed: {}", failures.len(), failures.join(", "))
    }
}

fn cmd_presets(dir: Option<&Path>) -> anyhow::Result<()> {
    for name in load_presets(dir)?.names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_list() {
    let families = [
        ("patterns", bannerforge::patterns::names()),
        ("shapes", bannerforge::shapes::names()),
        ("textures", bannerforge::textures::names()),
        ("effects", bannerforge::effects::names()),
        ("overlays", bannerforge::overlays::names()),
        ("gradients", GradientKind::names()),
    ];
    for (family, names) in families {
        println!("{family}: {}", names.join(", "));
    }
}
