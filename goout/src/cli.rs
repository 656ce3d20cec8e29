use anyhow::{bail, Context, Result};
use clap::Parser;
use goout::render;
use goout::{
    Advisor, AdvisorConfig, AdvisorError, DecisionCycle, FixedLocation, Geolocator,
    GoogleProvider, IpGeolocator, MoodPreset,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

/// 今天出門嗎？ Ask the AI whether to go out or stay home.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// How you feel right now.
    #[arg(short, long, conflicts_with = "preset")]
    pub mood: Option<String>,

    /// Use a preset mood instead (lazy, stressed, happy, undecided, tired).
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Latitude; skips IP geolocation when given with --lon.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude; skips IP geolocation when given with --lat.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// TOML config file.
    #[arg(short, long, env = "GOOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model for every call, overriding the config file.
    #[arg(long)]
    pub model: Option<String>,

    /// Print the decision as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// List mood presets and exit.
    #[arg(long)]
    pub list_presets: bool,
}

impl Args {
    fn load_config(&self) -> Result<AdvisorConfig> {
        let mut config = match &self.config {
            Some(path) => AdvisorConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => AdvisorConfig::default(),
        };
        if let Some(model) = &self.model {
            config.weather_model = model.clone();
            config.decision_model = model.clone();
        }
        Ok(config)
    }

    fn geolocator(&self) -> Result<Box<dyn Geolocator>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Box::new(
                FixedLocation::new(lat, lon).context("invalid --lat/--lon")?,
            )),
            _ => Ok(Box::new(IpGeolocator::new())),
        }
    }

    fn initial_mood(&self) -> Result<Option<String>> {
        if let Some(key) = &self.preset {
            let Some(preset) = MoodPreset::find(key) else {
                bail!("unknown preset {key:?}; try --list-presets");
            };
            return Ok(Some(preset.mood.to_string()));
        }
        Ok(self.mood.clone())
    }
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    println!("{label}");
    Ok(input.next_line().await?)
}

async fn ask_mood(input: &mut Input) -> Result<Option<String>> {
    println!("{}", render::presets());
    let Some(line) = prompt(input, "你現在的心情如何？（可輸入預設關鍵字）").await? else {
        return Ok(None);
    };
    let line = line.trim();
    Ok(Some(match MoodPreset::find(line) {
        Some(preset) => preset.mood.to_string(),
        None => line.to_string(),
    }))
}

/// Start a cycle, printing the user-facing message on failure.
async fn decide(
    advisor: &Advisor,
    mood: &str,
    geolocator: &dyn Geolocator,
) -> Option<DecisionCycle> {
    println!("正在為您做決定...");
    match advisor.start_cycle(mood, geolocator).await {
        Ok(cycle) => Some(cycle),
        Err(e) => {
            report(&e);
            None
        }
    }
}

fn report(err: &AdvisorError) {
    if err.is_validation() {
        warn!(error = %err, "model reply failed validation");
    }
    println!("{}", err.user_message());
}

pub async fn run(args: Args) -> Result<()> {
    if args.list_presets {
        println!("{}", render::presets());
        return Ok(());
    }

    let config = args.load_config()?;
    let provider = GoogleProvider::from_env().context("no Gemini API key")?;
    let advisor = Advisor::new(
        Arc::new(provider.model(config.weather_model.clone())),
        Arc::new(provider.model(config.decision_model.clone())),
        config,
    );
    let geolocator = args.geolocator()?;
    info!(?advisor, "advisor ready");

    if args.json {
        let mood = args
            .initial_mood()?
            .context("--json needs --mood or --preset")?;
        let cycle = match advisor.start_cycle(&mood, geolocator.as_ref()).await {
            Ok(cycle) => cycle,
            Err(e) => {
                let message = e.user_message();
                return Err(anyhow::Error::new(e).context(message));
            }
        };
        let report = render::CycleReport::from(&cycle);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut pending_mood = args.initial_mood()?;

    'cycles: loop {
        let mood = match pending_mood.take() {
            Some(mood) => mood,
            None => match ask_mood(&mut input).await? {
                Some(mood) => mood,
                None => break,
            },
        };

        let Some(mut cycle) = decide(&advisor, &mood, geolocator.as_ref()).await else {
            continue;
        };
        println!("\n{}", render::decision(cycle.result()));

        loop {
            let Some(command) = prompt(&mut input, render::COMMANDS).await? else {
                break 'cycles;
            };
            match command.trim() {
                "s" | "r" => {
                    let refresh = command.trim() == "r";
                    println!("正在尋找推薦...");
                    match advisor.suggest(&mut cycle, refresh).await {
                        Ok(set) => println!("\n{}", render::suggestions(&set)),
                        Err(e) => report(&e),
                    }
                }
                "c" => println!("\n{}\n", cycle.share_text()),
                "n" => continue 'cycles,
                "q" => break 'cycles,
                other => println!("不認得的指令：{other}"),
            }
        }
    }
    Ok(())
}
