use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use worksheet_gen::config::toml_config::TomlConfig;
use worksheet_gen::core::sheets::Worksheet;
use worksheet_gen::core::ConfigProvider;
use worksheet_gen::utils::error::ErrorSeverity;
use worksheet_gen::utils::validation::{ArgSpec, Validate, COUNT_ARG, DIFFICULTY_ARG, DIGITS_ARG};
use worksheet_gen::utils::logger;
use worksheet_gen::{
    AdditionSheet, CliConfig, Difficulty, Digits, FontSet, LocalStorage, ReadingSheet,
    SheetCommand, WorksheetEngine,
};

fn resolve_arg(arg: &ArgSpec, raw: Option<&str>) -> u32 {
    let resolved = arg.resolve(raw);
    if let Some(warning) = &resolved.warning {
        tracing::warn!("{} = {:?} rejected, using {}", arg.name, raw, resolved.value);
        println!("{}", warning);
    }
    resolved.value
}

fn load_config(cli: &CliConfig) -> anyhow::Result<TomlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => TomlConfig::default(),
    };

    if let Some(output) = &cli.output {
        config.output.dir = output.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn execute<W: Worksheet>(sheet: W, count: usize, cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no images will be written");
        let engine = WorksheetEngine::new(
            sheet,
            LocalStorage::new(config.output_path()),
            FontSet::builtin(),
            config.dpi(),
        );
        let json = engine.dry_run(count, &mut rng, chrono::Local::now().naive_local())?;
        println!("{}", json);
        return Ok(());
    }

    let fonts = FontSet::load(&config.fonts);
    let engine = WorksheetEngine::new(sheet, LocalStorage::new(config.output_path()), fonts, config.dpi());

    match engine.run(count, &mut rng) {
        Ok(saved) => {
            for path in &saved {
                println!("✓ 생성됨: {}", path.display());
            }
            println!("✓ 총 {}개 이미지 생성 완료.", saved.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Worksheet generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        SheetCommand::Addition { difficulty, count } => {
            let level = resolve_arg(&DIFFICULTY_ARG, difficulty.as_deref());
            let count = resolve_arg(&COUNT_ARG, count.as_deref());
            let difficulty = Difficulty::new(level as u8).unwrap_or_default();

            println!("이미지 생성 중... (덧셈 난이도 {}, 이미지 수: {})", level, count);
            execute(AdditionSheet::new(difficulty), count as usize, &cli, &config)
        }
        SheetCommand::Reading { digits, count } => {
            let digits = resolve_arg(&DIGITS_ARG, digits.as_deref());
            let count = resolve_arg(&COUNT_ARG, count.as_deref());
            let sheet = ReadingSheet::new(Digits::new(digits as u8).unwrap_or_default());

            println!("이미지 생성 중... ({}자리 문제, 이미지 수: {})", digits, count);
            execute(sheet, count as usize, &cli, &config)
        }
    }
}
