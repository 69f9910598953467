use clap::Parser;
use gift_floor::core::render::format_options;
use gift_floor::domain::model::DependentInput;
use gift_floor::domain::ports::Dropdown;
use gift_floor::utils::error::{ErrorSeverity, Result};
use gift_floor::utils::logger;
use gift_floor::{
    CliConfig, Command, HttpPriceApi, ImageUrls, ResultRenderer, SearchOutcome,
    SelectionController, UiContext,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting gift-floor CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(cli).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(
                "❌ gift-floor failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 2,      // 使用者輸入錯誤
                ErrorSeverity::Medium => 3,   // API / 網路
                ErrorSeverity::High => 1,     // 設定或資料格式
                ErrorSeverity::Critical => 4, // 系統錯誤
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<i32> {
    let config = cli.resolve()?;
    tracing::debug!("Using pricing API at {}", config.api.base_url);

    let ui = UiContext::in_memory();
    let controller = SelectionController::new(
        HttpPriceApi::new(&config.api),
        ui.clone(),
        ResultRenderer::new(ImageUrls::new(&config.images)),
    );
    controller.init();

    match cli.command {
        Command::Collections => {
            controller.load_collections().await?;
            println!("{}", format_options(ui.collection.as_ref(), cli.html));
        }
        Command::Options { gift } => {
            controller.load_collections().await?;
            controller.select_collection(&gift).await?;

            for input in DependentInput::ALL {
                let dropdown = ui.dependent(input);
                println!("[{}]", input.label());
                if dropdown.is_enabled() {
                    println!("{}", format_options(dropdown.as_ref(), cli.html));
                } else {
                    println!("  ({})", dropdown.placeholder());
                }
            }
        }
        Command::Floor {
            gift,
            model,
            backdrop,
            symbol,
            output,
        } => {
            controller.load_collections().await?;
            controller.select_collection(&gift).await?;

            let filters = [
                (DependentInput::Model, model),
                (DependentInput::Backdrop, backdrop),
                (DependentInput::Symbol, symbol),
            ];
            for (input, value) in filters {
                if let Some(value) = value {
                    if !ui.dependent(input).is_enabled() {
                        tracing::warn!("⚠️ {} options failed to load for '{}'", input.label(), gift);
                    }
                    controller.set_filter(input, &value)?;
                }
            }

            let outcome = controller.on_search().await;
            let html = ui.results.html();

            match outcome {
                SearchOutcome::Rendered => match output {
                    Some(path) => {
                        std::fs::write(&path, html)?;
                        tracing::info!("📁 Output saved to: {}", path.display());
                        println!("📁 Output saved to: {}", path.display());
                    }
                    None => println!("{}", html),
                },
                SearchOutcome::Failed => {
                    eprintln!("{}", html);
                    return Ok(3);
                }
                SearchOutcome::MissingCollection | SearchOutcome::Stale => {
                    eprintln!("{}", html);
                    return Ok(2);
                }
            }
        }
    }

    Ok(0)
}
