//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use kickoff_kings::{
    analysis::OpenAiAnalyst,
    cli::{Commands, KickoffKings, SeasonsCmd, SessionCmd},
    commands::{
        draft::{handle_draft, Capabilities, DraftParams},
        predictions::{handle_predictions, PredictionsParams},
        score::{handle_score, ScoreParams},
        seasons::{handle_seasons, SeasonsAction},
        session::{handle_session, SessionAction},
        train::{handle_train, TrainParams},
        CommandContext,
    },
    config::Config,
    Result,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = KickoffKings::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let mut ctx = CommandContext::new(config);

    match cli.command {
        Commands::Score {
            input,
            season,
            store,
            positions,
            json,
        } => {
            handle_score(
                &mut ctx,
                ScoreParams {
                    input: input.input,
                    season,
                    store,
                    positions,
                    as_json: json,
                },
            )
            .await?;
        }

        Commands::Predictions {
            input,
            model,
            games,
            positions,
            limit,
            json,
        } => {
            handle_predictions(
                &mut ctx,
                PredictionsParams {
                    input: input.input,
                    history: model.history,
                    model: model.model,
                    games,
                    positions,
                    limit,
                    as_json: json,
                },
            )
            .await?;
        }

        Commands::Draft {
            input,
            model,
            teams,
            slot,
            drafted,
            session,
            analysis,
            json,
        } => {
            let analyst = OpenAiAnalyst::new(ctx.config.analyst.clone())?;
            handle_draft(
                &mut ctx,
                DraftParams {
                    input: input.input,
                    history: model.history,
                    model: model.model,
                    teams,
                    slot,
                    drafted,
                    session,
                    as_json: json,
                },
                Capabilities {
                    ai_analysis: analysis,
                },
                &analyst,
            )
            .await?;
        }

        Commands::Train { history, output } => {
            handle_train(&mut ctx, TrainParams { history, output }).await?;
        }

        Commands::Seasons { cmd } => {
            let action = match cmd {
                SeasonsCmd::List { json } => SeasonsAction::List { as_json: json },
                SeasonsCmd::Cache { season, input } => SeasonsAction::Cache {
                    season,
                    input: input.input,
                },
                SeasonsCmd::Clear { season } => SeasonsAction::Clear { season },
            };
            handle_seasons(&mut ctx, action).await?;
        }

        Commands::Session { cmd } => {
            let action = match cmd {
                SessionCmd::New { name, teams, slot } => SessionAction::New { name, teams, slot },
                SessionCmd::List { json } => SessionAction::List { as_json: json },
                SessionCmd::Show { name, json } => SessionAction::Show {
                    name,
                    as_json: json,
                },
                SessionCmd::Pick { name, player } => SessionAction::Pick { name, player },
                SessionCmd::Delete { name } => SessionAction::Delete { name },
            };
            handle_session(&mut ctx, action).await?;
        }
    }

    Ok(())
}
