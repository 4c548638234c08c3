// src/bin/stack.rs
//! Stack CLI binary.

#![deny(missing_docs)]

use anyhow::bail;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use stack::cli::{self, Commands};
use stack::cloud::{Cloud, DeployOutcome};
use stack::config::Loaded;
use stack::context::Context;
use stack::error::{StackError, StackResult};
use stack::events::take_events;
use stack::info::StackInfo;
use stack::input::Prompter;
use stack::template::Template;

/// Exit status when the user declines to create a config file.
const EXIT_DECLINED: u8 = 10;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    init_logging(args.verbose);
    let ctx = Context::from_cli(&args);

    match run(&ctx, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<StackError>() {
            Some(StackError::ConfigDeclined) => {
                println!("🏳  {err}");
                ExitCode::from(EXIT_DECLINED)
            }
            _ => {
                eprintln!("\n{}  {}", "❌".red(), err);
                for cause in err.chain().skip(1) {
                    eprintln!("   {cause}");
                }
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "warn,stack=info",
        2 => "warn,stack=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(ctx: &Context, command: Commands) -> StackResult<()> {
    match command {
        // config: load or create the user config, then list or edit it.
        Commands::Config { list } => configure(ctx, list),

        // status: one DescribeClusters call.
        Commands::Status => block_on(async {
            let cloud = Cloud::connect(ctx).await;
            let status = cloud.describe_cluster(&ctx.cluster).await?;
            StackInfo::show_cluster(&status, &mut io::stdout())
        }),

        // events: stack events by default, service events with --service/--select.
        Commands::Events {
            number,
            service,
            select,
            tail,
        } => block_on(async move {
            let cloud = Cloud::connect(ctx).await;
            let mut out = io::stdout();

            let service = if select {
                let names = cloud.list_services(&ctx.cluster).await?;
                if names.is_empty() {
                    bail!("No Services Found In Cluster {}", ctx.cluster);
                }
                Some(Prompter::stdio().select_from(&names)?)
            } else {
                service
            };

            match service {
                Some(service) => {
                    let events = cloud.service_events(&ctx.cluster, &service).await?;
                    let shown = take_events(&events, number, tail);
                    for event in &shown {
                        StackInfo::show_service_event(event, &mut out)?;
                    }
                    StackInfo::show_event_totals(shown.len(), events.len(), &mut out)
                }
                None => {
                    let events = cloud.stack_events(&ctx.stack).await?;
                    let shown = take_events(&events, number, tail);
                    for event in &shown {
                        StackInfo::show_stack_event(event, &mut out)?;
                    }
                    StackInfo::show_event_totals(shown.len(), events.len(), &mut out)
                }
            }
        }),

        // deploy: create or update the stack from a local template.
        Commands::Deploy { template, wait } => {
            let template = Template::load(&template)?;
            println!("AWSTemplateFormatVersion: {}", template.format_version());
            tracing::info!(
                path = %template.path().display(),
                resources = template.resource_count(),
                "loaded template"
            );

            block_on(async {
                let cloud = Cloud::connect(ctx).await;
                let outcome = cloud.deploy(&ctx.stack, &template, ctx.dry_run).await?;
                match &outcome {
                    DeployOutcome::Created(id) => println!("🚀  Creating Stack {id}"),
                    DeployOutcome::Updated(id) => println!("🚀  Updating Stack {id}"),
                    DeployOutcome::Unchanged => println!("👌  No Updates To Perform On {}", ctx.stack),
                    DeployOutcome::Skipped { exists } => println!(
                        "🏳  Dry Run: Would {} Stack {}",
                        if *exists { "Update" } else { "Create" },
                        ctx.stack
                    ),
                }
                if wait && matches!(outcome, DeployOutcome::Created(_) | DeployOutcome::Updated(_)) {
                    let status = cloud.wait_for_stack(&ctx.stack).await?;
                    println!("✨  {} {}", ctx.stack, status);
                }
                Ok::<_, anyhow::Error>(())
            })
        }
    }
}

fn configure(ctx: &Context, list: bool) -> StackResult<()> {
    let store = ctx.config_store()?;
    let mut prompter = Prompter::stdio();

    let mut config = match store.get_config(&mut prompter)? {
        // Created and saved during this run; nothing left to do.
        Loaded::Created(_) => return Ok(()),
        loaded => loaded.into_config(),
    };

    if list {
        store.list_config(&config, prompter.output())
    } else {
        store.build_config(&mut prompter, &mut config).map(|_| ())
    }
}

fn block_on<F>(fut: F) -> StackResult<()>
where
    F: Future<Output = StackResult<()>>,
{
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fut)
}
