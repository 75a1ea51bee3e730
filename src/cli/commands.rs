//! Handlers for each CLI subcommand.

use super::output::Output;
use super::{AnalyzeArgs, Commands};
use crate::analysis::AnalysisKind;
use crate::api::SalesApi;
use crate::app::WingmanApp;
use crate::auth::{ForgotPasswordForm, LoginForm, RegisterForm};
use crate::dashboard::{AnalysisOutcome, Dashboard, Tab};
use crate::routes::{Navigation, Route};
use anyhow::{bail, Context, Result};
use dialoguer::Password;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Typed in the chat loop to leave it.
const CHAT_EXIT: &str = "/exit";

/// Runs one subcommand against `app`.
pub async fn execute<A: SalesApi>(
    app: &WingmanApp<A>,
    output: &Output,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password("Password")?,
            };
            app.login(&LoginForm::new(email, password)).await?;
            print_signed_in(app, output);
        }

        Commands::Register {
            username,
            company_url,
            company_description,
            email,
            password,
            confirm_password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password("Password")?,
            };
            let confirm_password = match confirm_password {
                Some(p) => p,
                None => prompt_password("Confirm password")?,
            };
            let form = RegisterForm {
                username,
                company_url,
                company_description,
                email,
                password,
                confirm_password,
            };
            app.register(&form).await?;
            print_signed_in(app, output);
        }

        Commands::ForgotPassword { email } => {
            let message = app.forgot_password(&ForgotPasswordForm::new(email)).await?;
            output.success(message);
        }

        Commands::Logout => {
            let was_signed_in = app.session().is_authenticated();
            app.logout();
            if was_signed_in {
                output.success("Signed out");
            } else {
                output.info("No saved session");
            }
        }

        Commands::Status => print_status(app, output),

        Commands::Analyses => {
            output.header("Analyses");
            for kind in AnalysisKind::ALL {
                output.list_item(kind.label());
            }
        }

        Commands::Analyze(args) => analyze(app, output, args).await?,
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .context("Failed to read password")
}

fn print_signed_in<A: SalesApi>(app: &WingmanApp<A>, output: &Output) {
    let session = app.session();
    output.success(&format!(
        "Signed in as user {}",
        session.user_id().unwrap_or_default()
    ));
    output.kv("Company", session.company_name().unwrap_or_default());
}

fn print_status<A: SalesApi>(app: &WingmanApp<A>, output: &Output) {
    let session = app.session();
    output.header("Session");
    match session.credentials() {
        Some(c) => {
            output.kv("User", &c.user_id);
            output.kv("Token", &mask(&c.token));
            output.kv("Conversation", &c.conversation_id);
            output.kv("Company", &c.company_name);
            output.kv("Description", &c.company_description);
        }
        None => output.kv("User", "(signed out)"),
    }

    match app.navigate(Route::Dashboard) {
        Navigation::Render(_) => output.success("Dashboard available"),
        Navigation::Redirect(to) => {
            output.warning(&format!("Dashboard redirects to {}", to));
            output.hint("Sign in first:");
            output.command("wingman login --email you@company.com");
        }
    }
}

fn mask(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    if token.chars().count() > 6 {
        format!("{}…", visible)
    } else {
        visible
    }
}

async fn analyze<A: SalesApi>(
    app: &WingmanApp<A>,
    output: &Output,
    args: AnalyzeArgs,
) -> Result<()> {
    let mut dashboard = match app.open_dashboard() {
        Ok(d) => d,
        Err(nav) => bail!(
            "Not signed in (redirected to {}). Run `wingman login` first.",
            nav.target()
        ),
    };

    if let Some(website) = args.company_website {
        dashboard.form.company_website = website;
    }
    if let Some(description) = args.company_description {
        dashboard.form.company_description = description;
    }
    dashboard.form.competitor_website = args.competitor_website;
    dashboard.form.prospect_url = args.prospect_url;
    dashboard.form.prospect_job_title = args.prospect_job_title;
    dashboard.set_selected(args.analyses);

    if dashboard.selected().is_empty() {
        output.warning("No analyses selected; the backend will have nothing to run");
    }

    output.info("Running analysis...");
    match app.analyze(&mut dashboard).await {
        AnalysisOutcome::Applied => {}
        AnalysisOutcome::Failed(message) => bail!(message),
        AnalysisOutcome::Stale => bail!("Analysis response was superseded"),
    }

    output.header(Tab::Results.label());
    for (label, body) in dashboard.results().cards() {
        output.card(label, body);
    }

    if args.chat {
        if dashboard.select_tab(Tab::Chat) {
            chat_loop(app, output, &mut dashboard).await?;
        } else {
            output.warning("No results to chat about");
        }
    }

    Ok(())
}

async fn chat_loop<A: SalesApi>(
    app: &WingmanApp<A>,
    output: &Output,
    dashboard: &mut Dashboard,
) -> Result<()> {
    output.header(Tab::Chat.label());
    output.hint(&format!("Type a question, or {} to quit", CHAT_EXIT));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        output.prompt("you");
        let Some(line) = lines.next_line().await? else {
            output.newline();
            break;
        };
        if line.trim() == CHAT_EXIT {
            break;
        }

        dashboard.chat.input = line;
        if let Some(reply) = app.chat(dashboard).await {
            output.chat_entry(reply);
        }
    }

    Ok(())
}
