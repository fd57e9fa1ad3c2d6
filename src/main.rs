use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use counsel::{
    assistant::{
        adapters::GenerativeLanguageEndpoint,
        session::{ChatSession, SessionLimits},
        telemetry::TracingTelemetrySink,
        types::{ConversationEntry, Speaker, SubmitOutcome},
    },
    catalog::{lawyers, plans},
    cli,
    config::Config,
    locale::LocaleStore,
    logging,
    prefs::{DATA_CONSENT_NOTICE, PreferenceStore, Preferences},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_args()?;
    let config = if args.config_path.exists() || args.config_explicit {
        Config::load(&args.config_path)
            .with_context(|| format!("failed to load config from {}", args.config_path.display()))?
    } else {
        Config::default()
    };

    let log_guard = logging::init_tracing(&config.logging)?;
    tracing::info!(target: "main", run_id = %log_guard.run_id(), "counsel_started");

    let store = PreferenceStore::new(config.prefs.state_path.clone());
    let mut preferences = store
        .load()
        .context("failed to load preferences")?
        .unwrap_or_else(|| {
            Preferences::new(
                config.locale.default_language.clone(),
                config.locale.default_country.clone(),
            )
        });

    let mut locale = LocaleStore::new(&preferences.language, &preferences.country)
        .context("stored locale preference is invalid")?;
    if let Some(country) = &args.country {
        locale
            .set_country(country)
            .with_context(|| format!("unknown country override '{}'", country))?;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    if !preferences.data_consent_accepted {
        println!("{DATA_CONSENT_NOTICE}");
        println!("Type 'accept' to agree, or press enter to continue without accepting.");
        if let Some(line) = lines.next_line().await.context("failed to read input")?
            && line.trim().eq_ignore_ascii_case("accept")
        {
            preferences.data_consent_accepted = true;
            store
                .save(&preferences)
                .context("failed to persist consent")?;
        }
    }

    let endpoint = Arc::new(
        GenerativeLanguageEndpoint::from_config(&config.endpoint)
            .context("failed to initialize language-model endpoint")?,
    );
    let session = Arc::new(ChatSession::new(
        endpoint,
        Arc::new(TracingTelemetrySink),
        SessionLimits::from(&config.session),
    ));

    println!();
    println!("== {} ==", locale.translate("aiAssistant"));
    println!("Commands: /lang <code>, /country <code>, /lawyers [term], /plans, /reset, /quit");
    if let Some(greeting) = session.log().await.last() {
        print_entry(greeting);
    }

    loop {
        println!();
        println!("{}", locale.translate("askLegalQuestion"));

        let line = tokio::select! {
            line = lines.next_line() => match line.context("failed to read input")? {
                Some(line) => line,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }

        match input.as_str() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset().await;
                if let Some(greeting) = session.log().await.last() {
                    print_entry(greeting);
                }
            }
            "/plans" => print_plans(&locale),
            _ if input.starts_with("/lang") => {
                let code = input.trim_start_matches("/lang").trim();
                match locale.set_language(code) {
                    Ok(()) => {
                        preferences.language = locale.language().to_string();
                        persist_preferences(&store, &preferences);
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ if input.starts_with("/country") => {
                let code = input.trim_start_matches("/country").trim();
                match locale.set_country(code) {
                    Ok(()) => {
                        preferences.country = locale.country().code.to_string();
                        preferences.language = locale.language().to_string();
                        persist_preferences(&store, &preferences);
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ if input.starts_with("/lawyers") => {
                let term = input.trim_start_matches("/lawyers").trim();
                print_lawyers(term, &locale);
            }
            _ => {
                let text = match resolve_selection(&session, &input).await {
                    Some(text) => text,
                    None => input.clone(),
                };
                let outcome = run_submit(&session, text).await?;
                match outcome {
                    SubmitOutcome::Completed { reply } => print_entry(&reply),
                    SubmitOutcome::Failed { .. } => {
                        if let Some(entry) = session.log().await.last() {
                            print_entry(entry);
                        }
                    }
                    SubmitOutcome::Busy => {
                        println!("Still waiting on the previous question.");
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
        }
    }

    tracing::info!(target: "main", "counsel_stopped");
    Ok(())
}

/// Runs the submit on its own task so Ctrl-C while waiting cancels the
/// in-flight request instead of abandoning it.
async fn run_submit(session: &Arc<ChatSession>, text: String) -> Result<SubmitOutcome> {
    let mut task = tokio::spawn({
        let session = Arc::clone(session);
        async move { session.submit(&text).await }
    });

    loop {
        tokio::select! {
            joined = &mut task => {
                return joined.context("chat task failed");
            }
            _ = tokio::signal::ctrl_c() => {
                session.cancel().await;
            }
        }
    }
}

/// A bare number picks the matching suggested reply of the last assistant
/// entry.
async fn resolve_selection(session: &Arc<ChatSession>, input: &str) -> Option<String> {
    let index: usize = input.parse().ok()?;
    let log = session.log().await;
    let replies = &log.last()?.suggested_replies;
    replies.get(index.checked_sub(1)?).cloned()
}

fn print_entry(entry: &ConversationEntry) {
    match entry.speaker {
        Speaker::User => println!("You: {}", entry.text),
        Speaker::Assistant => println!("Assistant: {}", entry.text),
    }
    for (index, reply) in entry.suggested_replies.iter().enumerate() {
        println!("  [{}] {}", index + 1, reply);
    }
}

fn print_lawyers(term: &str, locale: &LocaleStore) {
    let matches = lawyers::search(term, "All");
    if matches.is_empty() {
        println!("No lawyers match '{term}'.");
        return;
    }
    for lawyer in matches {
        println!(
            "{} - {} ({}, {} yrs) - {} / 30 min - {}",
            lawyer.name,
            lawyer.specialty,
            lawyer.location,
            lawyer.experience_years,
            locale.format_price(lawyer.consultation_fee_usd),
            lawyer.availability,
        );
    }
}

fn print_plans(locale: &LocaleStore) {
    println!("{}", locale.translate("pricing"));
    for plan in plans::plans() {
        println!(
            "{}{}: {}/{} or {}/{} - {}",
            plan.name,
            if plan.popular { " (popular)" } else { "" },
            locale.format_price(plan.monthly_usd),
            locale.translate("mo"),
            locale.format_price(plan.yearly_usd),
            locale.translate("yr"),
            plan.description,
        );
    }
}

fn persist_preferences(store: &PreferenceStore, preferences: &Preferences) {
    if let Err(err) = store.save(preferences) {
        tracing::warn!(target: "main", error = %err, "preferences_save_failed");
        eprintln!("warning: could not save preferences: {err}");
    }
}
