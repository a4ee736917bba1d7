// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::style;
use inquire::Password;
use zeroize::Zeroizing;

use crate::breach::BreachOutcome;
use crate::cli::GenerateArgs;
use crate::core::PasswordService;
use crate::models::{AnalysisResult, GenerationPolicy};

// Handlers for CLI commands
pub async fn handle_analyze(service: &PasswordService, offline: bool) -> Result<()> {
    let password = Zeroizing::new(
        Password::new("Password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()
            .context("Failed to read password")?,
    );

    if password.is_empty() {
        println!("❌ Password is required");
        return Ok(());
    }

    let result = service
        .analyze(&password, !offline)
        .await
        .context("Analysis failed")?;

    print_report(&result);
    Ok(())
}

pub fn handle_generate(service: &PasswordService, args: &GenerateArgs) -> Result<()> {
    let policy = policy_from_args(service.default_policy(), args);
    let password = Zeroizing::new(service.generate(&policy).context("Cannot generate password")?);
    println!("{}", password.as_str());
    Ok(())
}

fn policy_from_args(defaults: GenerationPolicy, args: &GenerateArgs) -> GenerationPolicy {
    GenerationPolicy {
        length: args.length.unwrap_or(defaults.length),
        include_uppercase: !args.no_upper,
        include_lowercase: !args.no_lower,
        include_numbers: !args.no_numbers,
        include_symbols: !args.no_symbols,
        exclude_similar: !args.allow_similar,
    }
}

fn print_report(result: &AnalysisResult) {
    let label = match result.score {
        0 => style("Very weak").red().bold(),
        1 => style("Weak").red(),
        2 => style("Fair").yellow(),
        3 => style("Strong").green(),
        _ => style("Very strong").green().bold(),
    };

    println!();
    println!("🔐 Score:      {}/4 ({})", result.score, label);
    println!("📏 Entropy:    {:.1} bits", result.entropy);
    println!("⏱️  Crack time: {}", result.crack_time);
    println!(
        "   online, throttled:   {}",
        style(&result.crack_times.online_throttling_100_per_hour).dim()
    );
    println!(
        "   offline, slow hash:  {}",
        style(&result.crack_times.offline_slow_hashing_1e4_per_second).dim()
    );

    match result.breach {
        BreachOutcome::Found(count) => println!(
            "🚨 {}",
            style(format!("Seen {} times in known breaches", count)).red().bold()
        ),
        BreachOutcome::NotFound => println!("✅ Not found in known breaches"),
        BreachOutcome::Unknown => println!("❔ Breach status unknown"),
    }

    if let Some(warning) = &result.warning {
        println!("⚠️  {}", style(warning).yellow());
    }

    if !result.suggestions.is_empty() {
        println!("💡 Suggestions:");
        for suggestion in &result.suggestions {
            println!("   • {}", suggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_switch_classes_off() {
        let args = GenerateArgs {
            length: None,
            no_upper: true,
            no_symbols: true,
            allow_similar: true,
            ..GenerateArgs::default()
        };
        let policy = policy_from_args(GenerationPolicy::default(), &args);

        assert_eq!(policy.length, 12);
        assert!(!policy.include_uppercase);
        assert!(!policy.include_symbols);
        assert!(policy.include_lowercase);
        assert!(policy.include_numbers);
        assert!(!policy.exclude_similar);
    }
}
