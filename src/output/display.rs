//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, format_letters};
use crate::commands::{AnalysisResult, CheckResult, SurveyStatistics};
use crate::core::RankTable;
use crate::game::{Accepted, GameSession, GameSummary, SeedSource, SubmitError};
use colored::Colorize;

/// How many found or missed words the summary lists
const SUMMARY_WORDS: usize = 10;

/// Print the banner for a fresh round
pub fn print_new_game(session: &GameSession) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SEED:".bright_cyan().bold(),
        session.seed().text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match session.seed_source() {
        SeedSource::Qualified => {}
        SeedSource::Unqualified => {
            println!("{}", "⚠ No seed met the word-count minimum".yellow());
        }
        SeedSource::LengthOnly | SeedSource::AnyWord => {
            println!("{}", "⚠ No suitable long seed; using a fallback word".yellow());
        }
    }

    println!(
        "\n🔤 {}",
        format_letters(session.letters()).bright_white().bold()
    );
    println!(
        "   {} words hidden, {} points available",
        session.valid_words().playable_count(),
        session.max_possible_score()
    );
    if let Some(limit) = session.config().time_limit {
        println!("   ⏱ {} on the clock", format_duration(limit));
    }
    println!();
}

/// Print the shuffled letter pool
pub fn print_letters(session: &GameSession) {
    println!(
        "🔤 {}",
        format_letters(session.letters()).bright_white().bold()
    );
}

/// Print the words found so far, grouped by length
pub fn print_found_words(session: &GameSession) {
    if session.found_words().is_empty() {
        println!("No words found yet.");
        return;
    }

    println!(
        "📝 {} of {} words:",
        session.found_words().len(),
        session.valid_words().playable_count()
    );
    for (len, words) in session.found_by_length() {
        println!("   {len:2}: {}", words.join(", "));
    }
}

/// Print the current rank and the gap to the next one
pub fn print_rank(session: &GameSession) {
    let progress = session.rank_progress();
    let top = session.thresholds().top_points();

    println!(
        "🏅 {} [{}] {} pts",
        progress.current.name.bright_yellow().bold(),
        create_progress_bar(f64::from(session.score()), top, 30).green(),
        session.score()
    );
    match progress.next {
        Some(next) => println!(
            "   {} more for {}",
            progress.points_to_next,
            next.name.bright_white()
        ),
        None => println!("   {}", "Top rank reached!".green().bold()),
    }
}

/// Print feedback for an accepted word
pub fn print_accepted(accepted: &Accepted) {
    println!(
        "{} {} (+{}) → {} pts",
        "✓".green().bold(),
        accepted.word.to_uppercase().bright_white().bold(),
        accepted.points,
        accepted.score
    );
    if let Some(rank) = accepted.new_rank {
        println!("🎉 New rank: {}", rank.bright_yellow().bold());
    }
}

/// Print feedback for a rejected word
pub fn print_rejection(error: &SubmitError) {
    println!("{} {}", "✗".red().bold(), error.to_string().red());
}

/// Print the end-of-round summary
pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Seed:     {}",
        summary.seed.to_uppercase().bright_yellow().bold()
    );
    println!(
        "   Score:    {} / {}",
        summary.score.to_string().bright_yellow().bold(),
        summary.max_possible_score
    );
    println!("   Rank:     {}", summary.rank.bright_white().bold());
    println!(
        "   Found:    {} of {} words",
        summary.found.len(),
        summary.playable_count
    );
    println!("   Time:     {}", format_duration(summary.elapsed));

    if !summary.found.is_empty() {
        let mut found: Vec<&String> = summary.found.iter().collect();
        found.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        println!("\n✅ {}", "Best finds:".bright_cyan().bold());
        for word in found.iter().take(SUMMARY_WORDS) {
            println!("   • {word}");
        }
    }

    if !summary.missed.is_empty() {
        println!("\n🔍 {}", "Missed:".bright_cyan().bold());
        for word in summary.missed.iter().take(SUMMARY_WORDS) {
            println!("   • {}", word.bright_black());
        }
        if summary.missed.len() > SUMMARY_WORDS {
            println!("   … and {} more", summary.missed.len() - SUMMARY_WORDS);
        }
    }
    println!();
}

fn print_rank_table(ranks: &RankTable) {
    println!("\n🏅 {}", "Ranks:".bright_cyan().bold());
    for threshold in ranks.thresholds() {
        println!("   {:>5}  {}", threshold.min_points, threshold.name);
    }
    println!("   (top score {:.1})", ranks.top_points());
}

/// Print the result of seed analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SEED ANALYSIS:".bright_cyan().bold(),
        result.seed.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!(
        "   Playable words:   {}",
        result.playable_count.to_string().bright_yellow().bold()
    );
    println!("   Max score:        {}", result.max_possible_score);
    println!("   Letter rarity:    {:.2}", result.rarity);

    if !result.by_length.is_empty() {
        println!("\n📈 {}", "By length:".bright_cyan().bold());
        let widest = result.by_length.values().copied().max().unwrap_or(1);
        for (len, &count) in &result.by_length {
            let bar = create_progress_bar(count as f64, widest as f64, 30);
            println!("   {len:2}: {} {count}", bar.green());
        }
    }

    if !result.longest.is_empty() {
        println!("\n📝 {}", "Longest words:".bright_cyan().bold());
        for word in &result.longest {
            println!("   • {word}");
        }
    }

    print_rank_table(&result.ranks);
}

/// Print the result of a word check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} in {}",
        result.word.to_uppercase().bright_white().bold(),
        result.seed.to_uppercase().bright_yellow().bold()
    );

    let mark = |ok: bool| if ok { "yes".green() } else { "no".red() };
    println!("   Formable:       {}", mark(result.formable));
    println!("   In dictionary:  {}", mark(result.in_dictionary));

    match &result.outcome {
        Ok(points) => println!(
            "   {} worth {} {}",
            "✓".green().bold(),
            points,
            if *points == 1 { "point" } else { "points" }
        ),
        Err(reason) => println!("   {} {}", "✗".red().bold(), reason.red()),
    }
}

/// Print seed survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SEED SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Seeds scanned:    {}", stats.seeds_scanned);
    println!(
        "   Qualifying:       {}",
        stats.qualifying.to_string().bright_yellow().bold()
    );
    println!("   Average words:    {:.1}", stats.average_playable);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.top_seeds.is_empty() {
        println!("\n🏆 {}", "Richest seeds:".bright_cyan().bold());
        for (i, seed) in stats.top_seeds.iter().enumerate() {
            println!(
                "   {:2}. {:<24} {:4} words {:5} pts",
                i + 1,
                seed.seed,
                seed.playable_count,
                seed.max_possible_score
            );
        }
    }

    if stats.seeds_scanned > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&bucket, &count) in &stats.distribution {
            let pct = (count as f64 / stats.seeds_scanned as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!(
                "   {:>3}-{:<3} {bar} {count:4} ({pct:5.1}%)",
                bucket,
                bucket + crate::commands::survey::BUCKET_WIDTH - 1
            );
        }
    }
}
