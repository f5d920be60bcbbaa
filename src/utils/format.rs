// src/utils/format.rs
use console::style;

use crate::models::{PasswordGenerationOptions, StrengthReport, Verdict};
use crate::strength::{Marker, MAX_SCORE};

// Render a strength report for a terminal
pub fn render_report(report: &StrengthReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Length            : {}\n", report.length));
    out.push_str(&format!("Entropy           : {:.2} bits (estimate)\n", report.entropy_bits));
    out.push_str(&format!("Score             : {}/{}\n", report.score, MAX_SCORE));
    out.push_str(&format!("Verdict           : {}\n", style_verdict(report.verdict)));
    out.push_str(&format!("Entropy verdict   : {} (informational)\n", report.entropy_verdict));

    for line in &report.feedback {
        let styled = match Marker::of_line(line) {
            Some(Marker::Pass) => style(line).green().to_string(),
            Some(Marker::Partial) => style(line).yellow().to_string(),
            Some(Marker::Fail) => style(line).red().to_string(),
            None => line.clone(),
        };
        out.push_str("  ");
        out.push_str(&styled);
        out.push('\n');
    }

    out
}

fn style_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::Strong => style(verdict).green().bold().to_string(),
        Verdict::Moderate => style(verdict).yellow().bold().to_string(),
        Verdict::Weak => style(verdict).red().bold().to_string(),
    }
}

// Describe an options set, one setting per line
pub fn render_options(options: &PasswordGenerationOptions) -> String {
    format!(
        "Length                     : {}\n\
         Include Uppercase          : {}\n\
         Include Lowercase          : {}\n\
         Include Digits             : {}\n\
         Include Special Characters : {}\n",
        options.length,
        options.include_uppercase,
        options.include_lowercase,
        options.include_numbers,
        options.include_symbols,
    )
}
