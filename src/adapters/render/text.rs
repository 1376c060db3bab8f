//! Text Renderer
//!
//! Draws the page snapshot as plain text: error line, the four position
//! rows in pitch order, squad totals and the analysis block.

use std::fmt::Write;

use crate::application::{PageSnapshot, SquadSummary};
use crate::domain::{Formation, Player, SquadView};

/// Render the whole page
pub fn render_page(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    if let Some(result) = &snapshot.result {
        if snapshot.error.is_some() {
            out.push('\n');
        }
        out.push_str(&render_squad(&result.view()));
        out.push_str(&render_summary(&result.summary));
        if let Some(analysis) = result.analysis.as_deref().filter(|a| !a.trim().is_empty()) {
            out.push_str(&render_analysis(analysis));
        }
    }

    out
}

/// Render the position rows
pub fn render_squad(view: &SquadView) -> String {
    let mut out = String::from("Generated Squad\n");

    for (position, players) in view.groups.iter() {
        let _ = writeln!(out, "\n{} ({})", position, players.len());
        if players.is_empty() {
            out.push_str("  -\n");
        }
        for player in players {
            out.push_str(&render_card(player));
        }
    }

    out
}

fn render_card(player: &Player) -> String {
    let mut card = format!(
        "  {} | {} | {} | Cost: {}m\n",
        player.name, player.position, player.team, player.cost
    );

    if let Some(points) = player.total_points {
        let _ = writeln!(card, "      Total Points: {}", points);
    }
    if let Some(fixtures) = player.next_fixtures.as_ref().filter(|f| !f.is_empty()) {
        let _ = writeln!(card, "      Next Fixtures: {}", fixtures.join(", "));
    }
    if let Some(recommendation) = player.recommendation.as_deref().filter(|r| !r.is_empty()) {
        let _ = writeln!(card, "      Recommendation: {}", recommendation);
    }

    card
}

fn render_summary(summary: &SquadSummary) -> String {
    let mut out = format!(
        "\nTotal Cost: {}m | Projected Points: {}\n",
        summary.total_cost, summary.projected_points
    );

    if !summary.position_breakdown.is_empty() {
        let breakdown: Vec<String> = summary
            .position_breakdown
            .iter()
            .map(|(position, count)| format!("{}={}", position, count))
            .collect();
        let _ = writeln!(out, "Position Breakdown: {}", breakdown.join(", "));
    }

    out
}

fn render_analysis(analysis: &str) -> String {
    let mut out = String::from("\nAnalysis\n");
    for line in analysis.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    out
}

/// List the selectable formations
pub fn render_formations() -> String {
    Formation::ALL
        .iter()
        .map(|f| {
            let (def, mid, fwd) = f.lines();
            format!("{}  (DEF {}, MID {}, FWD {})\n", f, def, mid, fwd)
        })
        .collect()
}
