//! Plain-text rendering of roster projections.

use roster_core::{GradeBand, Projection, StudentCard};

/// Stats bar, summary line, then one line per visible student.
pub fn projection(projection: &Projection) -> String {
    let mut out = String::new();
    let stats = projection.stats;
    out.push_str(&format!(
        "{} Total | {} Present | {} Absent\n",
        stats.total, stats.present, stats.absent
    ));
    out.push_str(&projection.summary());
    out.push('\n');

    if projection.is_empty() {
        out.push_str("No students found. Try adjusting your search or filters.\n");
        return out;
    }

    for student in &projection.rows {
        out.push_str(&card_line(&StudentCard::from(student)));
        out.push('\n');
    }
    out
}

fn card_line(card: &StudentCard) -> String {
    let band = match card.grade_band {
        GradeBand::High => "high",
        GradeBand::Mid => "mid",
        GradeBand::Low => "low",
    };
    let mut line = format!(
        "#{:<4} [{:<2}] {:<24} {:<12} age {:<3} {:>6}% ({band:<4}) {}",
        card.id, card.initials, card.name, card.course, card.age, card.grade, card.status_label
    );
    if card.top_performer {
        line.push_str("  * Top Performer");
    }
    line
}
