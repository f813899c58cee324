//! Rule-based advice generation.
//!
//! A deterministic text engine standing in for an AI assistant. Chat mode
//! runs the lowercased question through an ordered rule table (first match
//! wins); summary mode renders a fixed daily report. Both are pure functions
//! of the day's aggregates, so a real LLM backend could replace the bodies
//! without touching the signature.

use crate::compute_score;
use vitalog_types::{DailySummary, ScoreBreakdown};

/// How the advice engine is being invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceMode {
    /// Free-text question, single advice string back.
    Chat,
    /// No question; render the daily report for the given score.
    Summary,
}

/// One chat rule: a keyword predicate over the lowercased question and a
/// response builder over the day's aggregates.
struct Rule {
    matches: fn(&str) -> bool,
    respond: fn(&ScoreBreakdown) -> String,
}

/// Evaluated top to bottom; the first matching rule answers.
const CHAT_RULES: &[Rule] = &[
    Rule {
        matches: |q| q.contains("head") && q.contains("hurt"),
        respond: headache,
    },
    Rule {
        matches: |q| q.contains("stomach"),
        respond: stomach,
    },
    Rule {
        matches: |q| q.contains("good") && q.contains("feel"),
        respond: malaise,
    },
    Rule {
        matches: |q| q.contains("fat") || q.contains("weight"),
        respond: weight,
    },
    Rule {
        matches: |q| q.contains("tired") || q.contains("exhausted"),
        respond: fatigue,
    },
];

/// Generate advice for a chat question or the daily report.
///
/// `score` is only embedded in the summary report; chat rules work from the
/// aggregates recomputed out of `summary`.
pub fn generate_advice(
    question: Option<&str>,
    summary: &DailySummary,
    score: u8,
    mode: AdviceMode,
) -> String {
    let stats = compute_score(summary);
    match mode {
        AdviceMode::Summary => daily_report(&stats, score),
        AdviceMode::Chat => {
            let q = question.unwrap_or("").to_lowercase();
            for rule in CHAT_RULES {
                if (rule.matches)(&q) {
                    return (rule.respond)(&stats);
                }
            }
            "Keep maintaining your hydration and sleep routine - that covers most everyday \
             complaints. How else can I help?"
                .to_string()
        }
    }
}

fn headache(stats: &ScoreBreakdown) -> String {
    let mut causes = Vec::new();
    if stats.total_water_ml < 1500 {
        causes.push(format!(
            "you have only logged {} ml of water today",
            stats.total_water_ml
        ));
    }
    if stats.sleep_hours > 0.0 && stats.sleep_hours < 6.0 {
        causes.push(format!("you slept just {} hours last night", stats.sleep_hours));
    }
    if stats.total_meals < 2 {
        causes.push(format!("you have eaten {} meals so far", stats.total_meals));
    }

    if causes.is_empty() {
        "Your hydration, sleep and meals look fine, so the headache is probably not \
         lifestyle-related. Rest for a bit, and see a doctor if it persists."
            .to_string()
    } else {
        format!(
            "Your headache could be explained by the fact that {}. Drink some water and take \
             a short break.",
            causes.join(" and ")
        )
    }
}

fn stomach(stats: &ScoreBreakdown) -> String {
    if stats.total_meals > 4 {
        format!(
            "You have logged {} meals today - the discomfort may simply be overeating. \
             Give your stomach a break before the next meal.",
            stats.total_meals
        )
    } else if stats.total_meals == 0 {
        "You have not eaten anything today. An empty stomach can ache on its own - have a \
         light meal and see if it settles."
            .to_string()
    } else {
        "Your meal pattern looks normal. Stick to light food and warm fluids, and see a \
         doctor if the pain sharpens or lasts."
            .to_string()
    }
}

fn malaise(stats: &ScoreBreakdown) -> String {
    if stats.sport_minutes == 0 {
        "You have not moved much today - even a short walk outside can lift how you feel."
            .to_string()
    } else if stats.total_water_ml < 1000 {
        format!(
            "You are likely a bit dehydrated ({} ml so far). A couple of glasses of water \
             should help.",
            stats.total_water_ml
        )
    } else {
        "Your activity and hydration look solid. Off days happen - take it easy and \
         check in again tomorrow."
            .to_string()
    }
}

fn weight(stats: &ScoreBreakdown) -> String {
    if stats.sport_minutes < 30 {
        format!(
            "You have logged {} minutes of activity today. Building up to at least 30 \
             minutes a day is the most reliable lever for weight management.",
            stats.sport_minutes
        )
    } else {
        format!(
            "You are moving plenty and logged {} meals today - you are on the right track. \
             Consistency matters more than any single day.",
            stats.total_meals
        )
    }
}

fn fatigue(stats: &ScoreBreakdown) -> String {
    if stats.sleep_hours < 7.0 {
        format!(
            "You slept {} hours, under the 7 hour target - tonight, try heading to bed \
             earlier and keeping screens away before sleep.",
            stats.sleep_hours
        )
    } else {
        "Your sleep looks sufficient, so the tiredness may be hydration. Check how much \
         water you have had today."
            .to_string()
    }
}

/// Fixed-structure daily report embedding the precomputed score.
fn daily_report(stats: &ScoreBreakdown, score: u8) -> String {
    let water_line = if stats.total_water_ml < 2000 {
        "Drink more water to reach the 2000 ml daily target."
    } else {
        "Hydration target met - keep it up."
    };
    let sleep_line = if stats.sleep_hours < 7.0 {
        "Head to bed earlier tonight to close the sleep gap."
    } else {
        "Your sleep routine is on track - maintain it."
    };

    format!(
        "Positive points:\n\
         - Hydration: {} ml of water logged.\n\
         - Activity: {} minutes of movement.\n\
         \n\
         Areas for improvement:\n\
         - Sleep: {} hours against the 7 hour target.\n\
         - Meals: {} logged today.\n\
         \n\
         Recommendations:\n\
         - {}\n\
         - {}\n\
         \n\
         Today's wellness score: {}/100.",
        stats.total_water_ml,
        stats.sport_minutes,
        stats.sleep_hours,
        stats.total_meals,
        water_line,
        sleep_line,
        score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use uuid::Uuid;
    use vitalog_types::{DailyEntry, HealthCategory};

    fn entry(category: HealthCategory, details: Value) -> DailyEntry {
        DailyEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            category,
            details: details.as_object().cloned().unwrap_or_default(),
        }
    }

    /// water ml / meals / sleep h / sport min shorthand.
    fn summary(water: i64, meals: i64, sleep: f64, sport: i64) -> DailySummary {
        let mut s = DailySummary::empty(Uuid::nil(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        s.push(entry(
            HealthCategory::Consumption,
            json!({"water_ml": water, "meals": meals}),
        ));
        if sleep > 0.0 {
            s.push(entry(HealthCategory::Sleep, json!({"sleep_hours": sleep})));
        }
        if sport > 0 {
            s.push(entry(HealthCategory::Sport, json!({"minutes": sport})));
        }
        s
    }

    fn chat(question: &str, s: &DailySummary) -> String {
        generate_advice(Some(question), s, 0, AdviceMode::Chat)
    }

    #[test]
    fn headache_joins_contributing_factors_with_and() {
        let reply = chat("my head hurts", &summary(500, 1, 4.0, 0));
        assert!(reply.contains("500 ml"), "mentions low water: {reply}");
        assert!(reply.contains("4 hours"), "mentions low sleep: {reply}");
        assert!(reply.contains(" and "), "clauses joined with 'and': {reply}");
    }

    #[test]
    fn headache_with_good_habits_reassures() {
        let reply = chat("why does my head hurt?", &summary(2000, 3, 8.0, 30));
        assert!(reply.contains("not lifestyle-related"), "{reply}");
    }

    #[test]
    fn stomach_branches_on_meal_count() {
        let s = |meals| summary(1500, meals, 7.0, 0);
        assert!(chat("my stomach aches", &s(5)).contains("overeating"));
        assert!(chat("my stomach aches", &s(0)).contains("not eaten"));
        assert!(chat("my stomach aches", &s(3)).contains("light food"));
    }

    #[test]
    fn malaise_prefers_movement_then_hydration() {
        assert!(chat("i don't feel good", &summary(2000, 3, 7.0, 0)).contains("walk"));
        assert!(chat("i don't feel good", &summary(300, 3, 7.0, 20)).contains("300 ml"));
        assert!(chat("i don't feel good", &summary(2000, 3, 7.0, 20)).contains("Off days"));
    }

    #[test]
    fn weight_question_reports_current_activity() {
        let reply = chat("am i getting fat?", &summary(1000, 2, 7.0, 10));
        assert!(reply.contains("10 minutes"), "{reply}");
        let reply = chat("worried about my weight", &summary(1000, 2, 7.0, 45));
        assert!(reply.contains("2 meals"), "{reply}");
    }

    #[test]
    fn fatigue_branches_on_sleep() {
        assert!(chat("so tired today", &summary(1000, 2, 5.5, 0)).contains("5.5 hours"));
        assert!(chat("i feel exhausted", &summary(1000, 2, 8.0, 0)).contains("water"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // Mentions both head+hurt and tired; the headache rule is ordered first.
        let reply = chat("my head hurts and i'm tired", &summary(500, 1, 4.0, 0));
        assert!(reply.contains("headache"), "{reply}");
    }

    #[test]
    fn unmatched_question_falls_through_to_generic_reply() {
        let reply = chat("what's the weather like?", &summary(1000, 2, 7.0, 0));
        assert!(reply.contains("How else can I help"), "{reply}");
    }

    #[test]
    fn summary_report_embeds_score_and_both_recommendations() {
        let report = generate_advice(None, &summary(1200, 2, 6.0, 30), 42, AdviceMode::Summary);
        assert!(report.contains("42/100"), "{report}");
        assert!(report.contains("Drink more water"), "{report}");
        assert!(report.contains("bed earlier"), "{report}");

        let report = generate_advice(None, &summary(2500, 3, 8.0, 30), 95, AdviceMode::Summary);
        assert!(report.contains("95/100"), "{report}");
        assert!(report.contains("keep it up"), "{report}");
        assert!(report.contains("maintain"), "{report}");
    }
}
