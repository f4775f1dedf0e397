//! Prompt templates
//!
//! Every prompt is a flat string interpolation. Wording, field order and
//! layout are what the backend model sees, so keep them stable.

use indexmap::IndexMap;
use serde_json::Value;

use crate::models::{ChatMessage, Goal, UserProfile};

const PERSONALIZED_INSTRUCTION: &str =
    "Given the above, answer only if it's a question. Use Markdown. Avoid placeholder names or generic intros.";

const GOAL_INSTRUCTION: &str =
    "Generate a clear, actionable financial strategy. Use Markdown. No user names or intros.";

/// Render the personalized advice prompt.
pub fn personalized_advice(profile: &UserProfile, question: &str, area: &str) -> String {
    format!(
        "\n{profile}\n\n    Question: {question}\n    Area of Interest: {area}\n\n    {instruction}\n  ",
        profile = profile_block(profile),
        question = question,
        area = area,
        instruction = PERSONALIZED_INSTRUCTION,
    )
}

/// Render the goal strategy prompt.
pub fn goal_strategy(profile: &UserProfile, goal: &Goal) -> String {
    format!(
        "\n{profile}\n\n    Goal Details:\n    - Type: {goal_type}\n    - Target Amount: ${target}\n    - Current Amount: ${current}\n    - Target Date: {date}\n\n    {instruction}\n  ",
        profile = profile_block(profile),
        goal_type = goal.goal_type,
        target = format_amount(goal.target_amount),
        current = format_amount(goal.current_amount),
        date = goal.formatted_target_date(),
        instruction = GOAL_INSTRUCTION,
    )
}

/// Render a transcript as `role: content` lines.
pub fn chat_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn profile_block(profile: &UserProfile) -> String {
    format!(
        "    User Profile:\n    - Annual Income: ${income}\n    - Monthly Expenses: {expenses}\n    - Current Savings: ${savings}\n    - Financial Goals: {goals}\n    - Risk Tolerance: {risk}",
        income = format_amount(profile.annual_income),
        expenses = expenses_json(&profile.monthly_expenses),
        savings = format_amount(profile.current_savings),
        goals = profile.financial_goals.join(", "),
        risk = profile.risk_tolerance,
    )
}

/// Number rendering as JavaScript's `Number.prototype.toString` does it:
/// shortest round-trip digits, no trailing `.0`, exponent form outside
/// `1e-7 < |n| < 1e21`.
fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return value.to_string(),
        },
        None => return value.to_string(),
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { "-" } else { "+" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n - 1).abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Compact JSON object; numbers use `format_amount`, non-finite become `null`.
fn expenses_json(expenses: &IndexMap<String, f64>) -> String {
    let entries: Vec<String> = expenses
        .iter()
        .map(|(category, amount)| {
            let value = if amount.is_finite() {
                format_amount(*amount)
            } else {
                "null".to_string()
            };
            format!("{}:{}", Value::String(category.clone()), value)
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}
