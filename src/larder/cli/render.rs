use chrono::{DateTime, Utc};
use colored::Colorize;
use larder::api::{CmdMessage, MessageLevel};
use larder::config::LarderConfig;
use larder::dates::{days_until, format_date};
use larder::index::DisplayIngredient;
use larder::model::Ingredient;
use larder::queries::needs_checking;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 28;
const DATE_WIDTH: usize = 12;
const OPENED_MARKER: &str = "◐";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One line per ingredient: index, name, where/what it is, expiration.
pub(super) fn render_ingredient_list(items: &[DisplayIngredient]) -> String {
    let mut output = String::new();
    for item in items {
        let ingredient = &item.ingredient;
        let index = format!("{:>4}. ", item.index);
        let marker = if ingredient.is_opened {
            format!(" {}", OPENED_MARKER)
        } else {
            "  ".to_string()
        };

        let name = pad_to_width(&truncate_to_width(&ingredient.name, NAME_WIDTH), NAME_WIDTH);
        let expires = ingredient
            .expiration_date
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());

        let fixed = index.width() + NAME_WIDTH + marker.width() + DATE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let details = pad_to_width(&truncate_to_width(&describe(ingredient), available), available);

        output.push_str(&format!(
            "{}{}{}{}{:>width$}\n",
            index.yellow(),
            name,
            marker,
            details.dimmed(),
            expires,
            width = DATE_WIDTH
        ));
    }
    output
}

/// Expiring-soon rows, with what a cook needs to decide what to use first.
pub(super) fn render_expiring(
    items: &[DisplayIngredient],
    config: &LarderConfig,
    now: DateTime<Utc>,
) -> String {
    let today = now.date_naive();
    let mut output = String::new();

    for item in items {
        let ingredient = &item.ingredient;
        let left = match ingredient.expiration_date.map(|d| days_until(d, today)) {
            Some(days) if days < 0 => "expired".red().bold().to_string(),
            Some(0) => "expires today".red().to_string(),
            Some(1) => "1 day left".yellow().to_string(),
            Some(days) => format!("{} days left", days),
            None => "-".to_string(),
        };

        let mut notes = Vec::new();
        if let Some(ripeness) = ingredient.ripeness {
            notes.push(ripeness.label().to_string());
        }
        if ingredient.is_opened {
            notes.push("opened".to_string());
        }
        if let Some(checked) = ingredient.last_checked_at {
            notes.push(format!("checked {}", time_ago(checked, now)));
        }
        if needs_checking(ingredient, config.check_interval_days, now) {
            notes.push("needs checking".magenta().to_string());
        }

        output.push_str(&format!(
            "{}{}  {}",
            format!("{:>4}. ", item.index).yellow(),
            pad_to_width(&truncate_to_width(&ingredient.name, NAME_WIDTH), NAME_WIDTH),
            left
        ));
        if !notes.is_empty() {
            output.push_str(&format!("  ({})", notes.join(", ")));
        }
        output.push('\n');
    }
    output
}

pub(super) fn render_full_ingredients(items: &[DisplayIngredient], now: DateTime<Utc>) -> String {
    let mut output = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push_str("\n--------------------------------\n\n");
        }
        let ingredient = &item.ingredient;
        output.push_str(&format!(
            "{} {}\n",
            format!("{}.", item.index).yellow(),
            ingredient.name.bold()
        ));

        let field = |label: &str, value: Option<String>| {
            format!(
                "  {:<14}{}\n",
                label,
                value.unwrap_or_else(|| "-".to_string())
            )
        };
        output.push_str(&field("Brand", ingredient.brand.clone()));
        output.push_str(&field(
            "Category",
            ingredient.category.map(|c| c.label().to_string()),
        ));
        output.push_str(&field(
            "Location",
            ingredient.location.map(|l| l.label().to_string()),
        ));
        output.push_str(&field(
            "Type",
            ingredient.confection.map(|c| c.label().to_string()),
        ));
        output.push_str(&field("Expires", ingredient.expiration_date.map(format_date)));
        output.push_str(&field(
            "Opened",
            Some(if ingredient.is_opened { "yes" } else { "no" }.to_string()),
        ));
        if ingredient.is_fresh() {
            output.push_str(&field(
                "Ripeness",
                ingredient.ripeness.map(|r| r.label().to_string()),
            ));
            output.push_str(&field(
                "Last checked",
                ingredient.last_checked_at.map(|t| time_ago(t, now)),
            ));
        }
    }
    output
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

fn describe(ingredient: &Ingredient) -> String {
    let parts: Vec<&str> = [
        ingredient.category.map(|c| c.label()),
        ingredient.location.map(|l| l.label()),
        ingredient.confection.map(|c| c.label()),
        ingredient.ripeness.map(|r| r.label()),
    ]
    .into_iter()
    .flatten()
    .collect();
    format!(" {}", parts.join(" · "))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use larder::index::index_ingredients;
    use larder::model::{Category, ConfectionType, Ripeness};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn truncates_long_names_with_ellipsis() {
        assert_eq!(truncate_to_width("Sourdough", 20), "Sourdough");
        let cut = truncate_to_width("Extra virgin olive oil, cold pressed", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }

    #[test]
    fn list_rows_carry_index_and_date() {
        let items = index_ingredients(vec![
            Ingredient::new("Milk")
                .with_category(Category::Dairy)
                .with_expiration(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()),
            Ingredient::new("Crackers"),
        ]);
        let output = render_ingredient_list(&items);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1."));
        assert!(lines[0].contains("2024-05-12"));
        assert!(lines[1].contains("Crackers"));
    }

    #[test]
    fn expiring_rows_flag_fresh_items_needing_a_check() {
        let mut banana = Ingredient::new("Banana")
            .with_confection(ConfectionType::Fresh)
            .with_ripeness(Ripeness::Ripe)
            .with_expiration(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        banana.last_checked_at = Some(now() - Duration::days(4));

        let output = render_expiring(&index_ingredients(vec![banana]), &LarderConfig::default(), now());
        assert!(output.contains("expired"));
        assert!(output.contains("Ripe"));
        assert!(output.contains("checked 4 days ago"));
        assert!(output.contains("needs checking"));
    }

    #[test]
    fn full_view_hides_ripeness_for_non_fresh_items() {
        let tuna = Ingredient::new("Tuna").with_confection(ConfectionType::Canned);
        let output = render_full_ingredients(&index_ingredients(vec![tuna]), now());
        assert!(output.contains("Canned"));
        assert!(!output.contains("Ripeness"));
    }

    #[test]
    fn empty_text_list_shows_placeholder() {
        assert_eq!(render_text_list(&[], "Nothing here."), "Nothing here.\n");
    }
}
