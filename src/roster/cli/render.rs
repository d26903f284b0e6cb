//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Layout math (column widths,
//! truncation) is done here with `unicode-width`; colors come from
//! [`ROSTER_THEME`]. Every `render_*` function has an `_internal` twin that
//! takes a forced color choice so tests get plain text.

use super::styles::{paint, ROSTER_THEME};
use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::RosterError;
use roster::form::{EmployeeForm, FormField, ImageSlot};
use roster::model::{Employee, EmployeeId};
use roster::session::SubmitMode;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 24;
pub const EMAIL_WIDTH: usize = 30;
pub const IMAGE_MARKER: &str = "▣";

pub fn render_list(employees: &[Employee]) -> String {
    render_list_internal(employees, None)
}

fn render_list_internal(employees: &[Employee], use_color: Option<bool>) -> String {
    let theme = &*ROSTER_THEME;
    let mut out = String::new();
    out.push_str(&paint(&theme.heading, "Employee List", use_color));
    out.push('\n');

    if employees.is_empty() {
        out.push_str(&paint(&theme.muted, "No employees found.", use_color));
        out.push('\n');
        return out;
    }

    let id_width = employees
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    for e in employees {
        let id = format!("{:>width$}.", e.id, width = id_width);
        let name = pad_to_width(&truncate_to_width(&e.full_name(), NAME_WIDTH), NAME_WIDTH);
        let email = pad_to_width(&truncate_to_width(&e.email, EMAIL_WIDTH), EMAIL_WIDTH);
        let marker = if e.image.is_some() { IMAGE_MARKER } else { " " };
        out.push_str(&format!(
            "  {} {} {} {} {}\n",
            paint(&theme.id, id, use_color),
            paint(&theme.name, name, use_color),
            email,
            marker,
            paint(&theme.muted, &e.position, use_color),
        ));
    }
    out
}

pub fn render_profile(employee: &Employee) -> String {
    render_profile_internal(employee, None)
}

fn render_profile_internal(employee: &Employee, use_color: Option<bool>) -> String {
    let theme = &*ROSTER_THEME;
    let unset = || "-".to_string();
    let image = match &employee.image {
        Some(encoded) => format!("attached ({} chars)", encoded.len()),
        None => "none".to_string(),
    };

    let rows = [
        ("Email", employee.email.clone()),
        (
            "Telephone",
            employee.telephone.clone().unwrap_or_else(unset),
        ),
        ("Position", employee.position.clone()),
        (
            "Identity Number",
            employee.identity_number.clone().unwrap_or_else(unset),
        ),
        ("Image", image),
    ];

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        paint(&theme.id, employee.id, use_color),
        paint(&theme.name, employee.full_name(), use_color)
    ));
    out.push_str(&paint(&theme.muted, &employee.position, use_color));
    out.push_str("\n\n");
    for (label, value) in rows {
        out.push_str(&format!(
            "  {} {}\n",
            paint(&theme.label, format!("{}:", label), use_color),
            value
        ));
    }
    out.push_str(&paint(&theme.muted, "(type `back` to return to the list)", use_color));
    out.push('\n');
    out
}

pub fn render_form(form: &EmployeeForm, mode: SubmitMode, editing: Option<EmployeeId>) -> String {
    render_form_internal(form, mode, editing, None)
}

fn render_form_internal(
    form: &EmployeeForm,
    mode: SubmitMode,
    editing: Option<EmployeeId>,
    use_color: Option<bool>,
) -> String {
    let theme = &*ROSTER_THEME;
    let header = match editing {
        Some(id) => format!("{} employee {}", mode.label(), id),
        None => format!("{} employee", mode.label()),
    };
    let label_width = FormField::ALL
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&paint(&theme.mode, header, use_color));
    out.push('\n');
    for field in FormField::ALL {
        let text = field.label();
        let (plain, star) = match text.strip_suffix(" *") {
            Some(plain) => (plain, " *"),
            None => (text, ""),
        };
        let padding = " ".repeat(label_width.saturating_sub(text.width()));
        let value = form.get(field);
        let value = if value.is_empty() {
            paint(&theme.muted, "(empty)", use_color)
        } else {
            value.to_string()
        };
        out.push_str(&format!(
            "  {}{}{}  {}\n",
            paint(&theme.label, plain, use_color),
            paint(&theme.required, star, use_color),
            padding,
            value
        ));
    }
    let image = match form.image() {
        ImageSlot::Empty => "none".to_string(),
        ImageSlot::Pending(p) => format!("processing {}", p.source().display()),
        ImageSlot::Ready(encoded) => format!("ready ({} chars)", encoded.len()),
    };
    out.push_str(&format!(
        "  {}  {}\n",
        paint(&theme.label, pad_to_width("Upload Image", label_width), use_color),
        image
    ));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_error(err: &RosterError) -> String {
    format!("Error: {}", err).red().to_string()
}

pub fn print_error(err: &RosterError) {
    eprintln!("{}", render_error(err));
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

#[cfg(test)]
mod tests {
    use super::*;
    use roster::model::EmployeeFields;
    use roster::validation::validate;

    fn employee(id: u64, name: &str, image: bool) -> Employee {
        let mut fields = EmployeeFields::new(name, "Doe", "x@doe.com", "Engineer");
        if image {
            fields = fields.with_image("data:image/png;base64,AAAA");
        }
        Employee::new(EmployeeId(id), validate(fields).unwrap())
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_list_internal(&[], Some(false));
        assert!(output.contains("Employee List"));
        assert!(output.contains("No employees found."));
    }

    #[test]
    fn test_render_list_aligns_ids() {
        let output = render_list_internal(
            &[employee(1, "John", false), employee(1700000000000, "Sam", true)],
            Some(false),
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("            1. John Doe"));
        assert!(lines[2].contains("1700000000000. Sam Doe"));
        assert!(lines[2].contains(IMAGE_MARKER));
        assert!(!lines[1].contains(IMAGE_MARKER));
    }

    #[test]
    fn test_render_list_truncates_long_names() {
        let long = "Bartholomew-Maximilian-Alexander";
        let output = render_list_internal(&[employee(3, long, false)], Some(false));
        assert!(output.contains('…'));
        assert!(!output.contains(long));
    }

    #[test]
    fn test_render_profile() {
        let mut e = employee(2, "Jane", false);
        e.telephone = Some("987-654-3210".into());
        let output = render_profile_internal(&e, Some(false));
        assert!(output.starts_with("2 Jane Doe"));
        assert!(output.contains("Telephone: 987-654-3210"));
        assert!(output.contains("Identity Number: -"));
        assert!(output.contains("Image: none"));
    }

    #[test]
    fn test_render_form_in_update_mode() {
        let form = EmployeeForm::seeded(&employee(1, "John", true));
        let output = render_form_internal(&form, SubmitMode::Update, Some(EmployeeId(1)), Some(false));
        assert!(output.starts_with("Update employee 1"));
        assert!(output.contains("John"));
        assert!(output.contains("(empty)"));
        assert!(output.contains("ready (26 chars)"));
    }

    #[test]
    fn test_render_messages() {
        let output = render_messages(&[
            CmdMessage::success("Employee added (3): Sam Lee"),
            CmdMessage::warning("Employee not found: 9; nothing deleted"),
            CmdMessage::error("Image could not be read: cancelled"),
        ]);
        assert!(output.contains("Employee added (3): Sam Lee"));
        assert!(output.contains("nothing deleted"));
        assert_eq!(output.lines().count(), 3);
        assert!(render_messages(&[]).is_empty());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
