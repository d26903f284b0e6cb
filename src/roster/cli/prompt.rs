//! Interactive form filling for terminal sessions.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use roster::form::{EmployeeForm, FormField};
use std::path::PathBuf;

/// Asks for every form input, pre-filled with what the form already holds.
/// Returns the image path the user typed, if any.
pub fn fill_form(form: &mut EmployeeForm) -> Result<Option<PathBuf>, dialoguer::Error> {
    let theme = ColorfulTheme::default();
    for field in FormField::ALL {
        let value: String = Input::with_theme(&theme)
            .with_prompt(field.label())
            .with_initial_text(form.get(field))
            .allow_empty(true)
            .interact_text()?;
        form.set(field, value);
    }

    let image: String = Input::with_theme(&theme)
        .with_prompt("Upload Image (path, blank to keep)")
        .allow_empty(true)
        .interact_text()?;
    let image = image.trim();
    Ok((!image.is_empty()).then(|| PathBuf::from(image)))
}
