//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that is masked when rendered (passwords)
    Secret(String),
    Checkbox(bool),
    Select {
        options: Vec<&'static str>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Create a new checkbox field, unchecked
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
        }
    }

    /// Create a new select field with no option chosen
    pub fn select(name: &str, label: &str, options: &[&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options: options.to_vec(),
                selected: None,
            },
        }
    }

    /// Create a new select field with an option preselected
    pub fn select_with_default(
        name: &str,
        label: &str,
        options: &[&'static str],
        selected: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options: options.to_vec(),
                selected: Some(selected.min(options.len().saturating_sub(1))),
            },
        }
    }

    /// Get the text value (selected option label for selects, empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Checkbox(_) => "",
            FieldValue::Select { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
        }
    }

    /// Get the checkbox value (false for other kinds)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Set the text value (no-op for checkboxes and selects)
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => *s = value,
            FieldValue::Checkbox(_) | FieldValue::Select { .. } => {}
        }
    }

    /// Toggle the checkbox value (no-op for other kinds)
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Move a select to the next option (wraps; first option if none chosen)
    pub fn select_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a select to the previous option (wraps; last option if none chosen)
    pub fn select_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            FieldValue::Checkbox(_) | FieldValue::Select { .. } => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => {
                s.pop();
            }
            FieldValue::Checkbox(_) | FieldValue::Select { .. } => {}
        }
    }

    /// Reset the field to its default value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.clear(),
            FieldValue::Checkbox(checked) => *checked = false,
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering.
    ///
    /// Secrets render as bullets unless `reveal_secrets` is set; revealing
    /// only affects masking, never the stored value.
    pub fn display_value(&self, reveal_secrets: bool) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => {
                if reveal_secrets {
                    s.clone()
                } else {
                    "•".repeat(s.chars().count())
                }
            }
            FieldValue::Checkbox(checked) => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            FieldValue::Select { options, selected } => match selected {
                Some(i) => format!("◂ {} ▸", options.get(*i).copied().unwrap_or("")),
                None => "◂ select ▸".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("email", "Email Address");
        field.push_char('a');
        field.push_char('@');
        field.push_char('b');
        assert_eq!(field.as_text(), "a@b");
        field.pop_char();
        assert_eq!(field.as_text(), "a@");
    }

    #[test]
    fn test_secret_masked_by_default() {
        let mut field = FormField::secret("password", "Password");
        field.set_text("hunter22".to_string());
        assert_eq!(field.display_value(false), "••••••••");
        assert_eq!(field.display_value(true), "hunter22");
        // Masking never changes the stored value
        assert_eq!(field.as_text(), "hunter22");
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut field = FormField::checkbox("consent", "Consent");
        assert!(!field.is_checked());
        field.toggle();
        assert!(field.is_checked());
        field.toggle();
        assert!(!field.is_checked());
    }

    #[test]
    fn test_checkbox_ignores_text_input() {
        let mut field = FormField::checkbox("consent", "Consent");
        field.push_char('x');
        field.set_text("yes".to_string());
        assert_eq!(field.as_text(), "");
        assert!(!field.is_checked());
    }

    #[test]
    fn test_select_cycles_forward_and_back() {
        let mut field = FormField::select("gender", "Gender", &["Male", "Female", "Other"]);
        assert_eq!(field.as_text(), "");
        field.select_next();
        assert_eq!(field.as_text(), "Male");
        field.select_next();
        field.select_next();
        assert_eq!(field.as_text(), "Other");
        field.select_next();
        assert_eq!(field.as_text(), "Male"); // wrapped
        field.select_prev();
        assert_eq!(field.as_text(), "Other"); // wrapped back
    }

    #[test]
    fn test_select_prev_from_unset_picks_last() {
        let mut field = FormField::select("code", "Code", &["+91", "+1", "+44"]);
        field.select_prev();
        assert_eq!(field.as_text(), "+44");
    }

    #[test]
    fn test_select_with_default() {
        let field = FormField::select_with_default("code", "Code", &["+91", "+1", "+44"], 0);
        assert_eq!(field.as_text(), "+91");
    }

    #[test]
    fn test_select_ignores_toggle_and_chars() {
        let mut field = FormField::select_with_default("code", "Code", &["+91", "+1"], 0);
        field.toggle();
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.as_text(), "+91");
    }

    #[test]
    fn test_clear_resets_per_kind() {
        let mut text = FormField::text("name", "Name");
        text.set_text("abc".to_string());
        text.clear();
        assert_eq!(text.as_text(), "");

        let mut checkbox = FormField::checkbox("consent", "Consent");
        checkbox.toggle();
        checkbox.clear();
        assert!(!checkbox.is_checked());

        let mut select = FormField::select_with_default("code", "Code", &["+91", "+1"], 1);
        select.clear();
        assert_eq!(select.as_text(), "");
    }

    #[test]
    fn test_display_value_checkbox() {
        let mut field = FormField::checkbox("consent", "Consent");
        assert_eq!(field.display_value(false), "[ ]");
        field.toggle();
        assert_eq!(field.display_value(false), "[x]");
    }

    #[test]
    fn test_display_value_unset_select() {
        let field = FormField::select("gender", "Gender", &["Male", "Female"]);
        assert_eq!(field.display_value(false), "◂ select ▸");
    }
}
